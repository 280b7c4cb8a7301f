//! # cmdconf Tree Command
//!
//! File: cli/src/commands/tree.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `cmdconf tree` prints the subcommand tree of a manifest, in stored order,
//! similar to the output of the `tree` utility. Hidden commands are still
//! listed (marked), since `should_display` only filters extended listings.
//!
//! Example output:
//!
//! ```text
//! math
//! ├── add (default) [aliases: plus]
//! ├── multiply
//! └── stats (hidden)
//!     └── stdev
//! ```
//!
use crate::commands::ManifestSource;
use anyhow::Context;
use clap::Parser;
use cmdconf::core::error::Result;
use cmdconf::schema::CommandRef;
use std::fmt::Write as FmtWrite;
use tracing::info;

// --- Constants for Tree Drawing ---

/// Connector for intermediate entries.
const TEE: &str = "├── ";
/// Connector for the last entry of a level.
const ELBOW: &str = "└── ";
/// Continuation line below an intermediate entry.
const PIPE: &str = "│   ";
/// Indentation below a last entry.
const SPACER: &str = "    ";

/// Arguments for `cmdconf tree`.
#[derive(Parser, Debug)]
pub struct TreeArgs {
    #[command(flatten)]
    pub source: ManifestSource,
}

pub fn handle_tree(args: TreeArgs) -> Result<()> {
    info!("Handling tree command...");
    let loaded = args.source.load()?;
    print!("{}", render_tree(&loaded.root)?);
    Ok(())
}

/// Renders the tree below `root` as a string.
pub fn render_tree(root: &CommandRef) -> Result<String> {
    let mut output = String::new();
    writeln!(output, "{}", root.command_name()).context("Failed to write root command name")?;
    let mut ancestors = vec![root.clone()];
    walk(root, &mut String::new(), &mut ancestors, &mut output)
        .context("Failed while generating command tree string")?;
    Ok(output)
}

fn walk(
    command: &CommandRef,
    prefix: &mut String,
    ancestors: &mut Vec<CommandRef>,
    output: &mut dyn FmtWrite,
) -> Result<()> {
    let config = command.configuration();
    let default_index = config.default_subcommand_index();
    let count = config.subcommands().len();

    for (index, sub) in config.subcommands().iter().enumerate() {
        let is_last = index + 1 == count;
        let sub_config = sub.configuration();

        let connector = if is_last { ELBOW } else { TEE };
        write!(output, "{}{}{}", prefix, connector, sub.command_name())?;
        if default_index == Some(index) {
            write!(output, " (default)")?;
        }
        if !sub_config.should_display() {
            write!(output, " (hidden)")?;
        }
        if !sub_config.aliases().is_empty() {
            write!(output, " [aliases: {}]", sub_config.aliases().join(", "))?;
        }
        let cycle = ancestors.contains(sub);
        if cycle {
            writeln!(output, " (cycle)")?;
            continue;
        }
        writeln!(output)?;

        let restore = prefix.len();
        prefix.push_str(if is_last { SPACER } else { PIPE });
        ancestors.push(sub.clone());
        walk(sub, prefix, ancestors, output)?;
        ancestors.pop();
        prefix.truncate(restore);
    }
    Ok(())
}
