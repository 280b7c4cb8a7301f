//! # cmdconf Inspect Command
//!
//! File: cli/src/commands/inspect.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `cmdconf inspect [WORD...]` shows how a parsing and help engine must read
//! one command's configuration: which usage behaviour applies, whether a
//! version flag is offered, which help names are in effect and where they were
//! inherited from, and the layout parameters of its help text.
//!
//! ## Examples
//!
//! ```bash
//! cmdconf inspect                    # the root command
//! cmdconf inspect stats stdev        # a nested subcommand
//! cmdconf inspect --format json add  # machine-readable report
//! ```
//!
//! Example output:
//!
//! ```text
//! Command: math add
//!   Identifier:        Add
//!   Abstract:          Print the sum of the values.
//!   Usage:             auto-generated
//!   Version flag:      not offered
//!   Help names:        -h, --help (inherited from 'math')
//!   Help indent:       2
//!   Label column:      26
//!   Compact options:   no
//! ```
//!
use crate::commands::ManifestSource;
use anyhow::Context;
use clap::{Parser, ValueEnum};
use cmdconf::core::error::{CmdconfError, Result};
use cmdconf::schema::{
    resolve::{self, HelpNamesSource},
    CommandRef, Example, Name, Usage,
};
use serde::Serialize;
use std::fmt::Write as FmtWrite;
use tracing::{debug, info};

/// Output formats of the report.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Arguments for `cmdconf inspect`.
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Command-line words selecting a subcommand below the root.
    pub path: Vec<String>,

    /// Report format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub source: ManifestSource,
}

/// A subcommand as listed in the report.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubcommandEntry {
    pub name: String,
    pub shown: bool,
    pub default: bool,
}

/// Everything an engine reads from one configuration, resolved in context.
#[derive(Serialize, Debug, Clone)]
pub struct CommandReport {
    pub path: Vec<String>,
    pub identifier: String,
    pub command_name: String,
    pub super_command_name: Option<String>,
    pub aliases: Vec<String>,
    pub r#abstract: String,
    pub discussion: String,
    pub usage: Usage,
    pub version: String,
    pub version_flag: bool,
    pub help_names: Vec<Name>,
    pub help_names_source: String,
    pub help_message_indent: usize,
    pub help_message_label_column_width: usize,
    pub always_compact_usage_options: bool,
    pub subcommands: Vec<SubcommandEntry>,
    pub default_subcommand: Option<String>,
    pub examples: Vec<Example>,
}

pub fn handle_inspect(args: InspectArgs) -> Result<()> {
    info!("Handling inspect command...");
    let loaded = args.source.load()?;
    let report = build_report(&loaded.root, &args.path)?;

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&report)?),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .context("Failed to serialize inspect report")?;
            println!("{}", json);
        }
    }
    Ok(())
}

/// Resolves the command at `path` below `root` into a report.
pub fn build_report(root: &CommandRef, path: &[String]) -> Result<CommandReport> {
    let lineage = resolve::find_lineage(root, path).ok_or_else(|| {
        let mut words = vec![root.command_name()];
        words.extend(path.iter().cloned());
        CmdconfError::CommandNotFound {
            path: words.join(" "),
        }
    })?;
    let configs = resolve::lineage_configurations(&lineage);
    let names: Vec<String> = lineage.iter().map(CommandRef::command_name).collect();

    let (Some(command), Some(config)) = (lineage.last(), configs.last()) else {
        return Err(CmdconfError::CommandNotFound {
            path: names.join(" "),
        }
        .into());
    };
    debug!("Inspecting '{}' ({})", names.join(" "), command.identity());

    let help = resolve::resolve_help_names(&configs);
    let help_names_source = match help.source {
        HelpNamesSource::Own => "own".to_string(),
        HelpNamesSource::Ancestor(index) => format!("inherited from '{}'", names[index]),
        HelpNamesSource::BuiltIn => "built-in".to_string(),
    };

    let default_index = config.default_subcommand_index();
    let subcommands = config
        .subcommands()
        .iter()
        .enumerate()
        .map(|(index, sub)| SubcommandEntry {
            name: sub.command_name(),
            shown: sub.configuration().should_display(),
            default: default_index == Some(index),
        })
        .collect();

    Ok(CommandReport {
        path: names.clone(),
        identifier: command.identifier().to_string(),
        command_name: command.command_name(),
        super_command_name: config.super_command_name().map(str::to_string),
        aliases: config.aliases().to_vec(),
        r#abstract: config.r#abstract().to_string(),
        discussion: config.discussion().to_string(),
        usage: config.usage().clone(),
        version: config.version().to_string(),
        version_flag: config.version_flag_enabled(),
        help_names: help.specification.names_for("help"),
        help_names_source,
        help_message_indent: config.help_message_indent(),
        help_message_label_column_width: config.help_message_label_column_width(),
        always_compact_usage_options: config.always_compact_usage_options(),
        subcommands,
        default_subcommand: config.default_subcommand().map(CommandRef::command_name),
        examples: config.examples().to_vec(),
    })
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Human-readable rendering of a report.
pub fn render_text(report: &CommandReport) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "Command: {}", report.path.join(" "))?;
    writeln!(out, "  {:<19}{}", "Identifier:", report.identifier)?;
    if let Some(super_name) = &report.super_command_name {
        writeln!(out, "  {:<19}{}", "Super command:", super_name)?;
    }
    if !report.aliases.is_empty() {
        writeln!(out, "  {:<19}{}", "Aliases:", report.aliases.join(", "))?;
    }
    if !report.r#abstract.is_empty() {
        writeln!(out, "  {:<19}{}", "Abstract:", report.r#abstract)?;
    }
    writeln!(out, "  {:<19}{}", "Usage:", report.usage)?;
    let version = if report.version_flag {
        format!("offered ({})", report.version)
    } else {
        "not offered".to_string()
    };
    writeln!(out, "  {:<19}{}", "Version flag:", version)?;
    let help_names: Vec<String> = report.help_names.iter().map(ToString::to_string).collect();
    writeln!(
        out,
        "  {:<19}{} ({})",
        "Help names:",
        help_names.join(", "),
        report.help_names_source
    )?;
    writeln!(out, "  {:<19}{}", "Help indent:", report.help_message_indent)?;
    writeln!(
        out,
        "  {:<19}{}",
        "Label column:", report.help_message_label_column_width
    )?;
    writeln!(
        out,
        "  {:<19}{}",
        "Compact options:",
        yes_no(report.always_compact_usage_options)
    )?;

    if !report.subcommands.is_empty() {
        writeln!(out, "  Subcommands:")?;
        for sub in &report.subcommands {
            let mut markers = Vec::new();
            if sub.default {
                markers.push("default");
            }
            if !sub.shown {
                markers.push("hidden");
            }
            if markers.is_empty() {
                writeln!(out, "    {}", sub.name)?;
            } else {
                writeln!(out, "    {} ({})", sub.name, markers.join(", "))?;
            }
        }
    }
    if let Some(default) = &report.default_subcommand {
        if !report.subcommands.iter().any(|s| s.default) {
            writeln!(
                out,
                "  {:<19}{} (not a subcommand; ignored)",
                "Default:", default
            )?;
        }
    }
    if !report.discussion.is_empty() {
        writeln!(out, "  Discussion:")?;
        for line in report.discussion.lines() {
            writeln!(out, "    {}", line)?;
        }
    }
    if !report.examples.is_empty() {
        writeln!(out, "  Examples:")?;
        for example in &report.examples {
            if example.description().is_empty() {
                writeln!(out, "    {}", example.arguments())?;
            } else {
                writeln!(out, "    {}  # {}", example.arguments(), example.description())?;
            }
        }
    }
    Ok(out)
}
