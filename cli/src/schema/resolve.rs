//! # cmdconf Tree Resolution
//!
//! File: cli/src/schema/resolve.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Some configuration values only mean something in the context of a command's
//! ancestors. This module holds the read-side rules an engine applies when it
//! walks a subcommand tree:
//!
//! - **Help names** inherit: the nearest command on the path from the target up
//!   to the root that sets `help_names` decides; with none set, `-h, --help`.
//! - **Lookup by name**: a path of command-line words (`["math", "stats"]`
//!   below the root) is matched against each child's command name or aliases.
//!
//! A *lineage* is the list of configurations from the root down to (and
//! including) the command of interest.
//!
use crate::schema::{
    command::CommandRef, configuration::CommandConfiguration, names::NameSpecification,
};

/// Where a command's effective help names come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpNamesSource {
    /// The command sets them itself.
    Own,
    /// Inherited from the ancestor at this lineage index (0 is the root).
    Ancestor(usize),
    /// Nothing on the path sets them; the built-in `-h, --help` applies.
    BuiltIn,
}

/// The effective help names of a command and their origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHelpNames {
    pub specification: NameSpecification,
    pub source: HelpNamesSource,
}

/// Resolves the help names of the last entry of a root-first `lineage`.
pub fn resolve_help_names(lineage: &[CommandConfiguration]) -> ResolvedHelpNames {
    let target = lineage.len().saturating_sub(1);
    lineage
        .iter()
        .enumerate()
        .rev()
        .find_map(|(index, config)| {
            config.help_names().map(|names| ResolvedHelpNames {
                specification: names.clone(),
                source: if index == target {
                    HelpNamesSource::Own
                } else {
                    HelpNamesSource::Ancestor(index)
                },
            })
        })
        .unwrap_or_else(|| ResolvedHelpNames {
            specification: NameSpecification::help(),
            source: HelpNamesSource::BuiltIn,
        })
}

/// Finds the direct subcommand of `config` answering to `word`.
pub fn find_subcommand(config: &CommandConfiguration, word: &str) -> Option<CommandRef> {
    config
        .subcommands()
        .iter()
        .find(|sub| {
            sub.command_name() == word || sub.configuration().aliases().iter().any(|a| a == word)
        })
        .cloned()
}

/// Walks `path` below `root`, returning the root-first lineage of references.
///
/// An empty path yields just the root. `None` if any word matches no child.
pub fn find_lineage<S: AsRef<str>>(root: &CommandRef, path: &[S]) -> Option<Vec<CommandRef>> {
    let mut lineage = vec![root.clone()];
    for word in path {
        let current = lineage.last()?.configuration();
        let next = find_subcommand(&current, word.as_ref())?;
        lineage.push(next);
    }
    Some(lineage)
}

/// Configurations for each reference of a lineage.
pub fn lineage_configurations(lineage: &[CommandRef]) -> Vec<CommandConfiguration> {
    lineage.iter().map(CommandRef::configuration).collect()
}
