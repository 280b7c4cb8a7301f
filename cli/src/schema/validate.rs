//! # cmdconf Tree Validation
//!
//! File: cli/src/schema/validate.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Constructors accept any combination of values. The rules that span more than
//! one field, or more than one command, are checked here, on the consuming
//! side, by walking the tree from its root:
//!
//! - a `default_subcommand` must be one of the command's `subcommands`;
//! - siblings must not share a command name or alias;
//! - a command must not appear among its own descendants.
//!
//! `validate_tree` collects every issue instead of stopping at the first.
//!
use crate::schema::{command::CommandRef, configuration::CommandConfiguration};
use std::collections::{hash_map::Entry, HashMap, HashSet};
use thiserror::Error;
use tracing::debug;

/// A violated tree rule. `command` fields hold the space-separated path of
/// command names from the root.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationIssue {
    #[error("'{command}': default subcommand '{default}' is not one of its subcommands")]
    DefaultNotASubcommand { command: String, default: String },

    #[error("'{command}': name '{name}' is used by both '{first}' and '{second}'")]
    DuplicateName {
        command: String,
        name: String,
        first: String,
        second: String,
    },

    #[error("'{command}': subcommand '{subcommand}' is already an ancestor (cycle)")]
    Cycle { command: String, subcommand: String },
}

/// Checks the whole tree below (and including) `root`.
pub fn validate_tree(root: &CommandRef) -> Vec<ConfigurationIssue> {
    let mut walker = Walker::default();
    let mut ancestors = vec![root.clone()];
    walker.visit(root, &root.command_name(), &mut ancestors);
    debug!("Validation found {} issue(s)", walker.issues.len());
    walker.issues
}

/// Checks one configuration in isolation (no recursion).
pub fn validate_configuration(path: &str, config: &CommandConfiguration) -> Vec<ConfigurationIssue> {
    let mut issues = Vec::new();

    if let Some(default) = config.default_subcommand() {
        if config.default_subcommand_index().is_none() {
            issues.push(ConfigurationIssue::DefaultNotASubcommand {
                command: path.to_string(),
                default: default.command_name(),
            });
        }
    }

    let mut owners: HashMap<String, String> = HashMap::new();
    for sub in config.subcommands() {
        let sub_config = sub.configuration();
        let name = sub.command_name();
        let mut spellings = vec![name.clone()];
        spellings.extend(sub_config.aliases().iter().cloned());

        for spelling in spellings {
            match owners.entry(spelling) {
                Entry::Occupied(entry) => issues.push(ConfigurationIssue::DuplicateName {
                    command: path.to_string(),
                    name: entry.key().clone(),
                    first: entry.get().clone(),
                    second: name.clone(),
                }),
                Entry::Vacant(entry) => {
                    entry.insert(name.clone());
                }
            }
        }
    }

    issues
}

#[derive(Default)]
struct Walker {
    issues: Vec<ConfigurationIssue>,
    finished: HashSet<CommandRef>,
}

impl Walker {
    fn visit(&mut self, command: &CommandRef, path: &str, ancestors: &mut Vec<CommandRef>) {
        debug!("Validating '{}'", path);
        let config = command.configuration();
        self.issues.extend(validate_configuration(path, &config));

        for sub in config.subcommands() {
            if ancestors.contains(sub) {
                self.issues.push(ConfigurationIssue::Cycle {
                    command: path.to_string(),
                    subcommand: sub.command_name(),
                });
                continue;
            }
            if self.finished.contains(sub) {
                continue;
            }
            let sub_path = format!("{} {}", path, sub.command_name());
            ancestors.push(sub.clone());
            self.visit(sub, &sub_path, ancestors);
            if let Some(finished) = ancestors.pop() {
                self.finished.insert(finished);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{command::ParsableCommand, configuration::ConfigurationArgs};

    struct Add;
    impl ParsableCommand for Add {}

    struct Multiply;
    impl ParsableCommand for Multiply {
        fn configuration() -> CommandConfiguration {
            CommandConfiguration::new(ConfigurationArgs {
                aliases: vec!["add".into()],
                ..Default::default()
            })
        }
    }

    struct Stray;
    impl ParsableCommand for Stray {}

    struct Valid;
    impl ParsableCommand for Valid {
        fn configuration() -> CommandConfiguration {
            CommandConfiguration::new(ConfigurationArgs {
                command_name: Some("valid".into()),
                subcommands: vec![CommandRef::of::<Add>()],
                default_subcommand: Some(CommandRef::of::<Add>()),
                ..Default::default()
            })
        }
    }

    struct BadDefault;
    impl ParsableCommand for BadDefault {
        fn configuration() -> CommandConfiguration {
            CommandConfiguration::new(ConfigurationArgs {
                command_name: Some("tool".into()),
                subcommands: vec![CommandRef::of::<Add>()],
                default_subcommand: Some(CommandRef::of::<Stray>()),
                ..Default::default()
            })
        }
    }

    struct Collides;
    impl ParsableCommand for Collides {
        fn configuration() -> CommandConfiguration {
            CommandConfiguration::new(ConfigurationArgs {
                command_name: Some("tool".into()),
                subcommands: vec![CommandRef::of::<Add>(), CommandRef::of::<Multiply>()],
                ..Default::default()
            })
        }
    }

    struct Loop;
    impl ParsableCommand for Loop {
        fn configuration() -> CommandConfiguration {
            CommandConfiguration::new(ConfigurationArgs {
                subcommands: vec![CommandRef::of::<LoopChild>()],
                ..Default::default()
            })
        }
    }

    struct LoopChild;
    impl ParsableCommand for LoopChild {
        fn configuration() -> CommandConfiguration {
            CommandConfiguration::new(ConfigurationArgs {
                subcommands: vec![CommandRef::of::<Loop>()],
                ..Default::default()
            })
        }
    }

    #[test]
    fn test_valid_tree_has_no_issues() {
        assert!(validate_tree(&CommandRef::of::<Valid>()).is_empty());
    }

    #[test]
    fn test_default_outside_subcommands() {
        let issues = validate_tree(&CommandRef::of::<BadDefault>());
        assert_eq!(
            issues,
            vec![ConfigurationIssue::DefaultNotASubcommand {
                command: "tool".into(),
                default: "stray".into(),
            }]
        );
        assert_eq!(
            issues[0].to_string(),
            "'tool': default subcommand 'stray' is not one of its subcommands"
        );
    }

    #[test]
    fn test_alias_collides_with_sibling_name() {
        let issues = validate_tree(&CommandRef::of::<Collides>());
        assert_eq!(
            issues,
            vec![ConfigurationIssue::DuplicateName {
                command: "tool".into(),
                name: "add".into(),
                first: "add".into(),
                second: "multiply".into(),
            }]
        );
    }

    #[test]
    fn test_cycle_is_reported_once() {
        let issues = validate_tree(&CommandRef::of::<Loop>());
        assert_eq!(
            issues,
            vec![ConfigurationIssue::Cycle {
                command: "loop loop-child".into(),
                subcommand: "loop".into(),
            }]
        );
    }
}
