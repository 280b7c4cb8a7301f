//! # cmdconf Check Command
//!
//! File: cli/src/commands/check.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `cmdconf check` runs the tree rules that construction leaves
//! to consumers (default subcommand membership, sibling name collisions,
//! cycles) and exits with status 1 when any of them is violated.
//!
//! Example output:
//!
//! ```text
//! Checked 'math': 1 issue(s)
//!   - 'math': name 'add' is used by both 'add' and 'sum'
//! ```
//!
use crate::commands::ManifestSource;
use clap::Parser;
use cmdconf::core::error::{CmdconfError, Result};
use cmdconf::schema::{validate, CommandRef, ConfigurationIssue};
use tracing::{info, warn};

/// Arguments for `cmdconf check`.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: ManifestSource,
}

pub fn handle_check(args: CheckArgs) -> Result<()> {
    info!("Handling check command...");
    let loaded = args.source.load()?;
    let issues = validate::validate_tree(&loaded.root);
    print!("{}", render_issues(&loaded.root, &issues));

    if issues.is_empty() {
        return Ok(());
    }
    for issue in &issues {
        warn!("{}", issue);
    }
    Err(CmdconfError::CheckFailed {
        count: issues.len(),
    }
    .into())
}

/// The report printed by `cmdconf check`.
pub fn render_issues(root: &CommandRef, issues: &[ConfigurationIssue]) -> String {
    let name = root.command_name();
    if issues.is_empty() {
        return format!("Checked '{}': no issues found.\n", name);
    }
    let mut out = format!("Checked '{}': {} issue(s)\n", name, issues.len());
    for issue in issues {
        out.push_str(&format!("  - {}\n", issue));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdconf::core::manifest::parse_manifest;

    #[test]
    fn test_clean_manifest() {
        let root = parse_manifest("[command]\nid = \"Math\"\n").unwrap();
        let issues = validate::validate_tree(&root);
        assert_eq!(render_issues(&root, &issues), "Checked 'math': no issues found.\n");
    }

    #[test]
    fn test_alias_collision_is_reported() {
        let root = parse_manifest(
            r#"
            [command]
            id = "Math"
            [[command.subcommands]]
            id = "Add"
            [[command.subcommands]]
            id = "Sum"
            aliases = ["add"]
            "#,
        )
        .unwrap();
        let issues = validate::validate_tree(&root);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            render_issues(&root, &issues),
            "Checked 'math': 1 issue(s)\n  - 'math': name 'add' is used by both 'add' and 'sum'\n"
        );
    }

    #[test]
    fn test_command_name_collision_across_ids() {
        let root = parse_manifest(
            r#"
            [command]
            id = "Tool"
            [[command.subcommands]]
            id = "ShowConfig"
            [[command.subcommands]]
            id = "Other"
            command_name = "show-config"
            "#,
        )
        .unwrap();
        let issues = validate::validate_tree(&root);
        assert!(matches!(
            issues.as_slice(),
            [ConfigurationIssue::DuplicateName { name, .. }] if name == "show-config"
        ));
    }
}
