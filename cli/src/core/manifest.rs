//! # cmdconf Manifest Loader
//!
//! File: cli/src/core/manifest.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Rust tools declare their commands as types implementing `ParsableCommand`.
//! The inspector has no access to those types, so it reads the same metadata
//! from a TOML manifest instead and builds real `CommandConfiguration` values
//! from it, through the same constructors a Rust tool would call.
//!
//! ## Architecture
//!
//! - The manifest is located from an explicit path (with `~` expanded) or by
//!   searching for `cmdconf.toml` from the current directory upwards, stopping
//!   at the first directory containing `.git`.
//! - Each `[command]` / `[[...subcommands]]` table becomes a command reference
//!   whose identity is the dotted path of `id`s from the root (`Math.Stats`),
//!   so an `id` itself cannot contain `.`.
//! - `legacy = true` routes a table through the deprecated constructor, so its
//!   usage line is suppressed. Combining it with `usage` or
//!   `super_command_name` is rejected, since that constructor accepts neither.
//! - `default_subcommand` names the `id` of one of the table's subcommands.
//!
//! ## Examples
//!
//! ```toml
//! [command]
//! id = "Math"
//! abstract = "A utility for performing maths."
//! version = "1.0.0"
//! default_subcommand = "Add"
//!
//! [[command.examples]]
//! arguments = "math add 1 2"
//! description = "Adds two numbers."
//!
//! [[command.subcommands]]
//! id = "Add"
//! abstract = "Print the sum of the values."
//! ```
//!
use crate::core::error::{CmdconfError, Result};
use crate::schema::{
    CommandConfiguration, CommandDescriptor, CommandRef, ConfigurationArgs, Example,
    LegacyConfigurationArgs, NameSpecification,
};
use anyhow::Context;
use serde::Deserialize;
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// File name searched for when no manifest path is given.
pub const MANIFEST_FILENAME: &str = "cmdconf.toml";

/// Top level of a manifest file.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// The root command.
    pub command: CommandManifest,
}

/// One command table.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct CommandManifest {
    /// Type-like identifier. Unique among siblings; seeds the derived name.
    pub id: String,
    pub command_name: Option<String>,
    pub super_command_name: Option<String>,
    #[serde(default)]
    pub r#abstract: String,
    /// Omitted, `""`, or literal text (see `Usage`).
    pub usage: Option<String>,
    #[serde(default)]
    pub discussion: String,
    #[serde(default)]
    pub version: String,
    #[serde(default = "default_should_display")]
    pub should_display: bool,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Spellings such as `"short"`, `"long"`, `"-?"`, `"--assist"`.
    pub help_names: Option<Vec<String>>,
    pub help_message_indent: Option<usize>,
    pub help_message_label_column_width: Option<usize>,
    #[serde(default)]
    pub always_compact_usage_options: bool,
    #[serde(default)]
    pub examples: Vec<ExampleManifest>,
    /// `id` of one of `subcommands`.
    pub default_subcommand: Option<String>,
    /// Build through the deprecated constructor.
    #[serde(default)]
    pub legacy: bool,
    #[serde(default)]
    pub subcommands: Vec<CommandManifest>,
}

/// One `[[examples]]` entry.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExampleManifest {
    pub arguments: String,
    #[serde(default)]
    pub description: String,
}

fn default_should_display() -> bool {
    true
}

/// A command defined by a manifest table.
#[derive(Debug)]
struct ManifestCommand {
    identity: String,
    identifier: String,
    configuration: CommandConfiguration,
}

impl CommandDescriptor for ManifestCommand {
    fn identity(&self) -> &str {
        &self.identity
    }

    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn configuration(&self) -> CommandConfiguration {
        self.configuration.clone()
    }
}

/// A parsed manifest and where it came from.
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    pub path: PathBuf,
    pub root: CommandRef,
}

/// Loads the manifest at `explicit`, or discovers one from the current directory.
pub fn load_manifest(explicit: Option<&Path>) -> Result<LoadedManifest> {
    let path = match explicit {
        Some(path) => expand_manifest_path(path),
        None => {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            find_manifest_path(&current_dir).ok_or_else(|| CmdconfError::ManifestNotFound {
                file_name: MANIFEST_FILENAME.to_string(),
                start: current_dir.display().to_string(),
            })?
        }
    };
    info!("Loading manifest from: {}", path.display());
    let root = load_manifest_from_path(&path)?;
    Ok(LoadedManifest { path, root })
}

/// Searches `start` and its ancestors for `cmdconf.toml`, stopping at a `.git` directory.
pub fn find_manifest_path(start: &Path) -> Option<PathBuf> {
    let mut path: &Path = start;
    loop {
        let candidate = path.join(MANIFEST_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping manifest search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn expand_manifest_path(path: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
    debug!("Expanded manifest path: {}", expanded);
    PathBuf::from(expanded)
}

fn load_manifest_from_path(path: &Path) -> Result<CommandRef> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest file: {}", path.display()))?;
    parse_manifest(&content)
        .with_context(|| format!("Failed to load manifest: {}", path.display()))
}

/// Parses manifest text and builds the root command reference.
pub fn parse_manifest(content: &str) -> Result<CommandRef> {
    let manifest: Manifest = toml::from_str(content).map_err(CmdconfError::from)?;
    build_command(&manifest.command, None)
}

fn build_command(manifest: &CommandManifest, parent: Option<&str>) -> Result<CommandRef> {
    if manifest.id.trim().is_empty() {
        return Err(CmdconfError::Manifest(format!(
            "command ids cannot be empty (below '{}')",
            parent.unwrap_or("<root>")
        ))
        .into());
    }
    if manifest.id.contains('.') {
        return Err(CmdconfError::Manifest(format!(
            "command id '{}' cannot contain '.' (below '{}')",
            manifest.id,
            parent.unwrap_or("<root>")
        ))
        .into());
    }
    let identity = match parent {
        Some(parent) => format!("{}.{}", parent, manifest.id),
        None => manifest.id.clone(),
    };
    debug!("Building manifest command '{}'", identity);

    let mut seen = HashSet::new();
    let mut subcommands = Vec::with_capacity(manifest.subcommands.len());
    for sub in &manifest.subcommands {
        if !seen.insert(sub.id.as_str()) {
            return Err(CmdconfError::Manifest(format!(
                "'{}' declares subcommand id '{}' more than once",
                identity, sub.id
            ))
            .into());
        }
        subcommands.push(build_command(sub, Some(&identity))?);
    }

    let default_subcommand = match &manifest.default_subcommand {
        Some(id) => {
            let position = manifest.subcommands.iter().position(|sub| &sub.id == id);
            match position {
                Some(index) => Some(subcommands[index].clone()),
                None => {
                    return Err(CmdconfError::UnknownDefaultSubcommand {
                        command: identity,
                        default: id.clone(),
                    }
                    .into())
                }
            }
        }
        None => None,
    };

    let help_names = match &manifest.help_names {
        Some(spellings) => Some(NameSpecification::from_spellings(spellings).map_err(
            |source| CmdconfError::HelpNames {
                command: identity.clone(),
                source,
            },
        )?),
        None => None,
    };

    let examples = manifest
        .examples
        .iter()
        .map(|e| Example::new(e.arguments.clone()).with_description(e.description.clone()))
        .collect();

    let configuration = if manifest.legacy {
        for (field, present) in [
            ("usage", manifest.usage.is_some()),
            ("super_command_name", manifest.super_command_name.is_some()),
        ] {
            if present {
                return Err(CmdconfError::LegacyConflict {
                    command: identity,
                    field: field.to_string(),
                }
                .into());
            }
        }
        #[allow(deprecated)]
        let legacy = CommandConfiguration::legacy(LegacyConfigurationArgs {
            command_name: manifest.command_name.clone(),
            r#abstract: manifest.r#abstract.clone(),
            discussion: manifest.discussion.clone(),
            version: manifest.version.clone(),
            should_display: manifest.should_display,
            subcommands,
            default_subcommand,
            help_names,
            aliases: manifest.aliases.clone(),
            help_message_indent: manifest.help_message_indent,
            help_message_label_column_width: manifest.help_message_label_column_width,
            always_compact_usage_options: manifest.always_compact_usage_options,
            examples,
        });
        legacy
    } else {
        let args = ConfigurationArgs {
            command_name: manifest.command_name.clone(),
            r#abstract: manifest.r#abstract.clone(),
            usage: manifest.usage.clone(),
            discussion: manifest.discussion.clone(),
            version: manifest.version.clone(),
            should_display: manifest.should_display,
            subcommands,
            default_subcommand,
            help_names,
            aliases: manifest.aliases.clone(),
            help_message_indent: manifest.help_message_indent,
            help_message_label_column_width: manifest.help_message_label_column_width,
            always_compact_usage_options: manifest.always_compact_usage_options,
            examples,
        };
        match &manifest.super_command_name {
            Some(super_name) => CommandConfiguration::with_super_command(super_name.clone(), args),
            None => CommandConfiguration::new(args),
        }
    };

    Ok(CommandRef::new(ManifestCommand {
        identity,
        identifier: manifest.id.clone(),
        configuration,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{NameElement, Usage};
    use tempfile::tempdir;

    const MATH: &str = r#"
        [command]
        id = "Math"
        abstract = "A utility for performing maths."
        version = "1.0.0"
        default_subcommand = "Add"
        help_names = ["short", "long", "-?"]

        [[command.subcommands]]
        id = "Add"
        abstract = "Print the sum of the values."
        aliases = ["plus"]

        [[command.subcommands]]
        id = "Multiply"
        usage = "math multiply <values>..."

        [[command.subcommands]]
        id = "Stats"
        should_display = false
        legacy = true

        [[command.subcommands.subcommands]]
        id = "StandardDeviation"
        command_name = "stdev"
        help_message_indent = 4
    "#;

    #[test]
    fn test_parse_full_manifest() {
        let root = parse_manifest(MATH).expect("Failed to parse manifest");
        assert_eq!(root.identity(), "Math");
        assert_eq!(root.command_name(), "math");

        let config = root.configuration();
        assert_eq!(config.r#abstract(), "A utility for performing maths.");
        assert!(config.version_flag_enabled());
        assert_eq!(config.usage(), &Usage::Auto);
        assert_eq!(
            config.help_names().unwrap().elements()[2],
            NameElement::CustomShort { letter: '?' }
        );

        let names: Vec<String> = config.subcommands().iter().map(|s| s.command_name()).collect();
        assert_eq!(names, ["add", "multiply", "stats"]);
        assert_eq!(config.default_subcommand_index(), Some(0));

        let multiply = config.subcommands()[1].configuration();
        assert_eq!(
            multiply.usage(),
            &Usage::Custom("math multiply <values>...".into())
        );

        let stats = config.subcommands()[2].configuration();
        assert_eq!(stats.usage(), &Usage::Suppressed);
        assert!(!stats.should_display());

        let stdev = &stats.subcommands()[0];
        assert_eq!(stdev.identity(), "Math.Stats.StandardDeviation");
        assert_eq!(stdev.command_name(), "stdev");
        assert_eq!(stdev.configuration().help_message_indent(), 4);
    }

    #[test]
    fn test_examples_keep_order() {
        let root = parse_manifest(
            r#"
            [command]
            id = "Tool"
            [[command.examples]]
            arguments = "tool b"
            [[command.examples]]
            arguments = "tool a"
            description = "second"
            "#,
        )
        .unwrap();
        let config = root.configuration();
        assert_eq!(config.examples()[0], Example::new("tool b"));
        assert_eq!(
            config.examples()[1],
            Example::new("tool a").with_description("second")
        );
    }

    #[test]
    fn test_unknown_default_subcommand() {
        let err = parse_manifest(
            r#"
            [command]
            id = "Tool"
            default_subcommand = "Missing"
            "#,
        )
        .unwrap_err();
        assert!(err
            .to_string()
            .contains("default subcommand 'Missing' is not defined"));
    }

    #[test]
    fn test_legacy_rejects_usage() {
        let err = parse_manifest(
            r#"
            [command]
            id = "Tool"
            legacy = true
            usage = "tool <x>"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("'usage' cannot be combined"));
    }

    #[test]
    fn test_duplicate_sibling_ids() {
        let err = parse_manifest(
            r#"
            [command]
            id = "Tool"
            [[command.subcommands]]
            id = "A"
            [[command.subcommands]]
            id = "A"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_dotted_id_is_rejected() {
        // `A.B` below `R` would share the identity `R.A.B` with `B` below `A`.
        let err = parse_manifest(
            r#"
            [command]
            id = "R"
            [[command.subcommands]]
            id = "A.B"
            [[command.subcommands]]
            id = "A"
            [[command.subcommands.subcommands]]
            id = "B"
            "#,
        )
        .unwrap_err();
        assert!(err
            .to_string()
            .contains("command id 'A.B' cannot contain '.' (below 'R')"));
    }

    #[test]
    fn test_nested_collision_is_found_below_lookalike_path() {
        let root = parse_manifest(
            r#"
            [command]
            id = "R"
            [[command.subcommands]]
            id = "AB"
            [[command.subcommands]]
            id = "A"
            [[command.subcommands.subcommands]]
            id = "B"
            [[command.subcommands.subcommands.subcommands]]
            id = "X"
            command_name = "dup"
            [[command.subcommands.subcommands.subcommands]]
            id = "Y"
            command_name = "dup"
            "#,
        )
        .unwrap();
        let issues = crate::schema::validate::validate_tree(&root);
        assert!(matches!(
            issues.as_slice(),
            [crate::schema::ConfigurationIssue::DuplicateName { command, name, .. }]
                if command == "r a b" && name == "dup"
        ));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = parse_manifest(
            r#"
            [command]
            id = "Tool"
            colour = "blue"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_help_name() {
        let err = parse_manifest(
            r#"
            [command]
            id = "Tool"
            help_names = ["assist"]
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Invalid help names for 'Tool'"));
    }

    #[test]
    fn test_super_command_name() {
        let root = parse_manifest(
            r#"
            [command]
            id = "Sub"
            super_command_name = "tool"
            "#,
        )
        .unwrap();
        assert_eq!(root.configuration().super_command_name(), Some("tool"));
    }

    #[test]
    fn test_find_manifest_in_ancestor() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join(MANIFEST_FILENAME), MATH).unwrap();

        let found = find_manifest_path(&nested).unwrap();
        assert_eq!(found, temp_dir.path().join(MANIFEST_FILENAME));
    }

    #[test]
    fn test_find_manifest_stops_at_git_root() {
        let temp_dir = tempdir().unwrap();
        let repo = temp_dir.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();
        fs::write(temp_dir.path().join(MANIFEST_FILENAME), MATH).unwrap();

        assert!(find_manifest_path(&repo).is_none());
    }

    #[test]
    fn test_load_explicit_path() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(&path, MATH).unwrap();

        let loaded = load_manifest(Some(&path)).unwrap();
        assert_eq!(loaded.path, path);
        assert_eq!(loaded.root.command_name(), "math");
    }

    #[test]
    fn test_tilde_expansion() {
        let expanded = expand_manifest_path(Path::new("~/tools/cmdconf.toml"));
        let home_dir = dirs::home_dir().unwrap();
        assert_eq!(expanded, home_dir.join("tools/cmdconf.toml"));

        let absolute = expand_manifest_path(Path::new("/etc/cmdconf.toml"));
        assert_eq!(absolute, PathBuf::from("/etc/cmdconf.toml"));
    }
}
