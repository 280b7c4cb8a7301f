//! # cmdconf Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests that drive the `cmdconf` binary:
//! locating the binary and writing manifest fixtures to temporary directories.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

/// A manifest exercising every configuration field.
pub const MATH_MANIFEST: &str = r#"
[command]
id = "Math"
abstract = "A utility for performing maths."
version = "1.0.0"
default_subcommand = "Add"
help_names = ["short", "long", "-?"]

[[command.examples]]
arguments = "math add 1 2"
description = "Adds two numbers."

[[command.examples]]
arguments = "math multiply 3 4"

[[command.subcommands]]
id = "Add"
abstract = "Print the sum of the values."
aliases = ["plus"]

[[command.subcommands]]
id = "Multiply"
usage = "math multiply <values>..."
help_message_indent = 4
help_message_label_column_width = 30
always_compact_usage_options = true

[[command.subcommands]]
id = "Stats"
abstract = "Calculate descriptive statistics."
should_display = false
legacy = true

[[command.subcommands.subcommands]]
id = "StandardDeviation"
command_name = "stdev"
"#;

/// # Get cmdconf Command (`cmdconf_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `cmdconf` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn cmdconf_cmd() -> Command {
    Command::cargo_bin("cmdconf").expect("Failed to find cmdconf binary for testing")
}

/// Writes `content` to `cmdconf.toml` in a fresh temporary directory.
///
/// The directory gets a `.git` marker so manifest discovery never walks above it.
pub fn manifest_dir(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir for manifest");
    fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
    let path = dir.path().join("cmdconf.toml");
    fs::write(&path, content).expect("Failed to write manifest");
    (dir, path)
}
