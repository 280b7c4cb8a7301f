//! # cmdconf Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the subcommands of the `cmdconf` inspector and the
//! argument group they share for locating a manifest.
//!
//! ## Command Groups
//!
//! - `inspect`: resolved view of one command's configuration
//! - `tree`: the subcommand tree below the root
//! - `check`: consumer-side validation of the whole tree
//!
use clap::Args;
use cmdconf::core::error::Result;
use cmdconf::core::manifest::{self, LoadedManifest};
use std::path::PathBuf;

/// Arguments and handler for `cmdconf check`.
pub mod check;
/// Arguments and handler for `cmdconf inspect`.
pub mod inspect;
/// Arguments and handler for `cmdconf tree`.
pub mod tree;

/// Where to read the manifest from. Shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ManifestSource {
    /// Path to a manifest file. Defaults to the nearest cmdconf.toml.
    #[arg(short, long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,
}

impl ManifestSource {
    pub fn load(&self) -> Result<LoadedManifest> {
        manifest::load_manifest(self.manifest.as_deref())
    }
}
