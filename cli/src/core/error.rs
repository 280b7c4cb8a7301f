//! # cmdconf Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used by the manifest loader and the
//! inspector commands. Schema construction itself is infallible; errors only
//! arise when reading manifests from disk or when a consumer-side check fails.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `CmdconfError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! use cmdconf::core::error::CmdconfError;
//!
//! let err = CmdconfError::CommandNotFound { path: "math frobnicate".into() };
//! assert_eq!(err.to_string(), "Command 'math frobnicate' not found.");
//! ```
//!
use crate::schema::NameParseError;
use thiserror::Error;

/// Custom error type for cmdconf.
#[derive(Error, Debug)]
pub enum CmdconfError {
    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("No manifest file ({file_name}) found in '{start}' or its ancestors.")]
    ManifestNotFound { file_name: String, start: String },

    #[error("Manifest parsing failed: {source}")]
    ManifestParse {
        #[from]
        source: toml::de::Error,
    },

    #[error("Invalid help names for '{command}': {source}")]
    HelpNames {
        command: String,
        #[source]
        source: NameParseError,
    },

    #[error("'{command}': default subcommand '{default}' is not defined among its subcommands.")]
    UnknownDefaultSubcommand { command: String, default: String },

    #[error("'{command}': '{field}' cannot be combined with legacy = true.")]
    LegacyConflict { command: String, field: String },

    #[error("Command '{path}' not found.")]
    CommandNotFound { path: String },

    #[error("Configuration check failed with {count} issue(s).")]
    CheckFailed { count: usize },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
