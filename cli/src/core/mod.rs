//! # cmdconf Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Infrastructure shared by the inspector commands: error types and the
//! manifest loader that turns a `cmdconf.toml` file into a tree of
//! `CommandConfiguration` values.
//!
//! ## Usage
//!
//! ```rust
//! use cmdconf::core::error::{CmdconfError, Result};
//! use cmdconf::core::manifest;
//! ```
//!
pub mod error;
pub mod manifest;
