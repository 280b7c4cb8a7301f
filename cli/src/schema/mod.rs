//! # cmdconf Command Schema
//!
//! File: cli/src/schema/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The declarative metadata a tool author attaches to each command type, and
//! the read-side rules a parsing and help engine applies to it.
//!
//! ## Architecture
//!
//! - `configuration`: `CommandConfiguration` and its constructors
//! - `usage`: the usage-line tri-state
//! - `example`: entries of the examples section
//! - `names`: help-name specifications
//! - `command`: command-type references (`ParsableCommand`, `CommandRef`)
//! - `naming`: command-name derivation from type identifiers
//! - `resolve`: help-name inheritance and lookup by command-line words
//! - `validate`: tree rules checked by consumers
//!
//! Everything in this module is an immutable value once built; any number of
//! threads may read it without coordination.
//!
pub mod command;
pub mod configuration;
pub mod example;
pub mod names;
pub mod naming;
pub mod resolve;
pub mod usage;
pub mod validate;

pub use command::{CommandDescriptor, CommandRef, ParsableCommand};
pub use configuration::{
    CommandConfiguration, ConfigurationArgs, LegacyConfigurationArgs,
    DEFAULT_HELP_MESSAGE_INDENT, DEFAULT_HELP_MESSAGE_LABEL_COLUMN_WIDTH,
};
pub use example::Example;
pub use names::{Name, NameElement, NameParseError, NameSpecification};
pub use resolve::{HelpNamesSource, ResolvedHelpNames};
pub use usage::Usage;
pub use validate::ConfigurationIssue;
