//! # cmdconf Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Declarative command metadata for command-line tools. A tool author attaches
//! a [`schema::CommandConfiguration`] to each command type; a parsing and help
//! engine reads it to produce usage text, dispatch decisions, and flag
//! behaviour.
//!
//! ## Architecture
//!
//! - `schema`: the configuration data model and the read-side rules over it
//! - `core`: errors and the TOML manifest loader used by the `cmdconf` binary
//!
//! ## Examples
//!
//! ```rust
//! use cmdconf::schema::{
//!     CommandConfiguration, CommandRef, ConfigurationArgs, Example, ParsableCommand,
//! };
//!
//! struct Add;
//! impl ParsableCommand for Add {
//!     fn configuration() -> CommandConfiguration {
//!         CommandConfiguration::new(ConfigurationArgs {
//!             r#abstract: "Print the sum of the values.".into(),
//!             ..Default::default()
//!         })
//!     }
//! }
//!
//! struct Math;
//! impl ParsableCommand for Math {
//!     fn configuration() -> CommandConfiguration {
//!         CommandConfiguration::new(ConfigurationArgs {
//!             r#abstract: "A utility for performing maths.".into(),
//!             version: "1.0.0".into(),
//!             subcommands: vec![CommandRef::of::<Add>()],
//!             default_subcommand: Some(CommandRef::of::<Add>()),
//!             examples: vec![Example::new("math add 1 2").with_description("Adds two numbers.")],
//!             ..Default::default()
//!         })
//!     }
//! }
//!
//! assert_eq!(CommandRef::of::<Math>().configuration().default_subcommand_index(), Some(0));
//! ```
//!
pub mod core;
pub mod schema;
