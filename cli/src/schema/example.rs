//! # cmdconf Usage Examples
//!
//! File: cli/src/schema/example.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! An `Example` is one entry of a command's examples section: the literal
//! arguments a user would type, plus an optional description. The help
//! renderer prints them verbatim and in declaration order.
//!
//! ```rust
//! use cmdconf::schema::Example;
//!
//! let basic = Example::new("run --flag");
//! assert_eq!(basic.description(), "");
//!
//! let described = Example::new("run --flag").with_description("basic run");
//! assert_eq!(described.arguments(), "run --flag");
//! assert_eq!(described.description(), "basic run");
//! ```
//!
use serde::Serialize;

/// A single usage example shown in help output.
///
/// Both fields are always present; `new` is the only way to obtain one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Example {
    arguments: String,
    description: String,
}

impl Example {
    /// Creates an example with the given arguments and an empty description.
    pub fn new(arguments: impl Into<String>) -> Self {
        Self {
            arguments: arguments.into(),
            description: String::new(),
        }
    }

    /// Replaces the description, keeping the arguments unchanged.
    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self
        }
    }

    pub fn arguments(&self) -> &str {
        &self.arguments
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
