//! # cmdconf Usage Tri-State
//!
//! File: cli/src/schema/usage.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A command's usage line has exactly three behaviours, and the rendering
//! engine must pick one of them:
//!
//! - `Auto`: the engine generates the usage line from the declared arguments.
//! - `Suppressed`: no usage line is printed at all.
//! - `Custom(text)`: `text` is printed verbatim instead of a generated line.
//!
//! Callers express this as a nullable string (`None`, `Some("")`, `Some(text)`).
//! The conversion happens once, at the constructor boundary, so nothing past
//! construction has to tell "unset" from "empty" by inspecting a string.
//!
//! ```rust
//! use cmdconf::schema::Usage;
//!
//! assert_eq!(Usage::from(None::<String>), Usage::Auto);
//! assert_eq!(Usage::from(Some(String::new())), Usage::Suppressed);
//! assert_eq!(Usage::from(Some("tool <file>".to_string())).as_text(), Some("tool <file>"));
//! ```
//!
use serde::Serialize;
use std::fmt;

/// How the usage line of a command is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(tag = "mode", content = "text", rename_all = "snake_case")]
pub enum Usage {
    /// Generate the usage line from the command's arguments.
    #[default]
    Auto,
    /// Print no usage line.
    Suppressed,
    /// Print this text instead of a generated line. Never empty.
    Custom(String),
}

impl Usage {
    /// The nullable-string spelling of this value: `None` for `Auto`,
    /// `Some("")` for `Suppressed`, `Some(text)` for `Custom`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Usage::Auto => None,
            Usage::Suppressed => Some(""),
            Usage::Custom(text) => Some(text),
        }
    }
}

impl From<Option<String>> for Usage {
    fn from(text: Option<String>) -> Self {
        match text {
            None => Usage::Auto,
            Some(text) if text.is_empty() => Usage::Suppressed,
            Some(text) => Usage::Custom(text),
        }
    }
}

impl From<Option<&str>> for Usage {
    fn from(text: Option<&str>) -> Self {
        Usage::from(text.map(str::to_string))
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Usage::Auto => write!(f, "auto-generated"),
            Usage::Suppressed => write!(f, "suppressed"),
            Usage::Custom(text) => write!(f, "custom: {:?}", text),
        }
    }
}
