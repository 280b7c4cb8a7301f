//! # cmdconf Name Specifications
//!
//! File: cli/src/schema/names.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A `NameSpecification` describes which flag spellings trigger a behaviour,
//! as a strategy rather than a fixed list. `Short` and `Long` are derived from a
//! key (for help the key is `"help"`, giving `-h` and `--help`); the custom
//! elements name a spelling directly.
//!
//! Manifests spell elements as strings:
//!
//! | Spelling | Element |
//! |----------|---------|
//! | `short`  | `Short` (first letter of the key) |
//! | `long`   | `Long` (the key itself) |
//! | `-x`     | `CustomShort { letter: 'x' }` |
//! | `--word` | `CustomLong { name: "word" }` |
//! | `-word`  | `CustomLong { name: "word", single_dash: true }` |
//!
//! ```rust
//! use cmdconf::schema::NameSpecification;
//!
//! let names = NameSpecification::help().names_for("help");
//! let rendered: Vec<String> = names.iter().map(|n| n.to_string()).collect();
//! assert_eq!(rendered, ["-h", "--help"]);
//! ```
//!
use serde::Serialize;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// One strategy entry of a [`NameSpecification`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NameElement {
    /// A dash and the first character of the key (`-h`).
    Short,
    /// Two dashes and the key (`--help`).
    Long,
    /// A dash and the given letter.
    CustomShort { letter: char },
    /// The given name with two dashes, or one when `single_dash` is set.
    CustomLong { name: String, single_dash: bool },
}

/// A concrete flag spelling produced by expanding a [`NameElement`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Name {
    Short(char),
    Long(String),
    LongWithSingleDash(String),
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Name::Short(letter) => write!(f, "-{}", letter),
            Name::Long(name) => write!(f, "--{}", name),
            Name::LongWithSingleDash(name) => write!(f, "-{}", name),
        }
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.to_string()
    }
}

/// Ordered collection of [`NameElement`]s.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NameSpecification(Vec<NameElement>);

/// A manifest spelling that does not describe a name element.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid name spelling '{spelling}': {reason}")]
pub struct NameParseError {
    pub spelling: String,
    pub reason: String,
}

impl NameParseError {
    fn new(spelling: &str, reason: &str) -> Self {
        Self {
            spelling: spelling.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl NameSpecification {
    pub fn new(elements: Vec<NameElement>) -> Self {
        Self(elements)
    }

    /// The root default for help names: `-h, --help`.
    pub fn help() -> Self {
        Self(vec![NameElement::Short, NameElement::Long])
    }

    pub fn elements(&self) -> &[NameElement] {
        &self.0
    }

    /// Expands every element against `key`, in order, dropping exact repeats.
    pub fn names_for(&self, key: &str) -> Vec<Name> {
        let mut names: Vec<Name> = Vec::new();
        for element in &self.0 {
            let name = match element {
                NameElement::Short => match key.chars().next() {
                    Some(letter) => Name::Short(letter),
                    None => continue,
                },
                NameElement::Long if key.is_empty() => continue,
                NameElement::Long => Name::Long(key.to_string()),
                NameElement::CustomShort { letter } => Name::Short(*letter),
                NameElement::CustomLong { name, single_dash } => {
                    if *single_dash {
                        Name::LongWithSingleDash(name.clone())
                    } else {
                        Name::Long(name.clone())
                    }
                }
            };
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Parses a list of manifest spellings (see the module table).
    pub fn from_spellings<I, S>(spellings: I) -> Result<Self, NameParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        spellings
            .into_iter()
            .map(|s| s.as_ref().parse::<NameElement>())
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl FromStr for NameElement {
    type Err = NameParseError;

    fn from_str(spelling: &str) -> Result<Self, Self::Err> {
        match spelling {
            "short" => return Ok(NameElement::Short),
            "long" => return Ok(NameElement::Long),
            _ => {}
        }
        if spelling.chars().any(char::is_whitespace) {
            return Err(NameParseError::new(spelling, "names cannot contain whitespace"));
        }
        if let Some(name) = spelling.strip_prefix("--") {
            if name.is_empty() || name.starts_with('-') {
                return Err(NameParseError::new(spelling, "expected a name after '--'"));
            }
            return Ok(NameElement::CustomLong {
                name: name.to_string(),
                single_dash: false,
            });
        }
        if let Some(name) = spelling.strip_prefix('-') {
            let mut chars = name.chars();
            return match (chars.next(), chars.next()) {
                (None, _) => Err(NameParseError::new(spelling, "expected a name after '-'")),
                (Some(letter), None) => Ok(NameElement::CustomShort { letter }),
                (Some(_), Some(_)) => Ok(NameElement::CustomLong {
                    name: name.to_string(),
                    single_dash: true,
                }),
            };
        }
        Err(NameParseError::new(
            spelling,
            "expected 'short', 'long', or a spelling starting with '-'",
        ))
    }
}
