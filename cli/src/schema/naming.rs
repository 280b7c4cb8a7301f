//! # cmdconf Command Name Derivation
//!
//! File: cli/src/schema/naming.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! When a configuration leaves `command_name` unset, the command is known on the
//! command line by a hyphenated, lowercase form of its type identifier:
//!
//! ```rust
//! use cmdconf::schema::naming::hyphenated;
//!
//! assert_eq!(hyphenated("Math"), "math");
//! assert_eq!(hyphenated("StandardDeviation"), "standard-deviation");
//! assert_eq!(hyphenated("URLSession"), "url-session");
//! ```
//!
//! Word boundaries fall before an uppercase letter that follows a lowercase
//! letter or digit, and before the last capital of an acronym that is followed
//! by a lowercase letter. Underscores become hyphens.
//!

/// Converts a type identifier into its command-line name.
pub fn hyphenated(identifier: &str) -> String {
    let chars: Vec<char> = identifier.chars().collect();
    let mut out = String::with_capacity(identifier.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
        }

        out.extend(c.to_lowercase());
    }

    // Trailing separators come from identifiers like `Build_`.
    while out.ends_with('-') {
        out.pop();
    }
    out
}
