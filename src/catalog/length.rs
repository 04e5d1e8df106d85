//! Length-constraint rules.
//!
//! Lengths are measured in bytes, not Unicode scalar values. Multi-byte
//! text therefore counts each encoded byte toward the bound.

use super::{string_rule, Rule};

/// Require the string to be at least `length` bytes long.
///
/// A string of exactly `length` bytes is valid.
pub fn min_length(length: usize, message: impl Into<String>) -> Rule {
    string_rule(move |text: &str| text.len() >= length, message.into())
}

/// Require the string to be at most `length` bytes long.
///
/// A string of exactly `length` bytes is valid.
pub fn max_length(length: usize, message: impl Into<String>) -> Rule {
    string_rule(move |text: &str| text.len() <= length, message.into())
}

/// Require the string to be exactly `length` bytes long.
pub fn length(length: usize, message: impl Into<String>) -> Rule {
    string_rule(move |text: &str| text.len() == length, message.into())
}
