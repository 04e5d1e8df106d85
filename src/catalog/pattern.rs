//! Pattern-matching rules.

use regex::Regex;

use super::{string_rule, Rule};
use crate::error::RuleError;

/// Phone-number shape: optional international prefix, separators, and
/// 3-5 digit groups. Not strictly anchored to international formats.
const PHONE_PATTERN: &str =
    r"^[+]?([\d]{0,3})?[\(\.\-\s]?(([\d]{1,3})[\)\.\-\s]*)?(([\d]{3,5})[\.\-\s]?([\d]{4})|([\d]{2}[\.\-\s]?){4})$";

/// Subdomain label: alphanumerics, hyphens and dots, at most 63 characters.
const SUBDOMAIN_PATTERN: &str = r"^[A-Za-z0-9](?:[A-Za-z0-9\-.]{0,61}[A-Za-z0-9])?$";

/// Require the string to match a regular expression.
///
/// The pattern is compiled eagerly; a malformed pattern is a configuration
/// error reported here, at construction time, never at evaluation time.
/// Matching is an unanchored substring search; anchor the pattern itself
/// to match the whole string.
///
/// # Example
///
/// ```rust
/// use fieldcheck::catalog::pattern;
///
/// let digits_only = pattern("^[0-9]+$", "digits only")?;
/// assert!(pattern("[unclosed", "broken").is_err());
/// # drop(digits_only);
/// # Ok::<(), fieldcheck::RuleError>(())
/// ```
pub fn pattern(pattern: &str, message: impl Into<String>) -> Result<Rule, RuleError> {
    let regex = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    let message = message.into();
    Ok(string_rule(move |text: &str| regex.is_match(text), message))
}

/// Require a phone-number-shaped string.
pub fn phone(message: impl Into<String>) -> Rule {
    pattern(PHONE_PATTERN, message).expect("built-in phone pattern compiles")
}

/// Require a subdomain-shaped string.
pub fn subdomain(message: impl Into<String>) -> Rule {
    pattern(SUBDOMAIN_PATTERN, message).expect("built-in subdomain pattern compiles")
}
