//! Configuration errors raised at rule-construction time.
//!
//! Evaluation itself has no error channel: a failed constraint is data
//! appended to the violation collector. The only thing that can go wrong
//! is misconfiguring a rule, and that is reported eagerly when the rule
//! is built.

use thiserror::Error;

/// Errors that can occur when building rules from the catalog.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The supplied regular expression failed to compile
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::pattern;

    #[test]
    fn invalid_pattern_reports_the_offending_source() {
        let err = pattern("[unclosed", "msg").unwrap_err();
        let RuleError::InvalidPattern { pattern, .. } = err;
        assert_eq!(pattern, "[unclosed");
    }

    #[test]
    fn invalid_pattern_display_names_the_pattern() {
        let err = pattern("(?P<broken", "msg").unwrap_err();
        assert!(err.to_string().contains("(?P<broken"));
    }
}
