//! Ordered violation collection.
//!
//! Validity failures are modeled entirely as data: a rule that rejects a
//! value appends a `(field, message)` pair to the shared [`Violations`]
//! collector and returns. Nothing in the evaluation path raises or
//! propagates errors, so a single pass over a document always yields the
//! complete set of failures rather than just the first one.

use serde::{Deserialize, Serialize};

/// A single recorded validation failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Path of the field that failed validation
    pub field: String,
    /// Human-readable description of the failure
    pub message: String,
}

/// Ordered, append-only collection of validation failures.
///
/// The collector behaves as a multimap from field path to messages and
/// preserves insertion order across the whole validation pass. It is owned
/// by the host that drives evaluation, not by any rule; rules only ever
/// call [`Violations::add`].
///
/// # Example
///
/// ```rust
/// use fieldcheck::violations::Violations;
///
/// let mut violations = Violations::new();
/// violations.add("user.name", "name is required");
/// violations.add("user.name", "name must be at least 3 characters");
/// violations.add("user.email", "email is malformed");
///
/// assert_eq!(violations.len(), 3);
/// assert_eq!(
///     violations.messages_for("user.name").count(),
///     2,
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violations {
    entries: Vec<Violation>,
}

impl Violations {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure against a field path.
    ///
    /// Appending never fails and never deduplicates; a field validated by
    /// several rules may accumulate several messages.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.entries.push(Violation {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Check whether any failure has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of recorded failures across all fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over all failures in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.entries.iter()
    }

    /// Iterate over the messages recorded against one field path.
    pub fn messages_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> {
        self.entries
            .iter()
            .filter(move |v| v.field == field)
            .map(|v| v.message.as_str())
    }

    /// Field paths with at least one failure, in first-seen order.
    pub fn fields(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for violation in &self.entries {
            if !seen.contains(&violation.field.as_str()) {
                seen.push(violation.field.as_str());
            }
        }
        seen
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_collector_is_empty() {
        let violations = Violations::new();
        assert!(violations.is_empty());
        assert_eq!(violations.len(), 0);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut violations = Violations::new();
        violations.add("b", "first");
        violations.add("a", "second");
        violations.add("b", "third");

        let messages: Vec<&str> = violations.iter().map(|v| v.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn messages_for_filters_by_field() {
        let mut violations = Violations::new();
        violations.add("name", "too short");
        violations.add("email", "malformed");
        violations.add("name", "not alphabetic");

        let name_messages: Vec<&str> = violations.messages_for("name").collect();
        assert_eq!(name_messages, vec!["too short", "not alphabetic"]);
        assert_eq!(violations.messages_for("missing").count(), 0);
    }

    #[test]
    fn fields_lists_each_path_once_in_first_seen_order() {
        let mut violations = Violations::new();
        violations.add("b", "x");
        violations.add("a", "y");
        violations.add("b", "z");

        assert_eq!(violations.fields(), vec!["b", "a"]);
    }

    #[test]
    fn duplicate_messages_are_kept() {
        let mut violations = Violations::new();
        violations.add("field", "same message");
        violations.add("field", "same message");

        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn collector_serializes_round_trip() {
        let mut violations = Violations::new();
        violations.add("host", "not an IPv4 address");

        let json = serde_json::to_string(&violations).unwrap();
        let back: Violations = serde_json::from_str(&json).unwrap();
        assert_eq!(violations, back);
    }
}
