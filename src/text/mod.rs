//! Whitespace normalization helpers.

/// Collapse runs of space-separated tokens into single-space form.
///
/// The input is split on the literal space character, each piece is
/// trimmed, empty pieces are dropped, and the remainder is rejoined with
/// single spaces. Leading and trailing whitespace disappears. Tabs or
/// newlines inside a token survive untouched unless they stand alone as
/// whole tokens between spaces; this is a narrow normalizer, not general
/// whitespace folding.
///
/// The operation is idempotent: applying it twice yields the same result
/// as applying it once.
///
/// # Example
///
/// ```rust
/// use fieldcheck::text::collapse_whitespaces;
///
/// assert_eq!(collapse_whitespaces("  a   b  "), "a b");
/// assert_eq!(collapse_whitespaces(""), "");
/// ```
pub fn collapse_whitespaces(value: &str) -> String {
    value
        .split(' ')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
