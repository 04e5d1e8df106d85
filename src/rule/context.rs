//! Context provided to rule evaluation.

use crate::value::Value;

/// Handle to the validating host, passed to every rule evaluation.
///
/// None of the built-in catalog rules consult the context; it exists for
/// custom rules that need cross-field access beyond the parent and source
/// values already in the evaluation signature.
#[derive(Clone, Copy, Debug)]
pub struct RuleContext<'a> {
    source: Value<'a>,
}

impl<'a> RuleContext<'a> {
    /// Create a context over the document under validation.
    pub fn new(source: Value<'a>) -> Self {
        RuleContext { source }
    }

    /// The whole document being validated.
    pub fn source(&self) -> Value<'a> {
        self.source
    }

    /// Resolve a dot-separated field path against the document root.
    pub fn lookup(&self, path: &str) -> Value<'a> {
        self.source.get(path)
    }
}
