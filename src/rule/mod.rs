//! The rule abstraction.
//!
//! A [`Rule`] wraps one evaluation function with a fixed signature: the
//! field path under validation, the field's value, its parent node, the
//! whole source document, the shared violation collector, and a handle to
//! the validating host. Evaluation never returns an error; a failed
//! constraint is reported exclusively by appending to the collector.
//!
//! Rules are stateless after construction. The closed-over configuration
//! (a length bound, a compiled pattern, a message) is captured once at
//! build time and never mutated, so a single `Rule` is safe to evaluate
//! against many documents and fields, including from multiple threads.

mod context;

pub use context::RuleContext;

use crate::value::Value;
use crate::violations::Violations;

/// Evaluation function wrapped by a [`Rule`].
pub type EvalFn = dyn for<'a> Fn(&str, Value<'a>, Value<'a>, Value<'a>, &mut Violations, &RuleContext<'a>)
    + Send
    + Sync;

/// An immutable, reusable validation constraint.
///
/// # Example
///
/// ```rust
/// use fieldcheck::rule::{Rule, RuleContext};
/// use fieldcheck::value::Value;
/// use fieldcheck::violations::Violations;
///
/// // A custom rule: the value must not equal the sibling "username" field.
/// let differs_from_username = Rule::new(
///     |field: &str,
///      value: Value<'_>,
///      _parent: Value<'_>,
///      _source: Value<'_>,
///      violations: &mut Violations,
///      ctx: &RuleContext<'_>| {
///         if value.is_empty() {
///             return;
///         }
///         if value.as_str() == ctx.lookup("username").as_str() {
///             violations.add(field, "must differ from the username");
///         }
///     },
/// );
///
/// let doc = serde_json::json!({"username": "ada", "display_name": "ada"});
/// let root = Value::of(&doc);
/// let mut violations = Violations::new();
///
/// differs_from_username.evaluate(
///     "display_name",
///     root.get("display_name"),
///     root,
///     root,
///     &mut violations,
///     &RuleContext::new(root),
/// );
///
/// assert_eq!(violations.len(), 1);
/// ```
pub struct Rule {
    eval: Box<EvalFn>,
}

impl Rule {
    /// Wrap an evaluation function into a rule.
    ///
    /// The function must be pure in its inputs plus whatever configuration
    /// it closes over: deterministic, no side effects besides appending to
    /// the collector, and thread-safe (`Send + Sync`).
    pub fn new<F>(eval: F) -> Self
    where
        F: for<'a> Fn(&str, Value<'a>, Value<'a>, Value<'a>, &mut Violations, &RuleContext<'a>)
            + Send
            + Sync
            + 'static,
    {
        Rule {
            eval: Box::new(eval),
        }
    }

    /// Evaluate the rule against one field of a document.
    ///
    /// `value` is the node at `field`, `parent` its enclosing node, and
    /// `source` the document root. A failed constraint appends to
    /// `violations`; nothing is ever raised and evaluation never halts the
    /// host's pass over the remaining fields.
    pub fn evaluate<'a>(
        &self,
        field: &str,
        value: Value<'a>,
        parent: Value<'a>,
        source: Value<'a>,
        violations: &mut Violations,
        ctx: &RuleContext<'a>,
    ) {
        (self.eval)(field, value, parent, source, violations, ctx);
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").finish_non_exhaustive()
    }
}
