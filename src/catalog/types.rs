//! Type-constraint rules.

use super::Rule;
use crate::rule::RuleContext;
use crate::value::Value;
use crate::violations::Violations;

/// Require the field, when present, to be a string.
///
/// This is the only catalog rule whose entire purpose is the type check:
/// it flags any present non-string value and accepts everything else.
pub fn type_string(message: impl Into<String>) -> Rule {
    let message = message.into();
    Rule::new(
        move |field: &str,
              value: Value<'_>,
              _parent: Value<'_>,
              _source: Value<'_>,
              violations: &mut Violations,
              _ctx: &RuleContext<'_>| {
            if value.is_empty() || value.is_string() {
                return;
            }
            violations.add(field, message.clone());
        },
    )
}
