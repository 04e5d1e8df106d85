//! Built-in rule factories.
//!
//! Every factory returns a [`Rule`] closed over its own immutable
//! configuration (a length bound, a compiled pattern, a message). All of
//! them share one evaluation policy:
//!
//! - an absent field is vacuously valid; no rule here fires on emptiness;
//! - [`type_string`] flags a present non-string value, and nothing else;
//! - every other rule folds the implicit type check into its own check: a
//!   present value violates when it is not a string or when the named
//!   predicate rejects its text.
//!
//! Optional fields therefore validate cleanly without a separate
//! not-empty constraint, while a wrongly-typed present value is always
//! reported.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::catalog::{ipv4, min_length};
//! use fieldcheck::rule::RuleContext;
//! use fieldcheck::value::Value;
//! use fieldcheck::violations::Violations;
//!
//! let doc = serde_json::json!({"host": "999.1.1.1", "name": "ada"});
//! let root = Value::of(&doc);
//! let ctx = RuleContext::new(root);
//! let mut violations = Violations::new();
//!
//! ipv4("host must be an IPv4 address").evaluate(
//!     "host", root.get("host"), root, root, &mut violations, &ctx,
//! );
//! min_length(3, "name is too short").evaluate(
//!     "name", root.get("name"), root, root, &mut violations, &ctx,
//! );
//!
//! assert_eq!(violations.fields(), vec!["host"]);
//! ```

mod format;
mod length;
mod pattern;
mod types;

pub use format::{
    alpha, alphanumeric, ascii, ipv4, ipv6, latitude, longitude, lowercase, port, uppercase, url,
};
pub use length::{length, max_length, min_length};
pub use pattern::{pattern, phone, subdomain};
pub use types::type_string;

use crate::rule::{Rule, RuleContext};
use crate::value::Value;
use crate::violations::Violations;

/// Build a rule from a text predicate and a violation message.
///
/// Implements the shared policy: skip when the field is absent, violate
/// when the value is present but not a string or when the predicate
/// rejects its content.
fn string_rule<P>(predicate: P, message: String) -> Rule
where
    P: Fn(&str) -> bool + Send + Sync + 'static,
{
    Rule::new(
        move |field: &str,
              value: Value<'_>,
              _parent: Value<'_>,
              _source: Value<'_>,
              violations: &mut Violations,
              _ctx: &RuleContext<'_>| {
            if value.is_empty() {
                return;
            }
            match value.as_str() {
                Some(text) if predicate(text) => {}
                _ => violations.add(field, message.clone()),
            }
        },
    )
}
