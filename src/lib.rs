//! Fieldcheck: declarative validation rules for JSON documents
//!
//! Fieldcheck attaches named constraints to fields of a parsed document
//! and collects human-readable violation messages. Validity failures are
//! data, not errors: a rule that rejects a value appends to a shared
//! collector and evaluation always continues, so one pass over a document
//! reports every failure instead of stopping at the first.
//!
//! # Core Concepts
//!
//! - **Rule**: an immutable predicate closure over a field path, its
//!   value, its parent node, and the whole document
//! - **Catalog**: built-in rule factories for type, length, format, and
//!   pattern constraints
//! - **Violations**: the ordered, append-only collector rules report into
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::catalog::{ipv4, min_length, port};
//! use fieldcheck::rule::RuleContext;
//! use fieldcheck::value::Value;
//! use fieldcheck::violations::Violations;
//!
//! let doc = serde_json::json!({
//!     "host": "10.0.0.1",
//!     "port": "99999",
//!     "name": "db",
//! });
//! let root = Value::of(&doc);
//! let ctx = RuleContext::new(root);
//! let mut violations = Violations::new();
//!
//! let rules = [
//!     ("host", ipv4("host must be an IPv4 address")),
//!     ("port", port("port must be between 1 and 65535")),
//!     ("name", min_length(2, "name must be at least 2 characters")),
//! ];
//!
//! for (field, rule) in &rules {
//!     rule.evaluate(field, root.get(field), root, root, &mut violations, &ctx);
//! }
//!
//! assert_eq!(violations.fields(), vec!["port"]);
//! ```

pub mod catalog;
pub mod error;
pub mod format;
pub mod rule;
pub mod text;
pub mod value;
pub mod violations;

// Re-export commonly used types
pub use error::RuleError;
pub use rule::{Rule, RuleContext};
pub use value::{Kind, Value};
pub use violations::{Violation, Violations};
