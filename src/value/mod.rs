//! Document value access.
//!
//! Rules never touch `serde_json::Value` directly. They see a [`Value`]
//! handle, which models the one distinction the evaluation contract cares
//! about: a field that is absent from the document versus a field that is
//! present (with whatever native type it carries). Parsing the document is
//! the host's job; this module only exposes introspection over the result.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Native type tag of a document node.
///
/// The document model is a sum type fixed at parse time; `Kind` is the tag
/// a rule checks before interpreting a node's content.
///
/// # Example
///
/// ```rust
/// use fieldcheck::value::{Kind, Value};
///
/// let node = serde_json::json!("hello");
/// assert_eq!(Value::of(&node).kind(), Some(Kind::String));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Kind {
    String,
    Number,
    Bool,
    Null,
    Array,
    Object,
}

impl Kind {
    /// Get the kind's name for display/diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::Null => "null",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    fn of(node: &JsonValue) -> Self {
        match node {
            JsonValue::String(_) => Self::String,
            JsonValue::Number(_) => Self::Number,
            JsonValue::Bool(_) => Self::Bool,
            JsonValue::Null => Self::Null,
            JsonValue::Array(_) => Self::Array,
            JsonValue::Object(_) => Self::Object,
        }
    }
}

/// Handle to a single document node, or to an absent field.
///
/// `Value` is a cheap `Copy` view borrowed from the parsed document. An
/// absent field (the path was not present in the document) is distinct
/// from a present-but-falsy node: a literal `null` or an empty string is
/// present and carries a [`Kind`].
///
/// # Example
///
/// ```rust
/// use fieldcheck::value::Value;
///
/// let doc = serde_json::json!({"user": {"name": "ada"}});
/// let root = Value::of(&doc);
///
/// assert_eq!(root.get("user.name").as_str(), Some("ada"));
/// assert!(root.get("user.email").is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Value<'a> {
    node: Option<&'a JsonValue>,
}

impl<'a> Value<'a> {
    /// Wrap a present document node.
    pub fn of(node: &'a JsonValue) -> Self {
        Value { node: Some(node) }
    }

    /// The absent/unset state, used for fields the document does not hold.
    pub fn absent() -> Self {
        Value { node: None }
    }

    /// Check whether the field is absent from the document.
    ///
    /// Emptiness means "unset", not "falsy": `null` and `""` are present.
    pub fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    /// The node's type tag, or `None` for an absent field.
    pub fn kind(&self) -> Option<Kind> {
        self.node.map(Kind::of)
    }

    /// Check whether the node is a textual scalar.
    pub fn is_string(&self) -> bool {
        matches!(self.node, Some(JsonValue::String(_)))
    }

    /// Borrow the textual content, if the node is a string.
    pub fn as_str(&self) -> Option<&'a str> {
        match self.node {
            Some(JsonValue::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Render the node as a string.
    ///
    /// Strings render as their content, numbers and booleans via their
    /// display form, `null` and absent fields as the empty string, and
    /// arrays/objects as compact JSON.
    pub fn text(&self) -> String {
        match self.node {
            None | Some(JsonValue::Null) => String::new(),
            Some(JsonValue::String(s)) => s.clone(),
            Some(JsonValue::Bool(b)) => b.to_string(),
            Some(JsonValue::Number(n)) => n.to_string(),
            Some(node) => serde_json::to_string(node).unwrap_or_default(),
        }
    }

    /// Resolve a dot-separated descendant path.
    ///
    /// Segments index objects by key and arrays by decimal position.
    /// Returns the absent value when any segment fails to resolve.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fieldcheck::value::Value;
    ///
    /// let doc = serde_json::json!({"servers": [{"host": "10.0.0.1"}]});
    /// let root = Value::of(&doc);
    ///
    /// assert_eq!(root.get("servers.0.host").as_str(), Some("10.0.0.1"));
    /// assert!(root.get("servers.1.host").is_empty());
    /// ```
    pub fn get(&self, path: &str) -> Value<'a> {
        let mut current = match self.node {
            Some(node) => node,
            None => return Value::absent(),
        };

        for segment in path.split('.') {
            let next = match current {
                JsonValue::Object(map) => map.get(segment),
                JsonValue::Array(items) => {
                    segment.parse::<usize>().ok().and_then(|i| items.get(i))
                }
                _ => None,
            };

            match next {
                Some(node) => current = node,
                None => return Value::absent(),
            }
        }

        Value::of(current)
    }

    /// Escape hatch to the underlying parsed node, if present.
    pub fn node(&self) -> Option<&'a JsonValue> {
        self.node
    }
}
