//! Format rules delegating to the [`crate::format`] predicate boundary.
//!
//! Each factory follows the identical shape: skip an absent field, violate
//! when the value is not a string or the named format predicate rejects
//! its text. What counts as a valid IPv4 address, URL, and so on is the
//! collaborator's business, not re-derived here.

use super::{string_rule, Rule};
use crate::format;

/// Require a dotted-quad IPv4 address, e.g. `"10.0.0.1"`.
pub fn ipv4(message: impl Into<String>) -> Rule {
    string_rule(format::is_ipv4, message.into())
}

/// Require an IPv6 address, e.g. `"::1"`.
pub fn ipv6(message: impl Into<String>) -> Rule {
    string_rule(format::is_ipv6, message.into())
}

/// Require a decimal-degree latitude between -90 and 90.
pub fn latitude(message: impl Into<String>) -> Rule {
    string_rule(format::is_latitude, message.into())
}

/// Require a decimal-degree longitude between -180 and 180.
pub fn longitude(message: impl Into<String>) -> Rule {
    string_rule(format::is_longitude, message.into())
}

/// Require a port number between 1 and 65535.
pub fn port(message: impl Into<String>) -> Rule {
    string_rule(format::is_port, message.into())
}

/// Require ASCII letters only.
pub fn alpha(message: impl Into<String>) -> Rule {
    string_rule(format::is_alpha, message.into())
}

/// Require ASCII letters and digits only.
pub fn alphanumeric(message: impl Into<String>) -> Rule {
    string_rule(format::is_alphanumeric, message.into())
}

/// Reject strings carrying uppercase letters.
pub fn lowercase(message: impl Into<String>) -> Rule {
    string_rule(format::is_lowercase, message.into())
}

/// Reject strings carrying lowercase letters.
pub fn uppercase(message: impl Into<String>) -> Rule {
    string_rule(format::is_uppercase, message.into())
}

/// Require ASCII-only text.
pub fn ascii(message: impl Into<String>) -> Rule {
    string_rule(format::is_ascii, message.into())
}

/// Require an absolute URL, e.g. `"https://example.com"`.
pub fn url(message: impl Into<String>) -> Rule {
    string_rule(format::is_url, message.into())
}
