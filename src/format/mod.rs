//! Format predicates backing the catalog's delegating rules.
//!
//! This module is the external-collaborator boundary for format
//! detection: each predicate answers "does this text look like X" and
//! delegates the hard part to a well-tested parser (`std::net` for IP
//! addresses, the `url` crate for URLs, `regex` for the ported
//! decimal-degree patterns). The catalog only orchestrates skip/violate
//! behavior around these answers.
//!
//! The letter, digit, and casing predicates are ASCII-classed and accept
//! the empty string.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static LATITUDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?([1-8]?\d(\.\d+)?|90(\.0+)?)$").expect("latitude pattern compiles")
});

static LONGITUDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(180(\.0+)?|((1[0-7]\d)|([1-9]?\d))(\.\d+)?)$")
        .expect("longitude pattern compiles")
});

/// Check whether the text parses as a dotted-quad IPv4 address.
pub fn is_ipv4(text: &str) -> bool {
    Ipv4Addr::from_str(text).is_ok()
}

/// Check whether the text parses as an IPv6 address.
pub fn is_ipv6(text: &str) -> bool {
    Ipv6Addr::from_str(text).is_ok()
}

/// Check whether the text parses as an absolute URL.
pub fn is_url(text: &str) -> bool {
    Url::parse(text).is_ok()
}

/// Check whether the text is a TCP/UDP port number (1-65535).
pub fn is_port(text: &str) -> bool {
    matches!(text.parse::<u16>(), Ok(port) if port > 0)
}

/// Check whether the text is a decimal-degree latitude (-90 to 90).
pub fn is_latitude(text: &str) -> bool {
    LATITUDE.is_match(text)
}

/// Check whether the text is a decimal-degree longitude (-180 to 180).
pub fn is_longitude(text: &str) -> bool {
    LONGITUDE.is_match(text)
}

/// Check whether the text contains only ASCII letters.
pub fn is_alpha(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Check whether the text contains only ASCII letters and digits.
pub fn is_alphanumeric(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Check whether the text carries no uppercase letters.
pub fn is_lowercase(text: &str) -> bool {
    text == text.to_lowercase()
}

/// Check whether the text carries no lowercase letters.
pub fn is_uppercase(text: &str) -> bool {
    text == text.to_uppercase()
}

/// Check whether every byte of the text is ASCII.
pub fn is_ascii(text: &str) -> bool {
    text.is_ascii()
}
