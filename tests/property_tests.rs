//! Property-based tests for the rule catalog.
//!
//! These tests use proptest to verify the evaluation contract holds
//! across many randomly generated inputs.

use fieldcheck::catalog::{
    alpha, alphanumeric, ascii, ipv4, ipv6, latitude, length, longitude, lowercase, max_length,
    min_length, pattern, phone, port, subdomain, type_string, uppercase, url,
};
use fieldcheck::rule::{Rule, RuleContext};
use fieldcheck::text::collapse_whitespaces;
use fieldcheck::value::Value;
use fieldcheck::violations::Violations;
use proptest::prelude::*;
use serde_json::json;

/// Evaluate one rule against one field of a document.
fn check(rule: &Rule, doc: &serde_json::Value, field: &str) -> Violations {
    let root = Value::of(doc);
    let mut violations = Violations::new();
    rule.evaluate(
        field,
        root.get(field),
        root,
        root,
        &mut violations,
        &RuleContext::new(root),
    );
    violations
}

fn catalog_rules() -> Vec<Rule> {
    vec![
        type_string("m"),
        min_length(5, "m"),
        max_length(5, "m"),
        length(5, "m"),
        ipv4("m"),
        ipv6("m"),
        latitude("m"),
        longitude("m"),
        port("m"),
        alpha("m"),
        alphanumeric("m"),
        lowercase("m"),
        uppercase("m"),
        ascii("m"),
        url("m"),
        phone("m"),
        subdomain("m"),
        pattern("^[0-9]+$", "m").expect("digit pattern compiles"),
    ]
}

prop_compose! {
    fn arbitrary_rule()(index in 0..18usize) -> Rule {
        catalog_rules().remove(index)
    }
}

proptest! {
    #[test]
    fn emptiness_is_always_permissive(rule in arbitrary_rule()) {
        let doc = json!({"present": "value"});
        let violations = check(&rule, &doc, "not_present");
        prop_assert!(violations.is_empty());
    }

    #[test]
    fn evaluation_is_deterministic(rule in arbitrary_rule(), text in ".{0,40}") {
        let doc = json!({"field": text});
        let first = check(&rule, &doc, "field");
        let second = check(&rule, &doc, "field");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn type_string_never_fires_on_strings(text in ".{0,40}") {
        let doc = json!({"field": text});
        let violations = check(&type_string("m"), &doc, "field");
        prop_assert!(violations.is_empty());
    }

    #[test]
    fn min_length_fires_exactly_below_the_bound(
        text in "[a-z]{0,20}",
        bound in 0..20usize,
    ) {
        let doc = json!({"field": text});
        let violations = check(&min_length(bound, "m"), &doc, "field");
        prop_assert_eq!(violations.len() == 1, text.len() < bound);
    }

    #[test]
    fn max_length_fires_exactly_above_the_bound(
        text in "[a-z]{0,20}",
        bound in 0..20usize,
    ) {
        let doc = json!({"field": text});
        let violations = check(&max_length(bound, "m"), &doc, "field");
        prop_assert_eq!(violations.len() == 1, text.len() > bound);
    }

    #[test]
    fn length_fires_exactly_off_the_bound(
        text in "[a-z]{0,20}",
        bound in 0..20usize,
    ) {
        let doc = json!({"field": text});
        let violations = check(&length(bound, "m"), &doc, "field");
        prop_assert_eq!(violations.len() == 1, text.len() != bound);
    }

    #[test]
    fn digit_pattern_accepts_generated_digit_strings(text in "[0-9]{1,12}") {
        let rule = pattern("^[0-9]+$", "m").expect("digit pattern compiles");
        let doc = json!({"field": text});
        prop_assert!(check(&rule, &doc, "field").is_empty());
    }

    #[test]
    fn non_string_values_violate_every_catalog_rule(rule in arbitrary_rule()) {
        let doc = json!({"field": [1, 2, 3]});
        let violations = check(&rule, &doc, "field");
        prop_assert_eq!(violations.len(), 1);
    }

    #[test]
    fn catalog_rules_append_at_most_one_violation(
        rule in arbitrary_rule(),
        text in ".{0,40}",
    ) {
        let doc = json!({"field": text});
        let violations = check(&rule, &doc, "field");
        prop_assert!(violations.len() <= 1);
    }

    #[test]
    fn collapse_whitespaces_is_idempotent(text in ".{0,60}") {
        let once = collapse_whitespaces(&text);
        let twice = collapse_whitespaces(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn collapsed_text_never_carries_runs_of_spaces(text in ".{0,60}") {
        let collapsed = collapse_whitespaces(&text);
        prop_assert!(!collapsed.contains("  "));
        prop_assert!(!collapsed.starts_with(' '));
        prop_assert!(!collapsed.ends_with(' '));
    }

    #[test]
    fn generated_ipv4_addresses_pass(a in 0..=255u8, b in 0..=255u8, c in 0..=255u8, d in 0..=255u8) {
        let doc = json!({"host": format!("{a}.{b}.{c}.{d}")});
        prop_assert!(check(&ipv4("m"), &doc, "host").is_empty());
    }
}
