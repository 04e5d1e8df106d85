//! Custom Rules
//!
//! This example demonstrates writing rules beyond the built-in catalog:
//! a closure with the full evaluation signature can consult the parent
//! node, the whole document, or the validator context for cross-field
//! constraints.
//!
//! Run with: cargo run --example custom_rules

use fieldcheck::catalog::pattern;
use fieldcheck::rule::{Rule, RuleContext};
use fieldcheck::text::collapse_whitespaces;
use fieldcheck::value::Value;
use fieldcheck::violations::Violations;

fn main() {
    println!("=== Custom Rules Example ===\n");

    let doc = serde_json::json!({
        "password": "hunter2",
        "password_confirm": "hunter",
        "display_name": "  Ada   Lovelace  ",
    });

    // A cross-field rule: the confirmation must match the password.
    let confirms_password = Rule::new(
        |field: &str,
         value: Value<'_>,
         _parent: Value<'_>,
         _source: Value<'_>,
         violations: &mut Violations,
         ctx: &RuleContext<'_>| {
            if value.is_empty() {
                return;
            }
            if value.as_str() != ctx.lookup("password").as_str() {
                violations.add(field, "must match the password");
            }
        },
    );

    // A normalizing rule: the display name must already be in collapsed
    // single-space form.
    let normalized_name = Rule::new(
        |field: &str,
         value: Value<'_>,
         _parent: Value<'_>,
         _source: Value<'_>,
         violations: &mut Violations,
         _ctx: &RuleContext<'_>| {
            if value.is_empty() {
                return;
            }
            match value.as_str() {
                Some(text) if text == collapse_whitespaces(text) => {}
                _ => violations.add(field, "must not carry extra whitespace"),
            }
        },
    );

    // Catalog and custom rules mix freely.
    let no_spaces = pattern("^[^ ]*$", "must not contain spaces")
        .expect("pattern compiles");

    let root = Value::of(&doc);
    let ctx = RuleContext::new(root);
    let mut violations = Violations::new();

    let checks: Vec<(&str, &Rule)> = vec![
        ("password_confirm", &confirms_password),
        ("password", &no_spaces),
        ("display_name", &normalized_name),
    ];

    for (field, rule) in checks {
        rule.evaluate(field, root.get(field), root, root, &mut violations, &ctx);
    }

    println!("Collected {} violation(s):", violations.len());
    for violation in &violations {
        println!("  {}: {}", violation.field, violation.message);
    }

    let tidy = collapse_whitespaces("  Ada   Lovelace  ");
    println!("\nNormalized display name: '{tidy}'");

    println!("\n=== Example Complete ===");
}
