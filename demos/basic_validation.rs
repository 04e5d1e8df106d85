//! Basic Validation
//!
//! This example demonstrates attaching catalog rules to fields of a JSON
//! document and collecting every violation in a single pass.
//!
//! Key concepts:
//! - Rules built once, evaluated against many fields
//! - Absent optional fields are vacuously valid
//! - All violations collected, not just the first
//!
//! Run with: cargo run --example basic_validation

use fieldcheck::catalog::{ipv4, max_length, min_length, port, subdomain, type_string, url};
use fieldcheck::rule::{Rule, RuleContext};
use fieldcheck::value::Value;
use fieldcheck::violations::Violations;

fn main() {
    println!("=== Basic Validation Example ===\n");

    let doc = serde_json::json!({
        "name": "edge-gateway",
        "host": "999.10.0.1",
        "port": "99999",
        "homepage": "https://gateway.example.com",
        "zone": "-bad-zone",
    });

    // Declare the ruleset: field path -> rules attached to it.
    let ruleset: Vec<(&str, Vec<Rule>)> = vec![
        (
            "name",
            vec![
                type_string("name must be a string"),
                min_length(3, "name must be at least 3 characters"),
                max_length(32, "name must be at most 32 characters"),
            ],
        ),
        ("host", vec![ipv4("host must be an IPv4 address")]),
        ("port", vec![port("port must be between 1 and 65535")]),
        ("homepage", vec![url("homepage must be a URL")]),
        ("zone", vec![subdomain("zone must be a valid subdomain")]),
        // Optional field, absent from the document: never flagged.
        ("description", vec![min_length(10, "description is too short")]),
    ];

    let root = Value::of(&doc);
    let ctx = RuleContext::new(root);
    let mut violations = Violations::new();

    for (field, rules) in &ruleset {
        let value = root.get(field);
        for rule in rules {
            rule.evaluate(field, value, root, root, &mut violations, &ctx);
        }
    }

    println!("Document: {doc:#}\n");
    println!("Collected {} violation(s):", violations.len());
    for violation in &violations {
        println!("  {}: {}", violation.field, violation.message);
    }

    println!("\n=== Example Complete ===");
}
