//! # Structural Validation
//!
//! Walks a manifest value against a [`SchemaNode`] tree depth-first and
//! collects every violation at every level. Nothing short-circuits except
//! a type mismatch, which stops the remaining checks for that one node
//! (constraints for a string say nothing useful about an array).
//!
//! ## Ordering
//!
//! The collected violations are deduplicated and sorted by their message
//! text before they are returned, so output is identical regardless of
//! traversal order or the order of keys in the input.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::node::{ArrayNode, ObjectNode, SchemaNode, StringNode};
use crate::violation::{Violation, ViolationKind};

/// Validate `instance` against `schema`, returning sorted, deduplicated
/// violations. An empty vector means the instance is structurally valid.
pub fn validate_structure(schema: &SchemaNode, instance: &Value) -> Vec<Violation> {
    let mut violations = Vec::new();
    visit(schema, instance, "", &mut violations);
    sort_and_dedup(violations)
}

fn visit(node: &SchemaNode, value: &Value, path: &str, out: &mut Vec<Violation>) {
    match (node, value) {
        (SchemaNode::Object(object), Value::Object(map)) => visit_object(object, map, path, out),
        (SchemaNode::Array(array), Value::Array(items)) => visit_array(array, value, items, path, out),
        (SchemaNode::String(string), Value::String(s)) => visit_string(string, s, path, out),
        (SchemaNode::Number, Value::Number(_)) | (SchemaNode::Boolean, Value::Bool(_)) => {}
        (node, value) => out.push(Violation::new(
            path,
            ViolationKind::Type,
            format!(
                "expected type \"{}\", found \"{}\"",
                node.type_name(),
                json_type_name(value)
            ),
        )),
    }
}

fn visit_object(node: &ObjectNode, map: &Map<String, Value>, path: &str, out: &mut Vec<Violation>) {
    for property in &node.properties {
        match map.get(property.name) {
            Some(child) => visit(&property.schema, child, &child_path(path, property.name), out),
            None if property.required => out.push(Violation::new(
                path,
                ViolationKind::Required,
                format!("{} is a required property", quoted(property.name)),
            )),
            None => {}
        }
    }

    for (key, child) in map {
        let declared = node.property(key).is_some();
        let mut matched = false;
        for pattern_property in &node.pattern_properties {
            if pattern_property.key_pattern.is_match(key) {
                matched = true;
                visit(&pattern_property.schema, child, &child_path(path, key), out);
            }
        }

        if !declared && !matched && !node.additional_properties {
            out.push(Violation::new(
                path,
                ViolationKind::AdditionalProperty,
                format!("additional property {} is not allowed", quoted(key)),
            ));
        }
    }
}

fn visit_array(node: &ArrayNode, value: &Value, items: &[Value], path: &str, out: &mut Vec<Violation>) {
    if node.unique_items && has_duplicates(items) {
        out.push(Violation::new(
            path,
            ViolationKind::UniqueItems,
            format!("{value} has non-unique elements"),
        ));
    }

    for (i, item) in items.iter().enumerate() {
        visit(&node.items, item, &child_path(path, &i.to_string()), out);
    }
}

fn visit_string(node: &StringNode, s: &str, path: &str, out: &mut Vec<Violation>) {
    if let Some(allowed) = node.allowed {
        if !allowed.contains(&s) {
            out.push(Violation::new(
                path,
                ViolationKind::Enum,
                format!("{} is not one of {}", quoted(s), Value::from(allowed.to_vec())),
            ));
        }
    }

    if let Some(pattern) = node.pattern {
        if !pattern.is_match(s) {
            out.push(Violation::new(
                path,
                ViolationKind::Pattern,
                format!("{} does not match the {} pattern", quoted(s), pattern.name()),
            ));
        }
    }
}

fn sort_and_dedup(violations: Vec<Violation>) -> Vec<Violation> {
    let mut by_message = BTreeMap::new();
    for violation in violations {
        by_message.entry(violation.to_string()).or_insert(violation);
    }
    by_message.into_values().collect()
}

fn has_duplicates(items: &[Value]) -> bool {
    items
        .iter()
        .enumerate()
        .any(|(i, item)| items[i + 1..].contains(item))
}

/// Append one reference token to a JSON Pointer (RFC 6901 escaping).
fn child_path(parent: &str, token: &str) -> String {
    format!("{parent}/{}", token.replace('~', "~0").replace('/', "~1"))
}

/// Render a string as a JSON string literal.
fn quoted(s: &str) -> String {
    Value::from(s).to_string()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
