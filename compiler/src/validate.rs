//! Runtime check of a JSON document against a parsed schema.
//!
//! Applies the same rules as the zod schema `schema.ts` describes, so a
//! document accepted here is accepted by the generated validator: missing
//! required keys are reported as `Required`, `null` never matches a typed
//! field, `unknown` fields accept anything (including absence), and keys the
//! schema does not declare are ignored.

use serde::Serialize;
use serde_json::Value;
use shapegen_schema::{Field, FieldKind, FieldPath, ItemType, NormalizedSchema};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Dot path of the offending value; array entries use their index.
    pub path:    String,
    pub message: String,
}

/// Every issue found in `value`, in declaration order of the schema.
pub fn validate_value(schema: &NormalizedSchema, value: &Value) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    check_object(&schema.fields, value, &FieldPath::root(), &mut issues);
    tracing::trace!(schema = %schema.name, issues = issues.len(), "validated document");
    issues
}

fn check_object(fields: &[Field], value: &Value, path: &FieldPath, issues: &mut Vec<ValidationIssue>) {
    let map = match value {
        Value::Object(map) => map,
        other => {
            issues.push(mismatch(path, "object", other));
            return;
        }
    };

    for field in fields {
        let child = path.child(&field.name);
        match map.get(&field.name) {
            Some(value) => check_field(field, value, &child, issues),
            None if field.required && field.kind != FieldKind::Unknown => issues.push(ValidationIssue {
                path:    child.to_string(),
                message: "Required".to_string(),
            }),
            None => {}
        }
    }
}

fn check_field(field: &Field, value: &Value, path: &FieldPath, issues: &mut Vec<ValidationIssue>) {
    match &field.kind {
        FieldKind::String  => expect(value.is_string(), "string", value, path, issues),
        FieldKind::Number  => expect(value.is_number(), "number", value, path, issues),
        FieldKind::Boolean => expect(value.is_boolean(), "boolean", value, path, issues),
        FieldKind::Array { item_type } => match value {
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    check_item(item_type, item, &path.child(&index.to_string()), issues);
                }
            }
            other => issues.push(mismatch(path, "array", other)),
        },
        FieldKind::Object { fields } => check_object(fields, value, path, issues),
        FieldKind::Unknown => {}
    }
}

fn check_item(item_type: &ItemType, value: &Value, path: &FieldPath, issues: &mut Vec<ValidationIssue>) {
    match item_type {
        ItemType::String         => expect(value.is_string(), "string", value, path, issues),
        ItemType::Number         => expect(value.is_number(), "number", value, path, issues),
        ItemType::Boolean        => expect(value.is_boolean(), "boolean", value, path, issues),
        ItemType::Object(fields) => check_object(fields, value, path, issues),
        ItemType::Unknown        => {}
    }
}

fn expect(ok: bool, expected: &str, value: &Value, path: &FieldPath, issues: &mut Vec<ValidationIssue>) {
    if !ok {
        issues.push(mismatch(path, expected, value));
    }
}

fn mismatch(path: &FieldPath, expected: &str, received: &Value) -> ValidationIssue {
    ValidationIssue {
        path:    path.to_string(),
        message: format!("Expected {}, received {}", expected, json_type(received)),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null      => "null",
        Value::Bool(_)   => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_)  => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::compile_schema;
    use serde_json::json;

    fn issues(text: &str, value: Value) -> Vec<(String, String)> {
        let schema = compile_schema(text).unwrap();
        validate_value(&schema, &value)
            .into_iter()
            .map(|issue| (issue.path, issue.message))
            .collect()
    }

    fn pair(path: &str, message: &str) -> (String, String) {
        (path.to_string(), message.to_string())
    }

    #[test]
    fn test_valid_document() {
        let found = issues(
            "interface User { name: string; age?: number; tags: string[]; geo: { lat: number } }",
            json!({ "name": "Ada", "tags": ["a", "b"], "geo": { "lat": 1.5 }, "extra": true }),
        );
        assert!(found.is_empty(), "{:?}", found);
    }

    #[test]
    fn test_missing_and_mismatched() {
        let found = issues(
            "interface User { name: string; age?: number; active: boolean; geo: { lat: number; lng: number } }",
            json!({ "age": "old", "active": null, "geo": { "lat": "north" } }),
        );
        assert_eq!(found, vec![
            pair("name", "Required"),
            pair("age", "Expected number, received string"),
            pair("active", "Expected boolean, received null"),
            pair("geo.lat", "Expected number, received string"),
            pair("geo.lng", "Required"),
        ]);
    }

    #[test]
    fn test_array_items_use_index_paths() {
        let found = issues(
            "interface P { scores: number[]; items: { sku: string }[] }",
            json!({ "scores": [1, "two", 3], "items": [{ "sku": "a" }, {}, 7] }),
        );
        assert_eq!(found, vec![
            pair("scores.1", "Expected number, received string"),
            pair("items.1.sku", "Required"),
            pair("items.2", "Expected object, received number"),
        ]);
    }

    #[test]
    fn test_unknown_accepts_anything() {
        assert!(issues("interface A { meta: Foo }", json!({})).is_empty());
        assert!(issues("interface A { meta: Foo }", json!({ "meta": null })).is_empty());
        assert!(issues("interface A { meta: Foo[] }", json!({ "meta": [1, "x"] })).is_empty());
    }

    #[test]
    fn test_root_must_be_object() {
        assert_eq!(issues("interface A { a?: string }", json!([1])), vec![pair("", "Expected object, received array")]);
    }

    #[test]
    fn test_optional_object_absent_is_fine() {
        assert!(issues("interface A { geo?: { lat: number } }", json!({})).is_empty());
        assert_eq!(
            issues("interface A { geo?: { lat: number } }", json!({ "geo": {} })),
            vec![pair("geo.lat", "Required")]
        );
    }
}
