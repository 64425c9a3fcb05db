use shapegen_compiler::{
    compile_schema, compile_schema_to_api, compile_schema_to_form, compile_schema_to_zod,
    gen_api::resource_path, CodegenConfig, ShapeError,
};
use shapegen_schema::{Field, FieldKind, ItemType, NormalizedSchema};

const ORDER: &str = r#"
// Orders as stored by the shop backend.
export interface Order {
  orderId: string;
  status: "pending" | "shipped";
  customer: {
    name: string;
    email?: string;
    preferences?: {
      newsletter: boolean;
      favoriteCategories: string[];
    };
  };
  items: {
    sku: string;
    quantity: number;
  }[];
  notes?: string
  total: number;
}

interface Ignored { never: string }
"#;

#[test]
fn test_parse_order() {
    let schema = compile_schema(ORDER).expect("compile_schema failed");

    assert_eq!(schema.name, "Order");
    assert_eq!(schema.fields, vec![
        Field::new("orderId", true, FieldKind::String),
        Field::new("status", true, FieldKind::Unknown),
        Field::new("customer", true, FieldKind::Object {
            fields: vec![
                Field::new("name", true, FieldKind::String),
                Field::new("email", false, FieldKind::String),
                Field::new("preferences", false, FieldKind::Object {
                    fields: vec![
                        Field::new("newsletter", true, FieldKind::Boolean),
                        Field::new("favoriteCategories", true, FieldKind::Array { item_type: ItemType::String }),
                    ],
                }),
            ],
        }),
        Field::new("items", true, FieldKind::Array {
            item_type: ItemType::Object(vec![
                Field::new("sku", true, FieldKind::String),
                Field::new("quantity", true, FieldKind::Number),
            ]),
        }),
        Field::new("notes", false, FieldKind::String),
        Field::new("total", true, FieldKind::Number),
    ]);
    assert!(schema.raw.starts_with("orderId: string;"));
    assert!(schema.raw.ends_with("total: number;"));
}

#[test]
fn test_parsing_is_idempotent() {
    assert_eq!(compile_schema(ORDER).unwrap(), compile_schema(ORDER).unwrap());
}

#[test]
fn test_generation_is_deterministic() {
    let config = CodegenConfig::default();
    let a = compile_schema(ORDER).unwrap();
    let b = compile_schema(ORDER).unwrap();
    assert_eq!(compile_schema_to_zod(&a), compile_schema_to_zod(&b));
    assert_eq!(compile_schema_to_form(&a, &config), compile_schema_to_form(&b, &config));
    assert_eq!(compile_schema_to_api(&a, &config), compile_schema_to_api(&b, &config));
}

#[test]
fn test_malformed_line_between_fields_is_dropped() {
    let schema = compile_schema("interface A {\n  first: string;\n  this line is not a field\n  second: number;\n}").unwrap();
    assert_eq!(schema.fields, vec![
        Field::new("first", true, FieldKind::String),
        Field::new("second", true, FieldKind::Number),
    ]);
}

#[test]
fn test_unknown_type_does_not_fail() {
    let schema = compile_schema("type A = { owner: User; kind: 'a' | 'b'; when: Array<Date> }").unwrap();
    assert_eq!(schema.fields.len(), 3);
    assert!(schema.fields.iter().all(|f| f.kind == FieldKind::Unknown));
}

#[test]
fn test_scenarios() {
    // A
    let schema = compile_schema("interface User { name: string; age: number; active: boolean; }").unwrap();
    assert_eq!(
        serde_json::to_value(&schema.fields).unwrap(),
        serde_json::json!([
            { "name": "name", "type": "string", "required": true },
            { "name": "age", "type": "number", "required": true },
            { "name": "active", "type": "boolean", "required": true },
        ])
    );

    // B
    let schema = compile_schema("interface P { tags?: string[]; }").unwrap();
    assert_eq!(schema.fields, vec![Field::new("tags", false, FieldKind::Array { item_type: ItemType::String })]);

    // C
    let schema = compile_schema("interface Addr { geo: { lat: number; lng: number; } }").unwrap();
    assert_eq!(schema.fields[0].type_name(), "object");
    assert!(schema.fields[0].required);
    assert_eq!(schema.fields[0].fields().unwrap(), &[
        Field::new("lat", true, FieldKind::Number),
        Field::new("lng", true, FieldKind::Number),
    ]);

    // D
    let err = compile_schema("let nothing = 'here';").unwrap_err();
    assert!(matches!(err, ShapeError::NoTypeBlock));
    assert!(err.to_string().contains("No interface or type block found"));
}

#[test]
fn test_story_resource() {
    let schema = compile_schema("interface Story { title: string }").unwrap();
    let api = compile_schema_to_api(&schema, &CodegenConfig::default());
    assert_eq!(resource_path(&schema.name), "/stories");
    for op in ["createStory", "fetchStory", "listStories", "updateStory", "deleteStory"] {
        assert!(api.contains(&format!("export async function {}(", op)), "missing {}", op);
    }
}

/// Positions of `needles` in `haystack` must be strictly increasing.
fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut last = 0;
    for needle in needles {
        let found = haystack[last..]
            .find(needle)
            .unwrap_or_else(|| panic!("{:?} missing or out of order in:\n{}", needle, haystack));
        last += found + needle.len();
    }
}

#[test]
fn test_field_order_in_every_artifact() {
    let schema = compile_schema(ORDER).unwrap();
    let config = CodegenConfig::default();

    assert_in_order(&compile_schema_to_zod(&schema), &[
        "orderId:", "status:", "customer:", "name:", "email:", "preferences:", "newsletter:",
        "favoriteCategories:", "items:", "sku:", "quantity:", "notes:", "total:",
    ]);

    assert_in_order(&compile_schema_to_form(&schema, &config), &[
        "register(\"orderId\")",
        "register(\"status\")",
        "register(\"customer.name\")",
        "register(\"customer.email\")",
        "register(\"customer.preferences.newsletter\")",
        "name=\"customer.preferences.favoriteCategories\"",
        "name=\"items\"",
        "`${item0}.sku`",
        "`${item0}.quantity`",
        "register(\"notes\")",
        "register(\"total\"",
    ]);
}

#[test]
fn test_requiredness_matches_optional_marker() {
    let schema = compile_schema(ORDER).unwrap();
    let zod = compile_schema_to_zod(&schema);
    assert!(zod.contains("  orderId: z.string(),\n"));
    assert!(zod.contains("    email: z.string().optional(),\n"));
    assert!(zod.contains("  notes: z.string().optional(),\n"));
    // A required object keeps its own requiredness regardless of its children.
    assert!(zod.contains("      favoriteCategories: z.array(z.string()),\n    }).optional(),\n  }),\n"));
}

#[test]
fn test_structural_errors() {
    let err = compile_schema("interface Broken {\n  a: {\n    b: string;\n}").unwrap_err();
    assert!(matches!(err, ShapeError::UnbalancedBraces { .. }), "got {:?}", err);
    assert!(err.to_string().contains("unbalanced braces"));

    let err = compile_schema("export interface User\n  name: string;\n").unwrap_err();
    assert!(matches!(err, ShapeError::MissingOpenBrace { .. }), "got {:?}", err);

    let err = compile_schema("type Alias = string;").unwrap_err();
    assert!(matches!(err, ShapeError::NoTypeBlock), "got {:?}", err);

    let err = compile_schema("Paste any type here to get started.").unwrap_err();
    assert!(matches!(err, ShapeError::NoTypeBlock), "got {:?}", err);
}

#[test]
fn test_schema_is_a_plain_value() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NormalizedSchema>();
    assert_send_sync::<CodegenConfig>();
}
