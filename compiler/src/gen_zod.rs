use shapegen_schema::{Field, FieldKind, ItemType, NormalizedSchema};

use crate::{
    traits::Generator,
    utils::{indent, object_key},
};

pub const SCHEMA_FILE: &str = "schema.ts";

/// Emits `schema.ts`: a zod object schema plus the inferred record type.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZodSchemaGenerator;

impl Generator for ZodSchemaGenerator {
    fn file_name(&self) -> &'static str {
        SCHEMA_FILE
    }

    fn generate(&self, schema: &NormalizedSchema) -> String {
        compile_schema_to_zod(schema)
    }
}

/// Name of the exported zod value for a schema (`User` -> `UserSchema`).
pub fn schema_const_name(schema: &NormalizedSchema) -> String {
    format!("{}Schema", schema.name)
}

/// Compiles the schema into a zod module as a string.
pub fn compile_schema_to_zod(schema: &NormalizedSchema) -> String {
    let const_name = schema_const_name(schema);
    let mut lines: Vec<String> = Vec::new();

    lines.push("import { z } from \"zod\";".to_string());
    lines.push("".to_string());
    lines.push(format!("export const {} = {};", const_name, object_expr(&schema.fields, 0)));
    lines.push("".to_string());
    lines.push(format!("export type {} = z.infer<typeof {}>;", schema.name, const_name));
    lines.push("".to_string());

    lines.join("\n")
}

/// `z.object({ ... })` over `fields`, with the closing brace at `depth`.
fn object_expr(fields: &[Field], depth: usize) -> String {
    if fields.is_empty() {
        return "z.object({})".to_string();
    }

    let mut out = String::from("z.object({\n");
    for field in fields {
        out.push_str(&format!(
            "{}{}: {},\n",
            indent(depth + 1),
            object_key(&field.name),
            field_expr(field, depth + 1)
        ));
    }
    out.push_str(&indent(depth));
    out.push_str("})");
    out
}

fn field_expr(field: &Field, depth: usize) -> String {
    let base = match &field.kind {
        FieldKind::String              => "z.string()".to_string(),
        FieldKind::Number              => "z.number()".to_string(),
        FieldKind::Boolean             => "z.boolean()".to_string(),
        FieldKind::Array { item_type } => format!("z.array({})", item_expr(item_type, depth)),
        FieldKind::Object { fields }   => object_expr(fields, depth),
        FieldKind::Unknown             => "z.any()".to_string(),
    };

    if field.required {
        base
    } else {
        format!("{}.optional()", base)
    }
}

fn item_expr(item_type: &ItemType, depth: usize) -> String {
    match item_type {
        ItemType::String         => "z.string()".to_string(),
        ItemType::Number         => "z.number()".to_string(),
        ItemType::Boolean        => "z.boolean()".to_string(),
        ItemType::Object(fields) => object_expr(fields, depth),
        ItemType::Unknown        => "z.any()".to_string(),
    }
}
