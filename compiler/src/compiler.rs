use shapegen_schema::{Field, NormalizedSchema};

use crate::{
    error::ShapeError,
    locator::locate_type_block,
    parser::parse_fields,
};

/// Compile raw source text into a `NormalizedSchema`.
/// Returns `Err(ShapeError)` only when no type block can be located or its
/// braces never balance; anything odd inside the body degrades gracefully.
pub fn compile_schema(text: &str) -> Result<NormalizedSchema, ShapeError> {
    let block  = locate_type_block(text)?;
    let fields = parse_fields(block.body);
    let schema = normalize(block.name, fields, block.body);

    tracing::debug!(
        schema = %schema.name,
        fields = schema.fields.len(),
        total  = schema.walk().count(),
        "compiled type block"
    );
    Ok(schema)
}

/// Assemble a `NormalizedSchema` from its parts. No checks are made for
/// reserved words, duplicate names, or conflicting types.
pub fn normalize(name: &str, fields: Vec<Field>, raw: &str) -> NormalizedSchema {
    NormalizedSchema::new(name, fields, raw)
}
