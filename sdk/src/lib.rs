//! shapegen
//!
//! Turns one TypeScript `interface`/`type` literal into three artifacts:
//! `schema.ts` (zod), `Form.tsx` (react-hook-form) and `api.ts` (fetch).
//!
//! - `generate` / `generate_files` run the pipeline end to end
//! - `Session` keeps the latest schema and artifacts for changing input text
//! - `samples` ships a few ready-made interfaces
//!
//! ```
//! let (schema, files) = shapegen::generate(
//!     "interface Story { title: string; tags?: string[] }",
//!     &shapegen::CodegenConfig::default(),
//! ).unwrap();
//!
//! assert_eq!(schema.name, "Story");
//! assert!(files.get("api.ts").unwrap().contains("const BASE = \"/api/stories\";"));
//! ```

pub mod files;
pub mod samples;
pub mod session;

pub use files::{generate_files, GeneratedFile, GeneratedFiles};
pub use session::Session;
pub use shapegen_compiler::{
    compile_schema, validate_value, CodegenConfig, Generator, ShapeError, ValidationIssue,
};
pub use shapegen_schema::{Field, FieldKind, FieldPath, ItemType, NormalizedSchema};

/// Parse `text` and generate all three artifacts from it.
pub fn generate(text: &str, config: &CodegenConfig) -> Result<(NormalizedSchema, GeneratedFiles), ShapeError> {
    let schema = compile_schema(text)?;
    let files  = generate_files(&schema, config);
    Ok((schema, files))
}

/// Pretty-printed JSON of a parsed schema.
pub fn schema_to_json(schema: &NormalizedSchema) -> Result<String, ShapeError> {
    Ok(serde_json::to_string_pretty(schema)?)
}

pub mod error {
    pub use shapegen_compiler::error::ShapeError;
}

pub mod schema {
    pub use shapegen_schema::{Field, FieldKind, FieldPath, ItemType, NormalizedSchema};
}
