//! shapegen-compiler
//!
//! This crate implements:
//!  1) A locator that finds the first `interface`/`type` block in raw text,
//!  2) A forgiving field parser for the block body (`compile_schema` → `NormalizedSchema`),
//!  3) Code generation for `schema.ts` (zod), `Form.tsx` (react-hook-form) and `api.ts` (fetch),
//!  4) A runtime validator with the same rules as the generated zod schema,
//!  5) Error types (`ShapeError`), the `Generator` trait, and `CodegenConfig`.

pub mod error;
pub mod utils;
pub mod locator;
pub mod parser;
pub mod compiler;
pub mod config;
pub mod traits;
pub mod gen_zod;
pub mod gen_form;
pub mod gen_api;
pub mod validate;

pub use compiler::{compile_schema, normalize};
pub use config::CodegenConfig;
pub use error::ShapeError;
pub use gen_api::{compile_schema_to_api, ApiClientGenerator};
pub use gen_form::{compile_schema_to_form, FormGenerator};
pub use gen_zod::{compile_schema_to_zod, ZodSchemaGenerator};
pub use traits::Generator;
pub use validate::{validate_value, ValidationIssue};
