//! Data model shared by the shapegen parser and code generators.
//!
//! A [`NormalizedSchema`] is the parsed form of one TypeScript `interface` or
//! `type` literal: a name plus an ordered tree of [`Field`]s.
//!
//! ```
//! use shapegen_schema::*;
//!
//! let schema = NormalizedSchema::new("User", vec![
//!     Field::new("name", true, FieldKind::String),
//!     Field::new("tags", false, FieldKind::Array { item_type: ItemType::String }),
//! ], "name: string; tags?: string[];");
//!
//! let paths: Vec<String> = schema.walk().map(|(path, _)| path.to_string()).collect();
//! assert_eq!(paths, ["name", "tags"]);
//! ```

pub mod field;
pub mod path;

pub use field::*;
pub use path::*;
