use serde::Serialize;

use crate::path::FieldPath;

/// Element type of an array field.
///
/// `Object` carries the field list of an inline object literal declared as
/// `{ ... }[]`. Every other item type is a leaf.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    String,
    Number,
    Boolean,
    Object(Vec<Field>),
    Unknown,
}

impl ItemType {
    pub fn type_name(&self) -> &'static str {
        match self {
            ItemType::String  => "string",
            ItemType::Number  => "number",
            ItemType::Boolean => "boolean",
            ItemType::Object(_) => "object",
            ItemType::Unknown => "unknown",
        }
    }
}

/// What a field holds. `item_type` only exists on arrays and `fields` only on
/// objects, so neither can be set on the wrong kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    Array {
        #[serde(rename = "itemType")]
        item_type: ItemType,
    },
    Object {
        fields: Vec<Field>,
    },
    Unknown,
}

impl FieldKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::String         => "string",
            FieldKind::Number         => "number",
            FieldKind::Boolean        => "boolean",
            FieldKind::Array { .. }   => "array",
            FieldKind::Object { .. }  => "object",
            FieldKind::Unknown        => "unknown",
        }
    }
}

/// One declared property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name:     String,
    #[serde(flatten)]
    pub kind:     FieldKind,
    pub required: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, required: bool, kind: FieldKind) -> Self {
        Field { name: name.into(), kind, required }
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// Item type when this field is an array.
    pub fn item_type(&self) -> Option<&ItemType> {
        match &self.kind {
            FieldKind::Array { item_type } => Some(item_type),
            _ => None,
        }
    }

    /// Children of an object field.
    pub fn fields(&self) -> Option<&[Field]> {
        match &self.kind {
            FieldKind::Object { fields } => Some(fields),
            _ => None,
        }
    }

    /// Children of an object field, or the entry fields of an array of objects.
    pub fn nested_fields(&self) -> Option<&[Field]> {
        match &self.kind {
            FieldKind::Object { fields } => Some(fields),
            FieldKind::Array { item_type: ItemType::Object(fields) } => Some(fields),
            _ => None,
        }
    }
}

/// The parse result for one type block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedSchema {
    pub name:   String,
    pub fields: Vec<Field>,
    /// Body text between the outer braces. Kept for diagnostics only.
    pub raw:    String,
}

impl NormalizedSchema {
    pub fn new(name: impl Into<String>, fields: Vec<Field>, raw: impl Into<String>) -> Self {
        NormalizedSchema {
            name:   name.into(),
            fields,
            raw:    raw.into(),
        }
    }

    /// Every field of the tree, depth-first in declaration order, paired with
    /// its dot path. Entry fields of an array of objects are reported under
    /// the array's own path.
    pub fn walk(&self) -> std::vec::IntoIter<(FieldPath, &Field)> {
        let mut out = Vec::new();
        walk_fields(&self.fields, &FieldPath::root(), &mut out);
        out.into_iter()
    }
}

fn walk_fields<'a>(fields: &'a [Field], parent: &FieldPath, out: &mut Vec<(FieldPath, &'a Field)>) {
    for field in fields {
        let path = parent.child(&field.name);
        out.push((path.clone(), field));
        if let Some(children) = field.nested_fields() {
            walk_fields(children, &path, out);
        }
    }
}
