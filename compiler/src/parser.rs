use lazy_static::lazy_static;
use regex::Regex;
use shapegen_schema::{Field, FieldKind, ItemType};

use crate::locator::matching_brace;

lazy_static! {
    static ref FIELD_HEAD: Regex = Regex::new(r"^([A-Za-z0-9_]+)\s*(\?)?\s*:").unwrap();
}

/// Parses the body of a type block into its ordered field list.
///
/// Parsing never fails. A line that does not start with `name:` or `name?:`
/// is dropped up to the next newline, and a type the parser does not
/// recognise becomes [`FieldKind::Unknown`]. Object literal types recurse into
/// this same routine.
pub fn parse_fields(block: &str) -> Vec<Field> {
    let mut fields = Vec::new();
    let len        = block.len();
    let mut index  = 0;

    while index < len {
        index = skip_whitespace(block, index);
        if index >= len {
            break;
        }

        let head = match FIELD_HEAD.captures(&block[index..]) {
            Some(caps) => caps,
            None => {
                let rest = &block[index..];
                match rest.find('\n') {
                    Some(newline) => {
                        tracing::trace!(line = rest[..newline].trim(), "skipping unrecognized field syntax");
                        index += newline + 1;
                        continue;
                    }
                    None => {
                        tracing::trace!(line = rest.trim(), "skipping unrecognized field syntax");
                        break;
                    }
                }
            }
        };

        let (name, head_end) = match (head.get(1), head.get(0)) {
            (Some(name), Some(whole)) => (name.as_str().to_string(), whole.end()),
            _ => break,
        };
        let required = head.get(2).is_none();

        index = skip_whitespace(block, index + head_end);

        if block[index..].starts_with('{') {
            // Object literal; an unterminated one takes the rest of the body.
            // Whatever follows the `}` (or `}[]`) on its line is not a field
            // head and is dropped by the recovery above.
            let close  = matching_brace(block, index).unwrap_or(len);
            let nested = parse_fields(&block[index + 1..close]);
            index = (close + 1).min(len);

            let after = skip_whitespace(block, index);
            let kind = if block[after..].starts_with("[]") {
                index = after + 2;
                FieldKind::Array { item_type: ItemType::Object(nested) }
            } else {
                FieldKind::Object { fields: nested }
            };

            fields.push(Field::new(name, required, kind));
            continue;
        }

        // Otherwise the type runs until `;` or the end of the line.
        let end = block[index..]
            .find(|c: char| c == ';' || c == '\n')
            .map(|offset| index + offset)
            .unwrap_or(len);
        let token = block[index..end].trim();
        index = (end + 1).min(len);

        fields.push(Field::new(name, required, classify_type(token)));
    }

    fields
}

/// Maps a declared type token to a field kind by exact match.
pub fn classify_type(token: &str) -> FieldKind {
    match token {
        "string"    => FieldKind::String,
        "number"    => FieldKind::Number,
        "boolean"   => FieldKind::Boolean,
        "string[]"  => FieldKind::Array { item_type: ItemType::String },
        "number[]"  => FieldKind::Array { item_type: ItemType::Number },
        "boolean[]" => FieldKind::Array { item_type: ItemType::Boolean },
        _           => FieldKind::Unknown,
    }
}

fn skip_whitespace(text: &str, from: usize) -> usize {
    match text[from..].find(|c: char| !c.is_whitespace()) {
        Some(offset) => from + offset,
        None         => text.len(),
    }
}
