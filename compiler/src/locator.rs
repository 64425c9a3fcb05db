use lazy_static::lazy_static;
use regex::Regex;

use crate::{error::ShapeError, utils::line_column};

lazy_static! {
    static ref TYPE_BLOCK:  Regex = Regex::new(r"\b(interface|type)\s+([A-Za-z0-9_]+)\s*=?\s*\{").unwrap();
    // A declaration line that stops before its `{`. Prose that merely uses the
    // words "type" or "interface" does not match.
    static ref TYPE_HEADER: Regex = Regex::new(r"(?m)^[ \t]*(?:export[ \t]+)?(?:declare[ \t]+)?(interface|type)[ \t]+([A-Za-z0-9_]+)[ \t]*=?[ \t]*\r?$").unwrap();
}

/// The first type declaration found in a piece of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeBlock<'a> {
    pub name:       &'a str,
    /// Trimmed text strictly between the outer braces.
    pub body:       &'a str,
    /// Byte offset of the opening brace.
    pub open_brace: usize,
}

/// Finds the first `interface Name {` or `type Name = {` declaration and
/// returns its name and brace body. Later declarations are ignored.
pub fn locate_type_block(text: &str) -> Result<TypeBlock<'_>, ShapeError> {
    let caps = match TYPE_BLOCK.captures(text) {
        Some(caps) => caps,
        None => return Err(missing_block(text)),
    };

    let (whole, name) = match (caps.get(0), caps.get(2)) {
        (Some(whole), Some(name)) => (whole, name.as_str()),
        _ => return Err(ShapeError::NoTypeBlock),
    };

    // The pattern ends with the brace.
    let open_brace = whole.end() - 1;
    let close_brace = match matching_brace(text, open_brace) {
        Some(close) => close,
        None => {
            let (line, column) = line_column(text, open_brace);
            return Err(ShapeError::UnbalancedBraces {
                name: name.to_string(),
                line,
                column,
            });
        }
    };

    Ok(TypeBlock {
        name,
        body: text[open_brace + 1..close_brace].trim(),
        open_brace,
    })
}

/// Byte offset of the `}` that closes the `{` at `open`, counting nesting
/// depth. `None` when the text ends first.
pub fn matching_brace(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, byte) in text.as_bytes().iter().enumerate().skip(open) {
        match *byte {
            b'{' => depth += 1,
            b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(offset);
                }
            }
            _ => {}
        }
    }
    None
}

fn missing_block(text: &str) -> ShapeError {
    match TYPE_HEADER.captures(text).and_then(|caps| caps.get(2)) {
        Some(name) => {
            let (line, column) = line_column(text, name.end());
            ShapeError::MissingOpenBrace {
                name: name.as_str().to_string(),
                line,
                column,
            }
        }
        None => ShapeError::NoTypeBlock,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_interface() {
        let block = locate_type_block("export interface User {\n  name: string;\n}\n").unwrap();
        assert_eq!(block.name, "User");
        assert_eq!(block.body, "name: string;");
        assert_eq!(block.open_brace, 22);
    }

    #[test]
    fn test_locate_type_alias() {
        let block = locate_type_block("type Point = { x: number; y: number }").unwrap();
        assert_eq!(block.name, "Point");
        assert_eq!(block.body, "x: number; y: number");
    }

    #[test]
    fn test_only_first_declaration_is_used() {
        let text = "interface A { a: string }\ninterface B { b: number }";
        let block = locate_type_block(text).unwrap();
        assert_eq!(block.name, "A");
        assert_eq!(block.body, "a: string");
    }

    #[test]
    fn test_nested_braces_are_balanced() {
        let text = "interface A { geo: { lat: number; inner: { x: number } } } trailing }";
        let block = locate_type_block(text).unwrap();
        assert_eq!(block.body, "geo: { lat: number; inner: { x: number } }");
    }

    #[test]
    fn test_keyword_must_start_a_word() {
        let err = locate_type_block("subtype Foo { a: string }").unwrap_err();
        assert!(matches!(err, ShapeError::NoTypeBlock), "got {:?}", err);
    }

    #[test]
    fn test_no_type_block() {
        let err = locate_type_block("const x = { a: 1 };").unwrap_err();
        assert!(matches!(err, ShapeError::NoTypeBlock));
        assert!(err.to_string().contains("No interface or type block found"));
    }

    #[test]
    fn test_missing_open_brace() {
        let err = locate_type_block("interface User\n").unwrap_err();
        match err {
            ShapeError::MissingOpenBrace { name, line, column } => {
                assert_eq!(name, "User");
                assert_eq!((line, column), (1, 15));
            }
            other => panic!("expected MissingOpenBrace, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_open_brace_on_exported_alias() {
        let err = locate_type_block("// user model
export type User =
").unwrap_err();
        match err {
            ShapeError::MissingOpenBrace { name, line, column } => {
                assert_eq!(name, "User");
                assert_eq!((line, column), (2, 17));
            }
            other => panic!("expected MissingOpenBrace, got {:?}", other),
        }
    }

    #[test]
    fn test_prose_mentioning_type_is_not_a_header() {
        for text in [
            "Paste any type here to get started.",
            "This interface describes a user",
            "type Alias = string;",
            "interface Foo extends Bar",
        ] {
            let err = locate_type_block(text).unwrap_err();
            assert!(matches!(err, ShapeError::NoTypeBlock), "{:?} gave {:?}", text, err);
        }
    }

    #[test]
    fn test_unbalanced_braces() {
        let err = locate_type_block("\ninterface User {\n  name: string;\n  geo: {\n").unwrap_err();
        match err {
            ShapeError::UnbalancedBraces { name, line, column } => {
                assert_eq!(name, "User");
                assert_eq!((line, column), (2, 16));
            }
            other => panic!("expected UnbalancedBraces, got {:?}", other),
        }
    }

    #[test]
    fn test_matching_brace() {
        assert_eq!(matching_brace("{a{b}c}", 0), Some(6));
        assert_eq!(matching_brace("{a{b}c}", 2), Some(4));
        assert_eq!(matching_brace("{a{b}", 0), None);
    }
}
