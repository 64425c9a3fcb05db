use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No interface or type block found.")]
    NoTypeBlock,

    #[error("Malformed type block {name:?} at line {line}, column {column}: missing '{{'.")]
    MissingOpenBrace {
        name:   String,
        line:   usize,
        column: usize,
    },

    #[error("Malformed type block {name:?}: unbalanced braces, '{{' at line {line}, column {column} is never closed.")]
    UnbalancedBraces {
        name:   String,
        line:   usize,
        column: usize,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Validation failed with {0} issue(s)")]
    Validation(usize),

    #[error("Unknown sample {name:?}, expected one of: {known}")]
    UnknownSample {
        name:  String,
        known: String,
    },
}

impl ShapeError {
    /// True for the errors the locator raises on the user's source text.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            ShapeError::NoTypeBlock
                | ShapeError::MissingOpenBrace { .. }
                | ShapeError::UnbalancedBraces { .. }
        )
    }
}
