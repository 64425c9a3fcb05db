use shapegen_compiler::{compile_schema, CodegenConfig, ShapeError};
use shapegen_schema::NormalizedSchema;

use crate::files::{generate_files, GeneratedFiles};

#[derive(Debug)]
enum State {
    /// Blank input: nothing to show and nothing wrong.
    Empty,
    Ready {
        schema: NormalizedSchema,
        files:  GeneratedFiles,
    },
    Failed(ShapeError),
}

/// Latest parse result for a piece of text that keeps changing, such as an
/// editor buffer.
///
/// Every `update` replaces the previous schema outright. A failed parse
/// leaves no schema behind, only the error.
#[derive(Debug)]
pub struct Session {
    config: CodegenConfig,
    source: String,
    state:  State,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(CodegenConfig::default())
    }
}

impl Session {
    pub fn new(config: CodegenConfig) -> Self {
        Session {
            config,
            source: String::new(),
            state:  State::Empty,
        }
    }

    /// Replace the source text and re-run the pipeline.
    pub fn update(&mut self, text: &str) {
        self.source = text.to_string();
        self.state = if text.trim().is_empty() {
            State::Empty
        } else {
            match compile_schema(text) {
                Ok(schema) => {
                    let files = generate_files(&schema, &self.config);
                    State::Ready { schema, files }
                }
                Err(err) => {
                    tracing::debug!(error = %err, "session input failed to parse");
                    State::Failed(err)
                }
            }
        };
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    pub fn schema(&self) -> Option<&NormalizedSchema> {
        match &self.state {
            State::Ready { schema, .. } => Some(schema),
            _ => None,
        }
    }

    pub fn files(&self) -> Option<&GeneratedFiles> {
        match &self.state {
            State::Ready { files, .. } => Some(files),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ShapeError> {
        match &self.state {
            State::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.state, State::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::default();
        assert!(session.is_empty());
        assert!(session.schema().is_none());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_success_then_failure_discards_schema() {
        let mut session = Session::default();

        session.update("interface User { name: string }");
        assert_eq!(session.schema().map(|s| s.name.as_str()), Some("User"));
        assert_eq!(session.files().map(|f| f.len()), Some(3));
        assert!(session.error().is_none());

        session.update("interface User { name: string");
        assert!(session.schema().is_none());
        assert!(session.files().is_none());
        assert!(matches!(session.error(), Some(ShapeError::UnbalancedBraces { .. })));
        assert_eq!(session.source(), "interface User { name: string");
    }

    #[test]
    fn test_blank_input_clears_everything() {
        let mut session = Session::default();
        session.update("nothing here");
        assert!(session.error().is_some());

        session.update("  \n\t");
        assert!(session.is_empty());
        assert!(session.error().is_none());
        assert!(session.schema().is_none());
    }

    #[test]
    fn test_update_replaces_schema() {
        let mut session = Session::default();
        session.update("interface A { a: string }");
        session.update("interface B { b: number }");
        let schema = session.schema().unwrap();
        assert_eq!(schema.name, "B");
        assert_eq!(schema.fields.len(), 1);
    }
}
