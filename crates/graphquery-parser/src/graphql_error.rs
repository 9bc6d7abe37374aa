use crate::GraphQLErrorNotes;
use crate::GraphQLLexError;
use crate::GraphQLParseError;
use crate::SourcePosition;

/// Any error that aborts a parse: either the lexer rejected the input or the
/// parser rejected the token sequence.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLError {
    #[error(transparent)]
    Lex(#[from] GraphQLLexError),

    #[error(transparent)]
    Parse(#[from] GraphQLParseError),
}

impl GraphQLError {
    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        match self {
            GraphQLError::Lex(e) => e.message(),
            GraphQLError::Parse(e) => e.message(),
        }
    }

    /// Returns the position where the error was detected.
    pub fn position(&self) -> SourcePosition {
        match self {
            GraphQLError::Lex(e) => e.position(),
            GraphQLError::Parse(e) => e.position(),
        }
    }

    /// Returns the additional notes for this error.
    pub fn notes(&self) -> &GraphQLErrorNotes {
        match self {
            GraphQLError::Lex(e) => e.notes(),
            GraphQLError::Parse(e) => e.notes(),
        }
    }

    /// See [`GraphQLParseError::format_detailed`].
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        match self {
            GraphQLError::Lex(e) => e.format_detailed(source),
            GraphQLError::Parse(e) => e.format_detailed(source),
        }
    }

    /// See [`GraphQLParseError::format_oneline`].
    pub fn format_oneline(&self) -> String {
        match self {
            GraphQLError::Lex(e) => e.format_oneline(),
            GraphQLError::Parse(e) => e.format_oneline(),
        }
    }
}
