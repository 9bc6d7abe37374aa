use crate::diagnostic;
use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLLexErrorKind;
use crate::SourcePosition;
use crate::token::GraphQLTokenSpan;

/// A lexer error with location information and contextual notes.
///
/// Lexing cannot recover mid-token, so a token source stops at the first
/// `GraphQLLexError` it produces.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLLexError {
    /// Human-readable primary error message.
    message: String,

    /// Where the error was detected. Starts at the offending character (or at
    /// the end of input when input ended early).
    span: GraphQLTokenSpan,

    /// Categorized error kind for programmatic handling.
    kind: GraphQLLexErrorKind,

    /// Additional notes providing context and suggestions.
    notes: GraphQLErrorNotes,
}

impl GraphQLLexError {
    /// Creates a new lexer error with no notes.
    pub fn new(
        message: impl Into<String>,
        span: GraphQLTokenSpan,
        kind: GraphQLLexErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: GraphQLErrorNotes::new(),
        }
    }

    /// Creates a new lexer error with notes.
    pub fn with_notes(
        message: impl Into<String>,
        span: GraphQLTokenSpan,
        kind: GraphQLLexErrorKind,
        notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes,
        }
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the position where the error was detected.
    pub fn position(&self) -> SourcePosition {
        self.span.start_inclusive
    }

    /// Returns the span where the error was detected.
    pub fn span(&self) -> &GraphQLTokenSpan {
        &self.span
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &GraphQLLexErrorKind {
        &self.kind
    }

    /// Returns the additional notes for this error.
    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    /// Adds a help note without a span.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::help(message));
    }

    /// Formats this error as a diagnostic string for CLI output.
    ///
    /// `source` enables the source snippet; without it only the message,
    /// location, and notes are rendered.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        diagnostic::format_detailed(&self.message, &self.span, &self.notes, source)
    }

    /// Formats this error as a single-line summary:
    /// ```text
    /// 1:7: error: unknown character `%`
    /// ```
    pub fn format_oneline(&self) -> String {
        diagnostic::format_oneline(&self.message, &self.span)
    }
}
