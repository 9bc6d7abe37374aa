use crate::diagnostic;
use crate::Expectation;
use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseErrorKind;
use crate::SourcePosition;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTokenSpan;

/// A parse error with location information and contextual notes.
///
/// This structure provides comprehensive error information for both
/// human-readable CLI output and programmatic handling by tools.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLParseError {
    /// Human-readable primary error message.
    ///
    /// Examples: "unexpected `}`, expected `Name`",
    /// "type definitions aren't supported"
    message: String,

    /// The primary span where the error was detected.
    ///
    /// - For "unexpected token" errors: the unexpected token's span
    /// - For end-of-document errors: a zero-width span at the end of input
    span: GraphQLTokenSpan,

    /// Categorized error kind for programmatic handling.
    kind: GraphQLParseErrorKind,

    /// Additional notes providing context, suggestions, and related locations.
    notes: GraphQLErrorNotes,
}

impl GraphQLParseError {
    /// Creates a new parse error with no notes.
    pub fn new(
        message: impl Into<String>,
        span: GraphQLTokenSpan,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: GraphQLErrorNotes::new(),
        }
    }

    /// Creates an "unexpected token" error for `found`, listing the
    /// acceptable alternatives in order.
    ///
    /// A `found` token of kind `Eof` produces an
    /// [`UnexpectedEof`](GraphQLParseErrorKind::UnexpectedEof) error instead.
    pub fn unexpected(found: &GraphQLToken<'_>, expected: Vec<Expectation>) -> Self {
        let expected_desc = Expectation::describe_all(&expected);
        if found.kind == GraphQLTokenKind::Eof {
            return Self::new(
                format!("unexpected end of document, expected {expected_desc}"),
                found.span,
                GraphQLParseErrorKind::UnexpectedEof { expected },
            );
        }
        let found_desc = found.describe();
        Self::new(
            format!("unexpected `{found_desc}`, expected {expected_desc}"),
            found.span,
            GraphQLParseErrorKind::UnexpectedToken {
                expected,
                found: found_desc,
            },
        )
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the position where the error was detected.
    pub fn position(&self) -> SourcePosition {
        self.span.start_inclusive
    }

    /// Returns the primary span where the error was detected.
    pub fn span(&self) -> &GraphQLTokenSpan {
        &self.span
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &GraphQLParseErrorKind {
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
    /// Produces output like:
    /// ```text
    /// error: type definitions aren't supported
    ///   --> 1:1
    ///    |
    ///  1 | type Foo { bar: Int }
    ///    | ^^^^
    ///    = help: only executable documents (operations and fragments) can be parsed
    /// ```
    ///
    /// # Arguments
    /// - `source`: Optional source text for snippet extraction. If `None`,
    ///   snippets are omitted but line/column info is still shown.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        diagnostic::format_detailed(&self.message, &self.span, &self.notes, source)
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// 5:12: error: unexpected `String`, expected `:`
    /// ```
    pub fn format_oneline(&self) -> String {
        diagnostic::format_oneline(&self.message, &self.span)
    }
}
