use crate::GraphQLErrorNoteKind;
use crate::SmallVec;
use crate::token::GraphQLTokenSpan;

/// Extra context attached to a lexer or parser error, rendered below the
/// primary message by `format_detailed`.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLErrorNote {
    pub kind: GraphQLErrorNoteKind,
    pub message: String,

    /// A related location, e.g. the opening quote of an unterminated string.
    pub span: Option<GraphQLTokenSpan>,
}

impl GraphQLErrorNote {
    fn new(
        kind: GraphQLErrorNoteKind,
        message: impl Into<String>,
        span: Option<GraphQLTokenSpan>,
    ) -> Self {
        Self { kind, message: message.into(), span }
    }

    /// A `note:` pointing at a related location.
    pub fn general_with_span(message: impl Into<String>, span: GraphQLTokenSpan) -> Self {
        Self::new(GraphQLErrorNoteKind::General, message, Some(span))
    }

    /// A `help:` suggestion.
    pub fn help(message: impl Into<String>) -> Self {
        Self::new(GraphQLErrorNoteKind::Help, message, None)
    }

    /// A `spec:` link to the relevant section of the GraphQL specification.
    pub fn spec(url: impl Into<String>) -> Self {
        Self::new(GraphQLErrorNoteKind::Spec, url, None)
    }
}

/// Notes carried by an error. Most errors have none, a few have one or two.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
