use std::borrow::Cow;

use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTokenSpan;
use crate::token::GraphQLTokenValue;
use crate::SourcePosition;

/// A GraphQL token with its kind, decoded payload, and source span.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    /// The kind of token.
    pub kind: GraphQLTokenKind,

    /// The decoded payload (`None` for everything but literals and names).
    pub value: GraphQLTokenValue<'src>,

    /// The source location span of this token.
    pub span: GraphQLTokenSpan,
}

impl<'src> GraphQLToken<'src> {
    /// Convenience constructor for a token with no payload.
    pub fn new(kind: GraphQLTokenKind, span: GraphQLTokenSpan) -> Self {
        Self {
            kind,
            value: GraphQLTokenValue::None,
            span,
        }
    }

    /// Constructor for a token carrying a payload.
    pub fn with_value(
        kind: GraphQLTokenKind,
        value: GraphQLTokenValue<'src>,
        span: GraphQLTokenSpan,
    ) -> Self {
        Self { kind, value, span }
    }

    /// A zero-width `Eof` token at `position`.
    pub fn eof(position: SourcePosition) -> Self {
        Self::new(GraphQLTokenKind::Eof, GraphQLTokenSpan::empty_at(position))
    }

    /// Returns the text payload of a `Name` or `StringValue` token.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            GraphQLTokenValue::Text(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Takes the text payload of a `Name` or `StringValue` token.
    pub fn into_text(self) -> Option<Cow<'src, str>> {
        match self.value {
            GraphQLTokenValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the payload of an `IntValue` token.
    pub fn int_value(&self) -> Option<i32> {
        match self.value {
            GraphQLTokenValue::Int(i) => Some(i),
            _ => None,
        }
    }

    /// Returns the payload of a `FloatValue` token.
    pub fn float_value(&self) -> Option<f64> {
        match self.value {
            GraphQLTokenValue::Float(f) => Some(f),
            _ => None,
        }
    }

    /// Returns `true` if this is a `Name` token spelled exactly `keyword`.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == GraphQLTokenKind::Name && self.text() == Some(keyword)
    }

    /// Returns the start position of this token.
    pub fn position(&self) -> SourcePosition {
        self.span.start_inclusive
    }

    /// Renders this token the way diagnostics refer to it: the text of a
    /// `Name`, the spelling of a punctuator, or otherwise the kind name.
    pub fn describe(&self) -> String {
        match (self.kind, self.text()) {
            (GraphQLTokenKind::Name, Some(name)) => name.to_string(),
            (kind, _) => kind.to_string(),
        }
    }

    /// Detaches this token from the source text.
    pub fn into_owned(self) -> GraphQLToken<'static> {
        GraphQLToken {
            kind: self.kind,
            value: self.value.into_owned(),
            span: self.span,
        }
    }
}
