use crate::SourcePosition;

/// Represents the span of a token from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
/// - `start_inclusive`: Position of the first character of the token
/// - `end_exclusive`: Position immediately after the last character of the token
///
/// Fields are public to allow third-party `GraphQLTokenSource` implementations
/// to easily construct spans directly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphQLTokenSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl GraphQLTokenSpan {
    pub fn new(start_inclusive: SourcePosition, end_exclusive: SourcePosition) -> Self {
        Self {
            start_inclusive,
            end_exclusive,
        }
    }

    /// A zero-width span at `position`.
    pub fn empty_at(position: SourcePosition) -> Self {
        Self::new(position, position)
    }
}

impl std::fmt::Display for GraphQLTokenSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start_inclusive, self.end_exclusive)
    }
}
