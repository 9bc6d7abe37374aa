use crate::token::GraphQLTokenKind;

/// One acceptable alternative listed by an unexpected-token error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// Any token of this kind.
    Token(GraphQLTokenKind),

    /// A `Name` token spelled exactly like this contextual keyword.
    Keyword(&'static str),
}

impl Expectation {
    /// Renders `expected` as a quoted, comma-separated list in order:
    /// `` `a` `` for one item, `` one of `a`, `b` `` for several.
    pub fn describe_all(expected: &[Expectation]) -> String {
        let quoted = expected
            .iter()
            .map(|e| format!("`{e}`"))
            .collect::<Vec<_>>()
            .join(", ");
        if expected.len() > 1 {
            format!("one of {quoted}")
        } else {
            quoted
        }
    }
}

impl std::fmt::Display for Expectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expectation::Token(kind) => write!(f, "{kind}"),
            Expectation::Keyword(keyword) => f.write_str(keyword),
        }
    }
}

impl From<GraphQLTokenKind> for Expectation {
    fn from(kind: GraphQLTokenKind) -> Self {
        Expectation::Token(kind)
    }
}
