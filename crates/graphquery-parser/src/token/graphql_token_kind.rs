/// The kind of a GraphQL token.
///
/// Kinds carry no payload; decoded literal values live in the token's
/// [`GraphQLTokenValue`](crate::token::GraphQLTokenValue). This keeps the kind
/// `Copy` so the parser can list expected kinds in error messages without
/// allocating.
///
/// Keyword-like words (`query`, `on`, `true`, `null`, ...) are always lexed
/// as [`Name`](GraphQLTokenKind::Name). Keyword recognition is contextual and
/// belongs to the parser.
///
/// # Negative Numeric Literals
///
/// Negative numbers like `-123` are lexed as single tokens (e.g.
/// `IntValue(-123)`), not as separate minus and number tokens.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTokenKind {
    // =========================================================================
    // Insignificant tokens (skipped by the parser)
    // =========================================================================
    /// A run of spaces/tabs, or a `#` comment.
    Whitespace,
    /// `\n`, `\r`, or `\r\n`.
    LineTerminator,
    /// Reserved for token sources that keep comments distinct from
    /// whitespace. `StrGraphQLTokenSource` lexes comments as `Whitespace`.
    Comment,
    /// `,`
    Comma,

    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `[`
    SquareBracketOpen,
    /// `]`
    SquareBracketClose,
    /// `{`
    CurlyBraceOpen,
    /// `}`
    CurlyBraceClose,
    /// `|`
    Pipe,
    /// `...`
    Ellipsis,

    // =========================================================================
    // Literals
    // =========================================================================
    /// A GraphQL name/identifier: `[_A-Za-z][_0-9A-Za-z]*`.
    Name,
    /// A 32-bit signed integer literal.
    IntValue,
    /// A 64-bit float literal (has a fractional part and/or an exponent).
    FloatValue,
    /// A simple or block string literal, already unescaped/normalized.
    StringValue,

    // =========================================================================
    // End of input
    // =========================================================================
    /// End of input. Never produced by `StrGraphQLTokenSource` itself; the
    /// token stream synthesizes it once the source is exhausted.
    Eof,
}

impl GraphQLTokenKind {
    /// Returns `true` for kinds the parser skips between significant tokens.
    pub fn is_insignificant(&self) -> bool {
        match self {
            GraphQLTokenKind::Whitespace
            | GraphQLTokenKind::LineTerminator
            | GraphQLTokenKind::Comment
            | GraphQLTokenKind::Comma => true,

            GraphQLTokenKind::Bang
            | GraphQLTokenKind::Dollar
            | GraphQLTokenKind::ParenOpen
            | GraphQLTokenKind::ParenClose
            | GraphQLTokenKind::Colon
            | GraphQLTokenKind::Equals
            | GraphQLTokenKind::At
            | GraphQLTokenKind::SquareBracketOpen
            | GraphQLTokenKind::SquareBracketClose
            | GraphQLTokenKind::CurlyBraceOpen
            | GraphQLTokenKind::CurlyBraceClose
            | GraphQLTokenKind::Pipe
            | GraphQLTokenKind::Ellipsis
            | GraphQLTokenKind::Name
            | GraphQLTokenKind::IntValue
            | GraphQLTokenKind::FloatValue
            | GraphQLTokenKind::StringValue
            | GraphQLTokenKind::Eof => false,
        }
    }

    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns the string representation of this token if it is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            GraphQLTokenKind::Bang => Some("!"),
            GraphQLTokenKind::Dollar => Some("$"),
            GraphQLTokenKind::ParenOpen => Some("("),
            GraphQLTokenKind::ParenClose => Some(")"),
            GraphQLTokenKind::Colon => Some(":"),
            GraphQLTokenKind::Equals => Some("="),
            GraphQLTokenKind::At => Some("@"),
            GraphQLTokenKind::SquareBracketOpen => Some("["),
            GraphQLTokenKind::SquareBracketClose => Some("]"),
            GraphQLTokenKind::CurlyBraceOpen => Some("{"),
            GraphQLTokenKind::CurlyBraceClose => Some("}"),
            GraphQLTokenKind::Pipe => Some("|"),
            GraphQLTokenKind::Ellipsis => Some("..."),

            GraphQLTokenKind::Whitespace
            | GraphQLTokenKind::LineTerminator
            | GraphQLTokenKind::Comment
            | GraphQLTokenKind::Comma
            | GraphQLTokenKind::Name
            | GraphQLTokenKind::IntValue
            | GraphQLTokenKind::FloatValue
            | GraphQLTokenKind::StringValue
            | GraphQLTokenKind::Eof => None,
        }
    }

    /// Returns the kind's name as used in diagnostics (e.g. `"IntValue"`).
    pub fn name(&self) -> &'static str {
        match self {
            GraphQLTokenKind::Whitespace => "Whitespace",
            GraphQLTokenKind::LineTerminator => "LineTerminator",
            GraphQLTokenKind::Comment => "Comment",
            GraphQLTokenKind::Comma => "Comma",
            GraphQLTokenKind::Bang => "Bang",
            GraphQLTokenKind::Dollar => "Dollar",
            GraphQLTokenKind::ParenOpen => "ParenOpen",
            GraphQLTokenKind::ParenClose => "ParenClose",
            GraphQLTokenKind::Colon => "Colon",
            GraphQLTokenKind::Equals => "Equals",
            GraphQLTokenKind::At => "At",
            GraphQLTokenKind::SquareBracketOpen => "SquareBracketOpen",
            GraphQLTokenKind::SquareBracketClose => "SquareBracketClose",
            GraphQLTokenKind::CurlyBraceOpen => "CurlyBraceOpen",
            GraphQLTokenKind::CurlyBraceClose => "CurlyBraceClose",
            GraphQLTokenKind::Pipe => "Pipe",
            GraphQLTokenKind::Ellipsis => "Ellipsis",
            GraphQLTokenKind::Name => "Name",
            GraphQLTokenKind::IntValue => "IntValue",
            GraphQLTokenKind::FloatValue => "FloatValue",
            GraphQLTokenKind::StringValue => "StringValue",
            GraphQLTokenKind::Eof => "Eof",
        }
    }
}

/// Renders punctuators by their spelling, `Eof` as `end of input`, and every
/// other kind by its [name](GraphQLTokenKind::name).
impl std::fmt::Display for GraphQLTokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self, self.as_punctuator_str()) {
            (_, Some(punctuator)) => f.write_str(punctuator),
            (GraphQLTokenKind::Eof, None) => f.write_str("end of input"),
            (kind, None) => f.write_str(kind.name()),
        }
    }
}
