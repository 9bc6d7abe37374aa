/// Categorizes lexer errors for programmatic handling.
///
/// The `#[error(...)]` messages are concise/programmatic. Full human-readable
/// messages are in `GraphQLLexError.message`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphQLLexErrorKind {
    /// A character that cannot start any token.
    #[error("unknown character: {0:?}")]
    UnknownCharacter(char),

    /// One or two dots where `...` was required.
    #[error("malformed ellipsis")]
    InvalidEllipsis,

    /// A malformed numeric literal: leading zeros, missing fractional or
    /// exponent digits, a bare `-`, or a value out of range.
    #[error("invalid number: `{text}`")]
    InvalidNumber {
        /// The offending source text scanned so far.
        text: String,
    },

    /// End of input inside a simple string.
    #[error("unterminated string")]
    UnterminatedString,

    /// End of input inside a block string.
    #[error("unterminated block string")]
    UnterminatedBlockString,

    /// A raw line terminator inside a simple (non-block) string.
    #[error("unexpected newline in string")]
    UnexpectedNewlineInString,

    /// An unknown escape or a malformed `\u` escape.
    #[error("invalid escape sequence: `{0}`")]
    InvalidEscapeSequence(String),
}
