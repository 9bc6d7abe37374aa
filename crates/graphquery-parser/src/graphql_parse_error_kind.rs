use crate::DefinitionKind;
use crate::Expectation;

/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// Human-readable context (suggestions, explanations) belongs in the
/// `notes` field of `GraphQLParseError`.
///
/// The `#[error(...)]` messages are concise/programmatic. Full human-readable
/// messages are in `GraphQLParseError.message`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// # Example
    /// ```text
    /// query { user(id 4) }
    ///                 ^ unexpected `IntValue`, expected `:`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        /// The acceptable alternatives, in the order they were considered.
        expected: Vec<Expectation>,
        /// The offending token as rendered by `GraphQLToken::describe()`.
        found: String,
    },

    /// The document ended before a complete construct was parsed.
    ///
    /// # Example
    /// ```text
    /// query { user {
    ///               ^ unexpected end of document, expected one of `}`, ...
    /// ```
    #[error("unexpected end of document")]
    UnexpectedEof {
        /// What was expected when the end of input was encountered.
        expected: Vec<Expectation>,
    },

    /// A schema (type-system) definition, which this parser does not accept.
    ///
    /// # Example
    /// ```text
    /// type User { name: String }
    /// ^^^^ type definitions aren't supported
    /// ```
    #[error("unsupported definition: {found}")]
    UnsupportedDefinition {
        /// What kind of definition was found.
        found: DefinitionKind,
    },

    /// Types, values, or selection sets nested deeper than the parser's
    /// configured maximum.
    #[error("max recursion depth exceeded")]
    RecursionLimitExceeded {
        /// The configured maximum depth.
        max_depth: usize,
    },

    /// Empty construct that the parser was configured to reject.
    ///
    /// # Example
    /// ```text
    /// query { user { } }
    ///              ^^^ selection set cannot be empty
    /// ```
    #[error("invalid empty construct: `{construct}`")]
    InvalidEmptyConstruct {
        /// What construct is empty (e.g., `"selection set"`).
        construct: String,
    },
}
