use std::borrow::Cow;

/// The decoded payload carried by a [`GraphQLToken`](crate::token::GraphQLToken).
///
/// Exactly one payload shape applies per token kind:
///
/// | Kind | Payload |
/// |---|---|
/// | `Name`, `StringValue` | `Text` |
/// | `IntValue` | `Int` |
/// | `FloatValue` | `Float` |
/// | everything else | `None` |
///
/// # Lifetime Parameter
///
/// The `'src` lifetime enables zero-copy lexing: names and escape-free strings
/// borrow directly from the source text via `Cow::Borrowed`. Strings that
/// required unescaping or block-string normalization are `Cow::Owned`.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenValue<'src> {
    None,
    Text(Cow<'src, str>),
    Int(i32),
    Float(f64),
}

impl<'src> GraphQLTokenValue<'src> {
    /// Create a `Text` payload from a borrowed string slice (zero-copy).
    #[inline]
    pub fn text_borrowed(s: &'src str) -> Self {
        GraphQLTokenValue::Text(Cow::Borrowed(s))
    }

    /// Create a `Text` payload from an owned `String`.
    #[inline]
    pub fn text_owned(s: String) -> Self {
        GraphQLTokenValue::Text(Cow::Owned(s))
    }

    /// Detaches the payload from the source text.
    pub fn into_owned(self) -> GraphQLTokenValue<'static> {
        match self {
            GraphQLTokenValue::None => GraphQLTokenValue::None,
            GraphQLTokenValue::Text(s) => GraphQLTokenValue::Text(Cow::Owned(s.into_owned())),
            GraphQLTokenValue::Int(i) => GraphQLTokenValue::Int(i),
            GraphQLTokenValue::Float(f) => GraphQLTokenValue::Float(f),
        }
    }
}

impl std::fmt::Display for GraphQLTokenValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphQLTokenValue::None => Ok(()),
            GraphQLTokenValue::Text(s) => write!(f, "{s:?}"),
            GraphQLTokenValue::Int(i) => write!(f, "{i}"),
            GraphQLTokenValue::Float(v) => write!(f, "{v:?}"),
        }
    }
}
