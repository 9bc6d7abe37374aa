use crate::token::GraphQLToken;
use crate::GraphQLLexError;

/// Marker trait for [`GraphQLToken`] lexers (iterators that generate
/// `Result<GraphQLToken, GraphQLLexError>`).
///
/// This trait enables extensibility over different sources of GraphQL text to
/// be parsed. [`StrGraphQLTokenSource`](crate::token_source::StrGraphQLTokenSource)
/// is the lexer over `&str`; tests drive the parser from hand-built token
/// vectors through the same seam.
///
/// Implementors define an [`Iterator`] that produces tokens one at a time.
/// Lookahead and filtering of insignificant tokens is handled by
/// `GraphQLTokenStream`.
///
/// Lexers are responsible for:
/// - Emitting every token, including insignificant ones (whitespace, line
///   terminators, comments, commas)
/// - Yielding `Err` for the first lexer error and nothing afterwards
/// - Returning `None` at end of input (no `Eof` token is required; the
///   token stream synthesizes one)
///
/// # Lifetime Parameter
///
/// The `'src` lifetime represents the source text that tokens are lexed from.
/// For string-based lexers, this enables zero-copy lexing where token values
/// can borrow directly from the input. Sources that must allocate strings use
/// `'static`.
pub trait GraphQLTokenSource<'src>:
    Iterator<Item = Result<GraphQLToken<'src>, GraphQLLexError>>
{
}

impl<'src, T> GraphQLTokenSource<'src> for T where
    T: Iterator<Item = Result<GraphQLToken<'src>, GraphQLLexError>>
{
}
