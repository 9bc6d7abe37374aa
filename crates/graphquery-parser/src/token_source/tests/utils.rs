//! Helpers shared by the lexer tests.

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;
use crate::GraphQLLexError;

/// Lexes `source` and returns only the significant tokens. Panics on a lexer
/// error.
pub(super) fn significant_tokens(source: &str) -> Vec<GraphQLToken<'_>> {
    StrGraphQLTokenSource::new(source)
        .map(|result| result.unwrap_or_else(|e| panic!("lex error: {e}")))
        .filter(|token| !token.kind.is_insignificant())
        .collect()
}

pub(super) fn significant_kinds(source: &str) -> Vec<GraphQLTokenKind> {
    significant_tokens(source).iter().map(|token| token.kind).collect()
}

/// Lexes `source` expecting it to be a single significant token.
pub(super) fn single_token(source: &str) -> GraphQLToken<'_> {
    let mut tokens = significant_tokens(source);
    assert_eq!(tokens.len(), 1, "expected exactly one token in {source:?}: {tokens:?}");
    tokens.remove(0)
}

/// Lexes `source` until the first error and returns it. Panics if lexing
/// succeeds.
pub(super) fn lex_error(source: &str) -> GraphQLLexError {
    for result in StrGraphQLTokenSource::new(source) {
        if let Err(error) = result {
            return error;
        }
    }
    panic!("expected a lex error for {source:?}");
}
