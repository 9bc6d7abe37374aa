//! This module provides the core token types produced by GraphQL lexers and
//! consumed by the parser.

mod graphql_token;
mod graphql_token_kind;
mod graphql_token_span;
mod graphql_token_value;

pub use graphql_token::GraphQLToken;
pub use graphql_token_kind::GraphQLTokenKind;
pub use graphql_token_span::GraphQLTokenSpan;
pub use graphql_token_value::GraphQLTokenValue;

#[cfg(test)]
mod tests;
