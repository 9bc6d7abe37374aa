//! A lexer and recursive descent parser for GraphQL executable documents
//! (operations and fragments).
//!
//! The lexer ([`token_source::StrGraphQLTokenSource`]) turns source text into
//! positioned [`token::GraphQLToken`]s one at a time; the parser
//! ([`GraphQLParser`]) consumes them into an owned [`ast::Document`]. Schema
//! (type-system) definitions are recognized and rejected with a descriptive
//! error.
//!
//! ```
//! use graphquery_parser::ast;
//! use graphquery_parser::parse_document;
//!
//! let doc = parse_document(r#"
//!     query getHobbits($book: Int!) {
//!       hobbits(book: $book) { id name }
//!     }
//! "#).unwrap();
//!
//! let op = doc.operations().next().unwrap();
//! assert_eq!(op.name.as_deref(), Some("getHobbits"));
//! assert_eq!(
//!     op.variables[0].type_annotation,
//!     ast::TypeAnnotation::non_null(ast::TypeAnnotation::named("Int")),
//! );
//! ```

pub mod ast;
mod definition_kind;
mod diagnostic;
mod expectation;
mod graphql_error;
mod graphql_error_note;
mod graphql_error_note_kind;
mod graphql_lex_error;
mod graphql_lex_error_kind;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_parser_options;
mod graphql_token_stream;
mod source_position;
pub mod token;
pub mod token_source;

pub use definition_kind::DefinitionKind;
pub use expectation::Expectation;
pub use graphql_error::GraphQLError;
pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_error_note_kind::GraphQLErrorNoteKind;
pub use graphql_lex_error::GraphQLLexError;
pub use graphql_lex_error_kind::GraphQLLexErrorKind;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::parse_document;
pub use graphql_parser::GraphQLParser;
pub use graphql_parser_options::GraphQLParserOptions;
pub use graphql_token_stream::GraphQLTokenStream;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;

#[cfg(test)]
mod tests;
