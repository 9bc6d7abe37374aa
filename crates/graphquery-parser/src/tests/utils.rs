//! Various test utils.

use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTokenSpan;
use crate::token::GraphQLTokenValue;
use crate::GraphQLError;
use crate::GraphQLLexError;
use crate::GraphQLParseError;
use crate::GraphQLParser;
use crate::GraphQLParserOptions;
use crate::SourcePosition;

/// Creates a mock token of `kind` occupying column `column` (one character
/// wide) on line 1.
pub fn mock_token_at(kind: GraphQLTokenKind, column: usize) -> GraphQLToken<'static> {
    GraphQLToken::new(kind, mock_span(column))
}

pub fn mock_span(column: usize) -> GraphQLTokenSpan {
    GraphQLTokenSpan::new(
        SourcePosition::new(1, column, column - 1),
        SourcePosition::new(1, column + 1, column),
    )
}

/// Creates a mock token of `kind` with a dummy position.
pub fn mock_token(kind: GraphQLTokenKind) -> GraphQLToken<'static> {
    mock_token_at(kind, 1)
}

/// Creates a mock Name token with the given name.
pub fn mock_name_token(name: &str) -> GraphQLToken<'static> {
    GraphQLToken::with_value(
        GraphQLTokenKind::Name,
        GraphQLTokenValue::text_owned(name.to_string()),
        mock_span(1),
    )
}

pub fn mock_int_token(value: i32) -> GraphQLToken<'static> {
    GraphQLToken::with_value(GraphQLTokenKind::IntValue, GraphQLTokenValue::Int(value), mock_span(1))
}

/// A mock token source that produces tokens (or errors) from a Vec.
///
/// Uses `'static` lifetime since mock tokens use owned strings.
pub struct MockTokenSource {
    tokens: std::vec::IntoIter<Result<GraphQLToken<'static>, GraphQLLexError>>,
}

impl MockTokenSource {
    pub fn new(tokens: Vec<GraphQLToken<'static>>) -> Self {
        Self::from_results(tokens.into_iter().map(Ok).collect())
    }

    pub fn from_results(tokens: Vec<Result<GraphQLToken<'static>, GraphQLLexError>>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = Result<GraphQLToken<'static>, GraphQLLexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

/// Parses `source` with default options, panicking on error.
pub(super) fn parse_ok(source: &str) -> ast::Document {
    GraphQLParser::new(source)
        .parse()
        .unwrap_or_else(|e| panic!("failed to parse {source:?}:\n{}", e.format_detailed(Some(source))))
}

/// Parses `source` and returns the error, panicking if parsing succeeds.
pub(super) fn parse_err(source: &str) -> GraphQLError {
    parse_err_with(source, GraphQLParserOptions::default())
}

pub(super) fn parse_err_with(source: &str, options: GraphQLParserOptions) -> GraphQLError {
    match GraphQLParser::new(source).with_options(options).parse() {
        Ok(doc) => panic!("expected {source:?} to fail, got {doc:?}"),
        Err(error) => error,
    }
}

/// Like [`parse_err`], but also requires a parser (not lexer) error.
pub(super) fn parse_error(source: &str) -> GraphQLParseError {
    match parse_err(source) {
        GraphQLError::Parse(error) => error,
        GraphQLError::Lex(error) => panic!("expected a parse error, got lex error: {error}"),
    }
}

/// Returns the single operation in `source`.
pub(super) fn single_operation(source: &str) -> ast::OperationDefinition {
    let doc = parse_ok(source);
    assert_eq!(doc.definitions.len(), 1, "{doc:?}");
    match doc.definitions.into_iter().next() {
        Some(ast::Definition::Operation(op)) => op,
        other => panic!("expected an operation, got {other:?}"),
    }
}

/// Returns the `index`th selection of the single operation in `source`.
pub(super) fn top_level_selection(source: &str, index: usize) -> ast::Selection {
    single_operation(source).selection_set.items.swap_remove(index)
}

/// Returns the first top-level field of the single operation in `source`.
pub(super) fn first_field(source: &str) -> ast::Field {
    match top_level_selection(source, 0) {
        ast::Selection::Field(field) => field,
        other => panic!("expected a field, got {other:?}"),
    }
}

/// Parses `{ f(arg: <value_source>) }` and returns the argument value.
pub(super) fn arg_value(value_source: &str) -> ast::Value {
    let mut field = first_field(&format!("{{ f(arg: {value_source}) }}"));
    assert_eq!(field.arguments.len(), 1);
    field.arguments.remove(0).value
}
