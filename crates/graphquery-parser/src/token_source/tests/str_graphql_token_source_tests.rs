//! Tests for token classification by [`StrGraphQLTokenSource`].

use std::borrow::Cow;

use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTokenValue;
use crate::token_source::tests::utils::significant_kinds;
use crate::token_source::tests::utils::single_token;
use crate::token_source::StrGraphQLTokenSource;

/// Every single-character punctuator maps to its own kind.
#[test]
fn lexes_punctuators() {
    assert_eq!(
        significant_kinds("! $ ( ) : = @ [ ] { } | ..."),
        vec![
            GraphQLTokenKind::Bang,
            GraphQLTokenKind::Dollar,
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::ParenClose,
            GraphQLTokenKind::Colon,
            GraphQLTokenKind::Equals,
            GraphQLTokenKind::At,
            GraphQLTokenKind::SquareBracketOpen,
            GraphQLTokenKind::SquareBracketClose,
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::CurlyBraceClose,
            GraphQLTokenKind::Pipe,
            GraphQLTokenKind::Ellipsis,
        ],
    );
}

/// Insignificant tokens are still produced by the token source itself.
#[test]
fn emits_insignificant_tokens() {
    let kinds = StrGraphQLTokenSource::new("a, b\n# note\r\nc")
        .map(|result| result.unwrap().kind)
        .collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::Name,
            GraphQLTokenKind::Comma,
            GraphQLTokenKind::Whitespace,
            GraphQLTokenKind::Name,
            GraphQLTokenKind::LineTerminator,
            GraphQLTokenKind::Whitespace,
            GraphQLTokenKind::LineTerminator,
            GraphQLTokenKind::Name,
        ],
    );
}

/// Adjacent spaces and tabs collapse into one `Whitespace` token.
#[test]
fn whitespace_runs_are_one_token() {
    let kinds = StrGraphQLTokenSource::new(" \t \ta")
        .map(|result| result.unwrap().kind)
        .collect::<Vec<_>>();
    assert_eq!(kinds, vec![GraphQLTokenKind::Whitespace, GraphQLTokenKind::Name]);
}

/// Comments run to the end of the line and are classified as whitespace.
#[test]
fn comments_are_whitespace() {
    let tokens = StrGraphQLTokenSource::new("# { not a brace }\nx")
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(tokens[0].kind, GraphQLTokenKind::Whitespace);
    assert_eq!(tokens[0].span.end_exclusive.column(), 18);
    assert_eq!(tokens[0].value, GraphQLTokenValue::None);
    assert_eq!(tokens[1].kind, GraphQLTokenKind::LineTerminator);
    assert_eq!(tokens[2].text(), Some("x"));
}

#[test]
fn byte_order_mark_is_whitespace() {
    assert_eq!(significant_kinds("\u{FEFF}query"), vec![GraphQLTokenKind::Name]);
}

/// Names take the longest match, and keywords are plain names.
#[test]
fn lexes_names() {
    let token = single_token("_fooBar_42");
    assert_eq!(token.kind, GraphQLTokenKind::Name);
    assert_eq!(token.text(), Some("_fooBar_42"));

    for keyword in ["query", "on", "true", "null", "fragment", "type"] {
        let token = single_token(keyword);
        assert_eq!(token.kind, GraphQLTokenKind::Name);
        assert_eq!(token.text(), Some(keyword));
    }
}

#[test]
fn names_borrow_from_the_source() {
    let token = single_token("hero");
    assert!(matches!(token.value, GraphQLTokenValue::Text(Cow::Borrowed("hero"))));
}

/// A name directly followed by a digit-free punctuator splits correctly.
#[test]
fn names_stop_at_punctuators() {
    assert_eq!(
        significant_kinds("hero(id:4){name}"),
        vec![
            GraphQLTokenKind::Name,
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::Name,
            GraphQLTokenKind::Colon,
            GraphQLTokenKind::IntValue,
            GraphQLTokenKind::ParenClose,
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::Name,
            GraphQLTokenKind::CurlyBraceClose,
        ],
    );
}

/// The token source ends with `None`; it never produces `Eof` itself.
#[test]
fn never_emits_eof() {
    let mut source = StrGraphQLTokenSource::new("a");
    assert!(matches!(source.next(), Some(Ok(_))));
    assert!(source.next().is_none());
    assert!(source.next().is_none());

    assert!(StrGraphQLTokenSource::new("").next().is_none());
}

/// After an error the iterator is exhausted.
#[test]
fn stops_after_first_error() {
    let mut source = StrGraphQLTokenSource::new("a % b");
    assert!(matches!(source.next(), Some(Ok(_))));
    assert!(matches!(source.next(), Some(Ok(_))));
    assert!(matches!(source.next(), Some(Err(_))));
    assert!(source.next().is_none());
}
