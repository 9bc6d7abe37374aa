//! Tests for [`GraphQLTokenKind`].

use crate::token::GraphQLTokenKind;

/// Whitespace, line terminators, comments, and commas are skipped by the
/// parser; everything else (including `Eof`) is significant.
#[test]
fn insignificant_kinds() {
    assert!(GraphQLTokenKind::Whitespace.is_insignificant());
    assert!(GraphQLTokenKind::LineTerminator.is_insignificant());
    assert!(GraphQLTokenKind::Comment.is_insignificant());
    assert!(GraphQLTokenKind::Comma.is_insignificant());

    assert!(!GraphQLTokenKind::Name.is_insignificant());
    assert!(!GraphQLTokenKind::Bang.is_insignificant());
    assert!(!GraphQLTokenKind::StringValue.is_insignificant());
    assert!(!GraphQLTokenKind::Eof.is_insignificant());
}

#[test]
fn punctuator_spellings() {
    let cases = [
        (GraphQLTokenKind::Bang, "!"),
        (GraphQLTokenKind::Dollar, "$"),
        (GraphQLTokenKind::ParenOpen, "("),
        (GraphQLTokenKind::ParenClose, ")"),
        (GraphQLTokenKind::Colon, ":"),
        (GraphQLTokenKind::Equals, "="),
        (GraphQLTokenKind::At, "@"),
        (GraphQLTokenKind::SquareBracketOpen, "["),
        (GraphQLTokenKind::SquareBracketClose, "]"),
        (GraphQLTokenKind::CurlyBraceOpen, "{"),
        (GraphQLTokenKind::CurlyBraceClose, "}"),
        (GraphQLTokenKind::Pipe, "|"),
        (GraphQLTokenKind::Ellipsis, "..."),
    ];
    for (kind, spelling) in cases {
        assert!(kind.is_punctuator(), "{kind:?}");
        assert_eq!(kind.as_punctuator_str(), Some(spelling));
        assert_eq!(kind.to_string(), spelling);
    }
}

/// Non-punctuators display as their kind name, except `Eof`.
#[test]
fn display_of_non_punctuators() {
    assert!(!GraphQLTokenKind::Name.is_punctuator());
    assert_eq!(GraphQLTokenKind::Name.to_string(), "Name");
    assert_eq!(GraphQLTokenKind::IntValue.to_string(), "IntValue");
    assert_eq!(GraphQLTokenKind::FloatValue.to_string(), "FloatValue");
    assert_eq!(GraphQLTokenKind::StringValue.to_string(), "StringValue");
    assert_eq!(GraphQLTokenKind::Eof.to_string(), "end of input");
    assert_eq!(GraphQLTokenKind::Eof.name(), "Eof");
}
