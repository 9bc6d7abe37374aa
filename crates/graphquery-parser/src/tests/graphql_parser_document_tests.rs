//! Tests for whole-document parsing.

use crate::ast;
use crate::parse_document;
use crate::tests::utils::parse_ok;

#[test]
fn empty_document_has_no_definitions() {
    assert!(parse_ok("").definitions.is_empty());
    assert!(parse_ok("  \n# only a comment\n,,").definitions.is_empty());
}

/// Definitions keep their document order.
#[test]
fn parses_multiple_definitions_in_order() {
    let doc = parse_ok(
        "query A { ...F }\n\
         fragment F on T { x }\n\
         mutation B { y }\n\
         { z }",
    );
    let names: Vec<_> = doc.definitions.iter().map(ast::Definition::name).collect();
    assert_eq!(names, vec![Some("A"), Some("F"), Some("B"), None]);

    assert_eq!(doc.operations().count(), 3);
    assert_eq!(doc.fragments().count(), 1);
}

/// Commas, comments, and line terminators are insignificant everywhere.
#[test]
fn ignores_insignificant_tokens() {
    let compact = parse_ok("query Q($a:Int,$b:Int){f(x:$a,y:$b){g}}");
    let noisy = parse_ok(
        "# leading comment\r\n\
         query Q(\n  $a: Int,,,\n  $b: Int # trailing\n) {\n\
         ,f(x: $a\n y: $b) {\n g,\n }\n}\n",
    );
    assert_eq!(compact, noisy);
}

#[test]
fn parse_document_matches_parser() {
    let source = "{ a { b } }";
    assert_eq!(parse_document(source).unwrap(), parse_ok(source));
}

/// Parsing the same text twice yields equal, independent trees.
#[test]
fn parses_are_independent() {
    let source = "query Q { a(x: [1, 2]) }";
    let mut first = parse_ok(source);
    let second = parse_ok(source);
    assert_eq!(first, second);

    first.definitions.clear();
    assert_eq!(second.definitions.len(), 1);
}
