//! Tests for selection set parsing: fields, aliases, fragment spreads, and
//! inline fragments.
//!
//! Relevant GraphQL spec section:
//! <https://spec.graphql.org/October2021/#sec-Selection-Sets>

use crate::ast;
use crate::tests::utils::first_field;
use crate::tests::utils::single_operation;
use crate::tests::utils::top_level_selection;

#[test]
fn parses_alias() {
    let field = first_field("{ smallPic: profilePic(size: 64) }");
    assert_eq!(field.alias.as_deref(), Some("smallPic"));
    assert_eq!(field.name, "profilePic");
    assert_eq!(field.response_key(), "smallPic");
    assert_eq!(field.arguments[0].value, ast::Value::Int(64));
}

/// A field without braces has no selection set (not an empty one).
#[test]
fn leaf_field_has_no_selection_set() {
    let field = first_field("{ name }");
    assert_eq!(field.alias, None);
    assert_eq!(field.response_key(), "name");
    assert!(field.arguments.is_empty());
    assert_eq!(field.selection_set, None);
}

#[test]
fn parses_nested_selection_sets() {
    let field = first_field("{ a { b { c } } }");
    let Some(a_set) = field.selection_set else { panic!("missing selection set") };
    let ast::Selection::Field(b) = &a_set.items[0] else { panic!("expected field") };
    assert_eq!(b.name, "b");
    let ast::Selection::Field(c) = &b.selection_set.as_ref().unwrap().items[0] else {
        panic!("expected field")
    };
    assert_eq!(c.name, "c");
    assert_eq!(c.selection_set, None);
}

#[test]
fn parses_field_directives() {
    let field = first_field("{ name @include(if: $withName) @deprecated }");
    assert_eq!(field.directives.len(), 2);
    assert_eq!(field.directives[0].name, "include");
    assert_eq!(
        field.directives[0].arguments[0].value,
        ast::Value::Variable("withName".to_string()),
    );
    assert_eq!(field.directives[1].name, "deprecated");
    assert!(field.directives[1].arguments.is_empty());
}

/// Empty argument lists are accepted.
#[test]
fn parses_empty_arguments() {
    let field = first_field("{ f() }");
    assert!(field.arguments.is_empty());
}

#[test]
fn parses_fragment_spread() {
    let selection = top_level_selection("{ ...HeroFields @skip(if: false) }", 0);
    let ast::Selection::FragmentSpread(spread) = &selection else {
        panic!("expected fragment spread, got {selection:?}")
    };
    assert_eq!(spread.name, "HeroFields");
    assert_eq!(spread.directives.len(), 1);
}

#[test]
fn parses_inline_fragment_with_type_condition() {
    let selection = top_level_selection("{ ... on Droid { primaryFunction } }", 0);
    let ast::Selection::InlineFragment(inline) = &selection else {
        panic!("expected inline fragment, got {selection:?}")
    };
    assert_eq!(inline.type_condition.as_deref(), Some("Droid"));
    assert!(inline.directives.is_empty());
    assert_eq!(inline.selection_set.items.len(), 1);
}

#[test]
fn parses_inline_fragment_without_type_condition() {
    let selection = top_level_selection("{ ... { a } }", 0);
    let ast::Selection::InlineFragment(inline) = &selection else {
        panic!("expected inline fragment, got {selection:?}")
    };
    assert_eq!(inline.type_condition, None);
}

/// `... @dir { }` is an inline fragment with directives but no type.
#[test]
fn parses_inline_fragment_with_only_directives() {
    let selection = top_level_selection("{ ... @include(if: $x) { a } }", 0);
    let ast::Selection::InlineFragment(inline) = &selection else {
        panic!("expected inline fragment, got {selection:?}")
    };
    assert_eq!(inline.type_condition, None);
    assert_eq!(inline.directives[0].name, "include");
}

/// `...on` followed by a name is a type condition, while `...onFoo` is a
/// spread of the fragment named `onFoo`.
#[test]
fn on_prefix_is_not_a_type_condition() {
    let selection = top_level_selection("{ ...onFoo }", 0);
    assert!(matches!(
        selection,
        ast::Selection::FragmentSpread(ast::FragmentSpread { ref name, .. }) if name == "onFoo"
    ));
}

#[test]
fn preserves_selection_order() {
    let op = single_operation("{ a ...F ... on T { b } c }");
    let shapes: Vec<_> = op
        .selection_set
        .items
        .iter()
        .map(|item| match item {
            ast::Selection::Field(_) => "field",
            ast::Selection::FragmentSpread(_) => "spread",
            ast::Selection::InlineFragment(_) => "inline",
        })
        .collect();
    assert_eq!(shapes, vec!["field", "spread", "inline", "field"]);
}

/// Empty selection sets are accepted unless the parser is configured
/// otherwise.
#[test]
fn accepts_empty_selection_set_by_default() {
    let op = single_operation("{ a {} }");
    let ast::Selection::Field(a) = &op.selection_set.items[0] else { panic!() };
    assert_eq!(a.selection_set.as_ref().map(ast::SelectionSet::is_empty), Some(true));
    assert!(single_operation("{}").selection_set.is_empty());
}
