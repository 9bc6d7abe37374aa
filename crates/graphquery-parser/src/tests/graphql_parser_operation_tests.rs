//! Tests for parsing operation and fragment definitions.
//!
//! Relevant GraphQL spec sections:
//! <https://spec.graphql.org/October2021/#sec-Language.Operations>
//! <https://spec.graphql.org/October2021/#sec-Language.Fragments>

use crate::ast;
use crate::tests::utils::parse_ok;
use crate::tests::utils::single_operation;

/// The example from the GraphQL documentation round-trips into the expected
/// tree.
#[test]
fn parses_named_query_with_variables() {
    let op = single_operation(
        "query getHobbits($book: Int!) {\n  hobbits(book: $book) { id name }\n}",
    );

    assert_eq!(op.operation_type, ast::OperationType::Query);
    assert_eq!(op.name.as_deref(), Some("getHobbits"));
    assert_eq!(
        op.variables,
        vec![ast::VariableDefinition {
            name: "book".to_string(),
            type_annotation: ast::TypeAnnotation::non_null(ast::TypeAnnotation::named("Int")),
            default_value: None,
        }],
    );
    assert!(op.directives.is_empty());

    let expected_hobbits = ast::Field {
        alias: None,
        name: "hobbits".to_string(),
        arguments: vec![ast::Argument {
            name: "book".to_string(),
            value: ast::Value::Variable("book".to_string()),
        }],
        directives: vec![],
        selection_set: Some(ast::SelectionSet {
            items: ["id", "name"]
                .into_iter()
                .map(|name| {
                    ast::Selection::Field(ast::Field {
                        alias: None,
                        name: name.to_string(),
                        arguments: vec![],
                        directives: vec![],
                        selection_set: None,
                    })
                })
                .collect(),
        }),
    };
    assert_eq!(op.selection_set.items, vec![ast::Selection::Field(expected_hobbits)]);
}

/// A bare `{ ... }` is an anonymous query.
#[test]
fn parses_shorthand_query() {
    let op = single_operation("{ me }");
    assert_eq!(op.operation_type, ast::OperationType::Query);
    assert_eq!(op.name, None);
    assert!(op.variables.is_empty());
    assert!(op.directives.is_empty());
    assert_eq!(op.selection_set.items.len(), 1);
}

#[test]
fn parses_mutation_and_subscription() {
    let op = single_operation("mutation Like { like(id: 1) { count } }");
    assert_eq!(op.operation_type, ast::OperationType::Mutation);
    assert_eq!(op.name.as_deref(), Some("Like"));

    let op = single_operation("subscription { onMessage { text } }");
    assert_eq!(op.operation_type, ast::OperationType::Subscription);
    assert_eq!(op.name, None);
}

#[test]
fn parses_anonymous_query_with_variables() {
    let op = single_operation("query ($id: ID) { node(id: $id) { id } }");
    assert_eq!(op.name, None);
    assert_eq!(op.variables.len(), 1);
    assert_eq!(op.variables[0].name, "id");
}

#[test]
fn parses_operation_directives() {
    let op = single_operation("query Q @live @cached(ttl: 60) { a }");
    let names: Vec<_> = op.directives.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["live", "cached"]);
    assert_eq!(op.directives[1].arguments[0].name, "ttl");
    assert_eq!(op.directives[1].arguments[0].value, ast::Value::Int(60));
}

/// `=` introduces a default value; default values need not be constant.
#[test]
fn parses_variable_default_values() {
    let op = single_operation(
        "query Q($a: Int = 1, $b: [String!] = [\"x\"], $c: Input = { k: $a }) { f }",
    );
    assert_eq!(op.variables.len(), 3);
    assert_eq!(op.variables[0].default_value, Some(ast::Value::Int(1)));

    let b_default = op.variables[1].default_value.as_ref().unwrap();
    assert!(b_default.is_constant());

    let c_default = op.variables[2].default_value.as_ref().unwrap();
    assert!(!c_default.is_constant());
}

/// An empty variable list is accepted.
#[test]
fn parses_empty_variable_list() {
    let op = single_operation("query Q() { f }");
    assert!(op.variables.is_empty());
}

#[test]
fn parses_fragment_definition() {
    let doc = parse_ok("fragment HeroFields on Character @include(if: true) { name friends { name } }");
    let frag = doc.fragments().next().unwrap();
    assert_eq!(frag.name, "HeroFields");
    assert_eq!(frag.on_type, "Character");
    assert_eq!(frag.directives.len(), 1);
    assert_eq!(frag.directives[0].arguments[0].value, ast::Value::Boolean(true));
    assert_eq!(frag.selection_set.items.len(), 2);
}

/// Keywords are contextual: they may be used as names elsewhere.
#[test]
fn keywords_are_valid_names() {
    let op = single_operation("query query { fragment type on: query(on: subscription) }");
    assert_eq!(op.name.as_deref(), Some("query"));
    let fields: Vec<_> = op
        .selection_set
        .items
        .iter()
        .map(|item| match item {
            ast::Selection::Field(field) => (field.alias.as_deref(), field.name.as_str()),
            other => panic!("expected a field, got {other:?}"),
        })
        .collect();
    assert_eq!(fields, vec![(None, "fragment"), (None, "type"), (Some("on"), "query")]);
}
