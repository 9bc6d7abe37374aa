//! Owned AST types for parsed GraphQL executable documents.
//!
//! Every node is a plain, immutable-by-convention value: strings are owned
//! `String`s (no borrowing from the source text), nodes carry no source
//! positions, and polymorphic nodes are enums matched exhaustively by
//! consumers.
//!
//! # Example
//!
//! ```rust
//! use graphquery_parser::ast;
//! use graphquery_parser::parse_document;
//!
//! let doc = parse_document("query Hero { hero { name } }").unwrap();
//! let op = doc.operations().next().unwrap();
//! assert_eq!(op.operation_type, ast::OperationType::Query);
//! assert_eq!(op.name.as_deref(), Some("Hero"));
//! ```

mod argument;
mod definition;
mod directive;
mod document;
mod field;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod list_value;
mod object_field;
mod object_value;
mod operation_definition;
mod operation_type;
mod selection;
mod selection_set;
mod type_annotation;
mod value;
mod variable_definition;

pub use argument::Argument;
pub use definition::Definition;
pub use directive::Directive;
pub use document::Document;
pub use field::Field;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use list_value::ListValue;
pub use object_field::ObjectField;
pub use object_value::ObjectValue;
pub use operation_definition::OperationDefinition;
pub use operation_type::OperationType;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use type_annotation::TypeAnnotation;
pub use value::Value;
pub use variable_definition::VariableDefinition;
