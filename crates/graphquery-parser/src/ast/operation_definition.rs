use crate::ast::Directive;
use crate::ast::OperationType;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;

/// A `query`, `mutation`, or `subscription` operation.
///
/// The shorthand form `{ ... }` produces an anonymous `Query` with no
/// variables or directives.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub operation_type: OperationType,
    pub name: Option<String>,
    pub variables: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}
