use crate::ast::Directive;
use crate::ast::SelectionSet;

/// `fragment Name on Type @directives { ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub name: String,
    /// The type condition following `on`.
    pub on_type: String,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}
