use crate::ast::Directive;
use crate::ast::SelectionSet;

/// `... on Type @directives { ... }`, where both the type condition and the
/// directives are optional.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<String>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}
