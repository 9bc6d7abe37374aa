use crate::ast::Selection;

/// The `{ ... }` block listing what to select. May be empty unless the parser
/// was configured to reject empty selection sets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionSet {
    pub items: Vec<Selection>,
}

impl SelectionSet {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
