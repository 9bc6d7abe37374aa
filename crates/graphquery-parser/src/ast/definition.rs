use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;

/// A top-level definition in an executable document.
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
}

impl Definition {
    /// The definition's name. Anonymous operations have none.
    pub fn name(&self) -> Option<&str> {
        match self {
            Definition::Operation(op) => op.name.as_deref(),
            Definition::Fragment(frag) => Some(&frag.name),
        }
    }
}
