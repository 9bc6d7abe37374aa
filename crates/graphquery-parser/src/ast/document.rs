use crate::ast::Definition;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;

/// The root of a parsed executable document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    /// Definitions in document order.
    pub definitions: Vec<Definition>,
}

impl Document {
    /// Iterates the operation definitions in document order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            Definition::Fragment(_) => None,
        })
    }

    /// Iterates the fragment definitions in document order.
    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(_) => None,
            Definition::Fragment(frag) => Some(frag),
        })
    }
}
