use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::SelectionSet;

/// A field selection: `alias: name(args) @directives { ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: Option<SelectionSet>,
}

impl Field {
    /// The key this field's result is reported under: the alias if present,
    /// otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}
