use crate::ast::Argument;

/// `@name(args)` applied to an operation, fragment, field, or spread.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub name: String,
    pub arguments: Vec<Argument>,
}
