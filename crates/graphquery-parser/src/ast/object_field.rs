use crate::ast::Value;

/// `name: value` inside an object literal.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub name: String,
    pub value: Value,
}
