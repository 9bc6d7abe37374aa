use crate::ast::Value;

/// `name: value` in a field or directive argument list.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: String,
    pub value: Value,
}

impl Argument {
    /// `true` if the value references no variables.
    pub fn is_constant(&self) -> bool {
        self.value.is_constant()
    }
}
