use crate::ast::Value;

/// A list literal (e.g., `[1, 2, 3]`).
///
/// Whether the list is constant is computed once at construction. The items
/// are private so that flag cannot go stale.
#[derive(Clone, Debug, PartialEq)]
pub struct ListValue {
    values: Vec<Value>,
    is_constant: bool,
}

impl ListValue {
    pub fn new(values: Vec<Value>) -> Self {
        let is_constant = values.iter().all(Value::is_constant);
        Self {
            values,
            is_constant,
        }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// `true` if no item (at any depth) is a variable.
    pub fn is_constant(&self) -> bool {
        self.is_constant
    }
}
