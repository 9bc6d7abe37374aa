use crate::ast::ListValue;
use crate::ast::ObjectValue;

/// A GraphQL input value.
///
/// `true`/`false`/`null` are lexed as names and only become `Boolean`/`Null`
/// here; any other bare name is an `Enum`.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// `$name`, stored without the `$`.
    Variable(String),
    Int(i32),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
    Enum(String),
    List(ListValue),
    Object(ObjectValue),
}

impl Value {
    /// `true` for every value except variables and lists/objects that
    /// contain a variable.
    pub fn is_constant(&self) -> bool {
        match self {
            Value::Variable(_) => false,
            Value::List(list) => list.is_constant(),
            Value::Object(object) => object.is_constant(),
            Value::Int(_)
            | Value::Float(_)
            | Value::String(_)
            | Value::Boolean(_)
            | Value::Null
            | Value::Enum(_) => true,
        }
    }
}
