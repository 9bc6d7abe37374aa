use crate::ast::TypeAnnotation;
use crate::ast::Value;

/// `$name: Type = default` in an operation's variable list.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    /// The variable name without the leading `$`.
    pub name: String,
    pub type_annotation: TypeAnnotation,
    /// Not required to be constant here; check [`Value::is_constant`].
    pub default_value: Option<Value>,
}
