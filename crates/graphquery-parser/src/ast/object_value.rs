use crate::ast::ObjectField;

/// An object literal (e.g., `{ lat: 1.5, lon: $lon }`).
///
/// Whether the object is constant is computed once at construction. The
/// fields are private so that flag cannot go stale.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    fields: Vec<ObjectField>,
    is_constant: bool,
}

impl ObjectValue {
    pub fn new(fields: Vec<ObjectField>) -> Self {
        let is_constant = fields.iter().all(|field| field.value.is_constant());
        Self {
            fields,
            is_constant,
        }
    }

    pub fn fields(&self) -> &[ObjectField] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<ObjectField> {
        self.fields
    }

    /// Looks up a field by name (the first one, if repeated).
    pub fn get(&self, name: &str) -> Option<&ObjectField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// `true` if no field value (at any depth) is a variable.
    pub fn is_constant(&self) -> bool {
        self.is_constant
    }
}
