/// A type reference such as `Int`, `[Int]`, or `[Int!]!`.
///
/// The grammar forbids `T!!`, so the inner type of a `NonNull` is never
/// itself `NonNull`. [`TypeAnnotation::non_null`] upholds this for
/// hand-built annotations.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeAnnotation {
    Named(String),
    List(Box<TypeAnnotation>),
    NonNull(Box<TypeAnnotation>),
}

impl TypeAnnotation {
    pub fn named(name: impl Into<String>) -> Self {
        TypeAnnotation::Named(name.into())
    }

    pub fn list(inner: TypeAnnotation) -> Self {
        TypeAnnotation::List(Box::new(inner))
    }

    /// Wraps `inner` as non-null. Already non-null types are returned as-is.
    pub fn non_null(inner: TypeAnnotation) -> Self {
        match inner {
            TypeAnnotation::NonNull(_) => inner,
            other => TypeAnnotation::NonNull(Box::new(other)),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeAnnotation::NonNull(_))
    }

    /// The named type at the core of any list/non-null wrapping.
    pub fn innermost_name(&self) -> &str {
        match self {
            TypeAnnotation::Named(name) => name,
            TypeAnnotation::List(inner) | TypeAnnotation::NonNull(inner) => {
                inner.innermost_name()
            },
        }
    }
}
