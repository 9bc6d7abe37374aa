/// Selects the prefix a [`GraphQLErrorNote`](crate::GraphQLErrorNote) is
/// rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphQLErrorNoteKind {
    /// `= note: ...`, usually with a span, e.g. "string started here".
    General,

    /// `= help: ...`, an actionable fix.
    Help,

    /// `= spec: ...`, a URL into the GraphQL specification.
    Spec,
}
