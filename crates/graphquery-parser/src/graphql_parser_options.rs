/// Tunables for [`GraphQLParser`](crate::GraphQLParser).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphQLParserOptions {
    /// Deepest allowed nesting of selection sets, list/object values, and
    /// list types. The outermost selection set (or variable type) is depth 1.
    pub max_recursion_depth: usize,

    /// Reject `{}` selection sets with
    /// [`InvalidEmptyConstruct`](crate::GraphQLParseErrorKind::InvalidEmptyConstruct).
    /// The grammar permits them, so this is off by default.
    pub reject_empty_selection_sets: bool,
}

impl GraphQLParserOptions {
    pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 100;
}

impl Default for GraphQLParserOptions {
    fn default() -> Self {
        Self {
            max_recursion_depth: Self::DEFAULT_MAX_RECURSION_DEPTH,
            reject_empty_selection_sets: false,
        }
    }
}
