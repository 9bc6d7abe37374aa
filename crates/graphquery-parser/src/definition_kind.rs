/// The kind of definition a top-level keyword introduces.
///
/// Used by the parser to dispatch top-level definitions and to report which
/// kind of (unsupported) schema definition was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    /// `query`, `mutation`, `subscription`, or anonymous `{ ... }`
    Operation,

    /// `fragment Name on Type { ... }`
    Fragment,

    /// `schema { ... }`
    Schema,

    /// `scalar Name`
    Scalar,

    /// `type Name { ... }`
    Type,

    /// `interface Name { ... }`
    Interface,

    /// `union Name = ...`
    Union,

    /// `enum Name { ... }`
    Enum,

    /// `input Name { ... }`
    Input,

    /// `directive @name on ...`
    Directive,

    /// `extend ...` (also accepted under the spelling `extension`)
    Extension,
}

impl DefinitionKind {
    /// Maps a leading top-level keyword to the kind of definition it
    /// introduces. Returns `None` for names that start no definition.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "query" | "mutation" | "subscription" => DefinitionKind::Operation,
            "fragment" => DefinitionKind::Fragment,
            "schema" => DefinitionKind::Schema,
            "scalar" => DefinitionKind::Scalar,
            "type" => DefinitionKind::Type,
            "interface" => DefinitionKind::Interface,
            "union" => DefinitionKind::Union,
            "enum" => DefinitionKind::Enum,
            "input" => DefinitionKind::Input,
            "directive" => DefinitionKind::Directive,
            "extend" | "extension" => DefinitionKind::Extension,
            _ => return None,
        })
    }

    /// Returns `true` for operations and fragments.
    pub fn is_executable(&self) -> bool {
        matches!(self, DefinitionKind::Operation | DefinitionKind::Fragment)
    }
}

impl std::fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DefinitionKind::Operation => "operation",
            DefinitionKind::Fragment => "fragment",
            DefinitionKind::Schema => "schema",
            DefinitionKind::Scalar => "scalar",
            DefinitionKind::Type => "type",
            DefinitionKind::Interface => "interface",
            DefinitionKind::Union => "union",
            DefinitionKind::Enum => "enum",
            DefinitionKind::Input => "input",
            DefinitionKind::Directive => "directive",
            DefinitionKind::Extension => "extension",
        })
    }
}
