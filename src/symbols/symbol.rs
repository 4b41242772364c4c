use std::fmt::Display;

use serde::Serialize;

use crate::types::{kind::Kind, type_set::TypeSet};

use super::scope::ScopeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SymbolId(pub usize);

impl Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a symbol came into existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    /// `var`, `let` or `const`
    Variable,
    /// Function parameter or `catch` parameter
    Parameter,
    /// Function declaration or the name of a named function expression
    Function,
    /// Class declaration or the name of a named class expression
    Class,
    Import,
    /// Global created by writing to an undeclared name
    Implicit,
}

impl Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SymbolKind::Variable => "variable",
            SymbolKind::Parameter => "parameter",
            SymbolKind::Function => "function",
            SymbolKind::Class => "class",
            SymbolKind::Import => "import",
            SymbolKind::Implicit => "implicit",
        };
        write!(f, "{}", name)
    }
}

/// A declared name within one scope.
///
/// Created with an empty kind set. Only the inference pass widens it; once a
/// `SymbolModel` is handed out its symbols are read-only.
#[derive(Debug, Clone, Serialize)]
pub struct Symbol {
    id: SymbolId,
    name: String,
    kind: SymbolKind,
    /// Byte offset of the declaring occurrence
    declaration: u32,
    scope: ScopeId,
    types: TypeSet,
}

impl Symbol {
    pub fn new(id: SymbolId, name: String, kind: SymbolKind, declaration: u32, scope: ScopeId) -> Self {
        Symbol {
            id,
            name,
            kind,
            declaration,
            scope,
            types: TypeSet::new(),
        }
    }

    pub fn id(&self) -> SymbolId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    pub fn declaration(&self) -> u32 {
        self.declaration
    }

    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// Every kind observed for this symbol.
    pub fn types(&self) -> &TypeSet {
        &self.types
    }

    pub fn can_be(&self, kind: Kind) -> bool {
        self.types.contains(kind)
    }

    pub(crate) fn add_kind(&mut self, kind: Kind) -> bool {
        self.types.add_kind(kind)
    }

    pub(crate) fn add_types(&mut self, types: &TypeSet) -> bool {
        self.types.add_set(types)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.types)
    }
}
