use indexmap::IndexMap;

use super::symbol::SymbolId;

/// Index of a scope inside its `SymbolModel`. The script scope is always 0.
pub type ScopeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Script,
    Function,
    Block,
}

#[derive(Debug)]
pub struct Scope {
    pub id: ScopeId,
    pub kind: ScopeKind,
    pub parent: Option<ScopeId>,
    /// Names in declaration order
    pub variable_lookup: IndexMap<String, SymbolId>,
}

impl Scope {
    pub fn new(id: ScopeId, kind: ScopeKind, parent: Option<ScopeId>) -> Self {
        Scope {
            id,
            kind,
            parent,
            variable_lookup: IndexMap::new(),
        }
    }

    /// Whether `var` and function declarations stop here.
    pub fn is_function_boundary(&self) -> bool {
        matches!(self.kind, ScopeKind::Script | ScopeKind::Function)
    }

    pub fn declare_variable(&mut self, variable_name: String, symbol: SymbolId) {
        self.variable_lookup.insert(variable_name, symbol);
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<SymbolId> {
        self.variable_lookup.get(variable_name).copied()
    }
}
