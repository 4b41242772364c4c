use std::{collections::HashMap, rc::Rc};

use tracing::debug;

use crate::{
    ast::{ast::NodeId, statements::BlockStmt},
    errors::errors::Error,
    inference::visitor::TypeInferrer,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

use super::{
    binder::bind,
    scope::{Scope, ScopeId},
    symbol::{Symbol, SymbolId},
};

/// Resolved symbols of one script together with their inferred kinds.
///
/// Maps every identifier occurrence (by `NodeId`) to the symbol it names.
/// Holds no reference to the tree it was built from, so a finished model can
/// be shared across threads.
#[derive(Debug)]
pub struct SymbolModel {
    symbols: Vec<Symbol>,
    scopes: Vec<Scope>,
    references: HashMap<NodeId, SymbolId>,
}

impl SymbolModel {
    pub(crate) fn new(symbols: Vec<Symbol>, scopes: Vec<Scope>, references: HashMap<NodeId, SymbolId>) -> Self {
        SymbolModel {
            symbols,
            scopes,
            references,
        }
    }

    /// Resolves the names of `ast` and runs the inference pass over it.
    pub fn create(ast: &BlockStmt) -> SymbolModel {
        let mut model = bind(ast);
        debug!(symbols = model.symbols.len(), scopes = model.scopes.len(), "bound script");

        TypeInferrer::new(&mut model).infer(ast);
        model
    }

    pub fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.0)
    }

    /// All symbols in declaration order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Every symbol called `name`, across all scopes.
    pub fn symbols_named(&self, name: &str) -> Vec<&Symbol> {
        self.symbols.iter().filter(|symbol| symbol.name() == name).collect()
    }

    /// The symbol an identifier occurrence resolves to. `None` for unresolved globals.
    pub fn symbol_for(&self, node: NodeId) -> Option<&Symbol> {
        self.resolve(node).and_then(|id| self.symbol(id))
    }

    /// A symbol declared in the script scope, including implicit globals.
    pub fn global_symbol(&self, name: &str) -> Option<&Symbol> {
        self.scopes
            .first()
            .and_then(|script| script.get_variable(name))
            .and_then(|id| self.symbol(id))
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    pub fn scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id)
    }

    pub fn resolve(&self, node: NodeId) -> Option<SymbolId> {
        self.references.get(&node).copied()
    }

    pub(crate) fn symbol_mut(&mut self, id: SymbolId) -> Option<&mut Symbol> {
        self.symbols.get_mut(id.0)
    }
}

/// Tokenizes, parses and analyzes `source`.
pub fn analyze_source(source: &str, file: Option<String>) -> Result<SymbolModel, Error> {
    let file_name = Rc::new(file.clone().unwrap_or_else(|| String::from("shell")));

    let tokens = tokenize(source.to_string(), file)?;
    let (_, ast) = parse(tokens, file_name);

    Ok(SymbolModel::create(&ast?))
}
