use std::collections::HashMap;

use tracing::{debug, trace};

use crate::ast::{
    ast::{Expr, ExprType, ExprWrapper, NodeId, Stmt, StmtType, StmtWrapper},
    expressions::{
        ArrayExpr, AssignmentExpr, BinaryExpr, BindingTarget, CallExpr, ClassExpr, ClassMember, ConditionalExpr,
        FunctionExpr, MemberExpr, MemberProperty, NewExpr, ObjectExpr, Parameter, PrefixExpr, SequenceExpr,
        SpreadExpr, SymbolExpr, TemplateExpr, UpdateExpr,
    },
    statements::{
        BlockStmt, ClassDeclStmt, DeclarationKind, DoWhileStmt, ExportStmt, ExpressionStmt, FnDeclStmt, ForInStmt,
        ForStmt, IfStmt, ImportStmt, LabeledStmt, ReturnStmt, SwitchStmt, ThrowStmt, TryStmt, VarDeclStmt,
        WhileStmt,
    },
};

use super::{
    model::SymbolModel,
    scope::{Scope, ScopeId, ScopeKind},
    symbol::{Symbol, SymbolId, SymbolKind},
};

const SCRIPT_SCOPE: ScopeId = 0;

/// Resolves every identifier occurrence of a script to a symbol.
///
/// Walks the tree once with a stack of open scopes. Each function or script
/// scope is pre-scanned for `var`, function and import declarations, and each
/// block for `let`/`const`, so uses before the declaration resolve too.
pub struct Binder {
    symbols: Vec<Symbol>,
    scopes: Vec<Scope>,
    scope_path: Vec<ScopeId>,
    references: HashMap<NodeId, SymbolId>,
    /// Reads that found no declaration, retried against the globals at the end
    unresolved: Vec<(NodeId, String)>,
}

impl Binder {
    pub fn new() -> Self {
        Binder {
            symbols: vec![],
            scopes: vec![],
            scope_path: vec![],
            references: HashMap::new(),
            unresolved: vec![],
        }
    }

    fn enter_scope(&mut self, kind: ScopeKind) -> ScopeId {
        let id = self.scopes.len();
        let parent = self.scope_path.last().copied();
        self.scopes.push(Scope::new(id, kind, parent));
        self.scope_path.push(id);
        id
    }

    fn exit_scope(&mut self) {
        self.scope_path.pop();
    }

    fn current_scope(&self) -> ScopeId {
        self.scope_path.last().copied().unwrap_or(SCRIPT_SCOPE)
    }

    /// Nearest enclosing scope that `var` declarations hoist to.
    fn function_scope(&self) -> ScopeId {
        self.scope_path
            .iter()
            .rev()
            .copied()
            .find(|scope| self.scopes[*scope].is_function_boundary())
            .unwrap_or(SCRIPT_SCOPE)
    }

    /// Declares `name` in `scope`, or reuses the symbol already declared there under that name.
    fn declare(&mut self, scope: ScopeId, name: &str, kind: SymbolKind, node: NodeId, position: u32) -> SymbolId {
        if let Some(existing) = self.scopes[scope].get_variable(name) {
            self.references.insert(node, existing);
            return existing;
        }

        let id = SymbolId(self.symbols.len());
        self.symbols.push(Symbol::new(id, name.to_string(), kind, position, scope));
        self.scopes[scope].declare_variable(name.to_string(), id);
        self.references.insert(node, id);

        debug!(symbol = name, ?kind, scope, "declared symbol");
        id
    }

    fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.scope_path
            .iter()
            .rev()
            .find_map(|scope| self.scopes[*scope].get_variable(name))
    }

    fn reference(&mut self, node: NodeId, name: &str) {
        match self.lookup(name) {
            Some(symbol) => {
                self.references.insert(node, symbol);
            }
            None => self.unresolved.push((node, name.to_string())),
        }
    }

    /// Resolves a write target. Writing an undeclared name creates a global,
    /// except for `undefined`, which cannot be reassigned.
    fn write_reference(&mut self, node: NodeId, name: &str, position: u32) {
        match self.lookup(name) {
            Some(symbol) => {
                self.references.insert(node, symbol);
            }
            None if name == "undefined" => trace!(node, "ignored write to undefined"),
            None => {
                self.declare(SCRIPT_SCOPE, name, SymbolKind::Implicit, node, position);
            }
        }
    }

    /// Declares every name bound by `target` in `scope`.
    fn declare_target(&mut self, scope: ScopeId, target: &BindingTarget, kind: SymbolKind, position: u32) {
        for (name, node) in target.names() {
            self.declare(scope, name, kind, node, position);
        }
    }

    /// Declares the names of `target` not already declared by hoisting.
    fn declare_unhoisted(&mut self, scope: ScopeId, target: &BindingTarget, position: u32) {
        for (name, node) in target.names() {
            if !self.references.contains_key(&node) {
                self.declare(scope, name, SymbolKind::Variable, node, position);
            }
        }
    }

    fn bind_target_defaults(&mut self, target: &BindingTarget) {
        if let BindingTarget::Pattern { elements, nested_defaults } = target {
            for default in elements.iter().filter_map(|element| element.default.as_ref()) {
                self.bind_expr(default);
            }
            for default in nested_defaults {
                self.bind_expr(default);
            }
        }
    }

    pub fn bind(mut self, ast: &BlockStmt) -> SymbolModel {
        let scope = self.enter_scope(ScopeKind::Script);
        self.hoist_declarations(&ast.body, scope);
        self.declare_lexical(&ast.body, scope);

        for stmt in ast.iter() {
            self.bind_stmt(stmt);
        }
        self.exit_scope();

        for (node, name) in std::mem::take(&mut self.unresolved) {
            match self.scopes[SCRIPT_SCOPE].get_variable(&name) {
                Some(symbol) => {
                    self.references.insert(node, symbol);
                }
                None => trace!(name = name.as_str(), "unresolved global"),
            }
        }

        SymbolModel::new(self.symbols, self.scopes, self.references)
    }

    // DECLARATIONS

    fn hoist_declarations(&mut self, body: &[StmtWrapper], scope: ScopeId) {
        for stmt in body {
            self.hoist_stmt(stmt, scope);
        }
    }

    /// Declares the `var`, function and import bindings of `stmt` in `scope`,
    /// looking through nested statements but not into nested functions.
    fn hoist_stmt(&mut self, stmt: &StmtWrapper, scope: ScopeId) {
        match stmt.get_stmt_type() {
            StmtType::VarDeclStmt => {
                let Some(declaration) = stmt.downcast_ref::<VarDeclStmt>() else { return };
                if declaration.kind != DeclarationKind::Var {
                    return;
                }
                for declarator in &declaration.declarations {
                    self.declare_target(scope, &declarator.target, SymbolKind::Variable, declarator.span.start.0);
                }
            }
            StmtType::FnDeclStmt => {
                let Some(function) = stmt.downcast_ref::<FnDeclStmt>() else { return };
                self.declare(scope, &function.identifier, SymbolKind::Function, function.id, function.span.start.0);
            }
            StmtType::ImportStmt => {
                let Some(import) = stmt.downcast_ref::<ImportStmt>() else { return };
                for binding in &import.bindings {
                    self.declare(scope, &binding.local, SymbolKind::Import, binding.id, binding.span.start.0);
                }
            }
            StmtType::BlockStmt => {
                let Some(block) = stmt.downcast_ref::<BlockStmt>() else { return };
                self.hoist_declarations(&block.body, scope);
            }
            StmtType::IfStmt => {
                let Some(if_stmt) = stmt.downcast_ref::<IfStmt>() else { return };
                self.hoist_stmt(&if_stmt.consequent, scope);
                if let Some(alternate) = &if_stmt.alternate {
                    self.hoist_stmt(alternate, scope);
                }
            }
            StmtType::WhileStmt => {
                let Some(while_stmt) = stmt.downcast_ref::<WhileStmt>() else { return };
                self.hoist_stmt(&while_stmt.body, scope);
            }
            StmtType::DoWhileStmt => {
                let Some(do_while) = stmt.downcast_ref::<DoWhileStmt>() else { return };
                self.hoist_stmt(&do_while.body, scope);
            }
            StmtType::ForStmt => {
                let Some(for_stmt) = stmt.downcast_ref::<ForStmt>() else { return };
                if let Some(init) = &for_stmt.init {
                    self.hoist_stmt(init, scope);
                }
                self.hoist_stmt(&for_stmt.body, scope);
            }
            StmtType::ForInStmt => {
                let Some(for_in) = stmt.downcast_ref::<ForInStmt>() else { return };
                if for_in.declaration == Some(DeclarationKind::Var) {
                    self.declare_target(scope, &for_in.target, SymbolKind::Variable, for_in.span.start.0);
                }
                self.hoist_stmt(&for_in.body, scope);
            }
            StmtType::ExportStmt => {
                let Some(export) = stmt.downcast_ref::<ExportStmt>() else { return };
                self.hoist_stmt(&export.declaration, scope);
            }
            StmtType::TryStmt => {
                let Some(try_stmt) = stmt.downcast_ref::<TryStmt>() else { return };
                self.hoist_declarations(&try_stmt.block.body, scope);
                if let Some(handler) = &try_stmt.handler {
                    self.hoist_declarations(&handler.body.body, scope);
                }
                if let Some(finalizer) = &try_stmt.finalizer {
                    self.hoist_declarations(&finalizer.body, scope);
                }
            }
            StmtType::SwitchStmt => {
                let Some(switch) = stmt.downcast_ref::<SwitchStmt>() else { return };
                for case in &switch.cases {
                    self.hoist_declarations(&case.body, scope);
                }
            }
            StmtType::LabeledStmt => {
                let Some(labeled) = stmt.downcast_ref::<LabeledStmt>() else { return };
                self.hoist_stmt(&labeled.body, scope);
            }
            _ => {}
        }
    }

    /// Declares the `let`/`const` and class bindings written directly in `body`.
    fn declare_lexical(&mut self, body: &[StmtWrapper], scope: ScopeId) {
        for stmt in body {
            let stmt = match stmt.downcast_ref::<ExportStmt>() {
                Some(export) => &export.declaration,
                None => stmt,
            };

            if let Some(class) = stmt.downcast_ref::<ClassDeclStmt>() {
                self.declare(scope, &class.identifier, SymbolKind::Class, class.id, class.span.start.0);
                continue;
            }

            let Some(declaration) = stmt.downcast_ref::<VarDeclStmt>() else { continue };
            if declaration.kind == DeclarationKind::Var {
                continue;
            }

            for declarator in &declaration.declarations {
                self.declare_target(scope, &declarator.target, SymbolKind::Variable, declarator.span.start.0);
            }
        }
    }

    // STATEMENTS

    fn bind_block(&mut self, block: &BlockStmt) {
        let scope = self.enter_scope(ScopeKind::Block);
        self.declare_lexical(&block.body, scope);

        for stmt in block.iter() {
            self.bind_stmt(stmt);
        }

        self.exit_scope();
    }

    fn bind_function(&mut self, parameters: &[Parameter], body: &BlockStmt) {
        let scope = self.enter_scope(ScopeKind::Function);

        for parameter in parameters {
            self.declare_target(scope, &parameter.target, SymbolKind::Parameter, parameter.span.start.0);
        }
        for parameter in parameters {
            if let Some(default) = &parameter.default {
                self.bind_expr(default);
            }
            self.bind_target_defaults(&parameter.target);
        }

        self.hoist_declarations(&body.body, scope);
        self.declare_lexical(&body.body, scope);

        for stmt in body.iter() {
            self.bind_stmt(stmt);
        }

        self.exit_scope();
    }

    fn bind_stmt(&mut self, stmt: &StmtWrapper) {
        match stmt.get_stmt_type() {
            StmtType::ExpressionStmt => {
                if let Some(expression) = stmt.downcast_ref::<ExpressionStmt>() {
                    self.bind_expr(&expression.expression);
                }
            }
            StmtType::BlockStmt => {
                if let Some(block) = stmt.downcast_ref::<BlockStmt>() {
                    self.bind_block(block);
                }
            }
            StmtType::VarDeclStmt => {
                let Some(declaration) = stmt.downcast_ref::<VarDeclStmt>() else { return };
                for declarator in &declaration.declarations {
                    let scope = match declaration.kind {
                        DeclarationKind::Var => self.function_scope(),
                        _ => self.current_scope(),
                    };
                    self.declare_unhoisted(scope, &declarator.target, declarator.span.start.0);

                    if let Some(value) = &declarator.assigned_value {
                        self.bind_expr(value);
                    }
                    self.bind_target_defaults(&declarator.target);
                }
            }
            StmtType::IfStmt => {
                let Some(if_stmt) = stmt.downcast_ref::<IfStmt>() else { return };
                self.bind_expr(&if_stmt.condition);
                self.bind_stmt(&if_stmt.consequent);
                if let Some(alternate) = &if_stmt.alternate {
                    self.bind_stmt(alternate);
                }
            }
            StmtType::WhileStmt => {
                let Some(while_stmt) = stmt.downcast_ref::<WhileStmt>() else { return };
                self.bind_expr(&while_stmt.condition);
                self.bind_stmt(&while_stmt.body);
            }
            StmtType::DoWhileStmt => {
                let Some(do_while) = stmt.downcast_ref::<DoWhileStmt>() else { return };
                self.bind_stmt(&do_while.body);
                self.bind_expr(&do_while.condition);
            }
            StmtType::ForStmt => {
                let Some(for_stmt) = stmt.downcast_ref::<ForStmt>() else { return };
                let scope = self.enter_scope(ScopeKind::Block);

                if let Some(init) = &for_stmt.init {
                    self.declare_lexical(std::slice::from_ref(init), scope);
                    self.bind_stmt(init);
                }
                if let Some(condition) = &for_stmt.condition {
                    self.bind_expr(condition);
                }
                if let Some(update) = &for_stmt.update {
                    self.bind_expr(update);
                }
                self.bind_stmt(&for_stmt.body);

                self.exit_scope();
            }
            StmtType::ForInStmt => {
                let Some(for_in) = stmt.downcast_ref::<ForInStmt>() else { return };
                self.bind_expr(&for_in.right);

                let scope = self.enter_scope(ScopeKind::Block);
                match for_in.declaration {
                    Some(DeclarationKind::Let) | Some(DeclarationKind::Const) => {
                        self.declare_target(scope, &for_in.target, SymbolKind::Variable, for_in.span.start.0);
                    }
                    Some(DeclarationKind::Var) => {
                        let function_scope = self.function_scope();
                        self.declare_unhoisted(function_scope, &for_in.target, for_in.span.start.0);
                    }
                    None => {
                        for (name, node) in for_in.target.names() {
                            self.write_reference(node, name, for_in.span.start.0);
                        }
                    }
                }
                self.bind_target_defaults(&for_in.target);
                self.bind_stmt(&for_in.body);

                self.exit_scope();
            }
            StmtType::FnDeclStmt => {
                let Some(function) = stmt.downcast_ref::<FnDeclStmt>() else { return };
                if !self.references.contains_key(&function.id) {
                    let scope = self.function_scope();
                    self.declare(scope, &function.identifier, SymbolKind::Function, function.id, function.span.start.0);
                }
                self.bind_function(&function.parameters, &function.body);
            }
            StmtType::ReturnStmt => {
                let Some(return_stmt) = stmt.downcast_ref::<ReturnStmt>() else { return };
                if let Some(value) = &return_stmt.value {
                    self.bind_expr(value);
                }
            }
            StmtType::ImportStmt => {
                let Some(import) = stmt.downcast_ref::<ImportStmt>() else { return };
                for binding in &import.bindings {
                    if !self.references.contains_key(&binding.id) {
                        let scope = self.current_scope();
                        self.declare(scope, &binding.local, SymbolKind::Import, binding.id, binding.span.start.0);
                    }
                }
            }
            StmtType::ExportStmt => {
                if let Some(export) = stmt.downcast_ref::<ExportStmt>() {
                    self.bind_stmt(&export.declaration);
                }
            }
            StmtType::ThrowStmt => {
                if let Some(throw) = stmt.downcast_ref::<ThrowStmt>() {
                    self.bind_expr(&throw.value);
                }
            }
            StmtType::TryStmt => {
                let Some(try_stmt) = stmt.downcast_ref::<TryStmt>() else { return };
                self.bind_block(&try_stmt.block);

                if let Some(handler) = &try_stmt.handler {
                    let scope = self.enter_scope(ScopeKind::Block);
                    if let Some(parameter) = &handler.parameter {
                        self.declare_target(scope, parameter, SymbolKind::Parameter, handler.span.start.0);
                        self.bind_target_defaults(parameter);
                    }
                    self.bind_block(&handler.body);
                    self.exit_scope();
                }

                if let Some(finalizer) = &try_stmt.finalizer {
                    self.bind_block(finalizer);
                }
            }
            StmtType::SwitchStmt => {
                let Some(switch) = stmt.downcast_ref::<SwitchStmt>() else { return };
                self.bind_expr(&switch.discriminant);

                let scope = self.enter_scope(ScopeKind::Block);
                for case in &switch.cases {
                    self.declare_lexical(&case.body, scope);
                }
                for case in &switch.cases {
                    if let Some(test) = &case.test {
                        self.bind_expr(test);
                    }
                    for stmt in &case.body {
                        self.bind_stmt(stmt);
                    }
                }
                self.exit_scope();
            }
            StmtType::LabeledStmt => {
                if let Some(labeled) = stmt.downcast_ref::<LabeledStmt>() {
                    self.bind_stmt(&labeled.body);
                }
            }
            StmtType::ClassDeclStmt => {
                let Some(class) = stmt.downcast_ref::<ClassDeclStmt>() else { return };
                if !self.references.contains_key(&class.id) {
                    let scope = self.current_scope();
                    self.declare(scope, &class.identifier, SymbolKind::Class, class.id, class.span.start.0);
                }
                self.bind_class(class.superclass.as_ref(), &class.members);
            }
            StmtType::BreakStmt | StmtType::ContinueStmt | StmtType::EmptyStmt => {}
        }
    }

    fn bind_class(&mut self, superclass: Option<&ExprWrapper>, members: &[ClassMember]) {
        if let Some(superclass) = superclass {
            self.bind_expr(superclass);
        }
        for value in members.iter().filter_map(|member| member.value.as_ref()) {
            self.bind_expr(value);
        }
    }

    // EXPRESSIONS

    /// Binds an assignment or update target.
    fn bind_target(&mut self, target: &ExprWrapper) {
        match target.downcast_ref::<SymbolExpr>() {
            Some(symbol) => self.write_reference(symbol.id, &symbol.value, symbol.span.start.0),
            None => self.bind_expr(target),
        }
    }

    fn bind_expr(&mut self, expr: &ExprWrapper) {
        match expr.get_expr_type() {
            ExprType::Number | ExprType::String | ExprType::Boolean | ExprType::Null | ExprType::Regex => {}
            ExprType::Symbol => {
                if let Some(symbol) = expr.downcast_ref::<SymbolExpr>() {
                    self.reference(symbol.id, &symbol.value);
                }
            }
            ExprType::Array => {
                let Some(array) = expr.downcast_ref::<ArrayExpr>() else { return };
                for element in &array.elements {
                    self.bind_expr(element);
                }
            }
            ExprType::Object => {
                let Some(object) = expr.downcast_ref::<ObjectExpr>() else { return };
                for (_, value) in &object.properties {
                    self.bind_expr(value);
                }
            }
            ExprType::Function => {
                let Some(function) = expr.downcast_ref::<FunctionExpr>() else { return };
                match &function.name {
                    Some((name, id)) => {
                        // The name is visible only inside the function itself
                        let scope = self.enter_scope(ScopeKind::Block);
                        self.declare(scope, name, SymbolKind::Function, *id, function.span.start.0);
                        self.bind_function(&function.parameters, &function.body);
                        self.exit_scope();
                    }
                    None => self.bind_function(&function.parameters, &function.body),
                }
            }
            ExprType::Binary => {
                let Some(binary) = expr.downcast_ref::<BinaryExpr>() else { return };
                self.bind_expr(&binary.left);
                self.bind_expr(&binary.right);
            }
            ExprType::Prefix => {
                if let Some(prefix) = expr.downcast_ref::<PrefixExpr>() {
                    self.bind_expr(&prefix.right_expr);
                }
            }
            ExprType::Update => {
                if let Some(update) = expr.downcast_ref::<UpdateExpr>() {
                    self.bind_target(&update.argument);
                }
            }
            ExprType::Assignment => {
                let Some(assignment) = expr.downcast_ref::<AssignmentExpr>() else { return };
                self.bind_target(&assignment.assignee);
                self.bind_expr(&assignment.value);
            }
            ExprType::CallExpr => {
                let Some(call) = expr.downcast_ref::<CallExpr>() else { return };
                self.bind_expr(&call.callee);
                for argument in &call.arguments {
                    self.bind_expr(argument);
                }
            }
            ExprType::Member => {
                let Some(member) = expr.downcast_ref::<MemberExpr>() else { return };
                self.bind_expr(&member.object);
                if let MemberProperty::Computed(property) = &member.property {
                    self.bind_expr(property);
                }
            }
            ExprType::New => {
                let Some(new_expr) = expr.downcast_ref::<NewExpr>() else { return };
                self.bind_expr(&new_expr.callee);
                for argument in &new_expr.arguments {
                    self.bind_expr(argument);
                }
            }
            ExprType::Conditional => {
                let Some(conditional) = expr.downcast_ref::<ConditionalExpr>() else { return };
                self.bind_expr(&conditional.test);
                self.bind_expr(&conditional.consequent);
                self.bind_expr(&conditional.alternate);
            }
            ExprType::Template => {
                let Some(template) = expr.downcast_ref::<TemplateExpr>() else { return };
                for substitution in &template.expressions {
                    self.bind_expr(substitution);
                }
            }
            ExprType::Sequence => {
                let Some(sequence) = expr.downcast_ref::<SequenceExpr>() else { return };
                for expression in &sequence.expressions {
                    self.bind_expr(expression);
                }
            }
            ExprType::Spread => {
                if let Some(spread) = expr.downcast_ref::<SpreadExpr>() {
                    self.bind_expr(&spread.argument);
                }
            }
            ExprType::Class => {
                let Some(class) = expr.downcast_ref::<ClassExpr>() else { return };
                match &class.name {
                    Some((name, id)) => {
                        let scope = self.enter_scope(ScopeKind::Block);
                        self.declare(scope, name, SymbolKind::Class, *id, class.span.start.0);
                        self.bind_class(class.superclass.as_ref(), &class.members);
                        self.exit_scope();
                    }
                    None => self.bind_class(class.superclass.as_ref(), &class.members),
                }
            }
        }
    }
}

impl Default for Binder {
    fn default() -> Self {
        Binder::new()
    }
}

/// Builds the symbol table of `ast` with every kind set still empty.
pub fn bind(ast: &BlockStmt) -> SymbolModel {
    Binder::new().bind(ast)
}
