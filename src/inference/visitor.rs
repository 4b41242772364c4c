use tracing::{debug, trace};

use crate::{
    ast::{
        ast::{Expr, ExprType, ExprWrapper, NodeId, Stmt, StmtType, StmtWrapper},
        expressions::{
            ArrayExpr, AssignmentExpr, BinaryExpr, BindingTarget, CallExpr, ClassExpr, ClassMember, ConditionalExpr,
            FunctionExpr, MemberExpr, MemberProperty, NewExpr, ObjectExpr, Parameter, PrefixExpr, SequenceExpr,
            SpreadExpr, SymbolExpr, TemplateExpr, UpdateExpr,
        },
        statements::{
            BlockStmt, ClassDeclStmt, DoWhileStmt, ExportStmt, ExpressionStmt, FnDeclStmt, ForInStmt, ForStmt, IfStmt,
            ImportStmt, LabeledStmt, ReturnStmt, SwitchStmt, ThrowStmt, TryStmt, VarDeclStmt, WhileStmt,
        },
    },
    symbols::model::SymbolModel,
    types::{kind::Kind, type_set::TypeSet},
};

use super::classify::classify_expr;

/// Single textual pass recording the kinds assigned to each symbol.
///
/// Visits every statement once in source order, including both branches of
/// conditionals, loop bodies and nested function bodies. At each declaration
/// or assignment site the right-hand side is visited first, then classified
/// against the symbols' current sets and unioned into the target. Sites the
/// pass does not understand are skipped.
pub struct TypeInferrer<'a> {
    model: &'a mut SymbolModel,
}

impl<'a> TypeInferrer<'a> {
    pub fn new(model: &'a mut SymbolModel) -> Self {
        TypeInferrer { model }
    }

    pub fn infer(mut self, ast: &BlockStmt) {
        self.visit_block(ast);

        for symbol in self.model.symbols() {
            debug!(symbol = symbol.name(), kinds = %symbol.types(), "inferred");
        }
    }

    fn widen(&mut self, node: NodeId, types: &TypeSet) {
        let Some(id) = self.model.resolve(node) else {
            trace!(node, "assignment target has no symbol");
            return;
        };

        if let Some(symbol) = self.model.symbol_mut(id) {
            if symbol.add_types(types) {
                trace!(symbol = symbol.name(), kinds = %symbol.types(), "widened");
            }
        }
    }

    fn widen_kind(&mut self, node: NodeId, kind: Kind) {
        let Some(id) = self.model.resolve(node) else {
            trace!(node, "declaration has no symbol");
            return;
        };

        if let Some(symbol) = self.model.symbol_mut(id) {
            if symbol.add_kind(kind) {
                trace!(symbol = symbol.name(), kinds = %symbol.types(), "widened");
            }
        }
    }

    /// Records what a destructuring pattern binds: its defaults, and `fallback`
    /// for every name since the destructured value is not tracked.
    fn visit_pattern(&mut self, target: &BindingTarget, fallback: Option<Kind>) {
        let BindingTarget::Pattern { elements, nested_defaults } = target else { return };

        for default in nested_defaults {
            self.visit_expr(default);
        }
        for element in elements {
            if let Some(default) = &element.default {
                self.visit_expr(default);
                let types = classify_expr(self.model, default);
                self.widen(element.id, &types);
            }
            if let Some(kind) = fallback {
                self.widen_kind(element.id, kind);
            }
        }
    }

    pub fn visit_block(&mut self, block: &BlockStmt) {
        for stmt in block.iter() {
            self.visit_stmt(stmt);
        }
    }

    pub fn visit_stmt(&mut self, stmt: &StmtWrapper) {
        match stmt.get_stmt_type() {
            StmtType::ExpressionStmt => {
                if let Some(expression) = stmt.downcast_ref::<ExpressionStmt>() {
                    self.visit_expr(&expression.expression);
                }
            }
            StmtType::BlockStmt => {
                if let Some(block) = stmt.downcast_ref::<BlockStmt>() {
                    self.visit_block(block);
                }
            }
            StmtType::VarDeclStmt => {
                let Some(declaration) = stmt.downcast_ref::<VarDeclStmt>() else { return };
                for declarator in &declaration.declarations {
                    let Some(value) = &declarator.assigned_value else { continue };
                    self.visit_expr(value);

                    match &declarator.target {
                        BindingTarget::Identifier(_, id) => {
                            let types = classify_expr(self.model, value);
                            self.widen(*id, &types);
                        }
                        pattern => self.visit_pattern(pattern, Some(Kind::Unknown)),
                    }
                }
            }
            StmtType::IfStmt => {
                let Some(if_stmt) = stmt.downcast_ref::<IfStmt>() else { return };
                self.visit_expr(&if_stmt.condition);
                self.visit_stmt(&if_stmt.consequent);
                if let Some(alternate) = &if_stmt.alternate {
                    self.visit_stmt(alternate);
                }
            }
            StmtType::WhileStmt => {
                let Some(while_stmt) = stmt.downcast_ref::<WhileStmt>() else { return };
                self.visit_expr(&while_stmt.condition);
                self.visit_stmt(&while_stmt.body);
            }
            StmtType::DoWhileStmt => {
                let Some(do_while) = stmt.downcast_ref::<DoWhileStmt>() else { return };
                self.visit_stmt(&do_while.body);
                self.visit_expr(&do_while.condition);
            }
            StmtType::ForStmt => {
                let Some(for_stmt) = stmt.downcast_ref::<ForStmt>() else { return };
                if let Some(init) = &for_stmt.init {
                    self.visit_stmt(init);
                }
                if let Some(condition) = &for_stmt.condition {
                    self.visit_expr(condition);
                }
                if let Some(update) = &for_stmt.update {
                    self.visit_expr(update);
                }
                self.visit_stmt(&for_stmt.body);
            }
            StmtType::ForInStmt => {
                let Some(for_in) = stmt.downcast_ref::<ForInStmt>() else { return };
                self.visit_expr(&for_in.right);
                // Keys are strings; iterated values can be anything
                match &for_in.target {
                    BindingTarget::Identifier(_, id) => {
                        let kind = if for_in.is_of { Kind::Unknown } else { Kind::String };
                        self.widen_kind(*id, kind);
                    }
                    pattern => self.visit_pattern(pattern, Some(Kind::Unknown)),
                }
                self.visit_stmt(&for_in.body);
            }
            StmtType::FnDeclStmt => {
                let Some(function) = stmt.downcast_ref::<FnDeclStmt>() else { return };
                self.widen_kind(function.id, Kind::Function);
                self.visit_function(&function.parameters, &function.body);
            }
            StmtType::ReturnStmt => {
                let Some(return_stmt) = stmt.downcast_ref::<ReturnStmt>() else { return };
                if let Some(value) = &return_stmt.value {
                    self.visit_expr(value);
                }
            }
            StmtType::ImportStmt => {
                let Some(import) = stmt.downcast_ref::<ImportStmt>() else { return };
                for binding in &import.bindings {
                    self.widen_kind(binding.id, Kind::Unknown);
                }
            }
            StmtType::ExportStmt => {
                if let Some(export) = stmt.downcast_ref::<ExportStmt>() {
                    self.visit_stmt(&export.declaration);
                }
            }
            StmtType::ThrowStmt => {
                if let Some(throw) = stmt.downcast_ref::<ThrowStmt>() {
                    self.visit_expr(&throw.value);
                }
            }
            StmtType::TryStmt => {
                let Some(try_stmt) = stmt.downcast_ref::<TryStmt>() else { return };
                self.visit_block(&try_stmt.block);

                if let Some(handler) = &try_stmt.handler {
                    // Anything can be thrown
                    if let Some(parameter) = &handler.parameter {
                        for (_, id) in parameter.names() {
                            self.widen_kind(id, Kind::Unknown);
                        }
                        self.visit_pattern(parameter, None);
                    }
                    self.visit_block(&handler.body);
                }

                if let Some(finalizer) = &try_stmt.finalizer {
                    self.visit_block(finalizer);
                }
            }
            StmtType::SwitchStmt => {
                let Some(switch) = stmt.downcast_ref::<SwitchStmt>() else { return };
                self.visit_expr(&switch.discriminant);
                for case in &switch.cases {
                    if let Some(test) = &case.test {
                        self.visit_expr(test);
                    }
                    for stmt in &case.body {
                        self.visit_stmt(stmt);
                    }
                }
            }
            StmtType::LabeledStmt => {
                if let Some(labeled) = stmt.downcast_ref::<LabeledStmt>() {
                    self.visit_stmt(&labeled.body);
                }
            }
            StmtType::ClassDeclStmt => {
                let Some(class) = stmt.downcast_ref::<ClassDeclStmt>() else { return };
                self.widen_kind(class.id, Kind::Function);
                self.visit_class(class.superclass.as_ref(), &class.members);
            }
            StmtType::BreakStmt | StmtType::ContinueStmt | StmtType::EmptyStmt => {}
        }
    }

    fn visit_function(&mut self, parameters: &[Parameter], body: &BlockStmt) {
        for parameter in parameters {
            if let Some(default) = &parameter.default {
                self.visit_expr(default);
                if let BindingTarget::Identifier(_, id) = &parameter.target {
                    let types = classify_expr(self.model, default);
                    self.widen(*id, &types);
                }
            }

            match &parameter.target {
                BindingTarget::Identifier(_, id) if parameter.is_rest => self.widen_kind(*id, Kind::Array),
                BindingTarget::Identifier(..) => {}
                pattern => self.visit_pattern(pattern, None),
            }
        }

        self.visit_block(body);
    }

    fn visit_class(&mut self, superclass: Option<&ExprWrapper>, members: &[ClassMember]) {
        if let Some(superclass) = superclass {
            self.visit_expr(superclass);
        }
        for value in members.iter().filter_map(|member| member.value.as_ref()) {
            self.visit_expr(value);
        }
    }

    pub fn visit_expr(&mut self, expr: &ExprWrapper) {
        match expr.get_expr_type() {
            ExprType::Number
            | ExprType::String
            | ExprType::Boolean
            | ExprType::Null
            | ExprType::Symbol
            | ExprType::Regex => {}
            ExprType::Assignment => {
                let Some(assignment) = expr.downcast_ref::<AssignmentExpr>() else { return };
                self.visit_expr(&assignment.value);

                match assignment.assignee.downcast_ref::<SymbolExpr>() {
                    Some(target) => {
                        // Compound operators read the target's current kinds
                        let types = classify_expr(self.model, expr);
                        self.widen(target.id, &types);
                    }
                    None => self.visit_expr(&assignment.assignee),
                }
            }
            ExprType::Update => {
                let Some(update) = expr.downcast_ref::<UpdateExpr>() else { return };
                match update.argument.downcast_ref::<SymbolExpr>() {
                    Some(target) => self.widen_kind(target.id, Kind::Number),
                    None => self.visit_expr(&update.argument),
                }
            }
            ExprType::Array => {
                let Some(array) = expr.downcast_ref::<ArrayExpr>() else { return };
                for element in &array.elements {
                    self.visit_expr(element);
                }
            }
            ExprType::Object => {
                let Some(object) = expr.downcast_ref::<ObjectExpr>() else { return };
                for (_, value) in &object.properties {
                    self.visit_expr(value);
                }
            }
            ExprType::Function => {
                let Some(function) = expr.downcast_ref::<FunctionExpr>() else { return };
                if let Some((_, id)) = &function.name {
                    self.widen_kind(*id, Kind::Function);
                }
                self.visit_function(&function.parameters, &function.body);
            }
            ExprType::Binary => {
                let Some(binary) = expr.downcast_ref::<BinaryExpr>() else { return };
                self.visit_expr(&binary.left);
                self.visit_expr(&binary.right);
            }
            ExprType::Prefix => {
                if let Some(prefix) = expr.downcast_ref::<PrefixExpr>() {
                    self.visit_expr(&prefix.right_expr);
                }
            }
            ExprType::CallExpr => {
                let Some(call) = expr.downcast_ref::<CallExpr>() else { return };
                self.visit_expr(&call.callee);
                for argument in &call.arguments {
                    self.visit_expr(argument);
                }
            }
            ExprType::Member => {
                let Some(member) = expr.downcast_ref::<MemberExpr>() else { return };
                self.visit_expr(&member.object);
                if let MemberProperty::Computed(property) = &member.property {
                    self.visit_expr(property);
                }
            }
            ExprType::New => {
                let Some(new_expr) = expr.downcast_ref::<NewExpr>() else { return };
                self.visit_expr(&new_expr.callee);
                for argument in &new_expr.arguments {
                    self.visit_expr(argument);
                }
            }
            ExprType::Conditional => {
                let Some(conditional) = expr.downcast_ref::<ConditionalExpr>() else { return };
                self.visit_expr(&conditional.test);
                self.visit_expr(&conditional.consequent);
                self.visit_expr(&conditional.alternate);
            }
            ExprType::Template => {
                let Some(template) = expr.downcast_ref::<TemplateExpr>() else { return };
                for substitution in &template.expressions {
                    self.visit_expr(substitution);
                }
            }
            ExprType::Sequence => {
                let Some(sequence) = expr.downcast_ref::<SequenceExpr>() else { return };
                for expression in &sequence.expressions {
                    self.visit_expr(expression);
                }
            }
            ExprType::Spread => {
                if let Some(spread) = expr.downcast_ref::<SpreadExpr>() {
                    self.visit_expr(&spread.argument);
                }
            }
            ExprType::Class => {
                let Some(class) = expr.downcast_ref::<ClassExpr>() else { return };
                if let Some((_, id)) = &class.name {
                    self.widen_kind(*id, Kind::Function);
                }
                self.visit_class(class.superclass.as_ref(), &class.members);
            }
        }
    }
}
