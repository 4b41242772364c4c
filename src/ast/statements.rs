use std::{any::Any, slice::Iter};

use crate::Span;

use super::{
    ast::{ExprWrapper, NodeId, Stmt, StmtType, StmtWrapper},
    expressions::{BindingTarget, ClassMember, Parameter},
};

#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub body: Vec<StmtWrapper>,
    pub id: NodeId,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.body.iter()
    }
}

impl Stmt for BlockStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::BlockStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub expression: ExprWrapper,
    pub span: Span,
}

impl Stmt for ExpressionStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ExpressionStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        self.expression.to_stmt_wrapper()
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DeclarationKind {
    Var,
    Let,
    Const,
}

/// A single `name = value` or `{ a, b } = value` entry of a declaration list.
#[derive(Debug, Clone)]
pub struct VarDeclarator {
    pub target: BindingTarget,
    pub assigned_value: Option<ExprWrapper>,
    pub span: Span,
}

/// `var a = 1, b;`, `let x;` or `const y = z;`
#[derive(Debug, Clone)]
pub struct VarDeclStmt {
    pub kind: DeclarationKind,
    pub declarations: Vec<VarDeclarator>,
    pub span: Span,
}

impl Stmt for VarDeclStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::VarDeclStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone)]
pub struct IfStmt {
    pub condition: ExprWrapper,
    pub consequent: StmtWrapper,
    pub alternate: Option<StmtWrapper>,
    pub span: Span,
}

impl Stmt for IfStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::IfStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub condition: ExprWrapper,
    pub body: StmtWrapper,
    pub span: Span,
}

impl Stmt for WhileStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::WhileStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone)]
pub struct DoWhileStmt {
    pub body: StmtWrapper,
    pub condition: ExprWrapper,
    pub span: Span,
}

impl Stmt for DoWhileStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::DoWhileStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Classic three-part loop. The head gets its own scope, identified by `id`.
#[derive(Debug, Clone)]
pub struct ForStmt {
    pub init: Option<StmtWrapper>,
    pub condition: Option<ExprWrapper>,
    pub update: Option<ExprWrapper>,
    pub body: StmtWrapper,
    pub id: NodeId,
    pub span: Span,
}

impl Stmt for ForStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ForStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// `for (x in obj)` and `for (const x of list)`.
///
/// `declaration` is `None` when the loop reuses an existing binding.
#[derive(Debug, Clone)]
pub struct ForInStmt {
    pub declaration: Option<DeclarationKind>,
    pub target: BindingTarget,
    pub is_of: bool,
    pub right: ExprWrapper,
    pub body: StmtWrapper,
    pub id: NodeId,
    pub span: Span,
}

impl Stmt for ForInStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ForInStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone)]
pub struct FnDeclStmt {
    pub identifier: String,
    pub id: NodeId,
    pub parameters: Vec<Parameter>,
    pub body: BlockStmt,
    pub span: Span,
}

impl Stmt for FnDeclStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::FnDeclStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub value: Option<ExprWrapper>,
    pub span: Span,
}

impl Stmt for ReturnStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ReturnStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// A local name introduced by an import.
#[derive(Debug, Clone)]
pub struct ImportBinding {
    pub local: String,
    pub id: NodeId,
    pub span: Span,
}

/// `import a from "m"`, `import { b, c as d } from "m"`, `import * as ns from "m"`
/// and the bare `import "m"`.
#[derive(Debug, Clone)]
pub struct ImportStmt {
    pub bindings: Vec<ImportBinding>,
    pub from: String,
    pub span: Span,
}

impl Stmt for ImportStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ImportStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// `export <declaration>` or `export default <expression>`.
#[derive(Debug, Clone)]
pub struct ExportStmt {
    pub declaration: StmtWrapper,
    pub span: Span,
}

impl Stmt for ExportStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ExportStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone)]
pub struct BreakStmt {
    pub span: Span,
}

impl Stmt for BreakStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::BreakStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone)]
pub struct ContinueStmt {
    pub span: Span,
}

impl Stmt for ContinueStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ContinueStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// A lone `;`
#[derive(Debug, Clone)]
pub struct EmptyStmt {
    pub span: Span,
}

impl Stmt for EmptyStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::EmptyStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// `try { } catch (e) { } finally { }`; at least one of the handler and the finalizer is present.
#[derive(Debug, Clone)]
pub struct TryStmt {
    pub block: BlockStmt,
    pub handler: Option<CatchClause>,
    pub finalizer: Option<BlockStmt>,
    pub span: Span,
}

/// `catch (parameter) { body }`; the parameter may be left out.
#[derive(Debug, Clone)]
pub struct CatchClause {
    pub parameter: Option<BindingTarget>,
    pub body: BlockStmt,
    pub span: Span,
}

impl Stmt for TryStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::TryStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone)]
pub struct ThrowStmt {
    pub value: ExprWrapper,
    pub span: Span,
}

impl Stmt for ThrowStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ThrowStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// A `case test:` clause, or `default:` when `test` is `None`.
#[derive(Debug, Clone)]
pub struct SwitchCase {
    pub test: Option<ExprWrapper>,
    pub body: Vec<StmtWrapper>,
    pub span: Span,
}

/// All clauses of a switch share one block scope.
#[derive(Debug, Clone)]
pub struct SwitchStmt {
    pub discriminant: ExprWrapper,
    pub cases: Vec<SwitchCase>,
    pub span: Span,
}

impl Stmt for SwitchStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::SwitchStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// `label: body`
#[derive(Debug, Clone)]
pub struct LabeledStmt {
    pub label: String,
    pub body: StmtWrapper,
    pub span: Span,
}

impl Stmt for LabeledStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::LabeledStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// `class Name extends Base { ... }`, block-scoped like `let`.
#[derive(Debug, Clone)]
pub struct ClassDeclStmt {
    pub identifier: String,
    pub id: NodeId,
    pub superclass: Option<ExprWrapper>,
    pub members: Vec<ClassMember>,
    pub span: Span,
}

impl Stmt for ClassDeclStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ClassDeclStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}
