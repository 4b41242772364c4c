use std::any::Any;

use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{Expr, ExprType, ExprWrapper, NodeId},
    statements::BlockStmt,
};

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone)]
pub struct NumberExpr {
    pub value: f64,
    pub span: Span,
}

impl Expr for NumberExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Number
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// String Expression
/// Represents a quoted string or a template literal in the AST.
#[derive(Debug, Clone)]
pub struct StringExpr {
    pub value: String,
    pub is_template: bool,
    pub span: Span,
}

impl Expr for StringExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::String
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

#[derive(Debug, Clone)]
pub struct BooleanExpr {
    pub value: bool,
    pub span: Span,
}

impl Expr for BooleanExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Boolean
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

#[derive(Debug, Clone)]
pub struct NullExpr {
    pub span: Span,
}

impl Expr for NullExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Null
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Symbol Expression
/// Represents an identifier reference in the AST. `undefined` is a symbol too.
#[derive(Debug, Clone)]
pub struct SymbolExpr {
    pub value: String,
    pub id: NodeId,
    pub span: Span,
}

impl Expr for SymbolExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Symbol
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

#[derive(Debug, Clone)]
pub struct ArrayExpr {
    pub elements: Vec<ExprWrapper>,
    pub span: Span,
}

impl Expr for ArrayExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Array
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Object Expression
/// `{ a: 1, b }` - shorthand properties hold a SymbolExpr value.
#[derive(Debug, Clone)]
pub struct ObjectExpr {
    pub properties: Vec<(String, ExprWrapper)>,
    pub span: Span,
}

impl Expr for ObjectExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Object
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// The name or destructuring pattern a declaration binds.
#[derive(Debug, Clone)]
pub enum BindingTarget {
    Identifier(String, NodeId),
    /// `{ a, b: c }` or `[x, , ...rest]`, flattened to the names it binds
    Pattern {
        elements: Vec<PatternElement>,
        /// Defaults given to nested patterns as a whole, such as `{ a: { b } = {} }`
        nested_defaults: Vec<ExprWrapper>,
    },
}

impl BindingTarget {
    /// Each bound name with the id of its binding occurrence.
    pub fn names(&self) -> Vec<(&str, NodeId)> {
        match self {
            BindingTarget::Identifier(name, id) => vec![(name.as_str(), *id)],
            BindingTarget::Pattern { elements, .. } => {
                elements.iter().map(|element| (element.name.as_str(), element.id)).collect()
            }
        }
    }
}

/// A name bound inside a destructuring pattern, optionally with a default value.
#[derive(Debug, Clone)]
pub struct PatternElement {
    pub name: String,
    pub id: NodeId,
    pub default: Option<ExprWrapper>,
    pub span: Span,
}

/// A declared function parameter, optionally with a default value.
///
/// `is_rest` marks `...args`, which collects the remaining arguments.
#[derive(Debug, Clone)]
pub struct Parameter {
    pub target: BindingTarget,
    pub default: Option<ExprWrapper>,
    pub is_rest: bool,
    pub span: Span,
}

/// Function Expression
/// Represents `function name(a, b) { ... }` and arrow functions in expression position.
///
/// An arrow function with an expression body gets a synthesized block holding a return.
#[derive(Debug, Clone)]
pub struct FunctionExpr {
    pub name: Option<(String, NodeId)>,
    pub parameters: Vec<Parameter>,
    pub body: BlockStmt,
    pub is_arrow: bool,
    pub span: Span,
}

impl Expr for FunctionExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Function
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

// COMPLEX

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
///
/// This includes logical (`a && b`) and relational (`a in b`) operators as well as arithmetic.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: ExprWrapper,
    pub operator: Token,
    pub right: ExprWrapper,
    pub span: Span,
}

impl Expr for BinaryExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Binary
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Prefix Expression
/// Represents `!x`, `-x`, `+x`, `~x`, `typeof x`, `void x` and `delete x`.
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    pub operator: Token,
    pub right_expr: ExprWrapper,
    pub span: Span,
}

impl Expr for PrefixExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Prefix
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Update Expression
/// Represents `++x`, `x++`, `--x` and `x--`.
#[derive(Debug, Clone)]
pub struct UpdateExpr {
    pub operator: Token,
    pub argument: ExprWrapper,
    pub prefix: bool,
    pub span: Span,
}

impl Expr for UpdateExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Update
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Assignment Expression
/// Represents plain (`=`) and compound (`+=`, `-=`, ...) assignments in the AST.
#[derive(Debug, Clone)]
pub struct AssignmentExpr {
    pub assignee: ExprWrapper,
    pub operator: Token,
    pub value: ExprWrapper,
    pub span: Span,
}

impl Expr for AssignmentExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Assignment
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Call Expression
/// Represents a function call in the AST.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub callee: ExprWrapper,
    pub arguments: Vec<ExprWrapper>,
    pub span: Span,
}

impl Expr for CallExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::CallExpr
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

#[derive(Debug, Clone)]
pub enum MemberProperty {
    /// `object.name`
    Named(String),
    /// `object[expression]`
    Computed(ExprWrapper),
}

/// Member Expression
/// Represents a property access in the AST.
#[derive(Debug, Clone)]
pub struct MemberExpr {
    pub object: ExprWrapper,
    pub property: MemberProperty,
    pub span: Span,
}

impl Expr for MemberExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Member
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// New Expression
/// Represents `new Callee(args)`; the argument list may be omitted.
#[derive(Debug, Clone)]
pub struct NewExpr {
    pub callee: ExprWrapper,
    pub arguments: Vec<ExprWrapper>,
    pub span: Span,
}

impl Expr for NewExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::New
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Conditional Expression
/// Represents `test ? consequent : alternate`.
#[derive(Debug, Clone)]
pub struct ConditionalExpr {
    pub test: ExprWrapper,
    pub consequent: ExprWrapper,
    pub alternate: ExprWrapper,
    pub span: Span,
}

impl Expr for ConditionalExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Conditional
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Template Expression
/// A template literal with `${...}` substitutions; `quasis` holds the raw text around them.
#[derive(Debug, Clone)]
pub struct TemplateExpr {
    pub quasis: Vec<String>,
    pub expressions: Vec<ExprWrapper>,
    pub span: Span,
}

impl Expr for TemplateExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Template
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Regular expression literal `/pattern/flags`.
#[derive(Debug, Clone)]
pub struct RegexExpr {
    pub pattern: String,
    pub flags: String,
    pub span: Span,
}

impl Expr for RegexExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Regex
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Sequence Expression
/// `a, b, c` evaluates each operand and yields the last.
#[derive(Debug, Clone)]
pub struct SequenceExpr {
    pub expressions: Vec<ExprWrapper>,
    pub span: Span,
}

impl Expr for SequenceExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Sequence
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// `...argument` inside an argument list, array or object literal.
#[derive(Debug, Clone)]
pub struct SpreadExpr {
    pub argument: ExprWrapper,
    pub span: Span,
}

impl Expr for SpreadExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Spread
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// A method or field of a class body.
#[derive(Debug, Clone)]
pub struct ClassMember {
    pub key: String,
    pub is_static: bool,
    /// The method as a function expression, or the field initializer
    pub value: Option<ExprWrapper>,
    pub span: Span,
}

/// Class Expression
/// Represents `class Name extends Base { ... }` in expression position.
#[derive(Debug, Clone)]
pub struct ClassExpr {
    pub name: Option<(String, NodeId)>,
    pub superclass: Option<ExprWrapper>,
    pub members: Vec<ClassMember>,
    pub span: Span,
}

impl Expr for ClassExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Class
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}
