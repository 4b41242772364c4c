//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs including:
//! - Variable declarations
//! - Function declarations, function expressions and arrows
//! - Expressions and operator precedence
//! - Control flow statements
//! - Imports and exports
//! - Exceptions, switch and labels
//! - Templates, regular expressions, classes and destructuring
//! - Automatic semicolon insertion

use std::rc::Rc;

use crate::{
    ast::{
        ast::{Expr, ExprType, Stmt, StmtType},
        expressions::{
            AssignmentExpr, BinaryExpr, BindingTarget, ClassExpr, FunctionExpr, MemberExpr, MemberProperty, NumberExpr,
            ObjectExpr, PrefixExpr, RegexExpr, SequenceExpr, TemplateExpr, UpdateExpr,
        },
        statements::{
            BlockStmt, ClassDeclStmt, DeclarationKind, ExportStmt, ExpressionStmt, FnDeclStmt, ForInStmt, ImportStmt,
            LabeledStmt, ReturnStmt, SwitchStmt, TryStmt, VarDeclStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::tokenize,
};

use super::parser::parse;

fn parse_source(source: &str) -> Result<BlockStmt, Error> {
    let tokens = tokenize(source.to_string(), Some("test.js".to_string()))?;
    let (_, result) = parse(tokens, Rc::new("test.js".to_string()));
    result
}

fn first_expression(block: &BlockStmt) -> &ExpressionStmt {
    block.body[0].downcast_ref::<ExpressionStmt>().unwrap()
}

fn bound_names(target: &BindingTarget) -> Vec<&str> {
    target.names().into_iter().map(|(name, _)| name).collect()
}

#[test]
fn test_parse_variable_declaration() {
    let block = parse_source("let x = 42;").unwrap();
    let decl = block.body[0].downcast_ref::<VarDeclStmt>().unwrap();

    assert_eq!(decl.kind, DeclarationKind::Let);
    assert_eq!(decl.declarations.len(), 1);
    assert_eq!(bound_names(&decl.declarations[0].target), vec!["x"]);
    let value = decl.declarations[0].assigned_value.as_ref().unwrap();
    assert_eq!(value.downcast_ref::<NumberExpr>().unwrap().value, 42.0);
}

#[test]
fn test_parse_multiple_declarators() {
    let block = parse_source("var a = 1, b, c = 'x';").unwrap();
    let decl = block.body[0].downcast_ref::<VarDeclStmt>().unwrap();

    assert_eq!(decl.kind, DeclarationKind::Var);
    let names: Vec<&str> = decl.declarations.iter().flat_map(|d| bound_names(&d.target)).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert!(decl.declarations[1].assigned_value.is_none());
}

#[test]
fn test_parse_const_requires_initializer() {
    let error = parse_source("const PI;").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_parse_function_declaration() {
    let block = parse_source("function add(a, b = 2) { return a + b; }").unwrap();
    let function = block.body[0].downcast_ref::<FnDeclStmt>().unwrap();

    assert_eq!(function.identifier, "add");
    assert_eq!(function.parameters.len(), 2);
    assert!(function.parameters[0].default.is_none());
    assert!(function.parameters[1].default.is_some());
    assert_eq!(function.body.body[0].get_stmt_type(), StmtType::ReturnStmt);
}

#[test]
fn test_parse_if_else_statement() {
    let block = parse_source("if (x > 0) { y = 1; } else { y = 2; }").unwrap();
    assert_eq!(block.body[0].get_stmt_type(), StmtType::IfStmt);
}

#[test]
fn test_parse_loops() {
    let block = parse_source(
        "while (i < 10) { i = i + 1; }\ndo { i--; } while (i > 0)\nfor (var j = 0; j < 3; j++) {}\nfor (;;) { break; }",
    )
    .unwrap();

    let types: Vec<StmtType> = block.body.iter().map(|stmt| stmt.get_stmt_type()).collect();
    assert_eq!(types, vec![StmtType::WhileStmt, StmtType::DoWhileStmt, StmtType::ForStmt, StmtType::ForStmt]);
}

#[test]
fn test_parse_for_in_and_of() {
    let block = parse_source("for (var k in obj) {}\nfor (const v of list) {}\nfor (k in obj) {}").unwrap();

    let for_in = block.body[0].downcast_ref::<ForInStmt>().unwrap();
    assert_eq!(for_in.declaration, Some(DeclarationKind::Var));
    assert_eq!(bound_names(&for_in.target), vec!["k"]);
    assert!(!for_in.is_of);

    let for_of = block.body[1].downcast_ref::<ForInStmt>().unwrap();
    assert_eq!(for_of.declaration, Some(DeclarationKind::Const));
    assert!(for_of.is_of);

    let bare = block.body[2].downcast_ref::<ForInStmt>().unwrap();
    assert_eq!(bare.declaration, None);
}

#[test]
fn test_parse_operator_precedence() {
    let block = parse_source("1 + 2 * 3;").unwrap();
    let expr = first_expression(&block);
    let binary = expr.expression.downcast_ref::<BinaryExpr>().unwrap();

    assert_eq!(binary.operator.value, "+");
    assert_eq!(binary.right.get_expr_type(), ExprType::Binary);
}

#[test]
fn test_parse_prefix_binds_tighter_than_binary() {
    let block = parse_source("-a + b;").unwrap();
    let binary = first_expression(&block).expression.downcast_ref::<BinaryExpr>().unwrap();

    assert_eq!(binary.left.get_expr_type(), ExprType::Prefix);
}

#[test]
fn test_parse_assignment_is_right_associative() {
    let block = parse_source("a = b = 1;").unwrap();
    let outer = first_expression(&block).expression.downcast_ref::<AssignmentExpr>().unwrap();

    assert_eq!(outer.assignee.get_expr_type(), ExprType::Symbol);
    assert_eq!(outer.value.get_expr_type(), ExprType::Assignment);
}

#[test]
fn test_parse_compound_assignment() {
    let block = parse_source("total += 5;").unwrap();
    let assignment = first_expression(&block).expression.downcast_ref::<AssignmentExpr>().unwrap();

    assert_eq!(assignment.operator.value, "+=");
}

#[test]
fn test_parse_invalid_assignment_target() {
    let error = parse_source("1 = 2;").unwrap_err();
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::InvalidAssignmentTarget { target: String::from("Number") }
    );
}

#[test]
fn test_parse_update_expressions() {
    let block = parse_source("i++;\n--j;").unwrap();

    let postfix = first_expression(&block).expression.downcast_ref::<UpdateExpr>().unwrap();
    assert!(!postfix.prefix);

    let prefix = block.body[1].downcast_ref::<ExpressionStmt>().unwrap();
    assert!(prefix.expression.downcast_ref::<UpdateExpr>().unwrap().prefix);
}

#[test]
fn test_parse_update_does_not_cross_line_break() {
    let block = parse_source("a\n++b").unwrap();
    assert_eq!(block.body.len(), 2);
}

#[test]
fn test_parse_member_and_call_chain() {
    let block = parse_source("console.log(a[0], b.c);").unwrap();
    let call = first_expression(&block);
    assert_eq!(call.expression.get_expr_type(), ExprType::CallExpr);

    let block = parse_source("o.new = 1;").unwrap();
    let assignment = first_expression(&block).expression.downcast_ref::<AssignmentExpr>().unwrap();
    let member = assignment.assignee.downcast_ref::<MemberExpr>().unwrap();
    assert!(matches!(&member.property, MemberProperty::Named(name) if name == "new"));
}

#[test]
fn test_parse_new_expression() {
    let block = parse_source("var a = new Array(3);\nvar b = new Foo.Bar;").unwrap();
    let decl = block.body[0].downcast_ref::<VarDeclStmt>().unwrap();
    let value = decl.declarations[0].assigned_value.as_ref().unwrap();

    assert_eq!(value.get_expr_type(), ExprType::New);
}

#[test]
fn test_parse_literals() {
    let block = parse_source("x = [1, , 'a', [true]];\ny = { a: 1, 'b': null, c, d() { return 1; } };").unwrap();

    let array = first_expression(&block).expression.downcast_ref::<AssignmentExpr>().unwrap();
    assert_eq!(array.value.get_expr_type(), ExprType::Array);

    let object = block.body[1].downcast_ref::<ExpressionStmt>().unwrap();
    let object = object.expression.downcast_ref::<AssignmentExpr>().unwrap();
    let object = object.value.downcast_ref::<ObjectExpr>().unwrap();
    let keys: Vec<&str> = object.properties.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(keys, vec!["a", "b", "c", "d"]);
    assert_eq!(object.properties[2].1.get_expr_type(), ExprType::Symbol);
    assert_eq!(object.properties[3].1.get_expr_type(), ExprType::Function);
}

#[test]
fn test_parse_hex_number() {
    let block = parse_source("x = 0xff;").unwrap();
    let assignment = first_expression(&block).expression.downcast_ref::<AssignmentExpr>().unwrap();

    assert_eq!(assignment.value.downcast_ref::<NumberExpr>().unwrap().value, 255.0);
}

#[test]
fn test_parse_function_expressions_and_arrows() {
    let block = parse_source("f = function named(a) {};\ng = x => x * 2;\nh = (a, b) => { return a; };\nk = () => 1;").unwrap();

    let functions: Vec<&FunctionExpr> = block
        .body
        .iter()
        .map(|stmt| {
            let stmt = stmt.downcast_ref::<ExpressionStmt>().unwrap();
            let assignment = stmt.expression.downcast_ref::<AssignmentExpr>().unwrap();
            assignment.value.downcast_ref::<FunctionExpr>().unwrap()
        })
        .collect();

    assert_eq!(functions[0].name.as_ref().map(|(name, _)| name.as_str()), Some("named"));
    assert!(!functions[0].is_arrow);

    assert!(functions[1].is_arrow);
    assert_eq!(bound_names(&functions[1].parameters[0].target), vec!["x"]);
    // Expression bodies become a block holding a return
    assert!(functions[1].body.body[0].downcast_ref::<ReturnStmt>().is_some());

    assert_eq!(functions[2].parameters.len(), 2);
    assert!(functions[3].parameters.is_empty());
}

#[test]
fn test_parse_grouping_is_not_arrow() {
    let block = parse_source("x = (a + b) * c;").unwrap();
    let assignment = first_expression(&block).expression.downcast_ref::<AssignmentExpr>().unwrap();
    let product = assignment.value.downcast_ref::<BinaryExpr>().unwrap();

    assert_eq!(product.operator.value, "*");
    assert_eq!(product.left.get_expr_type(), ExprType::Binary);
}

#[test]
fn test_parse_conditional() {
    let block = parse_source("x = a ? 1 : b ? 2 : 3;").unwrap();
    let assignment = first_expression(&block).expression.downcast_ref::<AssignmentExpr>().unwrap();

    assert_eq!(assignment.value.get_expr_type(), ExprType::Conditional);
}

#[test]
fn test_parse_imports() {
    let block = parse_source(
        "import a from 'm';\nimport { b, c as d } from \"m\";\nimport * as ns from 'm';\nimport e, { f } from 'm';\nimport 'side';",
    )
    .unwrap();

    let locals: Vec<Vec<String>> = block
        .body
        .iter()
        .map(|stmt| {
            stmt.downcast_ref::<ImportStmt>()
                .unwrap()
                .bindings
                .iter()
                .map(|binding| binding.local.clone())
                .collect()
        })
        .collect();

    assert_eq!(locals[0], vec!["a"]);
    assert_eq!(locals[1], vec!["b", "d"]);
    assert_eq!(locals[2], vec!["ns"]);
    assert_eq!(locals[3], vec!["e", "f"]);
    assert!(locals[4].is_empty());
}

#[test]
fn test_parse_exports() {
    let block = parse_source("export const a = 1;\nexport function f() {}\nexport default a + 1;\nexport { a as b };").unwrap();

    let declarations: Vec<StmtType> = block
        .body
        .iter()
        .map(|stmt| stmt.downcast_ref::<ExportStmt>().unwrap().declaration.get_stmt_type())
        .collect();

    assert_eq!(
        declarations,
        vec![StmtType::VarDeclStmt, StmtType::FnDeclStmt, StmtType::ExpressionStmt, StmtType::EmptyStmt]
    );
}

#[test]
fn test_parse_automatic_semicolons() {
    let block = parse_source("var a = 1\nvar b = 2\na = b\n{ a }").unwrap();
    assert_eq!(block.body.len(), 4);
}

#[test]
fn test_parse_missing_semicolon_on_same_line() {
    let error = parse_source("var a = 1 var b = 2").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_parse_return_before_line_break() {
    let block = parse_source("function f() {\n  return\n  1\n}").unwrap();
    let function = block.body[0].downcast_ref::<FnDeclStmt>().unwrap();
    let ret = function.body.body[0].downcast_ref::<ReturnStmt>().unwrap();

    assert!(ret.value.is_none());
    assert_eq!(function.body.body.len(), 2);
}

#[test]
fn test_parse_unclosed_block() {
    let error = parse_source("function f() { var a = 1;").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_parse_unique_ids() {
    let block = parse_source("var a = a; var b = a;").unwrap();
    let ids: Vec<i32> = block
        .body
        .iter()
        .flat_map(|stmt| {
            let declaration = stmt.downcast_ref::<VarDeclStmt>().unwrap();
            declaration.declarations.iter().flat_map(|d| d.target.names()).map(|(_, id)| id).collect::<Vec<_>>()
        })
        .collect();

    assert_ne!(ids[0], ids[1]);
    assert!(ids.iter().all(|id| *id > 0));
}

#[test]
fn test_parse_empty_source() {
    let block = parse_source("").unwrap();
    assert!(block.body.is_empty());
    assert_eq!(block.id, 0);
}

#[test]
fn test_parse_try_catch_finally() {
    let block = parse_source("try { a(); } catch (e) { b(); } finally { c(); }\ntry { a(); } catch { }\ntry {} finally {}").unwrap();

    let full = block.body[0].downcast_ref::<TryStmt>().unwrap();
    let handler = full.handler.as_ref().unwrap();
    assert_eq!(bound_names(handler.parameter.as_ref().unwrap()), vec!["e"]);
    assert!(full.finalizer.is_some());

    let bare_catch = block.body[1].downcast_ref::<TryStmt>().unwrap();
    assert!(bare_catch.handler.as_ref().unwrap().parameter.is_none());

    let only_finally = block.body[2].downcast_ref::<TryStmt>().unwrap();
    assert!(only_finally.handler.is_none());
    assert!(only_finally.finalizer.is_some());
}

#[test]
fn test_parse_try_requires_handler_or_finalizer() {
    let error = parse_source("try { a(); }").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_parse_throw() {
    let block = parse_source("throw new Error('x');").unwrap();
    assert_eq!(block.body[0].get_stmt_type(), StmtType::ThrowStmt);
}

#[test]
fn test_parse_switch() {
    let block = parse_source("switch (x) { case 1: var sw = 1; case 2: case 3: break; default: sw = 2; }").unwrap();
    let switch = block.body[0].downcast_ref::<SwitchStmt>().unwrap();

    assert_eq!(switch.cases.len(), 4);
    assert_eq!(switch.cases[0].body.len(), 1);
    assert!(switch.cases[1].body.is_empty());
    assert!(switch.cases[3].test.is_none());
    assert_eq!(switch.cases[3].body[0].get_stmt_type(), StmtType::ExpressionStmt);
}

#[test]
fn test_parse_labeled_statement() {
    let block = parse_source("outer: for (;;) { inner: while (true) { continue outer; } }").unwrap();
    let labeled = block.body[0].downcast_ref::<LabeledStmt>().unwrap();

    assert_eq!(labeled.label, "outer");
    assert_eq!(labeled.body.get_stmt_type(), StmtType::ForStmt);
}

#[test]
fn test_parse_sequence_expression() {
    let block = parse_source("a = (2, 'x');\nfor (i = 0, j = 1; i < j; i++, j--) {}").unwrap();
    let assignment = first_expression(&block).expression.downcast_ref::<AssignmentExpr>().unwrap();
    let sequence = assignment.value.downcast_ref::<SequenceExpr>().unwrap();

    assert_eq!(sequence.expressions.len(), 2);
    assert_eq!(sequence.expressions[1].get_expr_type(), ExprType::String);
    assert_eq!(block.body[1].get_stmt_type(), StmtType::ForStmt);
}

#[test]
fn test_parse_commas_still_separate_lists() {
    let block = parse_source("var a = 1, b = (2, 3);\nf(x = 1, y);\nz = [1, 2];").unwrap();

    let decl = block.body[0].downcast_ref::<VarDeclStmt>().unwrap();
    assert_eq!(decl.declarations.len(), 2);
    let grouped = decl.declarations[1].assigned_value.as_ref().unwrap();
    assert_eq!(grouped.get_expr_type(), ExprType::Sequence);

    let call = block.body[1].downcast_ref::<ExpressionStmt>().unwrap();
    assert_eq!(call.expression.get_expr_type(), ExprType::CallExpr);

    let array = block.body[2].downcast_ref::<ExpressionStmt>().unwrap();
    let array = array.expression.downcast_ref::<AssignmentExpr>().unwrap();
    assert_eq!(array.value.get_expr_type(), ExprType::Array);
}

#[test]
fn test_parse_bitwise_and_shift_precedence() {
    // Shifts bind tighter than comparisons, which bind tighter than bitwise operators
    let block = parse_source("a & b << 2 == c;").unwrap();
    let and = first_expression(&block).expression.downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(and.operator.value, "&");

    let equality = and.right.downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(equality.operator.value, "==");
    assert_eq!(equality.left.downcast_ref::<BinaryExpr>().unwrap().operator.value, "<<");
}

#[test]
fn test_parse_exponent_is_right_associative() {
    let block = parse_source("2 ** 3 ** 2 * 4;").unwrap();
    let product = first_expression(&block).expression.downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(product.operator.value, "*");

    let power = product.left.downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(power.operator.value, "**");
    assert_eq!(power.right.downcast_ref::<BinaryExpr>().unwrap().operator.value, "**");
}

#[test]
fn test_parse_bitwise_compound_assignments() {
    let source = "a &= 1; a |= 1; a ^= 1; a <<= 1; a >>= 1; a >>>= 1; a **= 2;";
    let block = parse_source(source).unwrap();

    let operators: Vec<String> = block
        .body
        .iter()
        .map(|stmt| {
            let stmt = stmt.downcast_ref::<ExpressionStmt>().unwrap();
            stmt.expression.downcast_ref::<AssignmentExpr>().unwrap().operator.value.clone()
        })
        .collect();
    assert_eq!(operators, vec!["&=", "|=", "^=", "<<=", ">>=", ">>>=", "**="]);
}

#[test]
fn test_parse_tilde_and_delete() {
    let block = parse_source("~x;\ndelete o.p;").unwrap();

    let tilde = first_expression(&block).expression.downcast_ref::<PrefixExpr>().unwrap();
    assert_eq!(tilde.operator.value, "~");

    let delete = block.body[1].downcast_ref::<ExpressionStmt>().unwrap();
    let delete = delete.expression.downcast_ref::<PrefixExpr>().unwrap();
    assert_eq!(delete.operator.value, "delete");
    assert_eq!(delete.right_expr.get_expr_type(), ExprType::Member);
}

#[test]
fn test_parse_regex_literal() {
    let block = parse_source("var r = /ab+c/gi;\nvar half = total / 2 / 1;").unwrap();

    let decl = block.body[0].downcast_ref::<VarDeclStmt>().unwrap();
    let regex = decl.declarations[0].assigned_value.as_ref().unwrap();
    let regex = regex.downcast_ref::<RegexExpr>().unwrap();
    assert_eq!(regex.pattern, "ab+c");
    assert_eq!(regex.flags, "gi");

    let decl = block.body[1].downcast_ref::<VarDeclStmt>().unwrap();
    let division = decl.declarations[0].assigned_value.as_ref().unwrap();
    assert_eq!(division.get_expr_type(), ExprType::Binary);
}

#[test]
fn test_parse_template_substitutions() {
    let block = parse_source("s = `a ${x = 1} b ${ { k: y }.k } c`;").unwrap();
    let assignment = first_expression(&block).expression.downcast_ref::<AssignmentExpr>().unwrap();
    let template = assignment.value.downcast_ref::<TemplateExpr>().unwrap();

    assert_eq!(template.quasis, vec!["a ", " b ", " c"]);
    assert_eq!(template.expressions.len(), 2);
    assert_eq!(template.expressions[0].get_expr_type(), ExprType::Assignment);
    assert_eq!(template.expressions[1].get_expr_type(), ExprType::Member);
}

#[test]
fn test_parse_nested_templates() {
    let block = parse_source("s = `outer ${`inner ${deep}`} end`;").unwrap();
    let assignment = first_expression(&block).expression.downcast_ref::<AssignmentExpr>().unwrap();
    let outer = assignment.value.downcast_ref::<TemplateExpr>().unwrap();

    assert_eq!(outer.quasis, vec!["outer ", " end"]);
    assert_eq!(outer.expressions[0].get_expr_type(), ExprType::Template);
}

#[test]
fn test_parse_class_declaration_and_expression() {
    let source = "class Point extends Base {\n  static origin = null;\n  count = 0\n  constructor(x) { super(x); }\n  get size() { return 1; }\n}\nvar K = class {};";
    let block = parse_source(source).unwrap();

    let class = block.body[0].downcast_ref::<ClassDeclStmt>().unwrap();
    assert_eq!(class.identifier, "Point");
    assert!(class.superclass.is_some());
    let keys: Vec<&str> = class.members.iter().map(|member| member.key.as_str()).collect();
    assert_eq!(keys, vec!["origin", "count", "constructor", "size"]);
    assert!(class.members[0].is_static);
    assert_eq!(class.members[2].value.as_ref().unwrap().get_expr_type(), ExprType::Function);

    let decl = block.body[1].downcast_ref::<VarDeclStmt>().unwrap();
    let expression = decl.declarations[0].assigned_value.as_ref().unwrap();
    assert!(expression.downcast_ref::<ClassExpr>().unwrap().name.is_none());
}

#[test]
fn test_parse_destructuring_declarations() {
    let block = parse_source("var { a, b: c, d = 1, e: { f } } = o;\nconst [g, , h = 2, ...rest] = list;").unwrap();

    let object = block.body[0].downcast_ref::<VarDeclStmt>().unwrap();
    assert_eq!(bound_names(&object.declarations[0].target), vec!["a", "c", "d", "f"]);

    let array = block.body[1].downcast_ref::<VarDeclStmt>().unwrap();
    assert_eq!(bound_names(&array.declarations[0].target), vec!["g", "h", "rest"]);
}

#[test]
fn test_parse_destructuring_requires_initializer() {
    let error = parse_source("var { a };").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_parse_destructuring_parameters_and_loops() {
    let block = parse_source("function f({ a } = {}, [b], ...rest) {}\nfor (const [k, v] of entries) {}").unwrap();

    let function = block.body[0].downcast_ref::<FnDeclStmt>().unwrap();
    assert_eq!(function.parameters.len(), 3);
    assert_eq!(bound_names(&function.parameters[0].target), vec!["a"]);
    assert!(function.parameters[0].default.is_some());
    assert!(function.parameters[2].is_rest);

    let for_of = block.body[1].downcast_ref::<ForInStmt>().unwrap();
    assert!(for_of.is_of);
    assert_eq!(bound_names(&for_of.target), vec!["k", "v"]);
}

#[test]
fn test_parse_spread() {
    let block = parse_source("f(...args);\nx = [...a, 1];\ny = { ...o, k: 1 };").unwrap();

    let call = first_expression(&block);
    assert_eq!(call.expression.get_expr_type(), ExprType::CallExpr);

    let object = block.body[2].downcast_ref::<ExpressionStmt>().unwrap();
    let object = object.expression.downcast_ref::<AssignmentExpr>().unwrap();
    let object = object.value.downcast_ref::<ObjectExpr>().unwrap();
    assert_eq!(object.properties[0].1.get_expr_type(), ExprType::Spread);
}
