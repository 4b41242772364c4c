use crate::{
    ast::{
        ast::{Expr, ExprType, ExprWrapper, StmtWrapper},
        expressions::{
            ArrayExpr, AssignmentExpr, BinaryExpr, BindingTarget, BooleanExpr, CallExpr, ClassExpr, ClassMember,
            ConditionalExpr, FunctionExpr, MemberExpr, MemberProperty, NewExpr, NullExpr, NumberExpr, ObjectExpr,
            Parameter, PatternElement, PrefixExpr, RegexExpr, SequenceExpr, SpreadExpr, StringExpr, SymbolExpr,
            TemplateExpr, UpdateExpr,
        },
        statements::{BlockStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud_fn = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud_fn) => *nud_fn,
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() },
                parser.get_position(),
            ))
        }
    };

    let mut left = nud_fn(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    loop {
        let token_kind = parser.current_token_kind();
        let led_fn = match parser.get_led_lookup().get(&token_kind) {
            Some(led_fn) => *led_fn,
            None => break,
        };
        let next_bp = *parser.get_bp_lookup().get(&token_kind).unwrap_or(&BindingPower::Default);
        if next_bp <= bp {
            break;
        }

        // `a \n ++b` is two statements
        if parser.current_token().newline_before
            && matches!(token_kind, TokenKind::PlusPlus | TokenKind::MinusMinus)
        {
            break;
        }

        left = led_fn(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.advance().clone();

    match token.kind {
        TokenKind::Number => {
            let value = parse_number(&token.value).ok_or_else(|| {
                Error::new(ErrorImpl::NumberParseError { token: token.value.clone() }, token.span.start.clone())
            })?;
            Ok(ExprWrapper::new(NumberExpr { value, span: token.span }))
        }
        TokenKind::Identifier => Ok(ExprWrapper::new(SymbolExpr {
            value: token.value,
            id: parser.advance_id(),
            span: token.span,
        })),
        TokenKind::String | TokenKind::Template => Ok(ExprWrapper::new(StringExpr {
            value: token.value,
            is_template: token.kind == TokenKind::Template,
            span: token.span,
        })),
        TokenKind::True | TokenKind::False => Ok(ExprWrapper::new(BooleanExpr {
            value: token.kind == TokenKind::True,
            span: token.span,
        })),
        TokenKind::Null => Ok(ExprWrapper::new(NullExpr { span: token.span })),
        _ => Err(Error::new(ErrorImpl::UnexpectedToken { token: token.value }, token.span.start)),
    }
}

fn parse_number(literal: &str) -> Option<f64> {
    if let Some(hex) = literal.strip_prefix("0x").or_else(|| literal.strip_prefix("0X")) {
        return i64::from_str_radix(hex, 16).ok().map(|value| value as f64);
    }

    literal.parse().ok()
}

pub fn parse_binary_expr(parser: &mut Parser, left: ExprWrapper, bp: BindingPower) -> Result<ExprWrapper, Error> {
    let operator_token = parser.advance().clone();

    let right = parse_expr(parser, bp)?;

    Ok(ExprWrapper::new(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left,
        operator: operator_token,
        right,
    }))
}

/// `a ** b ** c` groups to the right.
pub fn parse_exponent_expr(parser: &mut Parser, left: ExprWrapper, _bp: BindingPower) -> Result<ExprWrapper, Error> {
    let operator_token = parser.advance().clone();

    let right = parse_expr(parser, BindingPower::Multiplicative)?;

    Ok(ExprWrapper::new(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left,
        operator: operator_token,
        right,
    }))
}

pub fn parse_sequence_expr(parser: &mut Parser, left: ExprWrapper, _bp: BindingPower) -> Result<ExprWrapper, Error> {
    let start = left.get_span().start.clone();

    let mut expressions = vec![left];
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        expressions.push(parse_expr(parser, BindingPower::Comma)?);
    }

    Ok(ExprWrapper::new(SequenceExpr {
        expressions,
        span: Span {
            start,
            end: parser.get_end_position(),
        },
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let operator_token = parser.advance().clone();
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(ExprWrapper::new(PrefixExpr {
        span: Span {
            start: operator_token.span.start.clone(),
            end: rhs.get_span().end.clone(),
        },
        operator: operator_token,
        right_expr: rhs,
    }))
}

pub fn parse_prefix_update_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let operator_token = parser.advance().clone();
    let argument = parse_expr(parser, BindingPower::Unary)?;
    check_assignment_target(&argument)?;

    Ok(ExprWrapper::new(UpdateExpr {
        span: Span {
            start: operator_token.span.start.clone(),
            end: argument.get_span().end.clone(),
        },
        operator: operator_token,
        argument,
        prefix: true,
    }))
}

pub fn parse_postfix_update_expr(parser: &mut Parser, left: ExprWrapper, _bp: BindingPower) -> Result<ExprWrapper, Error> {
    check_assignment_target(&left)?;
    let operator_token = parser.advance().clone();

    Ok(ExprWrapper::new(UpdateExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: operator_token.span.end.clone(),
        },
        operator: operator_token,
        argument: left,
        prefix: false,
    }))
}

pub fn parse_assignment_expr(parser: &mut Parser, left: ExprWrapper, _bp: BindingPower) -> Result<ExprWrapper, Error> {
    check_assignment_target(&left)?;
    let operator_token = parser.advance().clone();
    // Parsed below assignment strength so `a = b = c` nests to the right
    let rhs = parse_expr(parser, BindingPower::Comma)?;

    Ok(ExprWrapper::new(AssignmentExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: rhs.get_span().end.clone(),
        },
        operator: operator_token,
        value: rhs,
        assignee: left,
    }))
}

fn check_assignment_target(target: &ExprWrapper) -> Result<(), Error> {
    match target.get_expr_type() {
        ExprType::Symbol | ExprType::Member => Ok(()),
        other => Err(Error::new(
            ErrorImpl::InvalidAssignmentTarget { target: format!("{:?}", other) },
            target.get_span().start.clone(),
        )),
    }
}

pub fn parse_conditional_expr(parser: &mut Parser, test: ExprWrapper, _bp: BindingPower) -> Result<ExprWrapper, Error> {
    parser.advance();
    let consequent = parse_expr(parser, BindingPower::Comma)?;
    parser.expect(TokenKind::Colon)?;
    let alternate = parse_expr(parser, BindingPower::Comma)?;

    Ok(ExprWrapper::new(ConditionalExpr {
        span: Span {
            start: test.get_span().start.clone(),
            end: alternate.get_span().end.clone(),
        },
        test,
        consequent,
        alternate,
    }))
}

/// `x => body`, entered on the arrow after a single bare parameter.
pub fn parse_arrow_expr(parser: &mut Parser, left: ExprWrapper, _bp: BindingPower) -> Result<ExprWrapper, Error> {
    let parameter = match left.downcast_ref::<SymbolExpr>() {
        Some(symbol) => Parameter {
            target: BindingTarget::Identifier(symbol.value.clone(), symbol.id),
            default: None,
            is_rest: false,
            span: symbol.span.clone(),
        },
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: String::from("=>"),
                    message: String::from("arrow function parameters must be identifiers"),
                },
                left.get_span().start.clone(),
            ))
        }
    };

    parser.expect(TokenKind::Arrow)?;
    let body = parse_arrow_body(parser)?;

    Ok(ExprWrapper::new(FunctionExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: parser.get_end_position(),
        },
        name: None,
        parameters: vec![parameter],
        body,
        is_arrow: true,
    }))
}

fn parse_arrow_body(parser: &mut Parser) -> Result<BlockStmt, Error> {
    if parser.current_token_kind() == TokenKind::OpenCurly {
        return parse_block(parser);
    }

    let value = parse_expr(parser, BindingPower::Comma)?;
    let span = value.get_span().clone();

    Ok(BlockStmt {
        body: vec![StmtWrapper::new(ReturnStmt { value: Some(value), span: span.clone() })],
        id: parser.advance_id(),
        span,
    })
}

/// Whether the `(` at the current token opens an arrow function parameter list.
fn at_arrow_parameters(parser: &Parser) -> bool {
    let mut depth = 0;
    let mut offset = 0;

    loop {
        match parser.peek(offset).kind {
            TokenKind::OpenParen => depth += 1,
            TokenKind::CloseParen => {
                depth -= 1;
                if depth == 0 {
                    return parser.peek(offset + 1).kind == TokenKind::Arrow;
                }
            }
            TokenKind::EOF => return false,
            _ => {}
        }
        offset += 1;
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    if at_arrow_parameters(parser) {
        let start = parser.get_position();
        let parameters = parse_parameters(parser)?;
        parser.expect(TokenKind::Arrow)?;
        let body = parse_arrow_body(parser)?;

        return Ok(ExprWrapper::new(FunctionExpr {
            span: Span {
                start,
                end: parser.get_end_position(),
            },
            name: None,
            parameters,
            body,
            is_arrow: true,
        }));
    }

    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

/// Parses `(a, b = 1, { c }, ...rest)` including the surrounding parentheses.
pub fn parse_parameters(parser: &mut Parser) -> Result<Vec<Parameter>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseParen {
        let start = parser.get_position();
        let is_rest = parser.current_token_kind() == TokenKind::Ellipsis;
        if is_rest {
            parser.advance();
        }

        let target = parse_binding_target(parser, "expected parameter name")?;
        let default = parse_binding_default(parser)?;

        parameters.push(Parameter {
            target,
            default,
            is_rest,
            span: Span {
                start,
                end: parser.get_end_position(),
            },
        });

        if parser.current_token_kind() != TokenKind::CloseParen {
            parser.expect(TokenKind::Comma)?;
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(parameters)
}

/// Parses a binding name or a destructuring pattern.
///
/// `message` describes what was expected when neither is found.
pub fn parse_binding_target(parser: &mut Parser, message: &str) -> Result<BindingTarget, Error> {
    if parser.current_is_one_of(&[TokenKind::OpenCurly, TokenKind::OpenBracket]) {
        let mut elements = vec![];
        let mut nested_defaults = vec![];
        parse_pattern(parser, &mut elements, &mut nested_defaults)?;

        return Ok(BindingTarget::Pattern { elements, nested_defaults });
    }

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: message.to_string(),
        },
        parser.get_position(),
    );
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?;

    Ok(BindingTarget::Identifier(name.value, parser.advance_id()))
}

/// Parses `= value` after a binding, if present.
pub fn parse_binding_default(parser: &mut Parser) -> Result<Option<ExprWrapper>, Error> {
    if parser.current_token_kind() != TokenKind::Assignment {
        return Ok(None);
    }

    parser.advance();
    Ok(Some(parse_expr(parser, BindingPower::Comma)?))
}

/// Collects the names bound by an object or array pattern, nested patterns included.
fn parse_pattern(
    parser: &mut Parser,
    elements: &mut Vec<PatternElement>,
    nested_defaults: &mut Vec<ExprWrapper>,
) -> Result<(), Error> {
    let is_object = parser.advance().kind == TokenKind::OpenCurly;
    let close = if is_object { TokenKind::CloseCurly } else { TokenKind::CloseBracket };

    while parser.current_token_kind() != close {
        // Holes: [a, , b]
        if !is_object && parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            continue;
        }

        if parser.current_token_kind() == TokenKind::Ellipsis {
            parser.advance();
            parse_pattern_element(parser, elements, nested_defaults)?;
        } else if is_object {
            let key = parser.current_token().clone();
            if !key.is_property_name() && !key.is_one_of_many(&[TokenKind::String, TokenKind::Number]) {
                return Err(Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: key.value,
                        message: String::from("expected property name in object pattern"),
                    },
                    key.span.start,
                ));
            }
            parser.advance();

            if parser.current_token_kind() == TokenKind::Colon {
                parser.advance();
                parse_pattern_element(parser, elements, nested_defaults)?;
            } else if key.kind == TokenKind::Identifier {
                // Shorthand: { a } and { a = 1 }
                let id = parser.advance_id();
                let default = parse_binding_default(parser)?;
                elements.push(PatternElement { name: key.value, id, default, span: key.span });
            } else {
                return Err(Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: parser.current_token().value.clone(),
                        message: String::from("expected `:` after property name"),
                    },
                    parser.get_position(),
                ));
            }
        } else {
            parse_pattern_element(parser, elements, nested_defaults)?;
        }

        if parser.current_token_kind() != close {
            parser.expect(TokenKind::Comma)?;
        }
    }

    parser.expect(close)?;

    Ok(())
}

fn parse_pattern_element(
    parser: &mut Parser,
    elements: &mut Vec<PatternElement>,
    nested_defaults: &mut Vec<ExprWrapper>,
) -> Result<(), Error> {
    if parser.current_is_one_of(&[TokenKind::OpenCurly, TokenKind::OpenBracket]) {
        parse_pattern(parser, elements, nested_defaults)?;
        if let Some(default) = parse_binding_default(parser)? {
            nested_defaults.push(default);
        }
        return Ok(());
    }

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected name in destructuring pattern"),
        },
        parser.get_position(),
    );
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?;
    let id = parser.advance_id();
    let default = parse_binding_default(parser)?;

    elements.push(PatternElement { name: name.value, id, default, span: name.span });

    Ok(())
}

fn parse_arguments(parser: &mut Parser) -> Result<Vec<ExprWrapper>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut args = vec![];
    while parser.current_token_kind() != TokenKind::CloseParen {
        args.push(parse_expr(parser, BindingPower::Comma)?);

        if parser.current_token_kind() != TokenKind::CloseParen {
            parser.expect(TokenKind::Comma)?;
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(args)
}

pub fn parse_call_expr(parser: &mut Parser, left: ExprWrapper, _bp: BindingPower) -> Result<ExprWrapper, Error> {
    let arguments = parse_arguments(parser)?;

    Ok(ExprWrapper::new(CallExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: parser.get_end_position(),
        },
        callee: left,
        arguments,
    }))
}

pub fn parse_member_expr(parser: &mut Parser, left: ExprWrapper, _bp: BindingPower) -> Result<ExprWrapper, Error> {
    parser.advance();

    if !parser.current_token().is_property_name() {
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected property name after `.`"),
            },
            parser.get_position(),
        ));
    }
    let property = parser.advance().value.clone();

    Ok(ExprWrapper::new(MemberExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: parser.get_end_position(),
        },
        object: left,
        property: MemberProperty::Named(property),
    }))
}

pub fn parse_computed_member_expr(parser: &mut Parser, left: ExprWrapper, _bp: BindingPower) -> Result<ExprWrapper, Error> {
    parser.advance();
    let property = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseBracket)?;

    Ok(ExprWrapper::new(MemberExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: parser.get_end_position(),
        },
        object: left,
        property: MemberProperty::Computed(property),
    }))
}

pub fn parse_new_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    // new Foo.Bar(1, 2) or new Foo
    let start_pos = parser.advance().span.start.clone();

    let callee = parse_expr(parser, BindingPower::Call)?;

    let arguments = if parser.current_token_kind() == TokenKind::OpenParen {
        parse_arguments(parser)?
    } else {
        vec![]
    };

    Ok(ExprWrapper::new(NewExpr {
        callee,
        arguments,
        span: Span {
            start: start_pos,
            end: parser.get_end_position(),
        },
    }))
}

pub fn parse_array_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let mut elements = vec![];
    while parser.current_token_kind() != TokenKind::CloseBracket {
        // Holes: [1, , 2]
        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            continue;
        }

        elements.push(parse_expr(parser, BindingPower::Comma)?);

        if parser.current_token_kind() != TokenKind::CloseBracket {
            parser.expect(TokenKind::Comma)?;
        }
    }

    parser.expect(TokenKind::CloseBracket)?;

    Ok(ExprWrapper::new(ArrayExpr {
        elements,
        span: Span {
            start,
            end: parser.get_end_position(),
        },
    }))
}

pub fn parse_object_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    // { a: 1, "b": 2, c, d() {} }
    let start = parser.advance().span.start.clone();

    let mut properties = vec![];
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if parser.current_token_kind() == TokenKind::Ellipsis {
            let spread = parse_spread_expr(parser)?;
            properties.push((String::from("..."), spread));

            if parser.current_token_kind() != TokenKind::CloseCurly {
                parser.expect(TokenKind::Comma)?;
            }
            continue;
        }

        let key = parser.current_token().clone();
        if !key.is_property_name() && !key.is_one_of_many(&[TokenKind::String, TokenKind::Number]) {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: key.value,
                    message: String::from("expected property name in object literal"),
                },
                key.span.start,
            ));
        }
        parser.advance();

        let value = match parser.current_token_kind() {
            TokenKind::Colon => {
                parser.advance();
                parse_expr(parser, BindingPower::Comma)?
            }
            TokenKind::OpenParen => {
                let parameters = parse_parameters(parser)?;
                let body = parse_block(parser)?;
                ExprWrapper::new(FunctionExpr {
                    span: Span {
                        start: key.span.start.clone(),
                        end: parser.get_end_position(),
                    },
                    name: None,
                    parameters,
                    body,
                    is_arrow: false,
                })
            }
            _ if key.kind == TokenKind::Identifier => ExprWrapper::new(SymbolExpr {
                value: key.value.clone(),
                id: parser.advance_id(),
                span: key.span.clone(),
            }),
            _ => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: parser.current_token().value.clone(),
                        message: String::from("expected `:` after property name"),
                    },
                    parser.get_position(),
                ))
            }
        };

        properties.push((key.value, value));

        if parser.current_token_kind() != TokenKind::CloseCurly {
            parser.expect(TokenKind::Comma)?;
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(ExprWrapper::new(ObjectExpr {
        properties,
        span: Span {
            start,
            end: parser.get_end_position(),
        },
    }))
}

pub fn parse_function_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let name = if parser.current_token_kind() == TokenKind::Identifier {
        let value = parser.advance().value.clone();
        Some((value, parser.advance_id()))
    } else {
        None
    };

    let parameters = parse_parameters(parser)?;
    let body = parse_block(parser)?;

    Ok(ExprWrapper::new(FunctionExpr {
        span: Span {
            start,
            end: parser.get_end_position(),
        },
        name,
        parameters,
        body,
        is_arrow: false,
    }))
}

pub fn parse_spread_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.advance().span.start.clone();
    let argument = parse_expr(parser, BindingPower::Comma)?;

    Ok(ExprWrapper::new(SpreadExpr {
        span: Span {
            start,
            end: argument.get_span().end.clone(),
        },
        argument,
    }))
}

/// Parses a template from its head through the tail, substitutions included.
pub fn parse_template_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let head = parser.advance().clone();

    let mut quasis = vec![head.value];
    let mut expressions = vec![];
    loop {
        expressions.push(parse_expr(parser, BindingPower::Default)?);

        let part = parser.current_token().clone();
        match part.kind {
            TokenKind::TemplateMiddle => {
                parser.advance();
                quasis.push(part.value);
            }
            TokenKind::TemplateTail => {
                parser.advance();
                quasis.push(part.value);
                break;
            }
            _ => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: part.value,
                        message: String::from("expected `}` closing the template substitution"),
                    },
                    part.span.start,
                ))
            }
        }
    }

    Ok(ExprWrapper::new(TemplateExpr {
        quasis,
        expressions,
        span: Span {
            start: head.span.start,
            end: parser.get_end_position(),
        },
    }))
}

pub fn parse_regex_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.advance().clone();

    // The lexer guarantees a closing slash after the opening one
    let (pattern, flags) = match token.value.rfind('/') {
        Some(close) if close > 0 => (token.value[1..close].to_string(), token.value[close + 1..].to_string()),
        _ => (token.value.clone(), String::new()),
    };

    Ok(ExprWrapper::new(RegexExpr { pattern, flags, span: token.span }))
}

pub fn parse_class_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let name = if parser.current_token_kind() == TokenKind::Identifier {
        let value = parser.advance().value.clone();
        Some((value, parser.advance_id()))
    } else {
        None
    };

    let (superclass, members) = parse_class_tail(parser)?;

    Ok(ExprWrapper::new(ClassExpr {
        name,
        superclass,
        members,
        span: Span {
            start,
            end: parser.get_end_position(),
        },
    }))
}

/// Parses the optional `extends` clause and the class body after the class name.
pub fn parse_class_tail(parser: &mut Parser) -> Result<(Option<ExprWrapper>, Vec<ClassMember>), Error> {
    let superclass = if parser.current_token_kind() == TokenKind::Extends {
        parser.advance();
        Some(parse_expr(parser, BindingPower::Unary)?)
    } else {
        None
    };

    parser.expect(TokenKind::OpenCurly)?;

    let mut members = vec![];
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if parser.current_token_kind() == TokenKind::Semicolon {
            parser.advance();
            continue;
        }

        let start = parser.get_position();
        let is_static = at_member_modifier(parser, "static");
        if is_static {
            parser.advance();
        }
        if at_member_modifier(parser, "get") || at_member_modifier(parser, "set") {
            parser.advance();
        }

        let key = parser.current_token().clone();
        if !is_member_name(&key) {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: key.value,
                    message: String::from("expected class member name"),
                },
                key.span.start,
            ));
        }
        parser.advance();

        let value = match parser.current_token_kind() {
            TokenKind::OpenParen => {
                let parameters = parse_parameters(parser)?;
                let body = parse_block(parser)?;
                Some(ExprWrapper::new(FunctionExpr {
                    span: Span {
                        start: key.span.start.clone(),
                        end: parser.get_end_position(),
                    },
                    name: None,
                    parameters,
                    body,
                    is_arrow: false,
                }))
            }
            TokenKind::Assignment => {
                parser.advance();
                let initializer = parse_expr(parser, BindingPower::Comma)?;
                parser.expect_semicolon()?;
                Some(initializer)
            }
            _ => {
                parser.expect_semicolon()?;
                None
            }
        };

        members.push(ClassMember {
            key: key.value,
            is_static,
            value,
            span: Span {
                start,
                end: parser.get_end_position(),
            },
        });
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok((superclass, members))
}

fn is_member_name(token: &Token) -> bool {
    token.is_property_name() || token.is_one_of_many(&[TokenKind::String, TokenKind::Number])
}

/// Whether `word` at the current token modifies the member after it rather than naming one.
fn at_member_modifier(parser: &Parser, word: &str) -> bool {
    parser.at_word(word) && is_member_name(parser.peek(1))
}
