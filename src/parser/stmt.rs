use crate::{
    ast::{
        ast::{Expr, StmtWrapper},
        expressions::BindingTarget,
        statements::{
            BlockStmt, BreakStmt, CatchClause, ClassDeclStmt, ContinueStmt, DeclarationKind, DoWhileStmt, EmptyStmt,
            ExportStmt, ExpressionStmt, FnDeclStmt, ForInStmt, ForStmt, IfStmt, ImportBinding, ImportStmt,
            LabeledStmt, ReturnStmt, SwitchCase, SwitchStmt, ThrowStmt, TryStmt, VarDeclStmt, VarDeclarator,
            WhileStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::{
    expr::{parse_binding_target, parse_class_tail, parse_parameters},
    parser::Parser,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        return stmt_fn(parser);
    }

    if parser.current_token_kind() == TokenKind::Identifier && parser.peek(1).kind == TokenKind::Colon {
        return parse_labeled_stmt(parser);
    }

    let expr = parse_expr(parser, BindingPower::Default)?;

    parser.expect_semicolon()?;

    Ok(StmtWrapper::new(ExpressionStmt {
        span: expr.get_span().clone(),
        expression: expr,
    }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let declaration = parse_var_decl(parser)?;
    parser.expect_semicolon()?;

    Ok(StmtWrapper::new(declaration))
}

/// Parses a declaration list without its terminator, shared with `for` heads.
fn parse_var_decl(parser: &mut Parser) -> Result<VarDeclStmt, Error> {
    let start_token = parser.advance().clone();
    let kind = declaration_kind(&start_token);

    let mut declarations = vec![];
    loop {
        let start = parser.get_position();
        let target = parse_binding_target(parser, "expected identifier during variable declaration")?;

        let assigned_value = if parser.current_token_kind() == TokenKind::Assignment {
            parser.advance();
            Some(parse_expr(parser, BindingPower::Comma)?)
        } else {
            None
        };

        if kind == DeclarationKind::Const && assigned_value.is_none() {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: parser.current_token().value.clone(),
                    message: String::from("expected rhs in constant definition"),
                },
                parser.get_position(),
            ));
        }

        if matches!(target, BindingTarget::Pattern { .. }) && assigned_value.is_none() {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: parser.current_token().value.clone(),
                    message: String::from("expected rhs for destructuring declaration"),
                },
                parser.get_position(),
            ));
        }

        declarations.push(VarDeclarator {
            target,
            assigned_value,
            span: Span {
                start,
                end: parser.get_end_position(),
            },
        });

        if parser.current_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();
    }

    Ok(VarDeclStmt {
        kind,
        declarations,
        span: Span {
            start: start_token.span.start,
            end: parser.get_end_position(),
        },
    })
}

fn declaration_kind(token: &Token) -> DeclarationKind {
    match token.kind {
        TokenKind::Const => DeclarationKind::Const,
        TokenKind::Let => DeclarationKind::Let,
        _ => DeclarationKind::Var,
    }
}

pub fn parse_import_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let mut bindings = vec![];
    let from;

    if parser.current_token_kind() == TokenKind::String {
        // import "side-effect";
        from = parser.advance().value.clone();
    } else {
        if parser.current_token_kind() == TokenKind::Identifier {
            let local = parser.advance().clone();
            bindings.push(ImportBinding { local: local.value, id: parser.advance_id(), span: local.span });

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            }
        }

        if parser.current_token_kind() == TokenKind::Star {
            parser.advance();
            parser.expect_word("as")?;
            let local = parser.expect(TokenKind::Identifier)?;
            bindings.push(ImportBinding { local: local.value, id: parser.advance_id(), span: local.span });
        } else if parser.current_token_kind() == TokenKind::OpenCurly {
            parser.advance();

            while parser.current_token_kind() != TokenKind::CloseCurly {
                let imported = parser.current_token().clone();
                if !imported.is_property_name() && imported.kind != TokenKind::String {
                    return Err(Error::new(
                        ErrorImpl::UnexpectedTokenDetailed {
                            token: imported.value,
                            message: String::from("expected imported name"),
                        },
                        imported.span.start,
                    ));
                }
                parser.advance();

                let local = if parser.at_word("as") {
                    parser.advance();
                    parser.expect(TokenKind::Identifier)?
                } else if imported.kind == TokenKind::Identifier {
                    imported
                } else {
                    return Err(Error::new(
                        ErrorImpl::UnexpectedTokenDetailed {
                            token: imported.value,
                            message: String::from("reserved names must be renamed with `as`"),
                        },
                        imported.span.start,
                    ));
                };
                bindings.push(ImportBinding { local: local.value, id: parser.advance_id(), span: local.span });

                if parser.current_token_kind() != TokenKind::CloseCurly {
                    parser.expect(TokenKind::Comma)?;
                }
            }

            parser.expect(TokenKind::CloseCurly)?;
        }

        parser.expect_word("from")?;
        from = parser.expect(TokenKind::String)?.value;
    }

    parser.expect_semicolon()?;

    Ok(StmtWrapper::new(ImportStmt {
        bindings,
        from,
        span: Span {
            start,
            end: parser.get_end_position(),
        },
    }))
}

pub fn parse_export_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let declaration = if parser.at_word("default") {
        parser.advance();

        if parser.current_token_kind() == TokenKind::Function && parser.peek(1).kind == TokenKind::Identifier {
            parse_fn_decl_stmt(parser)?
        } else {
            let expr = parse_expr(parser, BindingPower::Comma)?;
            parser.expect_semicolon()?;
            expr.to_stmt_wrapper()
        }
    } else if parser.current_is_one_of(&[TokenKind::OpenCurly, TokenKind::Star]) {
        // Re-exports and export lists name existing bindings only
        let list_start = parser.get_position();
        if parser.advance().kind == TokenKind::OpenCurly {
            while parser.current_token_kind() != TokenKind::CloseCurly {
                if !parser.has_tokens() {
                    return Err(Error::new(
                        ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() },
                        parser.get_position(),
                    ));
                }
                parser.advance();
            }
            parser.expect(TokenKind::CloseCurly)?;
        } else if parser.at_word("as") {
            parser.advance();
            parser.expect(TokenKind::Identifier)?;
        }

        if parser.at_word("from") {
            parser.advance();
            parser.expect(TokenKind::String)?;
        }
        parser.expect_semicolon()?;

        StmtWrapper::new(EmptyStmt {
            span: Span {
                start: list_start,
                end: parser.get_end_position(),
            },
        })
    } else {
        parse_stmt(parser)?
    };

    Ok(StmtWrapper::new(ExportStmt {
        declaration,
        span: Span {
            start,
            end: parser.get_end_position(),
        },
    }))
}

fn parse_condition(parser: &mut Parser) -> Result<crate::ast::ast::ExprWrapper, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(condition)
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_condition(parser)?;
    let consequent = parse_stmt(parser)?;

    let alternate = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_stmt(parser)?)
    } else {
        None
    };

    Ok(StmtWrapper::new(IfStmt {
        condition,
        consequent,
        alternate,
        span: Span {
            start,
            end: parser.get_end_position(),
        },
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_condition(parser)?;
    let body = parse_stmt(parser)?;

    Ok(StmtWrapper::new(WhileStmt {
        condition,
        body,
        span: Span {
            start,
            end: parser.get_end_position(),
        },
    }))
}

pub fn parse_do_while_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let body = parse_stmt(parser)?;
    parser.expect(TokenKind::While)?;
    let condition = parse_condition(parser)?;

    // The semicolon after `do ... while (x)` is always optional
    if parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(StmtWrapper::new(DoWhileStmt {
        body,
        condition,
        span: Span {
            start,
            end: parser.get_end_position(),
        },
    }))
}

fn at_for_in_head(parser: &Parser) -> bool {
    let mut offset = match parser.current_token_kind() {
        TokenKind::Var | TokenKind::Let | TokenKind::Const => 1,
        _ => 0,
    };

    match parser.peek(offset).kind {
        TokenKind::Identifier => offset += 1,
        // Skip over a destructuring pattern
        TokenKind::OpenCurly | TokenKind::OpenBracket if offset == 1 => {
            let mut depth = 0;
            loop {
                match parser.peek(offset).kind {
                    TokenKind::OpenCurly | TokenKind::OpenBracket => depth += 1,
                    TokenKind::CloseCurly | TokenKind::CloseBracket => {
                        depth -= 1;
                        if depth == 0 {
                            offset += 1;
                            break;
                        }
                    }
                    TokenKind::EOF => return false,
                    _ => {}
                }
                offset += 1;
            }
        }
        _ => return false,
    }

    let keyword = parser.peek(offset);
    keyword.kind == TokenKind::In || (keyword.kind == TokenKind::Identifier && keyword.value == "of")
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();
    parser.expect(TokenKind::OpenParen)?;

    if at_for_in_head(parser) {
        let declaration = if parser.current_is_one_of(&[TokenKind::Var, TokenKind::Let, TokenKind::Const]) {
            Some(declaration_kind(&parser.advance().clone()))
        } else {
            None
        };

        let target = parse_binding_target(parser, "expected loop variable")?;
        let is_of = parser.advance().kind != TokenKind::In;
        let right = parse_expr(parser, BindingPower::Default)?;
        parser.expect(TokenKind::CloseParen)?;
        let body = parse_stmt(parser)?;

        return Ok(StmtWrapper::new(ForInStmt {
            declaration,
            target,
            is_of,
            right,
            body,
            id: parser.advance_id(),
            span: Span {
                start,
                end: parser.get_end_position(),
            },
        }));
    }

    let init = match parser.current_token_kind() {
        TokenKind::Semicolon => None,
        TokenKind::Var | TokenKind::Let | TokenKind::Const => Some(StmtWrapper::new(parse_var_decl(parser)?)),
        _ => Some(parse_expr(parser, BindingPower::Default)?.to_stmt_wrapper()),
    };
    parser.expect(TokenKind::Semicolon)?;

    let condition = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };
    parser.expect(TokenKind::Semicolon)?;

    let update = if parser.current_token_kind() != TokenKind::CloseParen {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_stmt(parser)?;

    Ok(StmtWrapper::new(ForStmt {
        init,
        condition,
        update,
        body,
        id: parser.advance_id(),
        span: Span {
            start,
            end: parser.get_end_position(),
        },
    }))
}

/// Parses `{ ... }` into a block with a fresh id.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        statements.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(BlockStmt {
        body: statements,
        id: parser.advance_id(),
        span: Span {
            start,
            end: parser.get_end_position(),
        },
    })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    Ok(StmtWrapper::new(parse_block(parser)?))
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected function name"),
        },
        parser.get_position(),
    );
    let identifier = parser.expect_error(TokenKind::Identifier, Some(error))?.value;
    let id = parser.advance_id();

    let parameters = parse_parameters(parser)?;
    let body = parse_block(parser)?;

    Ok(StmtWrapper::new(FnDeclStmt {
        span: Span {
            start,
            end: parser.get_end_position(),
        },
        identifier,
        id,
        parameters,
        body,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let ends_here = parser.current_is_one_of(&[TokenKind::Semicolon, TokenKind::CloseCurly, TokenKind::EOF])
        || parser.current_token().newline_before;

    let value = if ends_here {
        None
    } else {
        Some(parse_expr(parser, BindingPower::Default)?)
    };

    parser.expect_semicolon()?;

    Ok(StmtWrapper::new(ReturnStmt {
        value,
        span: Span {
            start,
            end: parser.get_end_position(),
        },
    }))
}

/// Skips an optional label after `break`/`continue`.
fn skip_label(parser: &mut Parser) {
    if parser.current_token_kind() == TokenKind::Identifier && !parser.current_token().newline_before {
        parser.advance();
    }
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let span = parser.advance().span.clone();
    skip_label(parser);
    parser.expect_semicolon()?;

    Ok(StmtWrapper::new(BreakStmt { span }))
}

pub fn parse_continue_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let span = parser.advance().span.clone();
    skip_label(parser);
    parser.expect_semicolon()?;

    Ok(StmtWrapper::new(ContinueStmt { span }))
}

pub fn parse_empty_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let span = parser.advance().span.clone();

    Ok(StmtWrapper::new(EmptyStmt { span }))
}

pub fn parse_labeled_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let label = parser.advance().clone();
    parser.expect(TokenKind::Colon)?;
    let body = parse_stmt(parser)?;

    Ok(StmtWrapper::new(LabeledStmt {
        label: label.value,
        body,
        span: Span {
            start: label.span.start,
            end: parser.get_end_position(),
        },
    }))
}

pub fn parse_throw_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect_semicolon()?;

    Ok(StmtWrapper::new(ThrowStmt {
        value,
        span: Span {
            start,
            end: parser.get_end_position(),
        },
    }))
}

pub fn parse_try_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let block = parse_block(parser)?;

    let handler = if parser.current_token_kind() == TokenKind::Catch {
        let catch_start = parser.advance().span.start.clone();

        // `catch { }` binds nothing
        let parameter = if parser.current_token_kind() == TokenKind::OpenParen {
            parser.advance();
            let target = parse_binding_target(parser, "expected catch parameter")?;
            parser.expect(TokenKind::CloseParen)?;
            Some(target)
        } else {
            None
        };
        let body = parse_block(parser)?;

        Some(CatchClause {
            parameter,
            body,
            span: Span {
                start: catch_start,
                end: parser.get_end_position(),
            },
        })
    } else {
        None
    };

    let finalizer = if parser.current_token_kind() == TokenKind::Finally {
        parser.advance();
        Some(parse_block(parser)?)
    } else {
        None
    };

    if handler.is_none() && finalizer.is_none() {
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected `catch` or `finally` after try block"),
            },
            parser.get_position(),
        ));
    }

    Ok(StmtWrapper::new(TryStmt {
        block,
        handler,
        finalizer,
        span: Span {
            start,
            end: parser.get_end_position(),
        },
    }))
}

fn at_case_end(parser: &Parser) -> bool {
    parser.current_is_one_of(&[TokenKind::Case, TokenKind::CloseCurly, TokenKind::EOF])
        || (parser.at_word("default") && parser.peek(1).kind == TokenKind::Colon)
}

pub fn parse_switch_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let discriminant = parse_condition(parser)?;
    parser.expect(TokenKind::OpenCurly)?;

    let mut cases = vec![];
    while parser.current_token_kind() != TokenKind::CloseCurly {
        let case_start = parser.get_position();

        let test = if parser.current_token_kind() == TokenKind::Case {
            parser.advance();
            Some(parse_expr(parser, BindingPower::Default)?)
        } else {
            parser.expect_word("default")?;
            None
        };
        parser.expect(TokenKind::Colon)?;

        let mut body = vec![];
        while !at_case_end(parser) {
            body.push(parse_stmt(parser)?);
        }

        cases.push(SwitchCase {
            test,
            body,
            span: Span {
                start: case_start,
                end: parser.get_end_position(),
            },
        });
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(StmtWrapper::new(SwitchStmt {
        discriminant,
        cases,
        span: Span {
            start,
            end: parser.get_end_position(),
        },
    }))
}

pub fn parse_class_decl_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected class name"),
        },
        parser.get_position(),
    );
    let identifier = parser.expect_error(TokenKind::Identifier, Some(error))?.value;
    let id = parser.advance_id();

    let (superclass, members) = parse_class_tail(parser)?;

    Ok(StmtWrapper::new(ClassDeclStmt {
        identifier,
        id,
        superclass,
        members,
        span: Span {
            start,
            end: parser.get_end_position(),
        },
    }))
}
