use crate::{
    ast::{
        ast::{Expr, ExprType, ExprWrapper},
        expressions::{AssignmentExpr, BinaryExpr, NewExpr, PrefixExpr, SequenceExpr, SymbolExpr},
    },
    lexer::tokens::TokenKind,
    symbols::model::SymbolModel,
    types::{kind::Kind, type_set::TypeSet},
};

/// Kinds `expr` can evaluate to, given the symbols' current sets.
///
/// An identifier naming a symbol yields a copy of that symbol's set, which may
/// still be empty. Everything else yields exactly one kind, `Unknown` when no
/// rule applies.
pub fn classify_expr(model: &SymbolModel, expr: &ExprWrapper) -> TypeSet {
    match expr.get_expr_type() {
        ExprType::Symbol => match expr.downcast_ref::<SymbolExpr>() {
            Some(symbol) => match model.symbol_for(symbol.id) {
                Some(resolved) => resolved.types().snapshot(),
                None if symbol.value == "undefined" => TypeSet::of(Kind::Undefined),
                None => TypeSet::of(Kind::Unknown),
            },
            None => TypeSet::of(Kind::Unknown),
        },
        // `a = (b = 1)` takes the kinds of what was assigned
        ExprType::Assignment => match expr.downcast_ref::<AssignmentExpr>() {
            Some(assignment) if assignment.operator.kind == TokenKind::Assignment => {
                classify_expr(model, &assignment.value)
            }
            Some(assignment) => {
                let target = classify_expr(model, &assignment.assignee);
                let value = classify_expr(model, &assignment.value);
                match compound_operator(assignment.operator.kind) {
                    Some(operator) => TypeSet::of(classify_binary(operator, &target, &value)),
                    None => TypeSet::of(Kind::Unknown),
                }
            }
            None => TypeSet::of(Kind::Unknown),
        },
        // `(a, b)` yields its last operand
        ExprType::Sequence => {
            let last = expr
                .downcast_ref::<SequenceExpr>()
                .and_then(|sequence| sequence.expressions.last());
            match last {
                Some(last) => classify_expr(model, last),
                None => TypeSet::of(Kind::Unknown),
            }
        }
        _ => TypeSet::of(classify_kind(model, expr)),
    }
}

fn classify_kind(model: &SymbolModel, expr: &ExprWrapper) -> Kind {
    match expr.get_expr_type() {
        ExprType::Number => Kind::Number,
        ExprType::String | ExprType::Template => Kind::String,
        ExprType::Boolean => Kind::Boolean,
        ExprType::Null => Kind::Null,
        ExprType::Array => Kind::Array,
        ExprType::Object | ExprType::Regex => Kind::Object,
        ExprType::Function | ExprType::Class => Kind::Function,
        ExprType::Binary => match expr.downcast_ref::<BinaryExpr>() {
            Some(binary) => classify_binary(
                binary.operator.kind,
                &classify_expr(model, &binary.left),
                &classify_expr(model, &binary.right),
            ),
            None => Kind::Unknown,
        },
        ExprType::Prefix => match expr.downcast_ref::<PrefixExpr>() {
            Some(prefix) => classify_prefix(model, prefix),
            None => Kind::Unknown,
        },
        ExprType::New => match expr.downcast_ref::<NewExpr>() {
            Some(new_expr) => classify_new(model, new_expr),
            None => Kind::Unknown,
        },
        _ => Kind::Unknown,
    }
}

/// Kind of `left <operator> right` from the kinds of both operands.
pub fn classify_binary(operator: TokenKind, left: &TypeSet, right: &TypeSet) -> Kind {
    let both_numbers = left.is_exactly(Kind::Number) && right.is_exactly(Kind::Number);

    match operator {
        TokenKind::Plus if both_numbers => Kind::Number,
        TokenKind::Plus if left.is_exactly(Kind::String) || right.is_exactly(Kind::String) => Kind::String,
        TokenKind::Dash
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::Percent
        | TokenKind::StarStar
        | TokenKind::Ampersand
        | TokenKind::Pipe
        | TokenKind::Caret
        | TokenKind::ShiftLeft
        | TokenKind::ShiftRight
        | TokenKind::UnsignedShiftRight
            if both_numbers =>
        {
            Kind::Number
        }
        TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::StrictEquals
        | TokenKind::StrictNotEquals
        | TokenKind::Less
        | TokenKind::LessEquals
        | TokenKind::Greater
        | TokenKind::GreaterEquals
        | TokenKind::Instanceof
        | TokenKind::In => Kind::Boolean,
        _ => Kind::Unknown,
    }
}

/// The binary operator behind a compound assignment such as `+=`.
pub fn compound_operator(assignment: TokenKind) -> Option<TokenKind> {
    match assignment {
        TokenKind::PlusEquals => Some(TokenKind::Plus),
        TokenKind::MinusEquals => Some(TokenKind::Dash),
        TokenKind::StarEquals => Some(TokenKind::Star),
        TokenKind::SlashEquals => Some(TokenKind::Slash),
        TokenKind::PercentEquals => Some(TokenKind::Percent),
        TokenKind::StarStarEquals => Some(TokenKind::StarStar),
        TokenKind::AmpersandEquals => Some(TokenKind::Ampersand),
        TokenKind::PipeEquals => Some(TokenKind::Pipe),
        TokenKind::CaretEquals => Some(TokenKind::Caret),
        TokenKind::ShiftLeftEquals => Some(TokenKind::ShiftLeft),
        TokenKind::ShiftRightEquals => Some(TokenKind::ShiftRight),
        TokenKind::UnsignedShiftRightEquals => Some(TokenKind::UnsignedShiftRight),
        _ => None,
    }
}

fn classify_prefix(model: &SymbolModel, prefix: &PrefixExpr) -> Kind {
    match prefix.operator.kind {
        TokenKind::Not | TokenKind::Delete => Kind::Boolean,
        TokenKind::Typeof => Kind::String,
        TokenKind::Void => Kind::Undefined,
        TokenKind::Dash | TokenKind::Plus | TokenKind::Tilde
            if classify_expr(model, &prefix.right_expr).is_exactly(Kind::Number) =>
        {
            Kind::Number
        }
        _ => Kind::Unknown,
    }
}

/// `new Array()`, `new Object()` and `new Function()` on the built-in constructors.
fn classify_new(model: &SymbolModel, new_expr: &NewExpr) -> Kind {
    let Some(callee) = new_expr.callee.downcast_ref::<SymbolExpr>() else {
        return Kind::Unknown;
    };

    // A local binding shadows the built-in
    if model.symbol_for(callee.id).is_some() {
        return Kind::Unknown;
    }

    match callee.value.as_str() {
        "Array" => Kind::Array,
        "Object" => Kind::Object,
        "Function" => Kind::Function,
        _ => Kind::Unknown,
    }
}
