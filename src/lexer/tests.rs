//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers, floats, exponents, hex)
//! - String literals with escape sequences
//! - Operators and punctuation
//! - Templates and regular expression literals
//! - Comments
//! - Error cases

use crate::errors::errors::ErrorImpl;

use super::{lexer::{tokenize, unescape}, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.js".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "var let const function if else while do for in return new import export true false null typeof void instanceof";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Var,
            TokenKind::Let,
            TokenKind::Const,
            TokenKind::Function,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::Do,
            TokenKind::For,
            TokenKind::In,
            TokenKind::Return,
            TokenKind::New,
            TokenKind::Import,
            TokenKind::Export,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Null,
            TokenKind::Typeof,
            TokenKind::Void,
            TokenKind::Instanceof,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_contextual_keywords_are_identifiers() {
    let tokens = tokenize("of from undefined".to_string(), None).unwrap();

    assert!(tokens[..3].iter().all(|token| token.kind == TokenKind::Identifier));
    assert_eq!(tokens[2].value, "undefined");
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore $dollar CamelCase".to_string();
    let tokens = tokenize(source, Some("test.js".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].value, "$dollar");
    assert_eq!(tokens[5].value, "CamelCase");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 .5 1e3 2.5E-2 0xFF".to_string();
    let tokens = tokenize(source, Some("test.js".to_string())).unwrap();

    let values: Vec<&str> = tokens[..7].iter().map(|token| token.value.as_str()).collect();
    assert!(tokens[..7].iter().all(|token| token.kind == TokenKind::Number));
    assert_eq!(values, vec!["42", "3.14", "0", ".5", "1e3", "2.5E-2", "0xFF"]);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" 'world' "multiple words""#.to_string();
    let tokens = tokenize(source, Some("test.js".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "world");
    assert_eq!(tokens[2].value, "multiple words");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let source = r#""hello\nworld" "tab\there" "backslash\\" "hex\x41" 'it\'s' "B""#.to_string();
    let tokens = tokenize(source, Some("test.js".to_string())).unwrap();

    assert_eq!(tokens[0].value, "hello\nworld");
    assert_eq!(tokens[1].value, "tab\there");
    assert_eq!(tokens[2].value, "backslash\\");
    assert_eq!(tokens[3].value, "hexA");
    assert_eq!(tokens[4].value, "it's");
    assert_eq!(tokens[5].value, "B");
}

#[test]
fn test_tokenize_escaped_quote_in_string() {
    let source = r#""quote\"test""#.to_string();
    let tokens = tokenize(source, Some("test.js".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "quote\"test");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_unescape_keeps_malformed_escapes() {
    assert_eq!(unescape("\\xZ"), "xZ");
    assert_eq!(unescape("trailing\\"), "trailing\\");
}

#[test]
fn test_tokenize_template_literal() {
    let tokens = tokenize("`plain \\` text`".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Template);
    assert_eq!(tokens[0].value, "plain \\` text");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_template_substitutions() {
    let tokens = tokenize("`a ${b}\nc ${d} e`".to_string(), None).unwrap();

    let parts: Vec<(TokenKind, &str)> = tokens.iter().map(|token| (token.kind, token.value.as_str())).collect();
    assert_eq!(
        parts,
        vec![
            (TokenKind::TemplateHead, "a "),
            (TokenKind::Identifier, "b"),
            (TokenKind::TemplateMiddle, "\nc "),
            (TokenKind::Identifier, "d"),
            (TokenKind::TemplateTail, " e"),
            (TokenKind::EOF, "EOF"),
        ]
    );
}

#[test]
fn test_tokenize_braces_inside_substitution() {
    assert_eq!(
        kinds("`${ {a: 1}.a }`"),
        vec![
            TokenKind::TemplateHead,
            TokenKind::OpenCurly,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Number,
            TokenKind::CloseCurly,
            TokenKind::Dot,
            TokenKind::Identifier,
            TokenKind::TemplateTail,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_unterminated_template() {
    let error = tokenize("var s = `abc".to_string(), None).unwrap_err();
    assert_eq!(error.get_internal_error(), &ErrorImpl::UnterminatedString);
    assert_eq!(error.get_position().0, 8);

    let error = tokenize("var s = `a ${b".to_string(), None).unwrap_err();
    assert_eq!(error.get_internal_error(), &ErrorImpl::UnterminatedString);
}

#[test]
fn test_tokenize_bitwise_and_shift_operators() {
    assert_eq!(
        kinds("a & b | c ^ ~d << 1 >> 2 >>> 3 ** 4"),
        vec![
            TokenKind::Identifier,
            TokenKind::Ampersand,
            TokenKind::Identifier,
            TokenKind::Pipe,
            TokenKind::Identifier,
            TokenKind::Caret,
            TokenKind::Tilde,
            TokenKind::Identifier,
            TokenKind::ShiftLeft,
            TokenKind::Number,
            TokenKind::ShiftRight,
            TokenKind::Number,
            TokenKind::UnsignedShiftRight,
            TokenKind::Number,
            TokenKind::StarStar,
            TokenKind::Number,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_bitwise_compound_operators() {
    assert_eq!(
        kinds("&= |= ^= <<= >>= >>>= **= ..."),
        vec![
            TokenKind::AmpersandEquals,
            TokenKind::PipeEquals,
            TokenKind::CaretEquals,
            TokenKind::ShiftLeftEquals,
            TokenKind::ShiftRightEquals,
            TokenKind::UnsignedShiftRightEquals,
            TokenKind::StarStarEquals,
            TokenKind::Ellipsis,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_exception_and_class_keywords() {
    assert_eq!(
        kinds("try catch finally throw switch case class extends delete default"),
        vec![
            TokenKind::Try,
            TokenKind::Catch,
            TokenKind::Finally,
            TokenKind::Throw,
            TokenKind::Switch,
            TokenKind::Case,
            TokenKind::Class,
            TokenKind::Extends,
            TokenKind::Delete,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_regex_literal() {
    let tokens = tokenize("x = /ab+c[/]\\//gi;".to_string(), None).unwrap();

    assert_eq!(tokens[2].kind, TokenKind::Regex);
    assert_eq!(tokens[2].value, "/ab+c[/]\\//gi");
    assert_eq!(tokens[3].kind, TokenKind::Semicolon);
}

#[test]
fn test_slash_after_operand_is_division() {
    assert_eq!(
        kinds("a / b / c; (x) / 2 /= 3"),
        vec![
            TokenKind::Identifier,
            TokenKind::Slash,
            TokenKind::Identifier,
            TokenKind::Slash,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::Slash,
            TokenKind::Number,
            TokenKind::SlashEquals,
            TokenKind::Number,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / % == === != !== < > <= >= = && || ?? =>";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Equals,
            TokenKind::StrictEquals,
            TokenKind::NotEquals,
            TokenKind::StrictNotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Assignment,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Nullish,
            TokenKind::Arrow,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    let source = "( ) { } [ ] . , ; : ?";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Dot,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::Question,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_compound_operators() {
    assert_eq!(
        kinds("++ -- += -= *= /= %="),
        vec![
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::PlusEquals,
            TokenKind::MinusEquals,
            TokenKind::StarEquals,
            TokenKind::SlashEquals,
            TokenKind::PercentEquals,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "var x = 5 // this is a comment\n/* block\ncomment */ var y = 10".to_string();
    let tokens = tokenize(source, Some("test.js".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Var);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[3].value, "5");
    assert_eq!(tokens[4].kind, TokenKind::Var);
    assert_eq!(tokens[5].value, "y");
    assert_eq!(tokens[7].value, "10");
    assert_eq!(tokens[8].kind, TokenKind::EOF);
}

#[test]
fn test_newline_before_is_tracked() {
    let tokens = tokenize("a = 1\nb = 2; c".to_string(), None).unwrap();

    assert!(!tokens[0].newline_before);
    assert!(!tokens[2].newline_before);
    assert!(tokens[3].newline_before);
    assert_eq!(tokens[3].value, "b");
    assert!(!tokens[7].newline_before);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("var abc = 'x';".to_string(), None).unwrap();

    assert_eq!(tokens[1].span.start.0, 4);
    assert_eq!(tokens[1].span.end.0, 7);
    assert_eq!(tokens[3].span.start.0, 10);
    assert_eq!(tokens[3].span.end.0, 13);
}

#[test]
fn test_unrecognised_token() {
    let error = tokenize("var a = #;".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 8);
}

#[test]
fn test_unterminated_string() {
    let error = tokenize("var a = \"abc".to_string(), None).unwrap_err();

    assert_eq!(error.get_internal_error(), &ErrorImpl::UnterminatedString);
    assert_eq!(error.get_position().0, 8);
}

#[test]
fn test_unterminated_comment() {
    let error = tokenize("var a; /* never closed".to_string(), None).unwrap_err();

    assert_eq!(error.get_internal_error(), &ErrorImpl::UnterminatedComment);
}
