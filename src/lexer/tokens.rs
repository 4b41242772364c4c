use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("var", TokenKind::Var);
        map.insert("let", TokenKind::Let);
        map.insert("const", TokenKind::Const);
        map.insert("function", TokenKind::Function);
        map.insert("new", TokenKind::New);
        map.insert("import", TokenKind::Import);
        map.insert("export", TokenKind::Export);
        map.insert("return", TokenKind::Return);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("do", TokenKind::Do);
        map.insert("for", TokenKind::For);
        map.insert("in", TokenKind::In);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("null", TokenKind::Null);
        map.insert("typeof", TokenKind::Typeof);
        map.insert("void", TokenKind::Void);
        map.insert("instanceof", TokenKind::Instanceof);
        map.insert("delete", TokenKind::Delete);
        map.insert("try", TokenKind::Try);
        map.insert("catch", TokenKind::Catch);
        map.insert("finally", TokenKind::Finally);
        map.insert("throw", TokenKind::Throw);
        map.insert("switch", TokenKind::Switch);
        map.insert("case", TokenKind::Case);
        map.insert("class", TokenKind::Class);
        map.insert("extends", TokenKind::Extends);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Template,
    /// Text up to the first `${` of a template with substitutions
    TemplateHead,
    /// Text between two substitutions
    TemplateMiddle,
    /// Text after the last substitution, up to the closing backtick
    TemplateTail,
    Regex,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment,      // =
    Equals,          // ==
    StrictEquals,    // ===
    Not,             // !
    NotEquals,       // !=
    StrictNotEquals, // !==

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,
    Nullish,

    Dot,
    Semicolon,
    Colon,
    Question,
    Comma,
    Arrow,    // =>
    Ellipsis, // ...

    PlusPlus,
    MinusMinus,
    PlusEquals,
    MinusEquals,
    SlashEquals,
    StarEquals,
    PercentEquals,
    StarStarEquals,
    AmpersandEquals,
    PipeEquals,
    CaretEquals,
    ShiftLeftEquals,
    ShiftRightEquals,
    UnsignedShiftRightEquals,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,
    StarStar, // **

    // Bitwise
    Tilde,
    Ampersand,
    Pipe,
    Caret,
    ShiftLeft,          // <<
    ShiftRight,         // >>
    UnsignedShiftRight, // >>>

    // Reserved
    Var,
    Let,
    Const,
    Function,
    New,
    Import,
    Export,
    Return,
    If,
    Else,
    While,
    Do,
    For,
    In,
    Break,
    Continue,
    True,
    False,
    Null,
    Typeof,
    Void,
    Instanceof,
    Delete,
    Try,
    Catch,
    Finally,
    Throw,
    Switch,
    Case,
    Class,
    Extends,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
    /// Set when at least one line break separates this token from the previous one.
    pub newline_before: bool,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    pub fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// Whether the token can be used as a property name after `.` or inside an object literal.
    pub fn is_property_name(&self) -> bool {
        self.kind == TokenKind::Identifier || RESERVED_LOOKUP.contains_key(self.value.as_str())
    }
}
