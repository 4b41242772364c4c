use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern { regex: Regex::new(regex).expect("lexer pattern must compile"), handler }
}

lazy_static! {
    // Tried in order, the first pattern matching at the current position wins,
    // so longer operators come before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern("^[a-zA-Z_$][a-zA-Z0-9_$]*", symbol_handler),
        pattern("^(0[xX][0-9a-fA-F]+|([0-9]+(\\.[0-9]*)?|\\.[0-9]+)([eE][+-]?[0-9]+)?)", number_handler),
        pattern("^\\s+", skip_handler),
        pattern("^\"(?:[^\"\\\\\\n]|\\\\.)*\"", string_handler),
        pattern("^'(?:[^'\\\\\\n]|\\\\.)*'", string_handler),
        pattern("^`", template_handler),
        pattern("^[\"']", unterminated_string_handler),
        pattern("^//[^\\n]*", skip_handler),
        pattern("^/\\*[\\s\\S]*?\\*/", skip_handler),
        pattern("^/\\*", unterminated_comment_handler),
        pattern("^/", slash_handler),
        pattern("^\\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[")),
        pattern("^\\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]")),
        pattern("^\\{", open_curly_handler),
        pattern("^\\}", close_curly_handler),
        pattern("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        pattern("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        pattern("^===", MK_DEFAULT_HANDLER!(TokenKind::StrictEquals, "===")),
        pattern("^==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        pattern("^=>", MK_DEFAULT_HANDLER!(TokenKind::Arrow, "=>")),
        pattern("^!==", MK_DEFAULT_HANDLER!(TokenKind::StrictNotEquals, "!==")),
        pattern("^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        pattern("^!", MK_DEFAULT_HANDLER!(TokenKind::Not, "!")),
        pattern("^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        pattern("^<<=", MK_DEFAULT_HANDLER!(TokenKind::ShiftLeftEquals, "<<=")),
        pattern("^<<", MK_DEFAULT_HANDLER!(TokenKind::ShiftLeft, "<<")),
        pattern("^<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")),
        pattern("^<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        pattern("^>>>=", MK_DEFAULT_HANDLER!(TokenKind::UnsignedShiftRightEquals, ">>>=")),
        pattern("^>>>", MK_DEFAULT_HANDLER!(TokenKind::UnsignedShiftRight, ">>>")),
        pattern("^>>=", MK_DEFAULT_HANDLER!(TokenKind::ShiftRightEquals, ">>=")),
        pattern("^>>", MK_DEFAULT_HANDLER!(TokenKind::ShiftRight, ">>")),
        pattern("^>=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")),
        pattern("^>", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        pattern("^\\|\\|", MK_DEFAULT_HANDLER!(TokenKind::Or, "||")),
        pattern("^\\|=", MK_DEFAULT_HANDLER!(TokenKind::PipeEquals, "|=")),
        pattern("^\\|", MK_DEFAULT_HANDLER!(TokenKind::Pipe, "|")),
        pattern("^&&", MK_DEFAULT_HANDLER!(TokenKind::And, "&&")),
        pattern("^&=", MK_DEFAULT_HANDLER!(TokenKind::AmpersandEquals, "&=")),
        pattern("^&", MK_DEFAULT_HANDLER!(TokenKind::Ampersand, "&")),
        pattern("^\\^=", MK_DEFAULT_HANDLER!(TokenKind::CaretEquals, "^=")),
        pattern("^\\^", MK_DEFAULT_HANDLER!(TokenKind::Caret, "^")),
        pattern("^~", MK_DEFAULT_HANDLER!(TokenKind::Tilde, "~")),
        pattern("^\\?\\?", MK_DEFAULT_HANDLER!(TokenKind::Nullish, "??")),
        pattern("^\\.\\.\\.", MK_DEFAULT_HANDLER!(TokenKind::Ellipsis, "...")),
        pattern("^\\.", MK_DEFAULT_HANDLER!(TokenKind::Dot, ".")),
        pattern("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        pattern("^:", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        pattern("^\\?", MK_DEFAULT_HANDLER!(TokenKind::Question, "?")),
        pattern("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        pattern("^\\+\\+", MK_DEFAULT_HANDLER!(TokenKind::PlusPlus, "++")),
        pattern("^--", MK_DEFAULT_HANDLER!(TokenKind::MinusMinus, "--")),
        pattern("^\\+=", MK_DEFAULT_HANDLER!(TokenKind::PlusEquals, "+=")),
        pattern("^-=", MK_DEFAULT_HANDLER!(TokenKind::MinusEquals, "-=")),
        pattern("^\\*\\*=", MK_DEFAULT_HANDLER!(TokenKind::StarStarEquals, "**=")),
        pattern("^\\*\\*", MK_DEFAULT_HANDLER!(TokenKind::StarStar, "**")),
        pattern("^\\*=", MK_DEFAULT_HANDLER!(TokenKind::StarEquals, "*=")),
        pattern("^%=", MK_DEFAULT_HANDLER!(TokenKind::PercentEquals, "%=")),
        pattern("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        pattern("^-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        pattern("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        pattern("^%", MK_DEFAULT_HANDLER!(TokenKind::Percent, "%")),
    ];

    // Body characters, escapes and `[...]` classes, which may hold an unescaped `/`
    static ref REGEX_LITERAL: Regex = Regex::new(r"^/(?:[^/\\\n\[]|\\.|\[(?:[^\]\\\n]|\\.)*\])+/[a-zA-Z]*")
        .expect("regex literal pattern must compile");
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
    saw_newline: bool,
    /// Open `{` count inside each template substitution being lexed, innermost last
    template_braces: Vec<usize>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
            saw_newline: false,
            template_braces: vec![],
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, mut token: Token) {
        token.newline_before = std::mem::take(&mut self.saw_newline);
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span covering the next `len` bytes.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|found| found.as_str().to_string())
            .unwrap_or_default()
    }

    /// A `/` starts a regular expression unless it follows the end of an operand.
    fn regex_allowed(&self) -> bool {
        match self.tokens.last() {
            Some(token) => !token.is_one_of_many(&[
                TokenKind::Identifier,
                TokenKind::Number,
                TokenKind::String,
                TokenKind::Template,
                TokenKind::TemplateTail,
                TokenKind::Regex,
                TokenKind::CloseParen,
                TokenKind::CloseBracket,
                TokenKind::CloseCurly,
                TokenKind::True,
                TokenKind::False,
                TokenKind::Null,
                TokenKind::PlusPlus,
                TokenKind::MinusMinus,
            ]),
            None => true,
        }
    }
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);

    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Number, matched.clone(), span));
    lexer.advance_n(matched.len());
    Ok(())
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    if matched.contains('\n') {
        lexer.saw_newline = true;
    }
    lexer.advance_n(matched.len());
    Ok(())
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    let string_literal = unescape(&matched[1..matched.len() - 1]);

    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::String, string_literal, span));
    lexer.advance_n(matched.len());
    Ok(())
}

fn template_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    template_part(lexer, true)
}

/// Lexes template text from the current backtick or substitution-closing `}`
/// up to the closing backtick or the next `${`.
fn template_part(lexer: &mut Lexer, head: bool) -> Result<(), Error> {
    let body = &lexer.remainder()[1..];

    let mut end = None;
    let mut chars = body.char_indices();
    while let Some((index, ch)) = chars.next() {
        match ch {
            '\\' => {
                chars.next();
            }
            '`' => {
                end = Some((index, 1, false));
                break;
            }
            '$' if body[index + 1..].starts_with('{') => {
                end = Some((index, 2, true));
                break;
            }
            _ => {}
        }
    }

    let Some((index, delimiter, opens_substitution)) = end else {
        return Err(Error::new(ErrorImpl::UnterminatedString, lexer.position()));
    };
    let raw = body[..index].to_string();

    let kind = match (head, opens_substitution) {
        (true, false) => TokenKind::Template,
        (true, true) => TokenKind::TemplateHead,
        (false, true) => TokenKind::TemplateMiddle,
        (false, false) => TokenKind::TemplateTail,
    };
    let len = 1 + index + delimiter;

    let span = lexer.span_of(len);
    lexer.push(MK_TOKEN!(kind, raw, span));
    lexer.advance_n(len);

    if opens_substitution {
        lexer.template_braces.push(0);
    }
    Ok(())
}

fn open_curly_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    if let Some(open) = lexer.template_braces.last_mut() {
        *open += 1;
    }

    let span = lexer.span_of(1);
    lexer.push(MK_TOKEN!(TokenKind::OpenCurly, String::from("{"), span));
    lexer.advance_n(1);
    Ok(())
}

fn close_curly_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    // Closes a substitution, the template text resumes
    if lexer.template_braces.last() == Some(&0) {
        lexer.template_braces.pop();
        return template_part(lexer, false);
    }

    if let Some(open) = lexer.template_braces.last_mut() {
        *open -= 1;
    }

    let span = lexer.span_of(1);
    lexer.push(MK_TOKEN!(TokenKind::CloseCurly, String::from("}"), span));
    lexer.advance_n(1);
    Ok(())
}

fn slash_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    if lexer.regex_allowed() {
        if let Some(literal) = REGEX_LITERAL.find(lexer.remainder()).map(|found| found.as_str().to_string()) {
            let span = lexer.span_of(literal.len());
            let len = literal.len();
            lexer.push(MK_TOKEN!(TokenKind::Regex, literal, span));
            lexer.advance_n(len);
            return Ok(());
        }
    }

    let (kind, text) = if lexer.remainder().starts_with("/=") {
        (TokenKind::SlashEquals, "/=")
    } else {
        (TokenKind::Slash, "/")
    };

    let span = lexer.span_of(text.len());
    lexer.push(MK_TOKEN!(kind, String::from(text), span));
    lexer.advance_n(text.len());
    Ok(())
}

fn unterminated_string_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    Err(Error::new(ErrorImpl::UnterminatedString, lexer.position()))
}

fn unterminated_comment_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    Err(Error::new(ErrorImpl::UnterminatedComment, lexer.position()))
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let value = lexer.matched(regex);
    let kind = RESERVED_LOOKUP.get(value.as_str()).copied().unwrap_or(TokenKind::Identifier);

    let span = lexer.span_of(value.len());
    let len = value.len();
    lexer.push(MK_TOKEN!(kind, value, span));
    lexer.advance_n(len);
    Ok(())
}

/// Resolves backslash escapes inside a quoted string literal.
pub fn unescape(raw: &str) -> String {
    let mut result = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('0') => result.push('\0'),
            Some('b') => result.push('\u{8}'),
            Some('f') => result.push('\u{c}'),
            Some('v') => result.push('\u{b}'),
            Some('x') => {
                let mut hex = String::new();
                while hex.len() < 2 {
                    match chars.peek() {
                        Some(ch) if ch.is_ascii_hexdigit() => {
                            hex.push(*ch);
                            chars.next();
                        }
                        _ => break,
                    }
                }

                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) if hex.len() == 2 => result.push(byte as char),
                    _ => {
                        result.push('x');
                        result.push_str(&hex);
                    }
                }
            }
            Some('u') => {
                let mut hex = String::new();
                while hex.len() < 4 {
                    match chars.peek() {
                        Some(ch) if ch.is_ascii_hexdigit() => {
                            hex.push(*ch);
                            chars.next();
                        }
                        _ => break,
                    }
                }

                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if hex.len() == 4 => result.push(decoded),
                    _ => {
                        result.push('u');
                        result.push_str(&hex);
                    }
                }
            }
            // Quotes, backslashes and any other escaped character stand for themselves
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }

    result
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let pattern = PATTERNS.iter().find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex)?,
            None => {
                return Err(Error::new(ErrorImpl::UnrecognisedToken { token: lex.at().to_string() }, lex.position()));
            }
        }
    }

    if !lex.template_braces.is_empty() {
        return Err(Error::new(ErrorImpl::UnterminatedString, lex.position()));
    }

    let span = lex.span_of(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span));
    Ok(lex.tokens)
}
