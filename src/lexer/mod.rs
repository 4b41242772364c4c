//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts script source
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling, including the line breaks the
//!   parser needs for automatic semicolon insertion

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
