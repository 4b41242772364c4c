//! Error types and error handling for the front end.
//!
//! This module defines the errors produced while turning source text into
//! a syntax tree. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the lexing and parsing phases
//! - Helpful error messages and suggestions
//!
//! The inference pass itself never fails, so it has no variants here.

pub mod errors;

#[cfg(test)]
mod tests;
