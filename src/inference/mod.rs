//! Multi-kind inference over a bound script.
//!
//! - `classify`: maps an expression to the kinds it can produce
//! - `visitor`: the single textual pass that widens each assigned symbol
//!
//! The pass is flow-insensitive: a symbol's set is the union over every
//! declaration and assignment site, in program order, with no narrowing.

pub mod classify;
pub mod visitor;
