//! Symbol table for a parsed script.
//!
//! This module turns a syntax tree into symbols and resolves every identifier
//! occurrence to the symbol it names. It includes:
//!
//! - `symbol`: one declared name and its accumulated kinds
//! - `scope`: script, function and block scopes with their name tables
//! - `binder`: the resolution walk, including hoisting and implicit globals
//! - `model`: the finished, queryable table with the inferred kinds filled in

pub mod binder;
pub mod model;
pub mod scope;
pub mod symbol;
