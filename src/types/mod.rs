//! Kinds and kind sets.
//!
//! A kind is a coarse runtime category of a script value. Symbols carry the
//! set of kinds they may hold:
//!
//! - `kind`: the closed `Kind` tag and the primitive predicate
//! - `type_set`: the grow-only `TypeSet` accumulated per symbol

pub mod kind;
pub mod type_set;

#[cfg(test)]
mod tests;
