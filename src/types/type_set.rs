use std::{collections::BTreeSet, fmt::Display};

use serde::{Deserialize, Serialize};

use super::kind::Kind;

/// Set of kinds a symbol may hold.
///
/// Grows by union only; there is no removal. Equality compares members, so two
/// sets built in different orders are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeSet {
    kinds: BTreeSet<Kind>,
}

impl TypeSet {
    pub fn new() -> Self {
        TypeSet::default()
    }

    /// Set holding exactly `kind`.
    pub fn of(kind: Kind) -> Self {
        let mut set = TypeSet::new();
        set.add_kind(kind);
        set
    }

    /// Adds `kind`. Returns whether the set grew.
    pub fn add_kind(&mut self, kind: Kind) -> bool {
        self.kinds.insert(kind)
    }

    /// Adds every kind of `other`. Returns whether the set grew.
    pub fn add_set(&mut self, other: &TypeSet) -> bool {
        let before = self.kinds.len();
        self.kinds.extend(other.kinds.iter().copied());
        self.kinds.len() != before
    }

    /// Independent copy of the current members.
    pub fn snapshot(&self) -> TypeSet {
        self.clone()
    }

    pub fn contains(&self, kind: Kind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Whether the set is `{kind}` and nothing else.
    pub fn is_exactly(&self, kind: Kind) -> bool {
        self.kinds.len() == 1 && self.contains(kind)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Kind> + '_ {
        self.kinds.iter().copied()
    }
}

impl FromIterator<Kind> for TypeSet {
    fn from_iter<T: IntoIterator<Item = Kind>>(iter: T) -> Self {
        TypeSet {
            kinds: iter.into_iter().collect(),
        }
    }
}

impl Display for TypeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.kinds.iter().map(|kind| kind.name()).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}
