//! Unit tests for kinds and kind sets.
//!
//! The set laws (idempotence, commutativity, monotonic growth) are checked with proptest.

use proptest::prelude::*;

use super::{kind::Kind, type_set::TypeSet};

fn any_kind() -> impl Strategy<Value = Kind> {
    proptest::sample::select(Kind::all().to_vec())
}

fn any_kinds() -> impl Strategy<Value = Vec<Kind>> {
    proptest::collection::vec(any_kind(), 0..20)
}

fn collect(kinds: &[Kind]) -> TypeSet {
    let mut set = TypeSet::new();
    for kind in kinds {
        set.add_kind(*kind);
    }
    set
}

#[test]
fn test_primitives() {
    assert_eq!(
        Kind::primitives(),
        &[Kind::Number, Kind::String, Kind::Boolean, Kind::Null, Kind::Undefined]
    );
    assert!(Kind::Undefined.is_primitive());
    assert!(!Kind::Array.is_primitive());
    assert!(!Kind::Function.is_primitive());
    assert!(!Kind::Unknown.is_primitive());
}

#[test]
fn test_add_kind_reports_growth() {
    let mut set = TypeSet::new();
    assert!(set.is_empty());

    assert!(set.add_kind(Kind::Number));
    assert!(!set.add_kind(Kind::Number));
    assert!(set.add_kind(Kind::String));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_add_set() {
    let mut target = TypeSet::of(Kind::Number);
    let source: TypeSet = [Kind::String, Kind::Number].into_iter().collect();

    assert!(target.add_set(&source));
    assert!(!target.add_set(&source));
    assert_eq!(target, source);
}

#[test]
fn test_snapshot_is_independent() {
    let mut set = TypeSet::of(Kind::Number);
    let snapshot = set.snapshot();
    set.add_kind(Kind::Null);

    assert_eq!(snapshot, TypeSet::of(Kind::Number));
    assert!(set.contains(Kind::Null));
}

#[test]
fn test_is_exactly() {
    let mut set = TypeSet::of(Kind::String);
    assert!(set.is_exactly(Kind::String));
    assert!(!set.is_exactly(Kind::Number));

    set.add_kind(Kind::Number);
    assert!(!set.is_exactly(Kind::String));
    assert!(!TypeSet::new().is_exactly(Kind::String));
}

#[test]
fn test_display() {
    let set: TypeSet = [Kind::String, Kind::Number].into_iter().collect();
    assert_eq!(set.to_string(), "{number, string}");
    assert_eq!(TypeSet::new().to_string(), "{}");
}

#[test]
fn test_serialize() {
    let set: TypeSet = [Kind::Array, Kind::Null].into_iter().collect();
    assert_eq!(serde_json::to_string(&set).unwrap(), r#"["null","array"]"#);

    let back: TypeSet = serde_json::from_str(r#"["array","null","array"]"#).unwrap();
    assert_eq!(back, set);
}

proptest! {
    #[test]
    fn prop_no_duplicates(kinds in any_kinds()) {
        let set = collect(&kinds);
        let mut members: Vec<Kind> = set.iter().collect();
        let total = members.len();
        members.dedup();
        prop_assert_eq!(members.len(), total);
        prop_assert!(set.len() <= Kind::all().len());
    }

    #[test]
    fn prop_add_kind_idempotent(kinds in any_kinds(), kind in any_kind()) {
        let mut once = collect(&kinds);
        once.add_kind(kind);
        let mut twice = once.clone();
        twice.add_kind(kind);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_add_set_idempotent(left in any_kinds(), right in any_kinds()) {
        let other = collect(&right);
        let mut once = collect(&left);
        once.add_set(&other);
        let mut twice = once.clone();
        prop_assert!(!twice.add_set(&other));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_order_does_not_matter(kinds in any_kinds()) {
        let mut reversed = kinds.clone();
        reversed.reverse();
        prop_assert_eq!(collect(&kinds), collect(&reversed));
    }

    #[test]
    fn prop_union_commutes(left in any_kinds(), right in any_kinds()) {
        let mut left_first = collect(&left);
        left_first.add_set(&collect(&right));
        let mut right_first = collect(&right);
        right_first.add_set(&collect(&left));
        prop_assert_eq!(left_first, right_first);
    }

    #[test]
    fn prop_never_shrinks(kinds in any_kinds()) {
        let mut set = TypeSet::new();
        for kind in kinds {
            let before = set.snapshot();
            set.add_kind(kind);
            prop_assert!(before.iter().all(|member| set.contains(member)));
            prop_assert!(set.len() >= before.len());
            prop_assert!(set.contains(kind));
        }
    }
}
