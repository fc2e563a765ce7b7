//! Immediate-mode Store operations.

use stackdb::engine::{DeleteStatus, Store, WriteStatus, MAX_KEY_BYTES};

use crate::common::*;

#[test]
fn set_then_get_returns_value() {
    let mut store = Store::new();
    assert_eq!(store.set("k", 42), WriteStatus::Applied);
    assert_eq!(store.get("k"), Some(42));
}

#[test]
fn get_missing_is_absent_not_zero() {
    let mut store = store_with(&[("zero", 0)]);
    assert_eq!(store.get("never"), None);
    assert_eq!(store.get("zero"), Some(0));
}

#[test]
fn incr_missing_key_stores_one() {
    let mut store = Store::new();
    assert!(store.incr("n").is_applied());
    assert_eq!(store.get("n"), Some(1));
    assert!(store.incr("n").is_applied());
    assert_eq!(store.get("n"), Some(2));
}

#[test]
fn incr_negative_and_zero() {
    let mut store = store_with(&[("neg", -1), ("zero", 0)]);
    let _ = store.incr("neg");
    let _ = store.incr("zero");
    assert_eq!(store.get("neg"), Some(0));
    assert_eq!(store.get("zero"), Some(1));
}

#[test]
fn incr_overflow_is_rejected() {
    let mut store = store_with(&[("max", i64::MAX)]);
    assert_eq!(store.incr("max"), WriteStatus::Rejected);
    assert_eq!(store.get("max"), Some(i64::MAX));
}

#[test]
fn delete_reports_presence() {
    let mut store = store_with(&[("a", 1)]);
    assert_eq!(store.delete("a"), DeleteStatus::Removed);
    assert_eq!(store.get("a"), None);
    assert_eq!(store.delete("a"), DeleteStatus::NotFound);
}

#[test]
fn delete_by_value_leaves_other_keys() {
    let mut store = store_with(&[("m", 9), ("n", 9), ("o", 8)]);
    store.delete_by_value(9);
    assert_eq!(store.get("m"), None);
    assert_eq!(store.get("n"), None);
    assert_eq!(store.get("o"), Some(8));
}

#[test]
fn malformed_keys_are_rejected() {
    let mut store = Store::new();
    let long = "k".repeat(MAX_KEY_BYTES + 1);
    for key in ["", "a\0b", long.as_str()] {
        assert_eq!(store.set(key, 1), WriteStatus::Rejected);
        assert_eq!(store.incr(key), WriteStatus::Rejected);
        assert_eq!(store.get(key), None);
        assert_eq!(store.delete(key), DeleteStatus::NotFound);
    }
    assert!(store.is_empty());

    let longest = "k".repeat(MAX_KEY_BYTES);
    assert!(store.set(&longest, 1).is_applied());
}

#[test]
fn get_never_mutates() {
    let mut store = store_with(&[("a", 1)]);
    let before = snapshot(&store);
    let _ = store.get("a");
    let _ = store.get("b");
    assert_eq!(snapshot(&store), before);
}
