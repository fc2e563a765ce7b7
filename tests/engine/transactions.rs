//! Transaction block behaviour on the Store.

use stackdb::engine::{DeleteStatus, Operation, StackState, Store, WriteStatus};

use crate::common::*;

#[test]
fn deferred_operations_return_placeholders() {
    let mut store = store_with(&[("a", 1)]);
    store.open_block();

    assert_eq!(store.get("a"), None);
    assert_eq!(store.set("", 5), WriteStatus::Applied);
    assert_eq!(store.incr("a"), WriteStatus::Applied);
    assert_eq!(store.delete("a"), DeleteStatus::NotFound);
    store.delete_by_value(1);

    assert_eq!(store.pending(), 5);
    assert_eq!(snapshot(&store).get("a"), Some(&1));
}

#[test]
fn commit_runs_records_in_issue_order() {
    let mut store = Store::new();
    store.open_block();
    let _ = store.set("x", 5);
    let _ = store.get("x");
    let _ = store.incr("x");
    let _ = store.delete("y");

    let records: Vec<Operation> = store.stack().top().unwrap().records().to_vec();
    assert_eq!(
        records,
        vec![
            Operation::Set { key: "x".into(), value: 5 },
            Operation::Get { key: "x".into() },
            Operation::Incr { key: "x".into() },
            Operation::Delete { key: "y".into() },
        ]
    );

    assert_eq!(store.commit(), 4);
    assert_eq!(store.state(), StackState::Idle);
    assert_eq!(store.get("x"), Some(6));
}

#[test]
fn commit_when_idle_returns_zero() {
    let mut store = store_with(&[("a", 1)]);
    assert_eq!(store.commit(), 0);
    assert_eq!(store.discard(), 0);
    assert_eq!(store.get("a"), Some(1));
}

#[test]
fn discard_drops_queue_and_keeps_block_open() {
    let mut store = store_with(&[("keep", 7)]);
    store.open_block();
    let _ = store.set("y", 1);
    let _ = store.set("z", 2);

    assert_eq!(store.discard(), 2);
    assert_eq!(store.depth(), 1);
    assert_eq!(store.state(), StackState::Active { depth: 1 });

    // Still deferred: this read is queued, not answered.
    assert_eq!(store.get("keep"), None);
    assert_eq!(store.pending(), 1);

    assert_eq!(store.commit(), 1);
    assert_eq!(store.get("y"), None);
    assert_eq!(store.get("z"), None);
    assert_eq!(store.get("keep"), Some(7));
}

#[test]
fn nested_commit_requeues_into_outer_block() {
    let mut store = Store::new();
    store.open_block();
    store.open_block();
    let _ = store.set("a", 1);

    assert_eq!(store.commit(), 1);
    assert_eq!(store.depth(), 1);
    assert_eq!(store.pending(), 1);
    assert!(store.is_empty());

    assert_eq!(store.commit(), 1);
    assert_eq!(store.get("a"), Some(1));
}

#[test]
fn lower_blocks_untouched_until_upper_removed() {
    let mut store = Store::new();
    store.open_block();
    let _ = store.set("outer", 1);
    store.open_block();
    let _ = store.set("inner", 2);
    let _ = store.set("inner", 3);

    assert_eq!(store.discard(), 2);
    assert_eq!(store.commit(), 0);
    assert_eq!(store.pending(), 1);
    assert_eq!(store.commit(), 1);
    assert_eq!(store.get("outer"), Some(1));
    assert_eq!(store.get("inner"), None);
}

#[test]
fn rejected_record_does_not_roll_back_earlier_ones() {
    let mut store = Store::new();
    store.open_block();
    let _ = store.set("a", 1);
    let _ = store.set("", 2);
    let _ = store.set("b", 3);

    assert_eq!(store.commit(), 3);
    assert_eq!(snapshot(&store).len(), 2);
}
