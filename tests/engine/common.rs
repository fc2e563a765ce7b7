//! Common test utilities for engine tests

use std::collections::BTreeMap;

use proptest::prelude::*;
use stackdb::engine::{Operation, Store};

/// Sorted copy of the committed mapping.
pub fn snapshot(store: &Store) -> BTreeMap<String, i64> {
    store
        .entries()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// Build a store holding `entries`, with no block open.
pub fn store_with(entries: &[(&str, i64)]) -> Store {
    let mut store = Store::new();
    for (key, value) in entries {
        assert!(store.set(key, *value).is_applied());
    }
    store
}

/// Keys drawn from a small pool so operations collide.
pub fn arb_key() -> BoxedStrategy<String> {
    prop::sample::select(vec!["a", "b", "c", "d"])
        .prop_map(String::from)
        .boxed()
}

/// Values drawn from a small range so delete-by-value hits.
pub fn arb_value() -> BoxedStrategy<i64> {
    (-3i64..4).boxed()
}

/// Any data operation.
pub fn arb_operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        arb_key().prop_map(|key| Operation::Get { key }),
        (arb_key(), arb_value()).prop_map(|(key, value)| Operation::Set { key, value }),
        arb_key().prop_map(|key| Operation::Incr { key }),
        arb_key().prop_map(|key| Operation::Delete { key }),
        arb_value().prop_map(|value| Operation::DeleteByValue { value }),
    ]
}

/// Plain map model of immediate-mode semantics.
#[derive(Debug, Default)]
pub struct Model {
    pub map: BTreeMap<String, i64>,
}

impl Model {
    pub fn apply(&mut self, op: &Operation) {
        match op {
            Operation::Get { .. } => {}
            Operation::Set { key, value } => {
                self.map.insert(key.clone(), *value);
            }
            Operation::Incr { key } => {
                let next = self.map.get(key).copied().unwrap_or(0) + 1;
                self.map.insert(key.clone(), next);
            }
            Operation::Delete { key } => {
                self.map.remove(key);
            }
            Operation::DeleteByValue { value } => self.map.retain(|_, v| v != value),
        }
    }
}
