//! Property tests: the Store against a reference model.

use proptest::prelude::*;
use stackdb::engine::{Operation, Store};

use crate::common::*;

#[derive(Debug, Clone)]
enum Step {
    Op(Operation),
    Open,
    Commit,
    Discard,
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        6 => arb_operation().prop_map(Step::Op),
        1 => Just(Step::Open),
        1 => Just(Step::Commit),
        1 => Just(Step::Discard),
    ]
}

/// Map model plus a stack of queued records.
#[derive(Debug, Default)]
struct StackModel {
    model: Model,
    blocks: Vec<Vec<Operation>>,
}

impl StackModel {
    fn dispatch(&mut self, op: Operation) {
        match self.blocks.last_mut() {
            Some(block) => block.push(op),
            None => self.model.apply(&op),
        }
    }

    fn step(&mut self, step: &Step) {
        match step {
            Step::Op(op) => self.dispatch(op.clone()),
            Step::Open => self.blocks.push(Vec::new()),
            Step::Commit => {
                if let Some(block) = self.blocks.pop() {
                    for op in block {
                        self.dispatch(op);
                    }
                }
            }
            Step::Discard => {
                if let Some(block) = self.blocks.last_mut() {
                    block.clear();
                }
            }
        }
    }
}

fn run(store: &mut Store, step: &Step) {
    match step {
        Step::Op(op) => store.apply(op.clone()),
        Step::Open => {
            store.open_block();
        }
        Step::Commit => {
            store.commit();
        }
        Step::Discard => {
            store.discard();
        }
    }
}

proptest! {
    #[test]
    fn store_matches_model(steps in prop::collection::vec(arb_step(), 0..60)) {
        let mut store = Store::new();
        let mut model = StackModel::default();

        for step in &steps {
            run(&mut store, step);
            model.step(step);
            prop_assert_eq!(store.depth(), model.blocks.len());
            prop_assert_eq!(store.pending(), model.blocks.last().map_or(0, Vec::len));
        }
        prop_assert_eq!(snapshot(&store), model.model.map);
    }

    #[test]
    fn committed_block_equals_immediate_run(ops in prop::collection::vec(arb_operation(), 0..30)) {
        let mut immediate = Store::new();
        for op in &ops {
            immediate.apply(op.clone());
        }

        let mut deferred = Store::new();
        deferred.open_block();
        for op in &ops {
            deferred.apply(op.clone());
        }
        // Nothing reaches the mapping while the block is open.
        prop_assert!(deferred.is_empty());
        prop_assert_eq!(deferred.commit(), ops.len());

        prop_assert_eq!(snapshot(&immediate), snapshot(&deferred));
    }

    #[test]
    fn discard_leaves_mapping_unchanged(
        seed in prop::collection::vec((arb_key(), arb_value()), 0..8),
        ops in prop::collection::vec(arb_operation(), 0..20),
    ) {
        let mut store = Store::new();
        for (key, value) in &seed {
            let _ = store.set(key, *value);
        }
        let before = snapshot(&store);

        store.open_block();
        for op in &ops {
            store.apply(op.clone());
        }
        prop_assert_eq!(store.discard(), ops.len());
        prop_assert_eq!(store.depth(), 1);
        prop_assert_eq!(snapshot(&store), before);
    }

    #[test]
    fn delete_by_value_removes_exactly_matches(
        seed in prop::collection::vec((arb_key(), arb_value()), 0..8),
        target in arb_value(),
    ) {
        let mut store = Store::new();
        for (key, value) in &seed {
            let _ = store.set(key, *value);
        }
        let mut expected = snapshot(&store);
        expected.retain(|_, v| *v != target);

        store.delete_by_value(target);
        prop_assert_eq!(snapshot(&store), expected);
    }
}
