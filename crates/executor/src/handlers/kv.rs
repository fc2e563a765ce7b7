//! KV command handlers.
//!
//! While a transaction block is open every handler hands its operation to the
//! store, which queues it on the top block, and reports [`Output::Queued`].

use stackdb_core::{Operation, Store, WriteStatus};

use crate::convert::rejection;
use crate::{Output, Result};

/// Queue `op` on the open block.
fn queue(store: &mut Store, op: Operation) -> Output {
    store.apply(op);
    Output::Queued {
        pending: store.pending() as u64,
    }
}

fn write_output(status: WriteStatus, key: &str) -> Result<Output> {
    match status {
        WriteStatus::Applied => Ok(Output::Unit),
        WriteStatus::Rejected => Err(rejection(key)),
    }
}

/// Handle Get command.
pub fn kv_get(store: &mut Store, key: String) -> Result<Output> {
    if store.in_block() {
        return Ok(queue(store, Operation::Get { key }));
    }
    Ok(Output::Maybe(store.get(&key)))
}

/// Handle Set command.
pub fn kv_set(store: &mut Store, key: String, value: i64) -> Result<Output> {
    if store.in_block() {
        return Ok(queue(store, Operation::Set { key, value }));
    }
    write_output(store.set(&key, value), &key)
}

/// Handle Incr command.
pub fn kv_incr(store: &mut Store, key: String) -> Result<Output> {
    if store.in_block() {
        return Ok(queue(store, Operation::Incr { key }));
    }
    write_output(store.incr(&key), &key)
}

/// Handle Delete command.
pub fn kv_delete(store: &mut Store, key: String) -> Result<Output> {
    if store.in_block() {
        return Ok(queue(store, Operation::Delete { key }));
    }
    Ok(Output::Bool(store.delete(&key).is_removed()))
}

/// Handle DeleteByValue command.
pub fn kv_delete_by_value(store: &mut Store, value: i64) -> Result<Output> {
    if store.in_block() {
        return Ok(queue(store, Operation::DeleteByValue { value }));
    }
    store.delete_by_value(value);
    Ok(Output::Unit)
}
