//! The key/value store.
//!
//! [`Store`] owns the key→value mapping and the [`TransactionStack`]. Every
//! data operation first checks whether a block is open:
//!
//! - **Immediate mode** (stack empty): the operation reads or mutates the
//!   mapping now and reports its real result.
//! - **Deferred mode** (any block open): the operation appends an
//!   [`Operation`] record to the *top* block and returns a placeholder
//!   (`None`, `Applied` or `NotFound`).
//!
//! ## Commit re-entry
//!
//! [`Store::commit`] pops the top block and feeds each record back through
//! the public operations. If lower blocks remain open, those operations see
//! an active stack again and are re-queued onto the new top instead of
//! executing. Only the commit of the outermost block reaches the mapping.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::key::validate_key;
use crate::transaction::{StackState, TransactionStack};
use crate::types::{DeleteStatus, Operation, WriteStatus};

/// In-memory integer key/value store with nested transaction blocks.
#[derive(Debug, Default)]
pub struct Store {
    mapping: FxHashMap<String, i64>,
    stack: TransactionStack,
}

impl Store {
    /// Create an empty store with no open blocks.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Data operations
    // =========================================================================

    /// Read a key.
    ///
    /// Returns `None` when the key is absent, and always while a block is open.
    pub fn get(&mut self, key: &str) -> Option<i64> {
        if self.defer(|| Operation::Get {
            key: key.to_string(),
        }) {
            return None;
        }
        self.read(key)
    }

    /// Insert or overwrite a key.
    ///
    /// Malformed keys are rejected in immediate mode. While a block is open
    /// the write is queued and reported as applied.
    pub fn set(&mut self, key: &str, value: i64) -> WriteStatus {
        if self.defer(|| Operation::Set {
            key: key.to_string(),
            value,
        }) {
            return WriteStatus::Applied;
        }
        settle("set", key, self.write(key, value))
    }

    /// Add one to a key; a missing key becomes 1.
    ///
    /// Queues a single `Incr` record in deferred mode, never its read and
    /// write halves.
    pub fn incr(&mut self, key: &str) -> WriteStatus {
        if self.defer(|| Operation::Incr {
            key: key.to_string(),
        }) {
            return WriteStatus::Applied;
        }
        settle("incr", key, self.increment(key))
    }

    /// Remove a key, reporting whether it existed.
    pub fn delete(&mut self, key: &str) -> DeleteStatus {
        if self.defer(|| Operation::Delete {
            key: key.to_string(),
        }) {
            return DeleteStatus::NotFound;
        }
        match self.mapping.remove(key) {
            Some(_) => DeleteStatus::Removed,
            None => DeleteStatus::NotFound,
        }
    }

    /// Remove every key currently mapped to `value`.
    pub fn delete_by_value(&mut self, value: i64) {
        if self.defer(|| Operation::DeleteByValue { value }) {
            return;
        }
        let before = self.mapping.len();
        self.mapping.retain(|_, v| *v != value);
        trace!(value, removed = before - self.mapping.len(), "deleted by value");
    }

    /// Run one operation record through the normal dispatch.
    ///
    /// The result is discarded: a rejected record is absorbed, matching the
    /// operation's own return contract.
    pub fn apply(&mut self, op: Operation) {
        match op {
            Operation::Get { key } => {
                let _ = self.get(&key);
            }
            Operation::Set { key, value } => {
                let _ = self.set(&key, value);
            }
            Operation::Incr { key } => {
                let _ = self.incr(&key);
            }
            Operation::Delete { key } => {
                let _ = self.delete(&key);
            }
            Operation::DeleteByValue { value } => self.delete_by_value(value),
        }
    }

    // =========================================================================
    // Transaction blocks
    // =========================================================================

    /// Open a new block (MULTI). Returns the new depth.
    pub fn open_block(&mut self) -> usize {
        let depth = self.stack.push();
        debug!(depth, "opened transaction block");
        depth
    }

    /// Pop the top block and run its records in order (EXEC).
    ///
    /// Returns the number of records the block held; 0 when no block is open.
    pub fn commit(&mut self) -> usize {
        let Some(block) = self.stack.pop() else {
            return 0;
        };
        let count = block.len();
        debug!(count, remaining = self.stack.depth(), "committing transaction block");
        for op in block {
            self.apply(op);
        }
        count
    }

    /// Clear the top block's queue in place (DISCARD).
    ///
    /// The emptied block stays on the stack, so the store remains in deferred
    /// mode. Returns the number of records dropped; 0 when no block is open.
    pub fn discard(&mut self) -> usize {
        let dropped = self.stack.clear_top();
        debug!(dropped, depth = self.stack.depth(), "discarded transaction block");
        dropped
    }

    /// Whether any block is open.
    pub fn in_block(&self) -> bool {
        self.stack.is_active()
    }

    /// Number of open blocks.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Records queued on the top block.
    pub fn pending(&self) -> usize {
        self.stack.pending()
    }

    /// Current dispatch state.
    pub fn state(&self) -> StackState {
        self.stack.state()
    }

    /// Read-only view of the block stack.
    pub fn stack(&self) -> &TransactionStack {
        &self.stack
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Number of entries in the mapping.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Whether the mapping holds `key`, ignoring any open block.
    pub fn contains_key(&self, key: &str) -> bool {
        self.mapping.contains_key(key)
    }

    /// Iterate over the committed entries in arbitrary order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.mapping.iter().map(|(k, v)| (k.as_str(), *v))
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Queue the operation on the top block if one is open.
    fn defer(&mut self, op: impl FnOnce() -> Operation) -> bool {
        match self.stack.top_mut() {
            Some(block) => {
                let op = op();
                trace!(op = %op, position = block.len(), "queued operation");
                block.enqueue(op);
                true
            }
            None => false,
        }
    }

    fn read(&self, key: &str) -> Option<i64> {
        self.mapping.get(key).copied()
    }

    fn write(&mut self, key: &str, value: i64) -> Result<()> {
        validate_key(key)?;
        self.mapping.insert(key.to_string(), value);
        Ok(())
    }

    fn increment(&mut self, key: &str) -> Result<i64> {
        validate_key(key)?;
        let next = self
            .read(key)
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| Error::Overflow {
                key: key.to_string(),
            })?;
        self.write(key, next)?;
        Ok(next)
    }
}

fn settle<T>(op: &'static str, key: &str, result: Result<T>) -> WriteStatus {
    match result {
        Ok(_) => WriteStatus::Applied,
        Err(e) => {
            debug!(op, key, reason = e.reason_code(), "write rejected: {}", e);
            WriteStatus::Rejected
        }
    }
}
