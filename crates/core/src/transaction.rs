//! Transaction blocks and the block stack.
//!
//! A [`TransactionBlock`] is an append-only queue of [`Operation`] records.
//! The [`TransactionStack`] holds blocks last-in-first-out; only the top
//! block is ever written to.
//!
//! ## State machine
//!
//! ```text
//! Idle ──push──▶ Active { depth: 1 } ──push──▶ Active { depth: 2 } ...
//!   ▲                   │
//!   └───────pop─────────┘   (clear_top keeps the depth unchanged)
//! ```
//!
//! Running a popped block is the [`Store`](crate::Store)'s job, because each
//! record must re-enter the store's own dispatch.

use crate::types::Operation;

/// An ordered queue of deferred operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionBlock {
    records: Vec<Operation>,
}

impl TransactionBlock {
    /// Create an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the queue.
    pub fn enqueue(&mut self, op: Operation) {
        self.records.push(op);
    }

    /// Number of queued records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Queued records in enqueue order.
    pub fn records(&self) -> &[Operation] {
        &self.records
    }

    /// Drop every queued record, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let dropped = self.records.len();
        self.records.clear();
        dropped
    }
}

impl IntoIterator for TransactionBlock {
    type Item = Operation;
    type IntoIter = std::vec::IntoIter<Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Dispatch state of a [`TransactionStack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackState {
    /// No block is open; operations run immediately
    Idle,
    /// At least one block is open; operations are queued on the top block
    Active {
        /// Number of open blocks
        depth: usize,
    },
}

/// Last-in-first-out stack of transaction blocks.
#[derive(Debug, Clone, Default)]
pub struct TransactionStack {
    blocks: Vec<TransactionBlock>,
}

impl TransactionStack {
    /// Create an idle stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any block is open.
    pub fn is_active(&self) -> bool {
        !self.blocks.is_empty()
    }

    /// Number of open blocks.
    pub fn depth(&self) -> usize {
        self.blocks.len()
    }

    /// Current dispatch state.
    pub fn state(&self) -> StackState {
        match self.blocks.len() {
            0 => StackState::Idle,
            depth => StackState::Active { depth },
        }
    }

    /// The newest block, if any.
    pub fn top(&self) -> Option<&TransactionBlock> {
        self.blocks.last()
    }

    /// Mutable access to the newest block, if any.
    pub fn top_mut(&mut self) -> Option<&mut TransactionBlock> {
        self.blocks.last_mut()
    }

    /// Records queued on the top block (0 when idle).
    pub fn pending(&self) -> usize {
        self.top().map_or(0, TransactionBlock::len)
    }

    /// Open a new empty block and return the new depth.
    pub fn push(&mut self) -> usize {
        self.blocks.push(TransactionBlock::new());
        self.blocks.len()
    }

    /// Remove and return the top block.
    pub fn pop(&mut self) -> Option<TransactionBlock> {
        self.blocks.pop()
    }

    /// Empty the top block in place without removing it.
    ///
    /// Returns the number of records dropped (0 when idle).
    pub fn clear_top(&mut self) -> usize {
        self.top_mut().map_or(0, TransactionBlock::clear)
    }
}
