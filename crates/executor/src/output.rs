//! Output enum for command execution results.
//!
//! Every command produces exactly one output type when run immediately. Data
//! commands issued while a transaction block is open all produce
//! [`Output::Queued`] instead.

use serde::{Deserialize, Serialize};

use crate::types::StoreInfo;

/// Successful command execution results.
///
/// # Example
///
/// ```text
/// match executor.execute(Command::Get { key })? {
///     Output::Maybe(Some(v)) => println!("Found: {}", v),
///     Output::Maybe(None) => println!("Not found"),
///     Output::Queued { .. } => println!("Queued"),
///     _ => unreachable!("Get returns Maybe or Queued"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    // ==================== Primitive Results ====================
    /// No return value (set, incr, delete-by-value)
    Unit,

    /// Optional value (get on a key that may be absent)
    Maybe(Option<i64>),

    /// Boolean result (delete: whether the key existed)
    Bool(bool),

    // ==================== Transaction-specific ====================
    /// The command was queued on the open block
    Queued {
        /// Records now pending on the top block.
        pending: u64,
    },

    /// A block was opened
    BlockOpened {
        /// Number of open blocks after the push.
        depth: u64,
    },

    /// The top block was popped and run
    Committed {
        /// Records the block held (0 when no block was open).
        count: u64,
    },

    /// The top block's queue was cleared
    Discarded {
        /// Records dropped (0 when no block was open).
        count: u64,
    },

    // ==================== Database-specific ====================
    /// Ping response
    Pong {
        /// Crate version string.
        version: String,
    },

    /// Store statistics
    StoreInfo(StoreInfo),
}
