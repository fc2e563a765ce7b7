//! Operation records and result types.
//!
//! [`Operation`] is the unit that a transaction block queues: one variant per
//! store operation, each carrying its full argument payload. Records are plain
//! data (no closures), so they can be inspected, compared and serialized.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A queued store operation.
///
/// Immutable once created; a [`TransactionBlock`](crate::TransactionBlock)
/// only ever appends records and hands them back in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Read a key
    Get {
        /// Key to read
        key: String,
    },
    /// Insert or overwrite a key
    Set {
        /// Key to write
        key: String,
        /// Value to store
        value: i64,
    },
    /// Add one to a key, treating a missing key as 0
    Incr {
        /// Key to increment
        key: String,
    },
    /// Remove a key
    Delete {
        /// Key to remove
        key: String,
    },
    /// Remove every key currently holding a value
    DeleteByValue {
        /// Value to match
        value: i64,
    },
}

impl Operation {
    /// Command name of this operation, as typed in the shell.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Get { .. } => "GET",
            Operation::Set { .. } => "SET",
            Operation::Incr { .. } => "INCR",
            Operation::Delete { .. } => "DEL",
            Operation::DeleteByValue { .. } => "DELVALUE",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Get { key } | Operation::Incr { key } | Operation::Delete { key } => {
                write!(f, "{} {}", self.name(), key)
            }
            Operation::Set { key, value } => write!(f, "{} {} {}", self.name(), key, value),
            Operation::DeleteByValue { value } => write!(f, "{} {}", self.name(), value),
        }
    }
}

/// Result of `set` and `incr`.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WriteStatus {
    /// The write was applied, or queued while a block is open
    Applied,
    /// The write failed validation; the mapping is unchanged
    Rejected,
}

impl WriteStatus {
    /// Returns true for [`WriteStatus::Applied`].
    pub fn is_applied(self) -> bool {
        matches!(self, WriteStatus::Applied)
    }
}

/// Result of `delete`.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeleteStatus {
    /// The key existed and was removed
    Removed,
    /// The key did not exist (also the placeholder while a block is open)
    NotFound,
}

impl DeleteStatus {
    /// Returns true for [`DeleteStatus::Removed`].
    pub fn is_removed(self) -> bool {
        matches!(self, DeleteStatus::Removed)
    }
}
