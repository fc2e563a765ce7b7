//! Supporting types for command outputs.

use serde::{Deserialize, Serialize};

/// Snapshot of store statistics returned by `Command::Info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreInfo {
    /// Crate version
    pub version: String,
    /// Committed entries in the mapping
    pub keys: u64,
    /// Open transaction blocks
    pub depth: u64,
    /// Records queued on the top block
    pub pending: u64,
}
