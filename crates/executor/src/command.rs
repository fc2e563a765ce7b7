//! Command enum defining all stackdb operations.
//!
//! Commands are the "instruction set" of stackdb. Every operation the shell
//! can perform is a variant of this enum.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON
//! - **Pure data**: No closures or executable code

use serde::{Deserialize, Serialize};
use stackdb_core::Operation;

/// A command is a self-contained, serializable operation.
///
/// # Command Categories
///
/// | Category | Commands | Deferred inside a block |
/// |----------|----------|-------------------------|
/// | Data | `Get`, `Set`, `Incr`, `Delete`, `DeleteByValue` | yes |
/// | Transaction | `Multi`, `Exec`, `Discard` | no |
/// | Database | `Ping`, `Info` | no |
///
/// # Example
///
/// ```
/// use stackdb_executor::{Command, Executor, Output};
///
/// let mut executor = Executor::new();
/// executor.execute(Command::Set { key: "foo".into(), value: 42 }).unwrap();
///
/// let out = executor.execute(Command::Get { key: "foo".into() }).unwrap();
/// assert_eq!(out, Output::Maybe(Some(42)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Data (5) ====================
    /// Read a key.
    /// Returns: `Output::Maybe`, or `Output::Queued` inside a block
    Get { key: String },

    /// Insert or overwrite a key.
    /// Returns: `Output::Unit`, or `Output::Queued` inside a block
    Set { key: String, value: i64 },

    /// Increment a key, treating a missing key as 0.
    /// Returns: `Output::Unit`, or `Output::Queued` inside a block
    Incr { key: String },

    /// Delete a key.
    /// Returns: `Output::Bool` (true if key existed), or `Output::Queued`
    Delete { key: String },

    /// Delete every key holding `value`.
    /// Returns: `Output::Unit`, or `Output::Queued` inside a block
    DeleteByValue { value: i64 },

    // ==================== Transaction (3) ====================
    /// Open a transaction block.
    /// Returns: `Output::BlockOpened`
    Multi,

    /// Pop and run the top block.
    /// Returns: `Output::Committed`
    Exec,

    /// Clear the top block's queue without closing it.
    /// Returns: `Output::Discarded`
    Discard,

    // ==================== Database (2) ====================
    /// Ping the store.
    /// Returns: `Output::Pong`
    Ping,

    /// Store statistics.
    /// Returns: `Output::StoreInfo`
    Info,
}

impl Command {
    /// Shell name of the command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Get { .. } => "GET",
            Command::Set { .. } => "SET",
            Command::Incr { .. } => "INCR",
            Command::Delete { .. } => "DEL",
            Command::DeleteByValue { .. } => "DELVALUE",
            Command::Multi => "MULTI",
            Command::Exec => "EXEC",
            Command::Discard => "DISCARD",
            Command::Ping => "PING",
            Command::Info => "INFO",
        }
    }

    /// The store operation this command performs, for data commands.
    pub fn into_operation(self) -> Option<Operation> {
        match self {
            Command::Get { key } => Some(Operation::Get { key }),
            Command::Set { key, value } => Some(Operation::Set { key, value }),
            Command::Incr { key } => Some(Operation::Incr { key }),
            Command::Delete { key } => Some(Operation::Delete { key }),
            Command::DeleteByValue { value } => Some(Operation::DeleteByValue { value }),
            Command::Multi | Command::Exec | Command::Discard | Command::Ping | Command::Info => {
                None
            }
        }
    }
}
