//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//!
//! Absent keys and missed deletes are *not* errors; they are ordinary
//! outputs (`Output::Maybe(None)`, `Output::Bool(false)`).

use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// # Example
///
/// ```
/// use stackdb_executor::{Command, Error, Executor};
///
/// let mut executor = Executor::new();
/// match executor.execute(Command::Set { key: "".into(), value: 1 }) {
///     Err(Error::InvalidKey { reason }) => assert!(reason.contains("empty")),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Validation Errors ====================
    /// Invalid key format
    #[error("invalid key: {reason}")]
    InvalidKey { reason: String },

    // ==================== Constraint Errors ====================
    /// Numeric overflow
    #[error("overflow: {reason}")]
    Overflow { reason: String },
}
