//! Error types for the store engine.
//!
//! None of these errors escape the public [`Store`](crate::Store) operations:
//! they are produced by internal helpers and folded into
//! [`WriteStatus::Rejected`](crate::WriteStatus::Rejected) at the boundary.
//! They are public so that higher layers can describe *why* a write was
//! rejected.

use crate::key::KeyError;
use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the store engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The key failed validation
    #[error("invalid key: {0}")]
    InvalidKey(#[from] KeyError),

    /// Incrementing the value would overflow `i64`
    #[error("increment overflows for key '{key}'")]
    Overflow {
        /// The key whose value is already at the maximum
        key: String,
    },
}

impl Error {
    /// Stable reason code for this error.
    pub fn reason_code(&self) -> &'static str {
        match self {
            Error::InvalidKey(e) => e.reason_code(),
            Error::Overflow { .. } => "overflow",
        }
    }
}
