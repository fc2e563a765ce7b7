//! Error conversion from engine error types.
//!
//! The store reports a rejected write only as `WriteStatus::Rejected`;
//! [`rejection`] recovers the cause so the caller gets a structured error.

use stackdb_core::{validate_key, Error as CoreError};

use crate::Error;

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidKey(e) => Error::InvalidKey {
                reason: e.to_string(),
            },
            CoreError::Overflow { .. } => Error::Overflow {
                reason: err.to_string(),
            },
        }
    }
}

/// Build the error for a write on `key` that the store rejected.
///
/// Key validation is the only check `set` performs; `incr` additionally fails
/// on overflow, which is the cause whenever the key itself is well-formed.
pub(crate) fn rejection(key: &str) -> Error {
    match validate_key(key) {
        Err(e) => CoreError::from(e).into(),
        Ok(()) => CoreError::Overflow {
            key: key.to_string(),
        }
        .into(),
    }
}
