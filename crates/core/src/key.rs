//! Key validation
//!
//! Keys are Unicode strings with a small set of constraints:
//! - Keys must be valid UTF-8 (guaranteed by Rust's &str type)
//! - Keys must not be empty
//! - Keys must not contain NUL bytes (\0)
//! - Keys must not exceed [`MAX_KEY_BYTES`]
//!
//! Only the writing operations (`set`, `incr`) enforce these rules. Reads and
//! deletes of a malformed key simply miss.

use thiserror::Error;

/// Maximum key length in bytes
pub const MAX_KEY_BYTES: usize = 1024;

/// Validate a key.
///
/// # Examples
///
/// ```
/// use stackdb_core::key::validate_key;
///
/// assert!(validate_key("mykey").is_ok());
/// assert!(validate_key("user:123").is_ok());
///
/// assert!(validate_key("").is_err()); // empty
/// assert!(validate_key("a\x00b").is_err()); // contains NUL
/// ```
pub fn validate_key(key: &str) -> Result<(), KeyError> {
    if key.is_empty() {
        return Err(KeyError::Empty);
    }

    if key.contains('\x00') {
        return Err(KeyError::ContainsNul);
    }

    let len = key.len();
    if len > MAX_KEY_BYTES {
        return Err(KeyError::TooLong {
            actual: len,
            max: MAX_KEY_BYTES,
        });
    }

    Ok(())
}

/// Key validation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyError {
    /// Key is empty (length 0)
    #[error("key cannot be empty")]
    Empty,

    /// Key contains NUL byte (\0)
    #[error("key cannot contain NUL bytes")]
    ContainsNul,

    /// Key exceeds maximum length
    #[error("key too long: {actual} bytes exceeds maximum {max}")]
    TooLong {
        /// Actual key length in bytes
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },
}

impl KeyError {
    /// Get the reason code for this failure
    pub fn reason_code(&self) -> &'static str {
        match self {
            KeyError::Empty => "empty_key",
            KeyError::ContainsNul => "contains_nul",
            KeyError::TooLong { .. } => "key_too_long",
        }
    }
}
