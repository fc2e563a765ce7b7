//! Core engine for stackdb
//!
//! This crate defines the in-memory store and its deferred-transaction
//! machinery:
//! - Store: key→value mapping plus the five data operations
//! - Operation: serializable record of a queued operation
//! - TransactionBlock / TransactionStack: nested MULTI blocks
//! - Key validation and the engine error type
//!
//! # Example
//!
//! ```
//! use stackdb_core::Store;
//!
//! let mut store = Store::new();
//! let _ = store.set("a", 1);
//!
//! store.open_block();
//! let _ = store.incr("a");
//! assert_eq!(store.get("a"), None); // queued, not observed
//!
//! assert_eq!(store.commit(), 2);
//! assert_eq!(store.get("a"), Some(2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod key;
pub mod store;
pub mod transaction;
pub mod types;

pub use error::{Error, Result};
pub use key::{validate_key, KeyError, MAX_KEY_BYTES};
pub use store::Store;
pub use transaction::{StackState, TransactionBlock, TransactionStack};
pub use types::{DeleteStatus, Operation, WriteStatus};
