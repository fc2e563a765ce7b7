//! stackdb - in-memory integer key/value store with nested transaction blocks
//!
//! Writes either apply immediately or, after `MULTI`, queue on a transaction
//! block that `EXEC` later runs in order and `DISCARD` empties.
//!
//! # Quick Start
//!
//! ```
//! use stackdb::{Command, Executor, Output};
//!
//! let mut db = Executor::new();
//! db.execute(Command::Set { key: "a".into(), value: 1 }).unwrap();
//! db.execute(Command::Multi).unwrap();
//! db.execute(Command::Incr { key: "a".into() }).unwrap();
//! db.execute(Command::Exec).unwrap();
//!
//! assert_eq!(db.execute(Command::Get { key: "a".into() }).unwrap(), Output::Maybe(Some(2)));
//! ```
//!
//! # Architecture
//!
//! All shell operations go through the [`Executor`], which provides a
//! command-based API. The underlying [`engine::Store`] is available for
//! callers that want the typed operations directly.

// Re-export the public API from stackdb-executor
pub use stackdb_executor::*;

/// The storage engine: [`Store`](engine::Store), operation records and the
/// transaction stack.
pub use stackdb_core as engine;
