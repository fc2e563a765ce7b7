//! # stackdb Executor
//!
//! Command layer over the stackdb [`Store`](stackdb_core::Store).
//!
//! Every shell action is a [`Command`]: plain, serializable data. The
//! [`Executor`] owns the store, runs commands, and returns an [`Output`] or a
//! structured [`Error`].
//!
//! ## Deferred Commands
//!
//! After `Command::Multi`, data commands are queued instead of run and each
//! returns `Output::Queued`. `Command::Exec` pops the top block and runs its
//! records; `Command::Discard` empties the top block but leaves it open.
//!
//! ```
//! use stackdb_executor::{Command, Executor, Output};
//!
//! let mut executor = Executor::new();
//! executor.execute(Command::Multi).unwrap();
//! executor.execute(Command::Set { key: "a".into(), value: 1 }).unwrap();
//! assert_eq!(executor.execute(Command::Get { key: "a".into() }).unwrap(),
//!            Output::Queued { pending: 2 });
//!
//! assert_eq!(executor.execute(Command::Exec).unwrap(), Output::Committed { count: 2 });
//! assert_eq!(executor.execute(Command::Get { key: "a".into() }).unwrap(),
//!            Output::Maybe(Some(1)));
//! ```

#![warn(missing_docs)]

mod command;
mod convert;
mod error;
mod executor;
mod output;
mod types;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API
// =============================================================================

pub use command::Command;
pub use error::Error;
pub use executor::Executor;
pub use output::Output;
pub use types::StoreInfo;

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
