//! The Executor - single entry point to the store.
//!
//! The Executor owns the [`Store`] and routes each command to its handler.

use stackdb_core::Store;
use tracing::trace;

use crate::handlers::{database, kv, transaction};
use crate::{Command, Output, Result};

/// The command executor - single entry point to stackdb.
///
/// # Example
///
/// ```
/// use stackdb_executor::{Command, Executor, Output};
///
/// let mut executor = Executor::new();
///
/// let results = executor.execute_many(vec![
///     Command::Multi,
///     Command::Set { key: "a".into(), value: 1 },
///     Command::Exec,
///     Command::Get { key: "a".into() },
/// ]);
///
/// assert_eq!(results[1], Ok(Output::Queued { pending: 1 }));
/// assert_eq!(results[3], Ok(Output::Maybe(Some(1))));
/// ```
#[derive(Debug, Default)]
pub struct Executor {
    store: Store,
}

impl Executor {
    /// Create an executor over an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error.
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        trace!(command = cmd.name(), depth = self.store.depth(), "execute");

        match cmd {
            // Database commands
            Command::Ping => database::ping(),
            Command::Info => database::info(&self.store),

            // KV commands
            Command::Get { key } => kv::kv_get(&mut self.store, key),
            Command::Set { key, value } => kv::kv_set(&mut self.store, key, value),
            Command::Incr { key } => kv::kv_incr(&mut self.store, key),
            Command::Delete { key } => kv::kv_delete(&mut self.store, key),
            Command::DeleteByValue { value } => kv::kv_delete_by_value(&mut self.store, value),

            // Transaction commands
            Command::Multi => transaction::multi(&mut self.store),
            Command::Exec => transaction::exec(&mut self.store),
            Command::Discard => transaction::discard(&mut self.store),
        }
    }

    /// Execute multiple commands sequentially.
    ///
    /// Returns all results in the same order as the input commands.
    /// Execution continues even if some commands fail.
    pub fn execute_many(&mut self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &Store {
        &self.store
    }
}
