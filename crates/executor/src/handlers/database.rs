//! Database-level command handlers.

use stackdb_core::Store;

use crate::types::StoreInfo;
use crate::{Output, Result};

/// Handle Ping command.
pub fn ping() -> Result<Output> {
    Ok(Output::Pong {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handle Info command.
pub fn info(store: &Store) -> Result<Output> {
    Ok(Output::StoreInfo(StoreInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        keys: store.len() as u64,
        depth: store.depth() as u64,
        pending: store.pending() as u64,
    }))
}
