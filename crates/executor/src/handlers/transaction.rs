//! Transaction command handlers.

use stackdb_core::Store;

use crate::{Output, Result};

/// Handle Multi command.
pub fn multi(store: &mut Store) -> Result<Output> {
    let depth = store.open_block();
    Ok(Output::BlockOpened {
        depth: depth as u64,
    })
}

/// Handle Exec command.
pub fn exec(store: &mut Store) -> Result<Output> {
    let count = store.commit();
    Ok(Output::Committed {
        count: count as u64,
    })
}

/// Handle Discard command.
pub fn discard(store: &mut Store) -> Result<Output> {
    let count = store.discard();
    Ok(Output::Discarded {
        count: count as u64,
    })
}
