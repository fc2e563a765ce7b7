//! Output → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): the shell transcript, e.g. `5`, `<nil>`, `NOT IN TRANSACTION`
//! - **JSON** (`--json`): `serde_json::to_string_pretty`
//!
//! An empty string means "print nothing".

use std::fmt::Display;

use stackdb_executor::Output;

/// Printed by EXEC and DISCARD when there was nothing to run or drop.
pub const NOT_IN_TRANSACTION: &str = "NOT IN TRANSACTION";

/// Printed for a GET on an absent key.
pub const NIL: &str = "<nil>";

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(output),
        OutputMode::Human => format_human(output),
    }
}

/// Format an error.
pub fn format_error(err: &impl Display, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": err.to_string()
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Human => format!("(error) {}", err),
    }
}

fn format_json(output: &Output) -> String {
    serde_json::to_string_pretty(output)
        .unwrap_or_else(|e| format!("{{\"error\": \"serialization failed: {}\"}}", e))
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Maybe(Some(v)) => v.to_string(),
        Output::Maybe(None) => NIL.to_string(),
        Output::Committed { count } | Output::Discarded { count } => format_count(*count),
        Output::Pong { .. } => "PONG".to_string(),
        Output::StoreInfo(info) => format!(
            "version: {}\nkeys: {}\ndepth: {}\npending: {}",
            info.version, info.keys, info.depth, info.pending
        ),
        // Writes, deletes, MULTI and queued commands are silent.
        Output::Unit | Output::Bool(_) | Output::Queued { .. } | Output::BlockOpened { .. } => {
            String::new()
        }
    }
}

fn format_count(count: u64) -> String {
    if count == 0 {
        NOT_IN_TRANSACTION.to_string()
    } else {
        count.to_string()
    }
}
