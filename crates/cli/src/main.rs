//! stackdb CLI: line shell for the stackdb store.
//!
//! Two modes:
//! - **REPL mode**: `stackdb [flags]`: interactive prompt (if stdin is TTY)
//! - **Pipe mode**: `echo "SET a 1" | stackdb`: line-by-line from stdin

mod commands;
mod format;
mod parse;
mod repl;
mod state;

use std::io::{self, IsTerminal};
use std::process;

use tracing_subscriber::EnvFilter;

use commands::build_cli;
use state::{SessionState, ShellOptions};

fn main() {
    let matches = build_cli().get_matches();

    let log_level = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .unwrap_or("warn");
    init_logging(log_level);

    let mut state = SessionState::new(ShellOptions::from_matches(&matches));

    // Dispatch mode
    let exit_code = if io::stdin().is_terminal() {
        repl::run_repl(&mut state)
    } else {
        repl::run_pipe(&mut state)
    };
    process::exit(exit_code);
}

/// Initialize logging. `RUST_LOG` wins over `--log-level`.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
