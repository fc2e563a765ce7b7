//! Session wrapper with shell options.
//!
//! Owns the [`Executor`] (and through it the store) for the lifetime of the
//! process, plus the options parsed from the command line.

use stackdb_executor::{Command, Executor, Output, Result};

use crate::format::OutputMode;

/// Shell configuration taken from the process flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOptions {
    pub mode: OutputMode,
    pub prompt: String,
    pub banner: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            mode: OutputMode::Human,
            prompt: "> ".to_string(),
            banner: true,
        }
    }
}

impl ShellOptions {
    /// Read the options from parsed process flags.
    pub fn from_matches(matches: &clap::ArgMatches) -> Self {
        let mode = if matches.get_flag("json") {
            OutputMode::Json
        } else {
            OutputMode::Human
        };
        let prompt = matches
            .get_one::<String>("prompt")
            .cloned()
            .unwrap_or_else(|| "> ".to_string());

        Self {
            mode,
            prompt,
            banner: !matches.get_flag("no-banner"),
        }
    }
}

/// Wraps the executor and tracks shell options.
pub struct SessionState {
    executor: Executor,
    options: ShellOptions,
}

impl SessionState {
    pub fn new(options: ShellOptions) -> Self {
        Self {
            executor: Executor::new(),
            options,
        }
    }

    /// Execute a command on the store.
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        self.executor.execute(cmd)
    }

    pub fn mode(&self) -> OutputMode {
        self.options.mode
    }

    pub fn prompt(&self) -> &str {
        &self.options.prompt
    }

    pub fn banner(&self) -> bool {
        self.options.banner
    }
}
