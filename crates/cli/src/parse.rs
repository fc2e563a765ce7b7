//! Line → CliAction parsing.
//!
//! A line is tokenized with `shlex`, its first token normalized to a
//! subcommand of [`build_repl_cmd`], and the tokens handed to clap. Clap
//! errors are folded into [`ParseError`]; parse failures stop at this
//! boundary and never reach the executor.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::ArgMatches;
use stackdb_executor::Command;

use crate::commands::{build_repl_cmd, canonical_name, usage_line};

/// Result of parsing a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// A command to run on the executor.
    Execute(Command),
    /// A shell-only meta-command.
    Meta(MetaCommand),
}

/// Shell-only commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommand {
    Help { command: Option<String> },
    Quit,
}

/// Why a line could not be turned into an action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Missing or extra arguments. Holds the usage line.
    #[error("usage: {0}")]
    Usage(String),

    /// An argument that must be an integer was not.
    #[error("invalid value '{raw}': expected an integer")]
    InvalidValue { raw: String },

    /// First token is not a known command.
    #[error("unknown command '{name}'")]
    UnknownCommand { name: String },

    /// Unbalanced quotes.
    #[error("invalid quoting")]
    InvalidQuoting,
}

/// Check for meta-commands before the data/transaction commands.
///
/// Returns `Some(MetaCommand)` if the line is a meta-command, `None` otherwise.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    let mut parts = line.split_whitespace();
    let cmd = parts.next()?;

    if cmd.eq_ignore_ascii_case("quit") || cmd.eq_ignore_ascii_case("exit") {
        Some(MetaCommand::Quit)
    } else if cmd.eq_ignore_ascii_case("help") {
        let command = parts.next().map(str::to_string);
        Some(MetaCommand::Help { command })
    } else {
        None
    }
}

/// Parse one input line.
///
/// Returns `Ok(None)` for a line with no tokens.
pub fn parse_line(line: &str) -> Result<Option<CliAction>, ParseError> {
    if let Some(meta) = check_meta_command(line) {
        return Ok(Some(CliAction::Meta(meta)));
    }

    let mut tokens = shlex::split(line).ok_or(ParseError::InvalidQuoting)?;
    let Some(first) = tokens.first_mut() else {
        return Ok(None);
    };

    let repl = build_repl_cmd();
    let name = canonical_name(&repl, first.as_str()).ok_or_else(|| ParseError::UnknownCommand {
        name: first.clone(),
    })?;
    *first = name.clone();

    match repl.clone().try_get_matches_from(&tokens) {
        Ok(matches) => matches_to_action(&matches).map(Some),
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            Ok(Some(CliAction::Meta(MetaCommand::Help {
                command: Some(name),
            })))
        }
        Err(e) => Err(from_clap_error(&e, &repl, &name, &tokens)),
    }
}

/// Convert clap matches into an action.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, ParseError> {
    let (name, sub) = matches
        .subcommand()
        .ok_or_else(|| ParseError::UnknownCommand {
            name: String::new(),
        })?;

    let key = || sub.get_one::<String>("key").cloned().unwrap_or_default();
    let value = || sub.get_one::<i64>("value").copied().unwrap_or_default();

    let cmd = match name {
        "GET" => Command::Get { key: key() },
        "SET" => Command::Set {
            key: key(),
            value: value(),
        },
        "INCR" => Command::Incr { key: key() },
        "DEL" => Command::Delete { key: key() },
        "DELVALUE" => Command::DeleteByValue { value: value() },
        "MULTI" => Command::Multi,
        "EXEC" => Command::Exec,
        "DISCARD" => Command::Discard,
        "PING" => Command::Ping,
        "INFO" => Command::Info,
        other => {
            return Err(ParseError::UnknownCommand {
                name: other.to_string(),
            })
        }
    };
    Ok(CliAction::Execute(cmd))
}

fn from_clap_error(
    e: &clap::Error,
    repl: &clap::Command,
    name: &str,
    tokens: &[String],
) -> ParseError {
    let usage = || {
        repl.find_subcommand(name)
            .map(usage_line)
            .unwrap_or_else(|| name.to_string())
    };
    match e.kind() {
        ErrorKind::ValueValidation | ErrorKind::InvalidValue => {
            let raw = match e.get(ContextKind::InvalidValue) {
                Some(ContextValue::String(raw)) => raw.clone(),
                _ => tokens.last().cloned().unwrap_or_default(),
            };
            ParseError::InvalidValue { raw }
        }
        ErrorKind::InvalidSubcommand => ParseError::UnknownCommand {
            name: name.to_string(),
        },
        _ => ParseError::Usage(usage()),
    }
}
