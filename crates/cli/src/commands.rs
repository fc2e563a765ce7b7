//! Clap command trees.
//!
//! `build_cli` defines the process-level flags. `build_repl_cmd` is the
//! multicall tree each shell line is matched against; it also drives
//! `help` and usage messages.

use clap::{Arg, ArgAction, Command};

/// Build the process command line.
pub fn build_cli() -> Command {
    Command::new("stackdb")
        .about("In-memory integer key/value store with nested transaction blocks")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("prompt")
                .long("prompt")
                .value_name("STR")
                .help("Interactive prompt")
                .default_value("> "),
        )
        .arg(
            Arg::new("no-banner")
                .long("no-banner")
                .help("Skip the interactive banner")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("FILTER")
                .help("Log filter, overridden by RUST_LOG")
                .default_value("warn"),
        )
}

/// Build the multicall command tree for one shell line.
///
/// The first token of a line names the subcommand, so `try_get_matches_from`
/// takes the tokenized line as is.
pub fn build_repl_cmd() -> Command {
    Command::new("repl")
        .multicall(true)
        .subcommand_required(true)
        .disable_help_subcommand(true)
        .subcommand(build_get())
        .subcommand(build_set())
        .subcommand(build_incr())
        .subcommand(build_del())
        .subcommand(build_delvalue())
        .subcommand(Command::new("MULTI").about("Open a transaction block"))
        .subcommand(Command::new("EXEC").about("Run and close the innermost block"))
        .subcommand(Command::new("DISCARD").about("Drop the innermost block's queued commands"))
        .subcommand(Command::new("PING").about("Check that the store responds"))
        .subcommand(Command::new("INFO").about("Show key count and transaction depth"))
}

fn key_arg() -> Arg {
    Arg::new("key").required(true).help("Key name")
}

fn value_arg() -> Arg {
    Arg::new("value")
        .required(true)
        .value_parser(clap::value_parser!(i64))
        .allow_negative_numbers(true)
        .help("Integer value")
}

fn build_get() -> Command {
    Command::new("GET")
        .about("Print the value of a key, or <nil>")
        .arg(key_arg())
}

fn build_set() -> Command {
    Command::new("SET")
        .about("Set a key to an integer value")
        .arg(key_arg())
        .arg(value_arg())
}

fn build_incr() -> Command {
    Command::new("INCR")
        .about("Add one to a key (a missing key becomes 1)")
        .arg(key_arg())
}

fn build_del() -> Command {
    Command::new("DEL").about("Delete a key").arg(key_arg())
}

fn build_delvalue() -> Command {
    Command::new("DELVALUE")
        .about("Delete every key holding a value")
        .arg(value_arg())
}

/// Canonical subcommand name for `name`, ignoring case.
pub fn canonical_name(repl: &Command, name: &str) -> Option<String> {
    repl.get_subcommands()
        .find(|sub| sub.get_name().eq_ignore_ascii_case(name))
        .map(|sub| sub.get_name().to_string())
}

/// One-line usage built from a subcommand's positionals, e.g. `SET <key> <value>`.
pub fn usage_line(sub: &Command) -> String {
    let mut line = sub.get_name().to_string();
    for arg in sub.get_positionals() {
        line.push_str(&format!(" <{}>", arg.get_id().as_str()));
    }
    line
}
