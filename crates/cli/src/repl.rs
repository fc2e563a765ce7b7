//! REPL loop with rustyline.
//!
//! Interactive mode: banner, prompt, history, TAB completion.
//! Pipe mode: read lines from stdin, execute each, no banner or prompt.

use std::io::{self, BufRead};

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};
use tracing::debug;

use crate::commands::{build_repl_cmd, canonical_name, usage_line};
use crate::format::{format_error, format_output};
use crate::parse::{parse_line, CliAction, MetaCommand, ParseError};
use crate::state::SessionState;

const BANNER: &str = "...Simple Key/Value Store...\n...Type help for options...";

/// What the loop should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Keep reading; `false` if the line failed.
    Continue(bool),
    Quit,
}

/// Run the interactive REPL. Returns the process exit code.
pub fn run_repl(state: &mut SessionState) -> i32 {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let mut rl: Editor<StackHelper, _> = match Editor::with_config(config) {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("(error) {}", e);
            return 1;
        }
    };
    rl.set_helper(Some(StackHelper));

    // Load history
    let history_path = history_file();
    if let Some(ref path) = history_path {
        if let Err(e) = rl.load_history(path) {
            debug!(path = %path, error = %e, "no history loaded");
        }
    }

    if state.banner() {
        println!("{}", BANNER);
    }

    loop {
        let prompt = state.prompt().to_string();
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                if handle_line(trimmed, state) == Flow::Quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C: show a new prompt
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D: exit
                break;
            }
            Err(err) => {
                eprintln!("(error) {:?}", err);
                break;
            }
        }
    }

    // Save history
    if let Some(ref path) = history_path {
        if let Err(e) = rl.save_history(path) {
            debug!(path = %path, error = %e, "failed to save history");
        }
    }
    0
}

/// Run in pipe mode: read lines from stdin, execute each.
///
/// Returns 1 if any line failed, 0 otherwise.
pub fn run_pipe(state: &mut SessionState) -> i32 {
    let stdin = io::stdin();
    run_lines(stdin.lock(), state)
}

fn run_lines(input: impl BufRead, state: &mut SessionState) -> i32 {
    let mut exit_code = 0;

    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match handle_line(trimmed, state) {
            Flow::Continue(true) => {}
            Flow::Continue(false) => exit_code = 1,
            Flow::Quit => break,
        }
    }

    exit_code
}

/// Parse and run one line, printing its result.
fn handle_line(line: &str, state: &mut SessionState) -> Flow {
    let mode = state.mode();
    match parse_line(line) {
        Ok(None) => Flow::Continue(true),
        Ok(Some(CliAction::Meta(MetaCommand::Quit))) => {
            println!("Quitting");
            Flow::Quit
        }
        Ok(Some(CliAction::Meta(MetaCommand::Help { command }))) => {
            print_help(command.as_deref());
            Flow::Continue(true)
        }
        Ok(Some(CliAction::Execute(cmd))) => match state.execute(cmd) {
            Ok(output) => {
                let formatted = format_output(&output, mode);
                if !formatted.is_empty() {
                    println!("{}", formatted);
                }
                Flow::Continue(true)
            }
            Err(e) => {
                eprintln!("{}", format_error(&e, mode));
                Flow::Continue(false)
            }
        },
        Err(e @ ParseError::Usage(_)) => {
            // Usage text is part of the transcript.
            println!("{}", e);
            Flow::Continue(false)
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            Flow::Continue(false)
        }
    }
}

fn history_file() -> Option<String> {
    std::env::var("HOME")
        .ok()
        .map(|h| format!("{}/.stackdb_history", h))
}

fn print_help(command: Option<&str>) {
    let repl = build_repl_cmd();
    if let Some(name) = command {
        match canonical_name(&repl, name) {
            Some(canon) => {
                if let Err(e) = repl.try_get_matches_from([canon.as_str(), "--help"]) {
                    println!("{}", e);
                }
            }
            None => eprintln!("(error) unknown command '{}'", name),
        }
    } else {
        println!("Available commands:");
        for sub in repl.get_subcommands() {
            let about = sub.get_about().map(|a| a.to_string()).unwrap_or_default();
            println!("  {:<20}{}", usage_line(sub), about);
        }
        println!();
        println!("Meta-commands:");
        println!("  {:<20}Show help", "help [command]");
        println!("  {:<20}Exit the shell", "quit / exit");
    }
}

// =========================================================================
// TAB Completion
// =========================================================================

/// Top-level words offered by TAB completion.
const TOP_LEVEL_COMMANDS: &[&str] = &[
    "GET", "SET", "INCR", "DEL", "DELVALUE", "MULTI", "EXEC", "DISCARD", "PING", "INFO", "help",
    "quit", "exit",
];

/// Complete the word ending at the cursor.
///
/// The first word completes to a command name; the word after `help`
/// completes to a command name too. Matching ignores case.
fn complete_command(line_to_pos: &str) -> (usize, Vec<&'static str>) {
    let pos = line_to_pos.len();
    let parts: Vec<&str> = line_to_pos.split_whitespace().collect();
    let trailing_space = line_to_pos.ends_with(char::is_whitespace);

    let prefix = match (parts.as_slice(), trailing_space) {
        ([], _) => "",
        ([word], false) => *word,
        ([help], true) if help.eq_ignore_ascii_case("help") => "",
        ([help, word], false) if help.eq_ignore_ascii_case("help") => *word,
        _ => return (pos, vec![]),
    };

    let lower = prefix.to_ascii_lowercase();
    let candidates = TOP_LEVEL_COMMANDS
        .iter()
        .copied()
        .filter(|name| name.to_ascii_lowercase().starts_with(&lower))
        .collect();
    (pos - prefix.len(), candidates)
}

struct StackHelper;

impl Helper for StackHelper {}
impl Validator for StackHelper {}
impl Highlighter for StackHelper {}
impl Hinter for StackHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Completer for StackHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, names) = complete_command(&line[..pos]);
        let candidates = names
            .into_iter()
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}
