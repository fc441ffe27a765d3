//! Line execution, REPL mode and pipe mode.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};

use crate::commands::REPL_HELP;
use crate::format::{format_error, format_output, format_parse_error, format_value, OutputMode};
use crate::parse::{parse_statement, split_line, split_statements, Action, MetaCommand};
use crate::state::SessionState;

/// Outcome of running a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineResult {
    /// Every statement succeeded
    Ok,
    /// At least one statement failed
    Failed,
    /// A `quit` was reached
    Quit,
}

/// Run a raw line, writing results to `out` and errors to `err`.
pub fn run_line(
    line: &str,
    state: &mut SessionState,
    mode: OutputMode,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> LineResult {
    match split_line(line) {
        Ok(statements) => run_statements(statements, state, mode, out, err),
        Err(e) => {
            let _ = writeln!(err, "{}", format_parse_error(&e, mode));
            LineResult::Failed
        }
    }
}

/// Run argv words, with standalone `;` words separating statements.
pub fn run_tokens(
    tokens: Vec<String>,
    state: &mut SessionState,
    mode: OutputMode,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> LineResult {
    run_statements(split_statements(tokens), state, mode, out, err)
}

/// Run statements in order, stopping at the first failure.
fn run_statements(
    statements: Vec<Vec<String>>,
    state: &mut SessionState,
    mode: OutputMode,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> LineResult {
    for statement in statements {
        let parsed = match parse_statement(&statement, state) {
            Ok(parsed) => parsed,
            Err(e) => {
                let _ = writeln!(err, "{}", format_parse_error(&e, mode));
                return LineResult::Failed;
            }
        };

        let result = match parsed.action {
            Action::Meta(MetaCommand::Quit) => return LineResult::Quit,
            Action::Meta(MetaCommand::Help) => {
                let _ = writeln!(out, "{}", REPL_HELP);
                continue;
            }
            Action::Meta(MetaCommand::Vars) => {
                for (name, value) in state.vars() {
                    let _ = writeln!(out, "${} = {}", name, format_value(value, mode));
                }
                continue;
            }
            Action::Literal(value) => value,
            Action::Execute(command) => match state.execute(command) {
                Ok(output) => {
                    let formatted = format_output(&output, mode);
                    if !formatted.is_empty() {
                        let _ = writeln!(out, "{}", formatted);
                    }
                    if let Some(name) = parsed.bind {
                        state.set_var(name, output.into_value());
                    }
                    continue;
                }
                Err(e) => {
                    let _ = writeln!(err, "{}", format_error(&e, mode));
                    return LineResult::Failed;
                }
            },
        };

        let _ = writeln!(out, "{}", format_value(&result, mode));
        if let Some(name) = parsed.bind {
            state.set_var(name, result);
        }
    }
    LineResult::Ok
}

fn history_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".ccons_history"))
}

/// Interactive prompt.
pub fn run_repl(state: &mut SessionState, mode: OutputMode) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("(error) Failed to start line editor: {}", e);
            return;
        }
    };
    let history = history_path();
    if let Some(path) = &history {
        if editor.load_history(path).is_err() {
            debug!(path = %path.display(), "no history loaded");
        }
    }

    loop {
        match editor.readline("ccons> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());
                let result = run_line(&line, state, mode, &mut io::stdout(), &mut io::stderr());
                if result == LineResult::Quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("(error) {}", e);
                break;
            }
        }
    }

    if let Some(path) = &history {
        if let Err(e) = editor.save_history(path) {
            warn!(path = %path.display(), error = %e, "failed to save history");
        }
    }
}

/// Read statements from stdin, one line at a time.
///
/// Returns the process exit code: 1 if any line failed.
pub fn run_pipe(state: &mut SessionState, mode: OutputMode) -> i32 {
    run_reader(
        io::stdin().lock(),
        state,
        mode,
        &mut io::stdout(),
        &mut io::stderr(),
    )
}

/// Run every line of `reader`, skipping blank lines and `#` comments.
///
/// A failing line does not stop later ones but makes the exit code 1.
/// `quit` ends the input early.
pub fn run_reader(
    reader: impl BufRead,
    state: &mut SessionState,
    mode: OutputMode,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32 {
    let mut exit_code = 0;
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                let _ = writeln!(err, "(error) {}", e);
                return 1;
            }
        };
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        match run_line(&line, state, mode, out, err) {
            LineResult::Ok => {}
            LineResult::Failed => exit_code = 1,
            LineResult::Quit => break,
        }
    }
    exit_code
}
