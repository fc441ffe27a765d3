//! ccons CLI: mutable pair cells from the command line.
//!
//! Three modes:
//! - **Shell mode**: `ccons [flags] COMMAND...`: run one line, exit
//! - **REPL mode**: `ccons [flags]`: interactive prompt (if stdin is TTY)
//! - **Pipe mode**: `echo "cons 1 2" | ccons`: line-by-line from stdin

mod commands;
mod format;
mod parse;
mod repl;
mod state;
mod value;

use std::io::{self, IsTerminal};
use std::process;

use ccons_executor::{CallOptions, Executor};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::OutputMode;
use repl::LineResult;
use state::SessionState;

fn main() {
    let matches = build_cli().get_matches();

    init_logging(matches.get_count("verbose"));

    // Determine output mode
    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        OutputMode::Human
    };

    let options = if matches.get_flag("strict-arity") {
        CallOptions::strict()
    } else {
        CallOptions::default()
    };
    let mut state = SessionState::new(Executor::builder().options(options).build());

    // Dispatch mode
    if let Some(words) = matches.get_many::<String>("command") {
        let words: Vec<String> = words.cloned().collect();
        // A single argument is a whole line: `ccons "let c = cons 1 2; car $c"`
        let (mut out, mut err) = (io::stdout(), io::stderr());
        let result = if words.len() == 1 {
            repl::run_line(&words[0], &mut state, output_mode, &mut out, &mut err)
        } else {
            repl::run_tokens(words, &mut state, output_mode, &mut out, &mut err)
        };
        process::exit(if result == LineResult::Failed { 1 } else { 0 });
    } else if io::stdin().is_terminal() {
        repl::run_repl(&mut state, output_mode);
    } else {
        let exit_code = repl::run_pipe(&mut state, output_mode);
        process::exit(exit_code);
    }
}

/// Install the stderr subscriber.
///
/// `-v` flags win over `RUST_LOG`; with neither, only warnings show.
fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
