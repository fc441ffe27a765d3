//! Clap command definition.

use clap::{Arg, ArgAction, Command};

/// Build the top-level `ccons` command.
pub fn build_cli() -> Command {
    Command::new("ccons")
        .about("Mutable pair cells from the command line")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .conflicts_with("raw")
                .help("Print results as JSON"),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .action(ArgAction::SetTrue)
                .help("Print bare values without type annotations"),
        )
        .arg(
            Arg::new("strict-arity")
                .long("strict-arity")
                .action(ArgAction::SetTrue)
                .help("Reject calls with more arguments than the callee uses"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log more (-v debug, -vv trace); RUST_LOG applies otherwise"),
        )
        .arg(
            Arg::new("command")
                .value_name("COMMAND")
                .num_args(1..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .help("Run one line and exit, e.g. `car $c` or \"let c = cons 1 2; cdr $c\""),
        )
}

/// Text printed by the `help` meta-command.
pub const REPL_HELP: &str = "\
Statements (separate several with `;`, quote it to pass it as data):
  cons [A] [B]          new cell
  car CELL | cdr CELL   read slot 1 / slot 2
  set_car CELL V        replace slot 1
  set_cdr CELL V        replace slot 2
  $NAME INDEX [V]       call a stored value directly (read or write)
  let NAME = ...        bind the result to $NAME
Values: nil, true, false, integers, floats, strings, $NAME
Meta: vars, help, quit";
