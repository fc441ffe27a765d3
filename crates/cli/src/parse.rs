//! Line -> statement conversion.
//!
//! A line is split into statements at unquoted `;`, each statement is
//! tokenized with shell quoting rules, and each becomes one of:
//! - a call of a registered entry point → `Action::Execute(Command::Call)`
//! - a call of a stored value → `Action::Execute(Command::Invoke)`
//! - a lone value → `Action::Literal`
//! - a REPL meta-command → `Action::Meta`
//!
//! An optional `let NAME =` prefix binds the result.

use ccons_executor::{Command, Value};

use crate::state::SessionState;
use crate::value::parse_value;

/// A parsed statement.
pub struct Statement {
    /// Variable to bind the result to
    pub bind: Option<String>,
    /// What to do
    pub action: Action,
}

/// What a statement asks for.
pub enum Action {
    /// A command to execute.
    Execute(Command),
    /// A value that needs no call.
    Literal(Value),
    /// A REPL meta-command.
    Meta(MetaCommand),
}

/// REPL meta-commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    Vars,
    Help,
    Quit,
}

/// Tokenize a line with shell quoting rules.
pub fn tokenize(line: &str) -> Result<Vec<String>, String> {
    shlex::split(line).ok_or_else(|| "Unbalanced quotes".to_string())
}

/// Split a raw line into tokenized statements.
///
/// Only a `;` outside quotes and not escaped separates statements, so
/// `cons 'a;' 1` is one statement whose second token is `a;`.
pub fn split_line(line: &str) -> Result<Vec<Vec<String>>, String> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (Some('\''), '\'') => quote = None,
            (Some('\''), _) => {}
            (_, '\\') => escaped = true,
            (Some('"'), '"') => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, ';') => {
                segments.push(&line[start..i]);
                start = i + 1;
            }
            (None, _) => {}
        }
    }
    segments.push(&line[start..]);

    let mut statements = Vec::new();
    for segment in segments {
        let tokens = tokenize(segment)?;
        if !tokens.is_empty() {
            statements.push(tokens);
        }
    }
    Ok(statements)
}

/// Group argv words into statements separated by standalone `;` words.
///
/// Words arrive already unquoted, so a word that merely ends in `;` is data.
pub fn split_statements(tokens: Vec<String>) -> Vec<Vec<String>> {
    let mut statements = Vec::new();
    let mut current = Vec::new();
    for token in tokens {
        if token == ";" {
            if !current.is_empty() {
                statements.push(std::mem::take(&mut current));
            }
        } else {
            current.push(token);
        }
    }
    if !current.is_empty() {
        statements.push(current);
    }
    statements
}

fn check_meta_command(tokens: &[String]) -> Option<MetaCommand> {
    match tokens {
        [cmd] => match cmd.as_str() {
            "vars" => Some(MetaCommand::Vars),
            "help" => Some(MetaCommand::Help),
            "quit" | "exit" => Some(MetaCommand::Quit),
            _ => None,
        },
        _ => None,
    }
}

/// Parse one statement's tokens.
///
/// Variable references resolve against `state` now, so a statement sees
/// bindings made by the statements before it on the same line.
pub fn parse_statement(tokens: &[String], state: &SessionState) -> Result<Statement, String> {
    if let Some(meta) = check_meta_command(tokens) {
        return Ok(Statement {
            bind: None,
            action: Action::Meta(meta),
        });
    }

    let (bind, rest) = match tokens {
        [kw, name, eq, rest @ ..] if kw == "let" && eq == "=" => {
            if !is_identifier(name) {
                return Err(format!("Invalid variable name: {}", name));
            }
            if rest.is_empty() {
                return Err("Missing expression after '='".to_string());
            }
            (Some(name.clone()), rest)
        }
        [kw, ..] if kw == "let" => return Err("Expected: let NAME = ...".to_string()),
        _ => (None, tokens),
    };

    let (head, args) = rest
        .split_first()
        .ok_or_else(|| "Empty statement".to_string())?;

    let action = if state.executor().module().get(head).is_some() {
        Action::Execute(Command::call(head.as_str(), parse_args(args, state)?))
    } else if head.starts_with('$') && !args.is_empty() {
        let callee = parse_value(head, state)?;
        Action::Execute(Command::invoke(callee, parse_args(args, state)?))
    } else if args.is_empty() {
        Action::Literal(parse_value(head, state)?)
    } else {
        return Err(format!("Unknown function: {}", head));
    };

    Ok(Statement { bind, action })
}

fn parse_args(tokens: &[String], state: &SessionState) -> Result<Vec<Value>, String> {
    tokens.iter().map(|t| parse_value(t, state)).collect()
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}
