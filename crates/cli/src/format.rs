//! Output formatting for the three output modes.

use ccons_executor::{Error, Output, Value};
use serde_json::json;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// `(integer) 10`, `OK`
    Human,
    /// `10`, nothing for no value
    Raw,
    /// `{"type":"integer","value":10}`
    Json,
}

/// Format the result of a statement.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match output {
        Output::Value(v) => format_value(v, mode),
        Output::Unit => match mode {
            OutputMode::Human => "OK".to_string(),
            OutputMode::Raw => String::new(),
            OutputMode::Json => json!({ "ok": true }).to_string(),
        },
    }
}

/// Format a single value.
pub fn format_value(value: &Value, mode: OutputMode) -> String {
    match mode {
        OutputMode::Raw => value.to_string(),
        OutputMode::Human => match value {
            Value::Nil => "(nil)".to_string(),
            Value::String(s) => format!("(string) {:?}", s),
            other => format!("({}) {}", other.type_name(), other),
        },
        OutputMode::Json => {
            let inner = match value {
                Value::Nil => serde_json::Value::Null,
                Value::Bool(b) => json!(b),
                Value::Int(i) => json!(i),
                // Non-finite floats have no JSON number form.
                Value::Float(f) if f.is_finite() => json!(f),
                other => json!(other.to_string()),
            };
            json!({ "type": value.type_name(), "value": inner }).to_string()
        }
    }
}

/// Format an executor error.
pub fn format_error(error: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => {
            let kind = if error.is_argument_error() {
                "argument"
            } else if error.is_type_error() {
                "type"
            } else {
                "host"
            };
            json!({ "error": error.to_string(), "kind": kind }).to_string()
        }
        _ => format!("(error) {}", error),
    }
}

/// Format a parse error.
pub fn format_parse_error(message: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => json!({ "error": message, "kind": "parse" }).to_string(),
        _ => format!("(error) {}", message),
    }
}
