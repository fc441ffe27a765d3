//! Token -> Value conversion.

use ccons_executor::Value;

use crate::state::SessionState;

/// Parse a single argument token.
///
/// `nil`, `true`, `false`, integers and floats map to their kinds;
/// `$NAME` reads a session variable; anything else is a string.
pub fn parse_value(token: &str, state: &SessionState) -> Result<Value, String> {
    if let Some(name) = token.strip_prefix('$') {
        return state
            .var(name)
            .cloned()
            .ok_or_else(|| format!("Unbound variable: ${}", name));
    }
    Ok(parse_literal(token))
}

/// Parse a token that is not a variable reference.
pub fn parse_literal(token: &str) -> Value {
    match token {
        "nil" => return Value::Nil,
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(i) = token.parse::<i64>() {
        return Value::Int(i);
    }
    // f64's parser also takes "inf" and "NaN"; only numerals count here.
    if token.bytes().any(|b| b.is_ascii_digit()) {
        if let Ok(f) = token.parse::<f64>() {
            return Value::Float(f);
        }
    }
    Value::String(token.to_string())
}
