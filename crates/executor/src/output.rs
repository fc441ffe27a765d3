//! Results of executing a [`Command`](crate::Command).

use ccons_core::Value;

/// What an entry point produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Exactly one value
    Value(Value),
    /// No value (write mode, `set_car`, `set_cdr`)
    Unit,
}

impl Output {
    /// The produced value, with "no value" read as nil.
    pub fn into_value(self) -> Value {
        match self {
            Output::Value(v) => v,
            Output::Unit => Value::Nil,
        }
    }

    /// Check if nothing was produced.
    pub fn is_unit(&self) -> bool {
        matches!(self, Output::Unit)
    }
}

impl From<Option<Value>> for Output {
    fn from(v: Option<Value>) -> Self {
        match v {
            Some(v) => Output::Value(v),
            None => Output::Unit,
        }
    }
}
