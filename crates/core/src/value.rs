//! Value types for ccons
//!
//! This module defines the value space that cell slots hold and that entry
//! points receive and return. It is a closed sum type: the host can store
//! scalars, strings and callables, and nothing else.
//!
//! ## Equality
//!
//! - Different variants are NEVER equal (no coercion): `Int(1) != Float(1.0)`
//! - Float uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`
//! - Functions compare by identity, so two cells with equal contents are
//!   different values

use std::fmt;

use crate::cell::Cell;
use crate::function::Function;

/// A value that can live in a cell slot or flow through an entry point.
///
/// ## The Six Kinds
///
/// 1. `Nil` - absence of a value
/// 2. `Bool` - true or false
/// 3. `Int` - 64-bit signed integer (slot indices are ints)
/// 4. `Float` - 64-bit IEEE-754 floating point
/// 5. `String` - UTF-8 text
/// 6. `Function` - anything callable, cells included
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absence of a value; what an omitted argument becomes
    #[default]
    Nil,

    /// Boolean true or false
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit IEEE-754 floating point
    Float(f64),

    /// UTF-8 encoded string
    String(String),

    /// A callable: a cell or a builtin entry point
    Function(Function),
}

impl Value {
    /// Returns the kind name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Function(_) => "function",
        }
    }

    /// Check if this value is nil
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Check if this value satisfies the callable capability
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as a callable
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Try to get as a cell
    ///
    /// Returns `None` for builtins even though they are callable too.
    pub fn as_cell(&self) -> Option<&Cell> {
        self.as_function().and_then(Function::as_cell)
    }

    /// Interpret this value as an integer argument.
    ///
    /// Accepts `Int`, and `Float` values with no fractional part that fit in
    /// an i64. Everything else yields `None`.
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Float(f)
                if f.is_finite()
                    && f.fract() == 0.0
                    && *f >= i64::MIN as f64
                    && *f < i64::MAX as f64 =>
            {
                Some(*f as i64)
            }
            _ => None,
        }
    }
}

// ============================================================================
// Equality (IEEE-754 semantics, no coercion, identity for callables)
// ============================================================================

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::String(s) => f.write_str(s),
            Value::Function(func) => write!(f, "{}", func),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

impl From<Cell> for Value {
    fn from(cell: Cell) -> Self {
        Value::Function(Function::Cell(cell))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Nil)
    }
}
