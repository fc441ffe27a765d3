//! Cell entry points (5 builtins).
//!
//! cons, car, cdr, set_car, set_cdr
//!
//! Each handler adapts a positional argument list to the typed operations in
//! [`ccons_core::ops`]. Missing positions read as nil, except the cell
//! argument of the accessors, which is reported as "no value".

use ccons_core::{ops, Error, Result, Value};

// =============================================================================
// Argument helpers
// =============================================================================

fn arg(args: &[Value], index: usize) -> Value {
    args.get(index).cloned().unwrap_or_default()
}

fn cell_arg<'a>(args: &'a [Value], function: &str) -> Result<&'a Value> {
    args.first()
        .ok_or_else(|| Error::wrong_type(function, 1, "function", "no value"))
}

// =============================================================================
// Individual Handlers
// =============================================================================

/// Handle `cons(a, b)`.
pub fn cons(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(ops::cons(arg(args, 0), arg(args, 1))))
}

/// Handle `car(cell)`.
pub fn car(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(ops::car(cell_arg(args, "car")?)?))
}

/// Handle `cdr(cell)`.
pub fn cdr(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(ops::cdr(cell_arg(args, "cdr")?)?))
}

/// Handle `set_car(cell, value)`.
pub fn set_car(args: &[Value]) -> Result<Option<Value>> {
    ops::set_car(cell_arg(args, "set_car")?, arg(args, 1))?;
    Ok(None)
}

/// Handle `set_cdr(cell, value)`.
pub fn set_cdr(args: &[Value]) -> Result<Option<Value>> {
    ops::set_cdr(cell_arg(args, "set_cdr")?, arg(args, 1))?;
    Ok(None)
}
