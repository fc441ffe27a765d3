//! The derived operations.
//!
//! `cons` allocates; `car`, `cdr`, `set_car` and `set_cdr` are call
//! patterns over whatever callable they are handed. They hold no state of
//! their own. Each accessor checks the callable capability first and raises
//! a type error before invoking anything.

use crate::cell::{Cell, Slot};
use crate::error::{Error, Result};
use crate::function::{Callable, Function};
use crate::value::Value;

/// Construct a fresh cell and return it as a value.
pub fn cons(first: impl Into<Value>, second: impl Into<Value>) -> Value {
    Cell::new(first, second).into()
}

/// Read slot 1 of `cell`.
pub fn car(cell: &Value) -> Result<Value> {
    read(cell, Slot::First, "car")
}

/// Read slot 2 of `cell`.
pub fn cdr(cell: &Value) -> Result<Value> {
    read(cell, Slot::Second, "cdr")
}

/// Replace slot 1 of `cell`.
pub fn set_car(cell: &Value, value: impl Into<Value>) -> Result<()> {
    write(cell, Slot::First, value.into(), "set_car")
}

/// Replace slot 2 of `cell`.
pub fn set_cdr(cell: &Value, value: impl Into<Value>) -> Result<()> {
    write(cell, Slot::Second, value.into(), "set_cdr")
}

fn check_callable<'a>(cell: &'a Value, function: &str) -> Result<&'a Function> {
    cell.as_function()
        .ok_or_else(|| Error::wrong_type(function, 1, "function", cell.type_name()))
}

fn read(cell: &Value, slot: Slot, function: &str) -> Result<Value> {
    let callee = check_callable(cell, function)?;
    // A callee that produces nothing reads as nil.
    Ok(callee.call(&[Value::Int(slot.index())])?.unwrap_or_default())
}

fn write(cell: &Value, slot: Slot, value: Value, function: &str) -> Result<()> {
    let callee = check_callable(cell, function)?;
    callee.call(&[Value::Int(slot.index()), value])?;
    Ok(())
}
