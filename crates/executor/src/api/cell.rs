//! Cell operations.

use super::Ccons;
use crate::{Command, Error, Output, Result, Value};

impl Ccons {
    // =========================================================================
    // Cell Operations (5 builtins + direct dispatch)
    // =========================================================================

    /// Construct a fresh cell.
    ///
    /// Accepts any type that implements `Into<Value>`, including
    /// `Value::Nil` for an omitted slot and another cell for chaining.
    pub fn cons(&self, first: impl Into<Value>, second: impl Into<Value>) -> Result<Value> {
        match self
            .executor
            .execute(Command::call("cons", vec![first.into(), second.into()]))?
        {
            Output::Value(v) => Ok(v),
            _ => Err(Error::Internal {
                reason: "Unexpected output for cons".into(),
            }),
        }
    }

    /// Read slot 1.
    pub fn car(&self, cell: &Value) -> Result<Value> {
        self.read("car", cell)
    }

    /// Read slot 2.
    pub fn cdr(&self, cell: &Value) -> Result<Value> {
        self.read("cdr", cell)
    }

    /// Replace slot 1.
    pub fn set_car(&self, cell: &Value, value: impl Into<Value>) -> Result<()> {
        self.write("set_car", cell, value.into())
    }

    /// Replace slot 2.
    pub fn set_cdr(&self, cell: &Value, value: impl Into<Value>) -> Result<()> {
        self.write("set_cdr", cell, value.into())
    }

    /// Call `cell` through its dispatch entry point.
    ///
    /// Returns `Some` in read mode and `None` in write mode.
    pub fn call_cell(&self, cell: &Value, args: Vec<Value>) -> Result<Option<Value>> {
        match self.executor.execute(Command::invoke(cell.clone(), args))? {
            Output::Value(v) => Ok(Some(v)),
            Output::Unit => Ok(None),
        }
    }

    fn read(&self, function: &str, cell: &Value) -> Result<Value> {
        match self
            .executor
            .execute(Command::call(function, vec![cell.clone()]))?
        {
            Output::Value(v) => Ok(v),
            _ => Err(Error::Internal {
                reason: format!("Unexpected output for {}", function),
            }),
        }
    }

    fn write(&self, function: &str, cell: &Value, value: Value) -> Result<()> {
        match self
            .executor
            .execute(Command::call(function, vec![cell.clone(), value]))?
        {
            Output::Unit => Ok(()),
            _ => Err(Error::Internal {
                reason: format!("Unexpected output for {}", function),
            }),
        }
    }
}
