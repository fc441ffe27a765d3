//! The mutable pair.
//!
//! A [`Cell`] owns two slots and exposes them only through its own methods.
//! The slots sit behind a shared handle, so cloning a `Cell` yields another
//! handle to the same pair rather than a copy; that is what lets a cell be
//! stored in another cell's slot and chained into lists.
//!
//! Two ways in:
//!
//! - typed: [`Cell::first`], [`Cell::second`], [`Cell::set_first`],
//!   [`Cell::set_second`] and their [`Slot`]-indexed forms
//! - dispatch: [`Cell::call`], the host-facing entry point that reads with
//!   one argument and writes with two

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

use crate::error::{Error, Result};
use crate::function::Function;
use crate::value::Value;

/// Name the dispatch entry point reports in its errors.
pub const DISPATCH_NAME: &str = "cell";

/// One of a cell's two slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Slot 1, read by `car`
    First = 1,
    /// Slot 2, read by `cdr`
    Second = 2,
}

impl Slot {
    /// Resolve a 1-based index.
    ///
    /// Anything outside `{1, 2}` is an argument error.
    pub fn from_index(index: i64) -> Result<Self> {
        match index {
            1 => Ok(Slot::First),
            2 => Ok(Slot::Second),
            _ => Err(Error::argument(DISPATCH_NAME, 1, "index out of bounds")),
        }
    }

    /// The 1-based index of this slot.
    pub fn index(self) -> i64 {
        self as i64
    }

    fn offset(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }
}

impl TryFrom<i64> for Slot {
    type Error = Error;

    fn try_from(index: i64) -> Result<Self> {
        Slot::from_index(index)
    }
}

/// A two-slot mutable record with reference identity.
///
/// Slots are replaced wholesale; nothing reaches into a slot's value
/// through the cell.
#[derive(Clone)]
pub struct Cell {
    slots: Arc<RwLock<[Value; 2]>>,
}

impl Cell {
    /// Allocate a fresh cell holding `first` and `second`.
    pub fn new(first: impl Into<Value>, second: impl Into<Value>) -> Self {
        Self {
            slots: Arc::new(RwLock::new([first.into(), second.into()])),
        }
    }

    /// Current contents of `slot`.
    pub fn get(&self, slot: Slot) -> Value {
        let value = self.slots.read()[slot.offset()].clone();
        trace!(cell = ?self.as_ptr(), slot = slot.index(), "cell read");
        value
    }

    /// Replace the contents of `slot`.
    pub fn set(&self, slot: Slot, value: impl Into<Value>) {
        let value = value.into();
        trace!(cell = ?self.as_ptr(), slot = slot.index(), kind = value.type_name(), "cell write");
        let previous = std::mem::replace(&mut self.slots.write()[slot.offset()], value);
        // The old value may hold the last handle to another cell; release it
        // after our own write guard is gone.
        drop(previous);
    }

    /// Contents of slot 1.
    pub fn first(&self) -> Value {
        self.get(Slot::First)
    }

    /// Contents of slot 2.
    pub fn second(&self) -> Value {
        self.get(Slot::Second)
    }

    /// Replace slot 1.
    pub fn set_first(&self, value: impl Into<Value>) {
        self.set(Slot::First, value)
    }

    /// Replace slot 2.
    pub fn set_second(&self, value: impl Into<Value>) {
        self.set(Slot::Second, value)
    }

    /// The dispatch entry point.
    ///
    /// `args[0]` selects the slot and must be the integer 1 or 2. With no
    /// further argument this is a read and returns the slot's value; with a
    /// second argument it is a write, returns nothing, and any arguments past
    /// the second are ignored.
    ///
    /// The index is validated before any slot is touched.
    pub fn call(&self, args: &[Value]) -> Result<Option<Value>> {
        let index = match args.first() {
            Some(arg) => arg.to_integer().ok_or_else(|| {
                Error::argument(
                    DISPATCH_NAME,
                    1,
                    format!("integer expected, got {}", arg.type_name()),
                )
            })?,
            None => {
                return Err(Error::argument(
                    DISPATCH_NAME,
                    1,
                    "integer expected, got no value",
                ))
            }
        };
        let slot = Slot::from_index(index)?;

        match args.get(1) {
            None => Ok(Some(self.get(slot))),
            Some(value) => {
                self.set(slot, value.clone());
                Ok(None)
            }
        }
    }

    /// Whether two handles refer to the same cell.
    pub fn ptr_eq(&self, other: &Cell) -> bool {
        Arc::ptr_eq(&self.slots, &other.slots)
    }

    /// Address of the shared pair, stable for the cell's lifetime.
    pub fn as_ptr(&self) -> *const () {
        Arc::as_ptr(&self.slots) as *const ()
    }
}

// Releasing the last handle to the head of a long chain would otherwise
// recurse once per cell. Pairs whose last handle is going away are emptied
// into a worklist instead, so no drop nests deeper than one cell.
impl Drop for Cell {
    fn drop(&mut self) {
        let Some(pair) = Arc::get_mut(&mut self.slots) else {
            return;
        };
        let mut pending: Vec<Value> = pair.get_mut().iter_mut().map(std::mem::take).collect();
        while let Some(value) = pending.pop() {
            if let Value::Function(Function::Cell(mut cell)) = value {
                if let Some(pair) = Arc::get_mut(&mut cell.slots) {
                    pending.extend(pair.get_mut().iter_mut().map(std::mem::take));
                }
            }
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::new(Value::Nil, Value::Nil)
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Cell {}

// Slots are not printed: a cell may (indirectly) contain itself.
impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({:p})", self.as_ptr())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell: {:p}", self.as_ptr())
    }
}
