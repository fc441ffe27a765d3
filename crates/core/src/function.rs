//! The callable capability.
//!
//! Hosts see one kind of callable value, [`Function`]. A cell is a
//! `Function`, and so is every builtin entry point; the derived accessors
//! only check for "is a function" and then call it.

use std::fmt;
use std::sync::Arc;

use crate::cell::Cell;
use crate::error::Result;
use crate::value::Value;

/// Signature of a builtin entry point.
///
/// Returns `Some` for a produced value and `None` for "no value".
pub type NativeFn = fn(&[Value]) -> Result<Option<Value>>;

/// Something that can be invoked with a list of arguments.
pub trait Callable {
    /// Invoke with `args`.
    fn call(&self, args: &[Value]) -> Result<Option<Value>>;

    /// Name used in error messages.
    fn name(&self) -> &str;

    /// Number of argument positions that carry meaning.
    ///
    /// Positions past this are truncated by the callee.
    fn max_args(&self) -> usize;
}

impl Callable for Cell {
    fn call(&self, args: &[Value]) -> Result<Option<Value>> {
        Cell::call(self, args)
    }

    fn name(&self) -> &str {
        crate::cell::DISPATCH_NAME
    }

    fn max_args(&self) -> usize {
        2
    }
}

struct BuiltinDef {
    name: &'static str,
    max_args: usize,
    func: NativeFn,
}

/// A named native entry point.
#[derive(Clone)]
pub struct Builtin {
    def: Arc<BuiltinDef>,
}

impl Builtin {
    /// Wrap `func` under `name`.
    pub fn new(name: &'static str, max_args: usize, func: NativeFn) -> Self {
        Self {
            def: Arc::new(BuiltinDef {
                name,
                max_args,
                func,
            }),
        }
    }

    /// Whether two handles refer to the same registration.
    pub fn ptr_eq(&self, other: &Builtin) -> bool {
        Arc::ptr_eq(&self.def, &other.def)
    }
}

impl Callable for Builtin {
    fn call(&self, args: &[Value]) -> Result<Option<Value>> {
        (self.def.func)(args)
    }

    fn name(&self) -> &str {
        self.def.name
    }

    fn max_args(&self) -> usize {
        self.def.max_args
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.def.name)
    }
}

/// A callable value.
#[derive(Debug, Clone)]
pub enum Function {
    /// A pair cell; calling it is the cell's dispatch entry point
    Cell(Cell),
    /// A builtin entry point
    Builtin(Builtin),
}

impl Function {
    /// The cell behind this function, if it is one.
    pub fn as_cell(&self) -> Option<&Cell> {
        match self {
            Function::Cell(c) => Some(c),
            Function::Builtin(_) => None,
        }
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        match (self, other) {
            (Function::Cell(a), Function::Cell(b)) => a.ptr_eq(b),
            (Function::Builtin(a), Function::Builtin(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl Callable for Function {
    fn call(&self, args: &[Value]) -> Result<Option<Value>> {
        match self {
            Function::Cell(c) => Callable::call(c, args),
            Function::Builtin(b) => b.call(args),
        }
    }

    fn name(&self) -> &str {
        match self {
            Function::Cell(c) => c.name(),
            Function::Builtin(b) => b.name(),
        }
    }

    fn max_args(&self) -> usize {
        match self {
            Function::Cell(c) => c.max_args(),
            Function::Builtin(b) => b.max_args(),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::Cell(c) => write!(f, "{}", c),
            Function::Builtin(b) => write!(f, "builtin: {}", b.name()),
        }
    }
}

impl From<Cell> for Function {
    fn from(cell: Cell) -> Self {
        Function::Cell(cell)
    }
}

impl From<Builtin> for Function {
    fn from(b: Builtin) -> Self {
        Function::Builtin(b)
    }
}
