//! # ccons
//!
//! Mutable pair cells behind a single callable interface.
//!
//! A [`Cell`] owns two private slots. You reach them through typed methods
//! (`first`, `second`, `set_first`, `set_second`), through the derived
//! operations `cons`, `car`, `cdr`, `set_car` and `set_cdr`, or through the
//! cell's own dispatch entry point, [`Cell::call`], which reads with one
//! argument and writes with two.
//!
//! ## Quick Start
//!
//! ```
//! use ccons::prelude::*;
//!
//! let c = cons(10, 20);
//! set_car(&c, 99)?;
//! assert_eq!(car(&c)?, Value::Int(99));
//! assert_eq!(cdr(&c)?, Value::Int(20));
//!
//! // Cells chain into lists through their second slot.
//! let list = cons(1, cons(2, cons(3, Value::Nil)));
//! assert_eq!(car(&cdr(&list)?)?, Value::Int(2));
//! # Ok::<(), ccons::Error>(())
//! ```
//!
//! ## Layers
//!
//! - [`ccons_core`]: values, cells, the derived operations
//! - [`ccons_executor`]: a host environment with named entry points,
//!   [`Command`]/[`Output`] dispatch, and the typed [`Ccons`] wrapper

#![warn(missing_docs)]

mod error;

pub mod prelude;

pub use error::{Error, Result};

// Re-export core types
pub use ccons_core::ops::{car, cdr, cons, set_car, set_cdr};
pub use ccons_core::{Builtin, Callable, Cell, Function, NativeFn, Slot, Value};

// Re-export the host layer
pub use ccons_executor::{
    CallOptions, Ccons, Command, Executor, ExecutorBuilder, ExtraArgs, Module, Output,
};
