//! Command execution layer for ccons
//!
//! This crate plays the host environment for cells: it opens a [`Module`]
//! of named entry points (`cons`, `car`, `cdr`, `set_car`, `set_cdr`),
//! executes [`Command`]s against it, and wraps the whole thing in the typed
//! [`Ccons`] API.
//!
//! ```
//! use ccons_executor::{Command, Executor, Output};
//! use ccons_core::Value;
//!
//! let executor = Executor::new();
//! let cell = executor
//!     .execute(Command::call("cons", vec![Value::Int(1), Value::Nil]))?
//!     .into_value();
//! let head = executor.execute(Command::call("car", vec![cell]))?;
//! assert_eq!(head, Output::Value(Value::Int(1)));
//! # Ok::<(), ccons_executor::Error>(())
//! ```

#![warn(missing_docs)]

mod api;
mod command;
mod error;
mod executor;
pub mod handlers;
mod module;
mod options;
mod output;

pub use api::Ccons;
pub use ccons_core::Value;
pub use command::Command;
pub use error::{Error, Result};
pub use executor::{Executor, ExecutorBuilder};
pub use module::{Module, MODULE_NAME};
pub use options::{CallOptions, ExtraArgs};
pub use output::Output;
