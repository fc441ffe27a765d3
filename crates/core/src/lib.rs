//! Core types for ccons
//!
//! This crate defines the mutable pair and the value space it lives in:
//! - [`Value`]: the closed set of values a slot can hold
//! - [`Cell`]: a two-slot mutable record with reference identity
//! - [`Slot`]: the 1-based slot selector
//! - [`Function`] / [`Callable`]: the callable capability shared by cells and builtins
//! - [`ops`]: `cons`, `car`, `cdr`, `set_car`, `set_cdr` over dynamic values
//! - [`Error`]: argument and type errors

#![warn(missing_docs)]

pub mod cell;
pub mod error;
pub mod function;
pub mod ops;
pub mod value;

pub use cell::{Cell, Slot, DISPATCH_NAME};
pub use error::{Error, Result};
pub use function::{Builtin, Callable, Function, NativeFn};
pub use value::Value;
