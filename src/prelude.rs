//! Convenient imports for ccons.
//!
//! ```
//! use ccons::prelude::*;
//!
//! let c = cons("head", Value::Nil);
//! assert_eq!(car(&c)?, Value::from("head"));
//! # Ok::<(), ccons::Error>(())
//! ```

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use crate::{Cell, Slot, Value};

// Derived operations
pub use crate::{car, cdr, cons, set_car, set_cdr};

// Host layer
pub use crate::{Ccons, Command, Executor, Output};
