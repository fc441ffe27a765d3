//! High-level typed wrapper for the Executor.
//!
//! The [`Ccons`] struct provides a convenient Rust API that wraps the
//! [`Executor`] and [`Command`]/[`Output`] enums with typed method calls.
//!
//! # Example
//!
//! ```
//! use ccons_executor::Ccons;
//! use ccons_core::Value;
//!
//! let host = Ccons::new();
//! let c = host.cons(10, 20)?;
//! host.set_car(&c, 99)?;
//! assert_eq!(host.car(&c)?, Value::Int(99));
//! assert_eq!(host.cdr(&c)?, Value::Int(20));
//! # Ok::<(), ccons_executor::Error>(())
//! ```

mod cell;

use crate::options::CallOptions;
use crate::Executor;

/// High-level typed wrapper for cell operations.
///
/// Each method:
///
/// 1. Creates the appropriate [`Command`](crate::Command)
/// 2. Executes it via the [`Executor`]
/// 3. Extracts and returns the typed result
pub struct Ccons {
    executor: Executor,
}

impl Ccons {
    /// A wrapper over an executor with default options.
    pub fn new() -> Self {
        Self {
            executor: Executor::new(),
        }
    }

    /// A wrapper over an executor built with `options`.
    pub fn with_options(options: CallOptions) -> Self {
        Self {
            executor: Executor::builder().options(options).build(),
        }
    }

    /// Get the underlying executor.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }
}

impl Default for Ccons {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Executor> for Ccons {
    fn from(executor: Executor) -> Self {
        Self { executor }
    }
}
