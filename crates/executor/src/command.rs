//! Commands accepted by the [`Executor`](crate::Executor).

use ccons_core::Value;

/// A single call into the host environment.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Call the entry point registered under `function`.
    Call {
        /// Registered name, e.g. `"car"`
        function: String,
        /// Positional arguments
        args: Vec<Value>,
    },

    /// Call `callee` directly.
    ///
    /// This is how a cell's dispatch entry point is reached: the callee is
    /// the cell itself and `args` starts with the slot index.
    Invoke {
        /// Value to call; must be a function
        callee: Value,
        /// Positional arguments
        args: Vec<Value>,
    },
}

impl Command {
    /// Shorthand for [`Command::Call`].
    pub fn call(function: impl Into<String>, args: Vec<Value>) -> Self {
        Command::Call {
            function: function.into(),
            args,
        }
    }

    /// Shorthand for [`Command::Invoke`].
    pub fn invoke(callee: Value, args: Vec<Value>) -> Self {
        Command::Invoke { callee, args }
    }
}
