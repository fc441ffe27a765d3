//! Executor error types.

use thiserror::Error;

/// Errors surfaced by the executor.
///
/// Cell-level failures pass through unchanged in [`Error::Core`]; the other
/// variants are host-level conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Argument or type error raised by an entry point
    #[error(transparent)]
    Core(#[from] ccons_core::Error),

    /// No entry point registered under this name
    #[error("unknown function: {name}")]
    UnknownFunction {
        /// The name that was looked up
        name: String,
    },

    /// Bug or invariant violation
    #[error("internal error: {reason}")]
    Internal {
        /// What went wrong
        reason: String,
    },
}

/// Result type for executor operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is an argument (bad value) error.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Error::Core(e) if e.is_argument_error())
    }

    /// Check if this is a type (bad kind) error.
    pub fn is_type_error(&self) -> bool {
        matches!(self, Error::Core(e) if e.is_type_error())
    }
}
