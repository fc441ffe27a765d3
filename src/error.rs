//! Unified error types for ccons.
//!
//! This module provides a clean error type that wraps the core and executor
//! errors and presents a consistent interface to users.

use thiserror::Error;

/// All ccons errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A bad argument value, e.g. a slot index outside `{1, 2}`
    #[error("argument error: {0}")]
    Argument(String),

    /// A bad argument kind, e.g. `car` applied to a non-function
    #[error("type error: {0}")]
    Type(String),

    /// No entry point registered under the name
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// Internal error (bug or invariant violation)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for ccons operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is an argument error.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Error::Argument(_))
    }

    /// Check if this is a type error.
    pub fn is_type_error(&self) -> bool {
        matches!(self, Error::Type(_))
    }
}

// Convert from core errors
impl From<ccons_core::Error> for Error {
    fn from(e: ccons_core::Error) -> Self {
        match e {
            ccons_core::Error::Argument { .. } => Error::Argument(e.to_string()),
            ccons_core::Error::Type { .. } => Error::Type(e.to_string()),
        }
    }
}

// Convert from executor errors
impl From<ccons_executor::Error> for Error {
    fn from(e: ccons_executor::Error) -> Self {
        use ccons_executor::Error as ExecError;
        match e {
            ExecError::Core(core) => core.into(),
            ExecError::UnknownFunction { name } => Error::UnknownFunction(name),
            ExecError::Internal { reason } => Error::Internal(reason),
        }
    }
}
