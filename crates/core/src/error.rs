//! Error types for cell dispatch and the derived accessors.
//!
//! Exactly two kinds of failure exist at this level:
//!
//! | Kind | Raised by | Example |
//! |------|-----------|---------|
//! | `Argument` | the cell dispatch entry point | index `3` is out of bounds |
//! | `Type` | any entry point checking an argument's kind | `car` applied to an integer |
//!
//! Both are reported before any slot is touched, so a failed call never
//! leaves a cell partially updated.

use thiserror::Error;

/// Failure of a call into a cell or one of its accessors.
///
/// The display form follows the conventional host wording:
/// `bad argument #1 to 'car' (function expected, got integer)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument had the right kind but an unacceptable value.
    #[error("bad argument #{position} to '{function}' ({message})")]
    Argument {
        /// Name of the entry point that rejected the argument
        function: String,
        /// 1-based argument position
        position: usize,
        /// What was wrong with it
        message: String,
    },

    /// An argument had the wrong kind.
    #[error("bad argument #{position} to '{function}' ({expected} expected, got {actual})")]
    Type {
        /// Name of the entry point that rejected the argument
        function: String,
        /// 1-based argument position
        position: usize,
        /// Kind the entry point requires
        expected: &'static str,
        /// Kind that was supplied (`no value` when missing)
        actual: &'static str,
    },
}

/// Result type for cell operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build an `Argument` error.
    pub fn argument(
        function: impl Into<String>,
        position: usize,
        message: impl Into<String>,
    ) -> Self {
        Error::Argument {
            function: function.into(),
            position,
            message: message.into(),
        }
    }

    /// Build a `Type` error.
    pub fn wrong_type(
        function: impl Into<String>,
        position: usize,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Error::Type {
            function: function.into(),
            position,
            expected,
            actual,
        }
    }

    /// Check if this is an argument (bad value) error.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Error::Argument { .. })
    }

    /// Check if this is a type (bad kind) error.
    pub fn is_type_error(&self) -> bool {
        matches!(self, Error::Type { .. })
    }

    /// Name of the entry point that raised the error.
    pub fn function(&self) -> &str {
        match self {
            Error::Argument { function, .. } | Error::Type { function, .. } => function,
        }
    }

    /// 1-based position of the offending argument.
    pub fn position(&self) -> usize {
        match self {
            Error::Argument { position, .. } | Error::Type { position, .. } => *position,
        }
    }
}
