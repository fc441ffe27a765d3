//! Call options
//!
//! Entry points only give meaning to a fixed number of leading arguments.
//! What happens to the rest is a host policy, chosen here.

use ccons_core::{Callable, Error, Function};
use tracing::warn;

/// Policy for arguments past a callee's last meaningful position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtraArgs {
    /// Drop them silently
    #[default]
    Truncate,
    /// Fail the call with an argument error before invoking
    Reject,
}

/// Options applied to every call the executor makes.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// What to do with surplus arguments
    pub extra_args: ExtraArgs,
}

impl CallOptions {
    /// Reject surplus arguments instead of truncating them.
    pub fn strict() -> Self {
        CallOptions {
            extra_args: ExtraArgs::Reject,
        }
    }

    /// Check a call of `callee` with `supplied` arguments against the policy.
    pub fn check(&self, callee: &Function, supplied: usize) -> ccons_core::Result<()> {
        let max = callee.max_args();
        if self.extra_args == ExtraArgs::Reject && supplied > max {
            warn!(function = callee.name(), supplied, max, "rejected surplus arguments");
            return Err(Error::argument(callee.name(), max + 1, "too many arguments"));
        }
        Ok(())
    }
}
