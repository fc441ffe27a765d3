//! Builtin entry point handlers.

pub mod cell;
