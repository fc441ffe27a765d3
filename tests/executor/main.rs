//! Executor Test Suite
//!
//! - `command_dispatch`: every entry point through `Executor::execute`
//! - `ccons_api`: the typed wrapper
//! - `options`: surplus-argument policy

mod ccons_api;
mod common;
mod options;
