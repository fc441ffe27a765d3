//! Cell API Test Suite
//!
//! Comprehensive tests for cells and the derived operations.
//!
//! ## Modules
//!
//! - `basic_ops`: construction and reads
//! - `mutation`: set_car / set_cdr and slot independence
//! - `chaining`: cells linked through their second slot
//! - `edge_cases`: index bounds, non-callables, dispatch arity
//! - `properties`: property-based checks over arbitrary values
//! - `concurrency`: shared cells across threads

pub use ccons::prelude::*;

pub mod basic_ops;
pub mod chaining;
pub mod concurrency;
pub mod mutation;
pub mod properties;
