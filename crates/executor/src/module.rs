//! The table of named entry points a host opens.
//!
//! [`Module::open`] registers the five cell builtins under their public
//! names. Entries keep registration order so listings are stable.

use ccons_core::{Builtin, Function, NativeFn};
use tracing::debug;

use crate::handlers::cell;

/// Public name the module is opened under.
pub const MODULE_NAME: &str = "ccons";

/// `(name, meaningful argument count, handler)` for every builtin.
const BUILTINS: [(&str, usize, NativeFn); 5] = [
    ("cons", 2, cell::cons),
    ("car", 1, cell::car),
    ("cdr", 1, cell::cdr),
    ("set_car", 2, cell::set_car),
    ("set_cdr", 2, cell::set_cdr),
];

/// A name -> function table.
#[derive(Debug, Clone, Default)]
pub struct Module {
    entries: Vec<(&'static str, Function)>,
}

impl Module {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table with `cons`, `car`, `cdr`, `set_car` and `set_cdr`.
    pub fn open() -> Self {
        let mut module = Module::new();
        for (name, max_args, func) in BUILTINS {
            module.register(name, max_args, func);
        }
        debug!(module = MODULE_NAME, functions = module.len(), "module opened");
        module
    }

    /// Register `func` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: &'static str, max_args: usize, func: NativeFn) {
        let function = Function::Builtin(Builtin::new(name, max_args, func));
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = function,
            None => self.entries.push((name, function)),
        }
    }

    /// Look up an entry point by name.
    pub fn get(&self, name: &str) -> Option<&Function> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, f)| f)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entries are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
