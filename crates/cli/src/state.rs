//! Session state: the executor plus named variables.

use std::collections::BTreeMap;

use ccons_executor::{Command, Executor, Output, Result, Value};

/// State carried across lines of a session.
pub struct SessionState {
    executor: Executor,
    vars: BTreeMap<String, Value>,
}

impl SessionState {
    /// A fresh session over `executor`.
    pub fn new(executor: Executor) -> Self {
        Self {
            executor,
            vars: BTreeMap::new(),
        }
    }

    /// The executor commands run on.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Execute one command.
    pub fn execute(&self, command: Command) -> Result<Output> {
        self.executor.execute(command)
    }

    /// Value bound to `name`.
    pub fn var(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Bind `name` to `value`, replacing any earlier binding.
    pub fn set_var(&mut self, name: impl Into<String>, value: Value) {
        self.vars.insert(name.into(), value);
    }

    /// All bindings, sorted by name.
    pub fn vars(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v))
    }
}
