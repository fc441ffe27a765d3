//! Command dispatch.
//!
//! The [`Executor`] owns a [`Module`] and the [`CallOptions`] and turns each
//! [`Command`] into exactly one call. Every call goes through the same path:
//! resolve the callee, apply the surplus-argument policy, invoke.

use ccons_core::{Callable, Error as CoreError, Function, Value};
use tracing::{debug, trace};

use crate::module::Module;
use crate::options::{CallOptions, ExtraArgs};
use crate::{Command, Error, Output, Result};

/// Executes commands against a module of entry points.
#[derive(Debug, Clone)]
pub struct Executor {
    module: Module,
    options: CallOptions,
}

impl Executor {
    /// An executor over the standard module with default options.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start configuring an executor.
    pub fn builder() -> ExecutorBuilder {
        ExecutorBuilder::default()
    }

    /// The module of entry points.
    pub fn module(&self) -> &Module {
        &self.module
    }

    /// The options every call is made with.
    pub fn options(&self) -> &CallOptions {
        &self.options
    }

    /// Execute a single command.
    pub fn execute(&self, command: Command) -> Result<Output> {
        match command {
            Command::Call { function, args } => {
                let callee = self
                    .module
                    .get(&function)
                    .ok_or_else(|| Error::UnknownFunction {
                        name: function.clone(),
                    })?;
                self.invoke(callee, &args)
            }
            Command::Invoke { callee, args } => {
                let callee = callee.as_function().ok_or_else(|| {
                    CoreError::wrong_type("call", 1, "function", callee.type_name())
                })?;
                self.invoke(callee, &args)
            }
        }
    }

    fn invoke(&self, callee: &Function, args: &[Value]) -> Result<Output> {
        trace!(function = callee.name(), args = args.len(), "dispatch");
        self.options.check(callee, args.len())?;
        Ok(callee.call(args)?.into())
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Executor`].
#[derive(Debug, Default)]
pub struct ExecutorBuilder {
    module: Option<Module>,
    options: CallOptions,
}

impl ExecutorBuilder {
    /// Use `module` instead of [`Module::open`].
    pub fn module(mut self, module: Module) -> Self {
        self.module = Some(module);
        self
    }

    /// Replace the call options.
    pub fn options(mut self, options: CallOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the surplus-argument policy.
    pub fn extra_args(mut self, policy: ExtraArgs) -> Self {
        self.options.extra_args = policy;
        self
    }

    /// Finish.
    pub fn build(self) -> Executor {
        let module = self.module.unwrap_or_else(Module::open);
        debug!(
            functions = module.len(),
            extra_args = ?self.options.extra_args,
            "executor ready"
        );
        Executor {
            module,
            options: self.options,
        }
    }
}
