//! Shared helpers for executor tests.

use ccons::{Command, Executor, Value};

pub fn create_executor() -> Executor {
    Executor::new()
}

pub fn call(executor: &Executor, function: &str, args: Vec<Value>) -> ccons::Output {
    executor.execute(Command::call(function, args)).unwrap()
}

pub fn new_cell(executor: &Executor, a: Value, b: Value) -> Value {
    call(executor, "cons", vec![a, b]).into_value()
}
