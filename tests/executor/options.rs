//! Surplus-argument policy tests

use ccons::{CallOptions, Ccons, Command, Executor, ExtraArgs, Output, Value};

#[test]
fn default_policy_truncates() {
    let executor = Executor::new();
    assert_eq!(executor.options().extra_args, ExtraArgs::Truncate);

    let c = executor
        .execute(Command::call(
            "cons",
            vec![Value::Int(1), Value::Int(2), Value::Int(3)],
        ))
        .unwrap()
        .into_value();
    let cdr = executor.execute(Command::call("cdr", vec![c])).unwrap();
    assert_eq!(cdr, Output::Value(Value::Int(2)));
}

#[test]
fn strict_policy_rejects_before_calling() {
    let host = Ccons::with_options(CallOptions::strict());
    let c = host.cons(1, 2).unwrap();

    let err = host
        .executor()
        .execute(Command::call("car", vec![c.clone(), Value::Int(1)]))
        .unwrap_err();
    assert!(err.is_argument_error());

    let err = host
        .call_cell(&c, vec![Value::Int(2), Value::Int(5), Value::Int(6)])
        .unwrap_err();
    assert!(err.is_argument_error());
    assert_eq!(host.cdr(&c).unwrap(), Value::Int(2));
}

#[test]
fn strict_policy_allows_exact_arity() {
    let executor = Executor::builder().extra_args(ExtraArgs::Reject).build();
    let c = executor
        .execute(Command::call("cons", vec![Value::Int(1), Value::Int(2)]))
        .unwrap()
        .into_value();
    let out = executor
        .execute(Command::invoke(c, vec![Value::Int(1), Value::Int(4)]))
        .unwrap();
    assert!(out.is_unit());
}
