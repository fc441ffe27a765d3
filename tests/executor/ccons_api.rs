//! Typed Wrapper Tests

use ccons::{Ccons, Value};

#[test]
fn scenario_through_typed_wrapper() {
    let host = Ccons::new();
    let c = host.cons(10, 20).unwrap();
    host.set_car(&c, 99).unwrap();
    assert_eq!(host.car(&c).unwrap(), Value::Int(99));
    assert_eq!(host.cdr(&c).unwrap(), Value::Int(20));
}

#[test]
fn chain_through_typed_wrapper() {
    let host = Ccons::new();
    let l = host
        .cons(1, host.cons(2, host.cons(3, Value::Nil).unwrap()).unwrap())
        .unwrap();

    let mut seen = Vec::new();
    let mut node = l;
    while !node.is_nil() {
        seen.push(host.car(&node).unwrap());
        node = host.cdr(&node).unwrap();
    }
    assert_eq!(seen, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
}

#[test]
fn distinct_cells() {
    let host = Ccons::new();
    assert_ne!(host.cons(1, 2).unwrap(), host.cons(1, 2).unwrap());
}

#[test]
fn typed_errors() {
    let host = Ccons::new();
    let err: ccons::Error = host.cdr(&Value::Int(1)).unwrap_err().into();
    assert!(err.is_type_error());

    let c = host.cons(1, 2).unwrap();
    let err: ccons::Error = host.call_cell(&c, vec![Value::Int(0)]).unwrap_err().into();
    assert!(err.is_argument_error());
}
