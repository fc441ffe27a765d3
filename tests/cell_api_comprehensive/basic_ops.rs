//! Basic Operations Tests
//!
//! - cons / car / cdr
//! - read idempotence
//! - identity

use crate::*;

/// Test that car and cdr return what cons was given
#[test]
fn test_cons_car_cdr() {
    let c = cons(10, 20);
    assert_eq!(car(&c).unwrap(), Value::Int(10));
    assert_eq!(cdr(&c).unwrap(), Value::Int(20));
}

/// Test heterogeneous slot contents
#[test]
fn test_mixed_kinds() {
    let c = cons("name", 2.5);
    assert_eq!(car(&c).unwrap(), Value::from("name"));
    assert_eq!(cdr(&c).unwrap(), Value::Float(2.5));

    let c = cons(true, Value::Nil);
    assert_eq!(car(&c).unwrap(), Value::Bool(true));
    assert!(cdr(&c).unwrap().is_nil());
}

/// Test that reads can be repeated without changing anything
#[test]
fn test_reads_are_idempotent() {
    let c = cons(1, 2);
    for _ in 0..10 {
        assert_eq!(car(&c).unwrap(), Value::Int(1));
        assert_eq!(cdr(&c).unwrap(), Value::Int(2));
    }
}

/// Test that equal contents do not make equal cells
#[test]
fn test_identity() {
    let a = cons(1, 2);
    let b = cons(1, 2);
    assert_ne!(a, b);
    assert_eq!(a, a.clone());
}

/// Test that a cell is a function to the host
#[test]
fn test_cell_is_callable() {
    let c = cons(1, 2);
    assert!(c.is_callable());
    assert_eq!(c.type_name(), "function");
}

/// Test the typed struct agrees with the derived operations
#[test]
fn test_typed_and_dynamic_views_agree() {
    let cell = Cell::new(3, 4);
    let value: Value = cell.clone().into();
    assert_eq!(car(&value).unwrap(), cell.first());
    assert_eq!(cdr(&value).unwrap(), cell.get(Slot::Second));
}
