//! Mutation Tests
//!
//! - set_car / set_cdr replace one slot
//! - writes through one handle are seen through all handles

use crate::*;

/// The concrete scenario: cons(10, 20), set_car 99
#[test]
fn test_set_car_scenario() {
    let c = cons(10, 20);
    set_car(&c, 99).unwrap();
    assert_eq!(car(&c).unwrap(), Value::Int(99));
    assert_eq!(cdr(&c).unwrap(), Value::Int(20));
}

/// Test set_cdr leaves car alone
#[test]
fn test_set_cdr() {
    let c = cons(10, 20);
    set_cdr(&c, "tail").unwrap();
    assert_eq!(car(&c).unwrap(), Value::Int(10));
    assert_eq!(cdr(&c).unwrap(), Value::from("tail"));
}

/// Test that a slot can be overwritten many times
#[test]
fn test_repeated_writes() {
    let c = cons(0, 0);
    for i in 1..=5 {
        set_car(&c, i).unwrap();
        assert_eq!(car(&c).unwrap(), Value::Int(i as i64));
    }
    assert_eq!(cdr(&c).unwrap(), Value::Int(0));
}

/// Test that writes are visible through every handle
#[test]
fn test_shared_handles() {
    let c = cons(1, 2);
    let alias = c.clone();
    set_cdr(&alias, 3).unwrap();
    assert_eq!(cdr(&c).unwrap(), Value::Int(3));
}

/// Test that a slot holds a reference, not a copy
#[test]
fn test_slot_holds_reference() {
    let inner = cons(1, 2);
    let outer = cons(inner.clone(), Value::Nil);
    set_car(&inner, 100).unwrap();
    let seen = car(&outer).unwrap();
    assert_eq!(car(&seen).unwrap(), Value::Int(100));
}

/// Test writing nil clears a slot
#[test]
fn test_write_nil() {
    let c = cons(1, 2);
    set_car(&c, Value::Nil).unwrap();
    assert!(car(&c).unwrap().is_nil());
}

/// Test a write through the dispatch entry point matches set_car
#[test]
fn test_dispatch_write_matches_set_car() {
    let cell = Cell::new(1, 2);
    assert_eq!(cell.call(&[Value::Int(1), Value::Int(7)]).unwrap(), None);
    assert_eq!(cell.first(), Value::Int(7));
    assert_eq!(cell.second(), Value::Int(2));
}
