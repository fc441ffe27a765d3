//! Chaining Tests
//!
//! Cells linked through their second slot behave as a sequence.

use crate::*;

fn list(items: &[i64]) -> Value {
    items
        .iter()
        .rev()
        .fold(Value::Nil, |tail, &item| cons(item, tail))
}

fn collect(mut node: Value) -> Vec<Value> {
    let mut out = Vec::new();
    while !node.is_nil() {
        out.push(car(&node).unwrap());
        node = cdr(&node).unwrap();
    }
    out
}

/// Test walking cons(1, cons(2, cons(3, nil))) with cdr
#[test]
fn test_walk_three_cells() {
    let l = cons(1, cons(2, cons(3, Value::Nil)));

    let second = cdr(&l).unwrap();
    assert_eq!(car(&second).unwrap(), Value::Int(2));

    let third = cdr(&second).unwrap();
    assert_eq!(car(&third).unwrap(), Value::Int(3));

    assert!(cdr(&third).unwrap().is_nil());
}

/// Test folding into and out of a list
#[test]
fn test_collect() {
    let l = list(&[5, 6, 7, 8]);
    assert_eq!(
        collect(l),
        vec![Value::Int(5), Value::Int(6), Value::Int(7), Value::Int(8)]
    );
}

/// Test splicing by rewriting a tail
#[test]
fn test_splice_tail() {
    let l = list(&[1, 2, 3]);
    let second = cdr(&l).unwrap();
    set_cdr(&second, list(&[9])).unwrap();
    assert_eq!(collect(l), vec![Value::Int(1), Value::Int(2), Value::Int(9)]);
}

/// Test that a cell may hold itself without breaking reads
#[test]
fn test_self_reference() {
    let c = cons(1, Value::Nil);
    set_cdr(&c, c.clone()).unwrap();
    let next = cdr(&c).unwrap();
    assert_eq!(next, c);
    assert_eq!(car(&next).unwrap(), Value::Int(1));
    // Break the cycle so the cell can be reclaimed.
    set_cdr(&c, Value::Nil).unwrap();
}

fn long_list(len: i64) -> Value {
    let mut l = Value::Nil;
    for i in (0..len).rev() {
        l = cons(i, l);
    }
    l
}

/// Test releasing the last handle to a million-cell list
#[test]
fn test_drop_million_cells() {
    let l = long_list(1_000_000);
    assert_eq!(car(&l).unwrap(), Value::Int(0));
    drop(l);
}

/// Test cutting a million-cell tail off with set_cdr
#[test]
fn test_cut_million_cell_tail() {
    let head = cons("head", long_list(1_000_000));
    set_cdr(&head, Value::Nil).unwrap();
    assert_eq!(collect(head), vec![Value::from("head")]);
}

/// Test that a tail still held elsewhere survives its list
#[test]
fn test_shared_tail_survives() {
    let tail = list(&[3, 4]);
    let l = cons(1, cons(2, tail.clone()));
    drop(l);
    assert_eq!(collect(tail), vec![Value::Int(3), Value::Int(4)]);
}
