//! Concurrency Tests
//!
//! Each read and write is a single lock acquisition on the cell's slot pair.

use crate::*;
use std::sync::Arc;
use std::thread;

/// Test concurrent writers to different slots do not interfere
#[test]
fn test_writers_on_separate_slots() {
    let cell = Arc::new(Cell::new(0, 0));

    let handles: Vec<_> = [Slot::First, Slot::Second]
        .into_iter()
        .map(|slot| {
            let cell = Arc::clone(&cell);
            thread::spawn(move || {
                for i in 0..1000i64 {
                    cell.set(slot, i);
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(cell.first(), Value::Int(999));
    assert_eq!(cell.second(), Value::Int(999));
}

/// Test readers always see a whole value
#[test]
fn test_readers_see_whole_values() {
    let cell = Cell::new("a", Value::Nil);
    let writer = {
        let cell = cell.clone();
        thread::spawn(move || {
            for i in 0..500 {
                let s = if i % 2 == 0 { "even" } else { "odd" };
                cell.set_first(s);
            }
        })
    };

    for _ in 0..500 {
        let v = cell.first();
        let s = v.as_str().unwrap();
        assert!(s == "a" || s == "even" || s == "odd");
    }
    writer.join().unwrap();
}
