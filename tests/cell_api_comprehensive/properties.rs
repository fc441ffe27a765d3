//! Property Tests
//!
//! The cell laws, checked over arbitrary slot values.

use crate::*;
use proptest::prelude::*;

fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        // NaN would break equality checks, not the cell.
        (-1e12f64..1e12f64).prop_map(Value::Float),
        ".{0,16}".prop_map(Value::String),
    ]
}

proptest! {
    #[test]
    fn cons_then_read(a in any_value(), b in any_value()) {
        let c = cons(a.clone(), b.clone());
        prop_assert_eq!(car(&c).unwrap(), a);
        prop_assert_eq!(cdr(&c).unwrap(), b);
    }

    #[test]
    fn set_car_only_touches_slot_one(a in any_value(), b in any_value(), v in any_value()) {
        let c = cons(a, b.clone());
        set_car(&c, v.clone()).unwrap();
        prop_assert_eq!(car(&c).unwrap(), v);
        prop_assert_eq!(cdr(&c).unwrap(), b);
    }

    #[test]
    fn set_cdr_only_touches_slot_two(a in any_value(), b in any_value(), v in any_value()) {
        let c = cons(a.clone(), b);
        set_cdr(&c, v.clone()).unwrap();
        prop_assert_eq!(car(&c).unwrap(), a);
        prop_assert_eq!(cdr(&c).unwrap(), v);
    }

    #[test]
    fn reads_do_not_mutate(a in any_value(), b in any_value(), n in 1usize..20) {
        let c = cons(a.clone(), b.clone());
        for _ in 0..n {
            prop_assert_eq!(car(&c).unwrap(), a.clone());
            prop_assert_eq!(cdr(&c).unwrap(), b.clone());
        }
    }

    #[test]
    fn only_one_and_two_are_valid_indices(index in any::<i64>()) {
        let cell = Cell::new(1, 2);
        let result = cell.call(&[Value::Int(index)]);
        if index == 1 || index == 2 {
            prop_assert_eq!(result.unwrap(), Some(Value::Int(index)));
        } else {
            prop_assert!(result.unwrap_err().is_argument_error());
        }
    }

    #[test]
    fn chains_walk_back_in_order(items in prop::collection::vec(any::<i64>(), 0..32)) {
        let list = items.iter().rev().fold(Value::Nil, |tail, &i| cons(i, tail));
        let mut node = list;
        for &expected in &items {
            prop_assert_eq!(car(&node).unwrap(), Value::Int(expected));
            node = cdr(&node).unwrap();
        }
        prop_assert!(node.is_nil());
    }
}
