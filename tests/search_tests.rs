use tval::search::{bfind, bfind_bisect, bfind_with, cmp, Strategy};
use tval::value::Value;

fn ints(xs: &[i64]) -> Vec<Value> {
    xs.iter().map(|&x| Value::int(x)).collect()
}

fn nums(xs: &[f64]) -> Vec<Value> {
    xs.iter().map(|&x| Value::num(x)).collect()
}

#[test]
fn test_lower_bound_of_duplicate_runs() {
    let seq = ints(&[5, 10, 10, 10, 20, 20, 20, 30]);
    for s in Strategy::ALL {
        let find = |x: i64| bfind_with(s, &seq, Value::int(x), cmp::int_less);
        assert_eq!(find(5), 0, "{}", s.name());
        assert_eq!(find(10), 1, "{}", s.name());
        assert_eq!(find(20), 4, "{}", s.name());
        assert_eq!(find(30), 7, "{}", s.name());
    }
}

#[test]
fn test_targets_outside_the_range() {
    let seq = ints(&[5, 10, 10, 10, 20, 20, 20, 30]);
    for s in Strategy::ALL {
        assert_eq!(bfind_with(s, &seq, Value::int(0), cmp::int_less), 0);
        assert_eq!(bfind_with(s, &seq, Value::int(41), cmp::int_less), 8);
    }
}

#[test]
fn test_targets_between_elements() {
    let seq = ints(&[5, 10, 10, 10, 20, 20, 20, 30]);
    for (target, expected) in [(6, 1), (11, 4), (21, 7), (29, 7), (31, 8)] {
        assert_eq!(bfind(&seq, Value::int(target), cmp::int_less), expected);
        assert_eq!(bfind_bisect(&seq, Value::int(target), cmp::int_less), expected);
    }
}

#[test]
fn test_odd_length_sequence() {
    let seq = ints(&[5, 10, 10, 10, 20, 30, 30, 30, 40]);
    let expected = [0, 1, 1, 1, 4, 5, 5, 5, 8];
    for s in Strategy::ALL {
        for (k, &e) in expected.iter().enumerate() {
            assert_eq!(bfind_with(s, &seq, seq[k], cmp::int_less), e);
        }
    }
}

#[test]
fn test_numbers_and_negative_values() {
    let seq = nums(&[-2.5, -1.0, 0.0, 0.0, 3.25, 1e300]);
    for s in Strategy::ALL {
        assert_eq!(bfind_with(s, &seq, Value::num(-3.0), cmp::num_less), 0);
        assert_eq!(bfind_with(s, &seq, Value::num(0.0), cmp::num_less), 2);
        assert_eq!(bfind_with(s, &seq, Value::num(1.0), cmp::num_less), 4);
        assert_eq!(bfind_with(s, &seq, Value::num(f64::INFINITY), cmp::num_less), 6);
    }
}

#[test]
fn test_all_equal_sequence() {
    let seq = ints(&[7; 13]);
    for s in Strategy::ALL {
        assert_eq!(bfind_with(s, &seq, Value::int(7), cmp::int_less), 0);
        assert_eq!(bfind_with(s, &seq, Value::int(8), cmp::int_less), 13);
    }
}

#[test]
fn test_comparator_through_references() {
    let backing = nums(&[5.0, 10.0, 10.0, 10.0, 20.0, 20.0, 20.0, 30.0]);
    let refs: Vec<Value> = backing.iter().map(|v| Value::indirect(v)).collect();
    let target = Value::num(20.0);
    let slot = [target];
    let target_ref = Value::indirect(&slot[0]);
    for s in Strategy::ALL {
        // SAFETY: `backing` and `slot` outlive the searches and are not written.
        let found = bfind_with(s, &refs, target, |a, b| unsafe {
            cmp::num_less_through_refs(a, b)
        });
        assert_eq!(found, 4);
        let found = bfind_with(s, &refs, target_ref, |a, b| unsafe {
            cmp::num_less_through_refs(a, b)
        });
        assert_eq!(found, 4);
    }
}

#[test]
fn test_comparator_sees_sequence_element_first() {
    let seq = ints(&[1, 2, 3]);
    let target = Value::int(2);
    let mut calls = Vec::new();
    bfind(&seq, target, |a, b| {
        calls.push((a, b));
        a.as_int() < b.as_int()
    });
    assert!(!calls.is_empty());
    assert!(calls.iter().all(|&(a, b)| b == target && seq.contains(&a)));
}

#[test]
fn test_custom_descending_order() {
    // Any strict weak order works, including a reversed one.
    let seq = ints(&[30, 20, 20, 10, 5]);
    let greater = |a: Value, b: Value| a.as_int() > b.as_int();
    assert_eq!(bfind(&seq, Value::int(20), greater), 1);
    assert_eq!(bfind_bisect(&seq, Value::int(7), greater), 4);
    assert_eq!(bfind(&seq, Value::int(99), greater), 0);
}
