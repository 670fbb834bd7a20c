// Integration tests for indirect value resolution

use tval::value::{Value, ValueError, MAX_REF_HOPS};

/// Slots `0..len` where slot 0 holds `Int(x)` and slot `i` refers to slot `i - 1`
fn chain(x: i64, len: usize) -> Vec<Value> {
    let mut slots = vec![Value::int(x); len];
    let base = slots.as_mut_ptr();
    for i in 1..len {
        unsafe { *base.add(i) = Value::indirect(base.add(i - 1)) };
    }
    slots
}

#[test]
fn test_chains_of_every_length_resolve() {
    let x = -(1i64 << 45) + 1;
    let slots = chain(x, 16);
    // k = 0: the value itself.
    unsafe {
        assert_eq!(slots[0].resolve_final().as_int(), x);
        assert_eq!(slots[0].as_int_through_refs(), x);
    }
    for k in 1..=16 {
        let head = Value::indirect(&slots[k - 1]);
        unsafe {
            assert_eq!(head.resolve_final(), Value::int(x), "length {}", k);
            assert_eq!(head.as_int_through_refs(), x, "length {}", k);
            assert_eq!(head.trace_chain().unwrap().len(), k);
        }
    }
}

#[test]
fn test_resolve_one_advances_one_hop() {
    let slots = chain(42, 4);
    let head = Value::indirect(&slots[3]);
    unsafe {
        let one = head.resolve_one();
        assert_eq!(one, slots[3]);
        assert!(one.is_indirect());
        assert_eq!(one.as_address_of_referent(), &slots[2] as *const Value);
        let two = one.resolve_one();
        assert_eq!(two, slots[2]);
        assert_eq!(two.resolve_one().resolve_one(), Value::int(42));
    }
}

#[test]
fn test_non_indirect_is_returned_unchanged() {
    for v in [Value::nil(), Value::num(f64::NAN), Value::TRUE, Value::instance(3)] {
        unsafe {
            assert_eq!(v.resolve_final().raw_bits(), v.raw_bits());
        }
    }
}

#[test]
fn test_num_through_refs() {
    let target = Value::num(-0.0);
    let one = Value::indirect(&target);
    let head = Value::indirect(&one);
    unsafe {
        let d = head.as_num_through_refs();
        assert_eq!(d.to_bits(), (-0.0f64).to_bits());
    }
}

#[test]
fn test_referent_rewrite_is_seen() {
    let mut slot = Value::int(1);
    let p: *mut Value = &mut slot;
    let r = Value::indirect(p);
    unsafe {
        assert_eq!(r.as_int_through_refs(), 1);
        *p = Value::int(2);
        assert_eq!(r.as_int_through_refs(), 2);
    }
}

#[test]
fn test_two_slot_cycle() {
    let mut pair = [Value::nul(); 2];
    let base = pair.as_mut_ptr();
    unsafe {
        *base = Value::indirect(base.add(1));
        *base.add(1) = Value::indirect(base);
    }
    let head = Value::indirect(base);
    unsafe {
        match head.trace_chain() {
            Err(ValueError::Cycle { hops, .. }) => assert_eq!(hops, 2),
            other => panic!("expected a cycle, got {:?}", other),
        }
        assert_eq!(
            head.try_resolve_final(),
            Err(ValueError::ChainTooLong {
                limit: MAX_REF_HOPS
            })
        );
    }
}

#[test]
fn test_chain_past_limit_is_too_long() {
    let slots = chain(5, MAX_REF_HOPS + 1);
    let head = Value::indirect(&slots[MAX_REF_HOPS]);
    unsafe {
        assert_eq!(
            head.try_resolve_final(),
            Err(ValueError::ChainTooLong {
                limit: MAX_REF_HOPS
            })
        );
        assert_eq!(head.trace_chain().unwrap().len(), MAX_REF_HOPS + 1);
    }
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "indirect chain longer than")]
fn test_resolve_final_panics_past_limit_in_debug() {
    let slots = chain(5, MAX_REF_HOPS + 1);
    let head = Value::indirect(&slots[MAX_REF_HOPS]);
    unsafe {
        head.resolve_final();
    }
}

#[test]
fn test_null_in_middle_of_chain() {
    let broken = Value::indirect(std::ptr::null());
    let head = Value::indirect(&broken);
    unsafe {
        assert_eq!(
            head.try_resolve_final(),
            Err(ValueError::NullReferent { hops: 1 })
        );
    }
}
