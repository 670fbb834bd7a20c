//! Sample values covering every kind
//!
//! A [`Catalog`] owns the bytes and value slots its pointer and indirect
//! entries refer to. The storage lives on the heap, so moving the catalog
//! keeps every address valid, and it is never written after construction, so
//! resolving any indirect entry while the catalog is alive is sound.

use crate::value::{Value, INSTANCE_MAX};
use std::fmt;

/// Section an entry is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Constants,
    Values,
    Numbers,
    Pointers,
    References,
}

impl Group {
    pub const ALL: [Group; 5] = [
        Group::Constants,
        Group::Values,
        Group::Numbers,
        Group::Pointers,
        Group::References,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Group::Constants => "constants",
            Group::Values => "values",
            Group::Numbers => "numbers",
            Group::Pointers => "pointers",
            Group::References => "references",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One labelled sample
#[derive(Debug, Clone)]
pub struct Entry {
    pub label: String,
    pub group: Group,
    pub value: Value,
    /// IEEE bits handed to `Value::num`, for number entries
    pub source_bits: Option<u64>,
}

impl Entry {
    fn new(group: Group, label: impl Into<String>, value: Value) -> Self {
        Entry {
            label: label.into(),
            group,
            value,
            source_bits: None,
        }
    }

    fn number(label: impl Into<String>, bits: u64) -> Self {
        Entry {
            label: label.into(),
            group: Group::Numbers,
            value: Value::num(f64::from_bits(bits)),
            source_bits: Some(bits),
        }
    }

    /// Whether a number entry decoded to exactly the bits it was built from
    pub fn is_bit_exact(&self) -> Option<bool> {
        self.source_bits
            .map(|bits| self.value.get_num().map(f64::to_bits) == Some(bits))
    }
}

/// Labelled sample values plus the storage they point into
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<Entry>,
    scratch: Vec<u8>,
    slots: Vec<Value>,
    chained: Vec<Value>,
}

impl Catalog {
    pub fn new() -> Self {
        let scratch = vec![b'a', b'b'];
        let slots: Vec<Value> = (100..104).map(Value::int).collect();

        // Same integers, but each slot after the first refers to the one before.
        let mut chained = slots.clone();
        let base = chained.as_mut_ptr();
        for i in 1..chained.len() {
            // SAFETY: `i` and `i - 1` are in bounds of `chained`.
            unsafe { *base.add(i) = Value::indirect(base.add(i - 1)) };
        }

        let mut entries = Vec::new();
        push_constants(&mut entries);
        push_values(&mut entries);
        push_numbers(&mut entries);

        let p1: *const u8 = &scratch[0];
        let p2: *const u8 = &scratch[1];
        let func = (Catalog::new as fn() -> Catalog) as *const ();
        let pointers = [
            ("callable null", Value::callable(std::ptr::null::<()>())),
            ("callable Catalog::new", Value::callable(func)),
            ("opaque null", Value::opaque(std::ptr::null::<()>())),
            ("opaque p1", Value::opaque(p1)),
            ("opaque p2", Value::opaque(p2)),
            ("bytes p1", Value::bytes(p1)),
            ("bytes p2", Value::bytes(p2)),
            ("sequence p1", Value::sequence(p1)),
            ("sequence p2", Value::sequence(p2)),
            ("record p1", Value::record(p1)),
            ("record p2", Value::record(p2)),
        ];
        for (label, value) in pointers {
            entries.push(Entry::new(Group::Pointers, label, value));
        }

        for (i, slot) in slots.iter().enumerate() {
            entries.push(Entry::new(
                Group::References,
                format!("&slot[{}]", i),
                Value::indirect(slot),
            ));
        }
        for (i, slot) in chained.iter().enumerate() {
            entries.push(Entry::new(
                Group::References,
                format!("&chained[{}]", i),
                Value::indirect(slot),
            ));
        }

        Catalog {
            entries,
            scratch,
            slots,
            chained,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Entries of one group, in catalog order
    pub fn group(&self, group: Group) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(move |e| e.group == group)
    }

    /// Follow an entry's value to its final referent.
    pub fn resolve(&self, value: Value) -> Option<Value> {
        if !self.owns_chain(value) {
            return None;
        }
        // SAFETY: every slot on the chain is owned by `self` and never written
        // after construction.
        unsafe { value.try_resolve_final().ok() }
    }

    /// Slots visited when following `value`, or `None` if the chain leaves
    /// this catalog's storage.
    pub fn trace(&self, value: Value) -> Option<Vec<*const Value>> {
        if !self.owns_chain(value) {
            return None;
        }
        // SAFETY: as in `resolve`.
        unsafe { value.trace_chain().ok() }
    }

    /// Whether every slot `value` leads through lives in this catalog
    fn owns_chain(&self, value: Value) -> bool {
        let mut v = value;
        for _ in 0..=self.slots.len() + self.chained.len() {
            let Some(slot) = v.get_referent() else {
                return true;
            };
            if !self.owns_slot(slot) {
                return false;
            }
            // SAFETY: `slot` is the address of one of our slots.
            v = unsafe { *slot };
        }
        false
    }

    /// Whether `slot` is the address of one of our slots. Pointers into the
    /// middle of a slot are refused.
    fn owns_slot(&self, slot: *const Value) -> bool {
        self.slots
            .iter()
            .chain(self.chained.iter())
            .any(|s| std::ptr::eq(s, slot))
    }

    /// Scratch byte `ptr` points at, or `None` if it points elsewhere
    pub fn scratch_byte(&self, ptr: *const u8) -> Option<u8> {
        self.scratch
            .iter()
            .find(|b| std::ptr::eq(*b, ptr))
            .copied()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn push_constants(entries: &mut Vec<Entry>) {
    let constants = [
        ("nul", Value::nul()),
        ("nan", Value::nan_marker()),
        ("nil", Value::nil()),
        ("true", Value::TRUE),
        ("false", Value::FALSE),
        ("zero word", Value::from_raw_bits(0)),
    ];
    for (label, value) in constants {
        entries.push(Entry::new(Group::Constants, label, value));
    }
}

fn push_values(entries: &mut Vec<Entry>) {
    for x in [0, 1, -1] {
        entries.push(Entry::new(
            Group::Values,
            format!("bool from {}", x),
            Value::truthy(x),
        ));
    }
    for x in [0, 10, -10] {
        entries.push(Entry::new(Group::Values, format!("int {}", x), Value::int(x)));
    }
    for p in [44, 45, 46] {
        let x = (1i64 << p) - 1;
        entries.push(Entry::new(
            Group::Values,
            format!("int 2^{}-1", p),
            Value::int(x),
        ));
        entries.push(Entry::new(
            Group::Values,
            format!("int -2^{}+1", p),
            Value::int(-x),
        ));
    }
    for x in [0, 10, INSTANCE_MAX] {
        entries.push(Entry::new(
            Group::Values,
            format!("instance {}", x),
            Value::instance(x),
        ));
    }
    entries.push(Entry::new(
        Group::Values,
        "instance -10 (wrapped)",
        Value::instance_wrapping((-10i64) as u64),
    ));
}

fn push_numbers(entries: &mut Vec<Entry>) {
    let nan = f64::NAN;
    let samples = [
        ("0.0", 0.0f64.to_bits()),
        ("-0.0", (-0.0f64).to_bits()),
        ("10.0", 10.0f64.to_bits()),
        ("-10.0", (-10.0f64).to_bits()),
        ("+inf", f64::INFINITY.to_bits()),
        ("-inf", f64::NEG_INFINITY.to_bits()),
        ("nan", nan.to_bits()),
        ("nan^2", (nan * nan).to_bits()),
        ("-nan", (-nan).to_bits()),
        ("quiet nan", 0x7FF8_0000_0000_0000),
        ("negative quiet nan", 0xFFF8_0000_0000_0000),
        ("signaling nan", 0x7FF4_0000_0000_0000),
        ("negative signaling nan", 0xFFF0_0000_0000_0001),
        ("reserved nan", 0xFFFF_0000_0000_0001),
    ];
    for (label, bits) in samples {
        entries.push(Entry::number(label, bits));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Kind;

    #[test]
    fn test_every_kind_is_covered() {
        let catalog = Catalog::new();
        for kind in Kind::ALL {
            assert!(
                catalog.entries().iter().any(|e| e.value.kind() == kind),
                "no {} sample",
                kind
            );
        }
    }

    #[test]
    fn test_numbers_are_bit_exact_except_reserved() {
        let catalog = Catalog::new();
        for entry in catalog.group(Group::Numbers) {
            assert!(entry.value.is_num(), "{}", entry.label);
            let exact = entry.is_bit_exact().unwrap();
            assert_eq!(exact, entry.label != "reserved nan", "{}", entry.label);
        }
    }

    #[test]
    fn test_references_resolve_after_move() {
        let catalog = Catalog::new();
        let moved = Box::new(catalog);
        for (i, entry) in moved.group(Group::References).enumerate() {
            let expected = if i < 4 { 100 + i as i64 } else { 100 };
            assert_eq!(
                moved.resolve(entry.value).and_then(Value::get_int),
                Some(expected),
                "{}",
                entry.label
            );
        }
    }

    #[test]
    fn test_chained_trace_lengths() {
        let catalog = Catalog::new();
        let lens: Vec<usize> = catalog
            .group(Group::References)
            .filter(|e| e.label.starts_with("&chained"))
            .map(|e| catalog.trace(e.value).unwrap().len())
            .collect();
        assert_eq!(lens, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_pointer_into_middle_of_slot_is_refused() {
        let catalog = Catalog::new();
        for entry in catalog.group(Group::References) {
            let slot = entry.value.as_address_of_referent();
            let shifted = Value::indirect((slot as usize + 1) as *const Value);
            assert_eq!(catalog.resolve(shifted), None, "{}", entry.label);
            assert_eq!(catalog.trace(shifted), None, "{}", entry.label);
            assert!(catalog.resolve(entry.value).is_some(), "{}", entry.label);
        }
    }

    #[test]
    fn test_scratch_bytes_behind_pointer_entries() {
        let catalog = Catalog::new();
        let byte_of = |label: &str| {
            let entry = catalog.entries().iter().find(|e| e.label == label).unwrap();
            catalog.scratch_byte(entry.value.as_bytes_ptr())
        };
        assert_eq!(byte_of("bytes p1"), Some(b'a'));
        assert_eq!(byte_of("bytes p2"), Some(b'b'));
        let outside = 0u8;
        assert_eq!(catalog.scratch_byte(&outside), None);
    }

    #[test]
    fn test_foreign_chain_is_refused() {
        let catalog = Catalog::new();
        let outside = Value::int(1);
        assert_eq!(catalog.resolve(Value::indirect(&outside)), None);
        assert_eq!(catalog.resolve(Value::int(3)), Some(Value::int(3)));
    }
}
