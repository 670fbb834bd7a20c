//! Line-oriented value descriptions
//!
//! [`describe`] never dereferences anything. Following an indirect value is
//! left to [`describe_referent`], which needs the storage to be alive; the
//! catalog-aware [`describe_entry`] does that safely.

use super::catalog::{Catalog, Entry};
use crate::value::{layout, Unboxed, Value};

/// Kind index, name, stored word and decoded payload
pub fn describe(v: Value) -> Vec<String> {
    let mut lines = vec![
        format!("typ: {} : {}", v.kind().index(), v.name()),
        format!("hex: 0x{:016X}", v.raw_bits()),
    ];
    let payload = match v.unpack() {
        Unboxed::Nul => "val: nul".to_string(),
        Unboxed::NanMarker => "val: nan".to_string(),
        Unboxed::Nil => "val: nil".to_string(),
        Unboxed::Bool(b) => format!("log: {}", b),
        Unboxed::Int(i) => format!("int: {}", i),
        Unboxed::Num(d) => format!("num: {} (0x{:016X})", d, d.to_bits()),
        Unboxed::Instance(u) => format!("ins: {}", u),
        Unboxed::Callable(p) => format!("fun: {:p}", p),
        Unboxed::Opaque(p) => format!("ptr: {:p}", p),
        Unboxed::Bytes(p) => format!("str: {:p}", p),
        Unboxed::Sequence(p) => format!("arr: {:p}", p),
        Unboxed::Record(p) => format!("obj: {:p}", p),
        Unboxed::Indirect(p) => format!("ref: {:p}", p),
    };
    lines.push(payload);
    lines
}

/// Slot and payload split of the stored word
pub fn describe_layout(v: Value) -> Vec<String> {
    let w = v.raw_bits();
    let mut lines = vec![
        format!("slot: {}", layout::slot(w)),
        format!("payload: 0x{:X}", layout::payload(w)),
    ];
    if v.is_num() {
        lines.push(format!("ieee: 0x{:016X}", v.as_num().to_bits()));
    }
    lines
}

/// Kind and integer payload of every hop behind an indirect value
///
/// # Safety
///
/// Every non-null slot on the chain must be live and not concurrently written.
pub unsafe fn describe_referent(v: Value) -> Vec<String> {
    // SAFETY: forwarded from the caller.
    match unsafe { v.trace_chain() } {
        Ok(path) => path
            .iter()
            .enumerate()
            .map(|(hop, slot)| {
                // SAFETY: `trace_chain` only returns non-null slots, liveness
                // forwarded from the caller.
                let target = unsafe { **slot };
                match target.get_int() {
                    Some(i) => format!("hop {}: {} {}", hop + 1, target.name(), i),
                    None => format!("hop {}: {}", hop + 1, target.name()),
                }
            })
            .collect(),
        Err(e) => vec![format!("error: {}", e)],
    }
}

/// [`describe`] plus the referent chain when the entry's storage is owned by
/// `catalog`
pub fn describe_entry(catalog: &Catalog, entry: &Entry) -> Vec<String> {
    let mut lines = describe(entry.value);
    if let Some(exact) = entry.is_bit_exact() {
        lines.push(if exact {
            "bits: exact".to_string()
        } else {
            "bits: folded".to_string()
        });
    }
    if entry.value.is_address() && !entry.value.is_indirect() {
        let target = entry.value.address().map(|a| a as usize as *const u8);
        if let Some(byte) = target.and_then(|p| catalog.scratch_byte(p)) {
            lines.push(format!("byte: {:?}", byte as char));
        }
    }
    if entry.value.is_indirect() && catalog.trace(entry.value).is_some() {
        // SAFETY: `trace` succeeded, so every slot is owned by `catalog`.
        lines.extend(unsafe { describe_referent(entry.value) });
    }
    lines
}

/// Full `check` listing: a section per group, a block per entry
pub fn check_listing(catalog: &Catalog) -> Vec<String> {
    let mut lines = Vec::new();
    for group in super::catalog::Group::ALL {
        lines.push(String::new());
        lines.push(format!("** {} **", group));
        for entry in catalog.group(group) {
            lines.push(String::new());
            lines.push(format!("--- '{}'", entry.label));
            lines.extend(describe_entry(catalog, entry));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_int() {
        let lines = describe(Value::int(-10));
        assert_eq!(lines[0], "typ: 4 : int");
        assert_eq!(lines[2], "int: -10");
    }

    #[test]
    fn test_describe_zero_word() {
        let lines = describe(Value::default());
        assert_eq!(
            lines,
            vec!["typ: 0 : nul", "hex: 0x0000000000000000", "val: nul"]
        );
    }

    #[test]
    fn test_chained_entry_lists_every_hop() {
        let catalog = Catalog::new();
        let entry = catalog
            .entries()
            .iter()
            .find(|e| e.label == "&chained[2]")
            .unwrap();
        let lines = describe_entry(&catalog, entry);
        let hops: Vec<&String> = lines.iter().filter(|l| l.starts_with("hop")).collect();
        assert_eq!(hops.len(), 3);
        assert_eq!(hops[2], "hop 3: int 100");
    }

    #[test]
    fn test_pointer_entries_show_their_byte() {
        let catalog = Catalog::new();
        let lines_for = |label: &str| {
            let entry = catalog.entries().iter().find(|e| e.label == label).unwrap();
            describe_entry(&catalog, entry)
        };
        assert!(lines_for("record p2").contains(&"byte: 'b'".to_string()));
        assert!(lines_for("opaque p1").contains(&"byte: 'a'".to_string()));
        assert!(!lines_for("opaque null").iter().any(|l| l.starts_with("byte")));
        assert!(!lines_for("&slot[0]").iter().any(|l| l.starts_with("byte")));
    }

    #[test]
    fn test_listing_has_every_section() {
        let catalog = Catalog::new();
        let listing = check_listing(&catalog);
        for title in ["constants", "values", "numbers", "pointers", "references"] {
            assert!(listing.contains(&format!("** {} **", title)));
        }
        assert!(listing.iter().any(|l| l == "bits: folded"));
    }
}
