//! Bit layout of a boxed value
//!
//! This is the only module that looks at the bits of a word. Everything else
//! goes through [`Value`](super::Value).
//!
//! # Word Map
//!
//! A word `w` is split into sixteen slots of 2^47 words each (`slot = w >> 47`):
//!
//! ```text
//! slot  0        0x0000_0000_0000_0000  Nul | NanMarker | Nil | Bool  (bits 46..45 pick one)
//! slot  1        0x0000_8000_0000_0000  Int        47-bit two's complement
//! slot  2        0x0001_0000_0000_0000  Instance   47-bit unsigned
//! slots 3..=4    0x0001_8000_0000_0000  Callable   48-bit address
//! slots 5..=6    0x0002_8000_0000_0000  Opaque     48-bit address
//! slots 7..=8    0x0003_8000_0000_0000  Bytes      48-bit address
//! slots 9..=10   0x0004_8000_0000_0000  Sequence   48-bit address
//! slots 11..=12  0x0005_8000_0000_0000  Record     48-bit address
//! slots 13..=14  0x0006_8000_0000_0000  Indirect   48-bit address
//! w >= BIAS      0x0007_8000_0000_0000  Num        IEEE bits + BIAS (wrapping)
//! ```
//!
//! # Reserved NaNs
//!
//! Adding `BIAS` to a double rotates the top of the negative quiet NaN range,
//! `[0xFFF8_8000_0000_0000, 2^64)`, onto the tagged slots. No arithmetic on
//! non-NaN operands produces those patterns (both canonical NaNs sit below the
//! floor), so [`encode_num`] folds them onto `0xFFF8_0000_0000_0000` keeping
//! the low 47 payload bits. Every other double survives bit for bit.

use super::kind::Kind;

/// Width of one slot in bits
const SLOT_SHIFT: u32 = 47;

/// Selector bits for the constants packed into slot 0
const SMALL_SHIFT: u32 = 45;

/// Index of the first slot holding numbers
const NUM_SLOT: u64 = 15;

/// Offset added to every IEEE bit pattern; also the first `Num` word
pub(crate) const BIAS: u64 = NUM_SLOT << SLOT_SHIFT;

/// Lowest double that would land in a tagged slot once biased
pub(crate) const RESERVED_NAN_FLOOR: u64 = BIAS.wrapping_neg();

/// Negative quiet NaN that reserved patterns are folded onto
pub(crate) const FOLDED_NAN: u64 = 0xFFF8_0000_0000_0000;

pub(crate) const PAYLOAD47: u64 = (1 << SLOT_SHIFT) - 1;
pub(crate) const PAYLOAD48: u64 = (1 << 48) - 1;

pub(crate) const NUL_WORD: u64 = 0;
pub(crate) const NAN_MARKER_WORD: u64 = 1 << SMALL_SHIFT;
pub(crate) const NIL_WORD: u64 = 2 << SMALL_SHIFT;
pub(crate) const BOOL_BASE: u64 = 3 << SMALL_SHIFT;

pub(crate) const INT_BASE: u64 = 1 << SLOT_SHIFT;
pub(crate) const INSTANCE_BASE: u64 = 2 << SLOT_SHIFT;
pub(crate) const CALLABLE_BASE: u64 = 3 << SLOT_SHIFT;
pub(crate) const OPAQUE_BASE: u64 = 5 << SLOT_SHIFT;
pub(crate) const BYTES_BASE: u64 = 7 << SLOT_SHIFT;
pub(crate) const SEQUENCE_BASE: u64 = 9 << SLOT_SHIFT;
pub(crate) const RECORD_BASE: u64 = 11 << SLOT_SHIFT;
pub(crate) const INDIRECT_BASE: u64 = 13 << SLOT_SHIFT;

/// Smallest and largest integers an `Int` word holds without truncation
pub const INT_MIN: i64 = -(1 << 46);
pub const INT_MAX: i64 = (1 << 46) - 1;

/// Largest handle an `Instance` word holds without truncation
pub const INSTANCE_MAX: u64 = PAYLOAD47;

/// Largest address a pointer-bearing word holds without truncation
pub const ADDRESS_MAX: u64 = PAYLOAD48;

const SLOT_KINDS: [Kind; 16] = [
    Kind::Nul, // resolved through SMALL_KINDS
    Kind::Int,
    Kind::Instance,
    Kind::Callable,
    Kind::Callable,
    Kind::Opaque,
    Kind::Opaque,
    Kind::Bytes,
    Kind::Bytes,
    Kind::Sequence,
    Kind::Sequence,
    Kind::Record,
    Kind::Record,
    Kind::Indirect,
    Kind::Indirect,
    Kind::Num,
];

const SMALL_KINDS: [Kind; 4] = [Kind::Nul, Kind::NanMarker, Kind::Nil, Kind::Bool];

/// Classify any word. Total over `u64`.
#[inline(always)]
pub(crate) fn classify(w: u64) -> Kind {
    let slot = (w >> SLOT_SHIFT).min(NUM_SLOT);
    if slot == 0 {
        SMALL_KINDS[(w >> SMALL_SHIFT) as usize]
    } else {
        SLOT_KINDS[slot as usize]
    }
}

/// Slot index of a word, `15` for every number
#[inline(always)]
pub(crate) fn slot(w: u64) -> u64 {
    (w >> SLOT_SHIFT).min(NUM_SLOT)
}

/// Base word of the slot range `kind` lives in
pub(crate) fn base_of(kind: Kind) -> u64 {
    match kind {
        Kind::Nul => NUL_WORD,
        Kind::NanMarker => NAN_MARKER_WORD,
        Kind::Nil => NIL_WORD,
        Kind::Bool => BOOL_BASE,
        Kind::Int => INT_BASE,
        Kind::Num => BIAS,
        Kind::Instance => INSTANCE_BASE,
        Kind::Callable => CALLABLE_BASE,
        Kind::Opaque => OPAQUE_BASE,
        Kind::Bytes => BYTES_BASE,
        Kind::Sequence => SEQUENCE_BASE,
        Kind::Record => RECORD_BASE,
        Kind::Indirect => INDIRECT_BASE,
    }
}

/// Payload bits of a word relative to its kind's base
pub(crate) fn payload(w: u64) -> u64 {
    w.wrapping_sub(base_of(classify(w)))
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

#[inline(always)]
pub(crate) fn small_is(w: u64, selector: u64) -> bool {
    w >> SMALL_SHIFT == selector
}

#[inline(always)]
pub(crate) fn slot_is(w: u64, slot: u64) -> bool {
    w >> SLOT_SHIFT == slot
}

/// True when `w` lies in the two-slot address range starting at `base`
#[inline(always)]
pub(crate) fn in_address_range(w: u64, base: u64) -> bool {
    w.wrapping_sub(base) <= PAYLOAD48
}

#[inline(always)]
pub(crate) fn is_num(w: u64) -> bool {
    w >= BIAS
}

// ---------------------------------------------------------------------------
// Encoding / decoding
// ---------------------------------------------------------------------------

#[inline(always)]
pub(crate) fn encode_num(bits: u64) -> u64 {
    let bits = if bits >= RESERVED_NAN_FLOOR {
        FOLDED_NAN | (bits & PAYLOAD47)
    } else {
        bits
    };
    bits.wrapping_add(BIAS)
}

#[inline(always)]
pub(crate) fn decode_num(w: u64) -> u64 {
    w.wrapping_sub(BIAS)
}

#[inline(always)]
pub(crate) fn encode_int(i: i64) -> u64 {
    INT_BASE | (i as u64 & PAYLOAD47)
}

#[inline(always)]
pub(crate) fn decode_int(w: u64) -> i64 {
    ((w << (64 - SLOT_SHIFT)) as i64) >> (64 - SLOT_SHIFT)
}

#[inline(always)]
pub(crate) fn encode_instance(u: u64) -> u64 {
    INSTANCE_BASE | (u & PAYLOAD47)
}

#[inline(always)]
pub(crate) fn decode_instance(w: u64) -> u64 {
    w & PAYLOAD47
}

#[inline(always)]
pub(crate) fn encode_bool(b: bool) -> u64 {
    BOOL_BASE | b as u64
}

#[inline(always)]
pub(crate) fn decode_bool(w: u64) -> bool {
    w & 1 != 0
}

#[inline(always)]
pub(crate) fn encode_address(base: u64, addr: u64) -> u64 {
    base + (addr & PAYLOAD48)
}

#[inline(always)]
pub(crate) fn decode_address(w: u64, base: u64) -> u64 {
    w.wrapping_sub(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLOT: u64 = 1 << SLOT_SHIFT;

    #[test]
    fn test_slot_edges_classify() {
        for (s, kind) in SLOT_KINDS.iter().enumerate().skip(1).take(14) {
            let first = (s as u64) * SLOT;
            let last = first + SLOT - 1;
            assert_eq!(classify(first), *kind, "first word of slot {}", s);
            assert_eq!(classify(last), *kind, "last word of slot {}", s);
        }
    }

    #[test]
    fn test_small_constants_split_slot_zero() {
        let quarter = 1u64 << SMALL_SHIFT;
        for (i, kind) in SMALL_KINDS.iter().enumerate() {
            let first = i as u64 * quarter;
            assert_eq!(classify(first), *kind);
            assert_eq!(classify(first + quarter - 1), *kind);
        }
        assert_eq!(classify(0), Kind::Nul);
    }

    #[test]
    fn test_everything_from_bias_up_is_num() {
        assert_eq!(classify(BIAS - 1), Kind::Indirect);
        assert_eq!(classify(BIAS), Kind::Num);
        assert_eq!(classify(u64::MAX), Kind::Num);
        assert_eq!(classify(1 << 63), Kind::Num);
    }

    #[test]
    fn test_predicates_agree_with_classify() {
        // Walk the whole word space in coarse strides plus the slot edges.
        let mut words: Vec<u64> = (0..=u16::MAX as u64).map(|hi| hi << 48 | 0x1234).collect();
        for s in 0..16u64 {
            words.push(s << SLOT_SHIFT);
            words.push((s << SLOT_SHIFT).wrapping_sub(1));
        }
        for w in words {
            let kind = classify(w);
            assert_eq!(kind == Kind::Nul, small_is(w, 0), "{:#x}", w);
            assert_eq!(kind == Kind::NanMarker, small_is(w, 1), "{:#x}", w);
            assert_eq!(kind == Kind::Nil, small_is(w, 2), "{:#x}", w);
            assert_eq!(kind == Kind::Bool, small_is(w, 3), "{:#x}", w);
            assert_eq!(kind == Kind::Int, slot_is(w, 1), "{:#x}", w);
            assert_eq!(kind == Kind::Instance, slot_is(w, 2), "{:#x}", w);
            assert_eq!(kind == Kind::Callable, in_address_range(w, CALLABLE_BASE));
            assert_eq!(kind == Kind::Opaque, in_address_range(w, OPAQUE_BASE));
            assert_eq!(kind == Kind::Bytes, in_address_range(w, BYTES_BASE));
            assert_eq!(kind == Kind::Sequence, in_address_range(w, SEQUENCE_BASE));
            assert_eq!(kind == Kind::Record, in_address_range(w, RECORD_BASE));
            assert_eq!(kind == Kind::Indirect, in_address_range(w, INDIRECT_BASE));
            assert_eq!(kind == Kind::Num, is_num(w), "{:#x}", w);
        }
    }

    #[test]
    fn test_reserved_nans_fold_below_floor() {
        assert_eq!(RESERVED_NAN_FLOOR, 0xFFF8_8000_0000_0000);
        for bits in [RESERVED_NAN_FLOOR, 0xFFF9_0000_0000_0000, 0xFFFF_FFFF_FFFF_FFFF] {
            let w = encode_num(bits);
            assert!(is_num(w));
            let back = decode_num(w);
            assert!(back < RESERVED_NAN_FLOOR);
            assert!(f64::from_bits(back).is_nan());
            assert!(f64::from_bits(back).is_sign_negative());
            assert_eq!(back & PAYLOAD47, bits & PAYLOAD47);
        }
    }

    #[test]
    fn test_unreserved_bits_round_trip() {
        for bits in [
            0,
            1,
            0x8000_0000_0000_0000,
            0x7FF0_0000_0000_0000,
            0xFFF0_0000_0000_0000,
            0x7FF8_0000_0000_0000,
            0xFFF8_0000_0000_0000,
            0x7FF4_0000_0000_0000,
            0x7FFF_FFFF_FFFF_FFFF,
            RESERVED_NAN_FLOOR - 1,
        ] {
            assert_eq!(decode_num(encode_num(bits)), bits, "{:#x}", bits);
        }
    }

    #[test]
    fn test_int_sign_extension() {
        for i in [0, 1, -1, INT_MIN, INT_MAX, 42, -42] {
            assert_eq!(decode_int(encode_int(i)), i);
            assert!(slot_is(encode_int(i), 1));
        }
        // One past the top wraps to the bottom without leaving the slot.
        assert_eq!(decode_int(encode_int(INT_MAX + 1)), INT_MIN);
    }

    #[test]
    fn test_payload_relative_to_base() {
        assert_eq!(payload(encode_address(RECORD_BASE, 0xdead_beef)), 0xdead_beef);
        assert_eq!(payload(encode_instance(7)), 7);
        assert_eq!(payload(NUL_WORD), 0);
    }
}
