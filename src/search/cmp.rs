//! Strict "less than" comparators for [`bfind`](super::bfind)
//!
//! The plain comparators expect every element to already be of the right kind.
//! The `_through_refs` ones resolve indirect chains first and are `unsafe` for
//! the same reason [`Value::resolve_final`] is; wrap them in a closure:
//!
//! ```
//! use tval::search::{bfind, cmp};
//! use tval::value::Value;
//!
//! let data = [Value::num(1.0), Value::num(2.0)];
//! let refs = [Value::indirect(&data[0]), Value::indirect(&data[1])];
//! // SAFETY: `data` outlives the search and is not written during it.
//! let at = bfind(&refs, Value::num(2.0), |a, b| unsafe {
//!     cmp::num_less_through_refs(a, b)
//! });
//! assert_eq!(at, 1);
//! ```

use crate::value::Value;

/// Numeric order on `Num` values
#[inline(always)]
pub fn num_less(a: Value, b: Value) -> bool {
    a.as_num() < b.as_num()
}

/// Integer order on `Int` values
#[inline(always)]
pub fn int_less(a: Value, b: Value) -> bool {
    a.as_int() < b.as_int()
}

/// Numeric order after resolving both sides
///
/// # Safety
///
/// Same as [`Value::resolve_final`] for both arguments.
#[inline(always)]
pub unsafe fn num_less_through_refs(a: Value, b: Value) -> bool {
    unsafe { a.as_num_through_refs() < b.as_num_through_refs() }
}

/// Integer order after resolving both sides
///
/// # Safety
///
/// Same as [`Value::resolve_final`] for both arguments.
#[inline(always)]
pub unsafe fn int_less_through_refs(a: Value, b: Value) -> bool {
    unsafe { a.as_int_through_refs() < b.as_int_through_refs() }
}
