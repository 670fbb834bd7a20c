//! Resolving indirect values
//!
//! An [`Indirect`](super::Kind::Indirect) value holds the address of another
//! value slot, which may hold another `Indirect`. Resolution reads through
//! those addresses, so every reader here is `unsafe`: the caller guarantees
//! the slots are alive and are not being written while they are read.
//!
//! [`Value::resolve_final`] stops after [`MAX_REF_HOPS`] hops. A longer (or
//! cyclic) chain is a contract violation: debug builds panic, release builds
//! hand back the indirect value reached at the limit. [`Value::trace_chain`]
//! and [`Value::try_resolve_final`] report the same problems as errors.

use super::{Value, ValueError};
use rustc_hash::FxHashSet;

/// Longest chain [`Value::resolve_final`] follows
pub const MAX_REF_HOPS: usize = 64;

impl Value {
    /// Value stored in the referenced slot, one hop only.
    ///
    /// # Safety
    ///
    /// `self` must be `Indirect`, and its slot must be non-null, live, and
    /// not concurrently written.
    #[inline(always)]
    pub unsafe fn resolve_one(self) -> Value {
        let slot = self.as_address_of_referent();
        debug_assert!(!slot.is_null(), "resolve_one() on a null referent");
        // SAFETY: liveness and exclusivity are the caller's obligation.
        unsafe { *slot }
    }

    /// Follow indirect values until a non-indirect one. Returns `self` when it
    /// is not indirect.
    ///
    /// # Safety
    ///
    /// Every slot on the chain must be non-null, live, and not concurrently
    /// written, and the chain must end within [`MAX_REF_HOPS`] hops.
    #[inline]
    pub unsafe fn resolve_final(self) -> Value {
        let mut v = self;
        for _ in 0..MAX_REF_HOPS {
            if !v.is_indirect() {
                return v;
            }
            // SAFETY: forwarded from the caller.
            v = unsafe { v.resolve_one() };
        }
        debug_assert!(
            !v.is_indirect(),
            "indirect chain longer than {} hops",
            MAX_REF_HOPS
        );
        v
    }

    /// Like [`Value::resolve_final`], but null referents and over-long chains
    /// are errors instead of contract violations.
    ///
    /// # Safety
    ///
    /// Every non-null slot on the chain must be live and not concurrently
    /// written.
    pub unsafe fn try_resolve_final(self) -> Result<Value, ValueError> {
        let mut v = self;
        for hops in 0..MAX_REF_HOPS {
            if !v.is_indirect() {
                return Ok(v);
            }
            let slot = v.as_address_of_referent();
            if slot.is_null() {
                return Err(ValueError::NullReferent { hops });
            }
            // SAFETY: non-null, liveness forwarded from the caller.
            v = unsafe { *slot };
        }
        if v.is_indirect() {
            Err(ValueError::ChainTooLong {
                limit: MAX_REF_HOPS,
            })
        } else {
            Ok(v)
        }
    }

    /// Every slot the chain passes through, in order. Empty when `self` is
    /// not indirect. Cycles are detected exactly, whatever their length.
    ///
    /// # Safety
    ///
    /// Every non-null slot on the chain must be live and not concurrently
    /// written.
    pub unsafe fn trace_chain(self) -> Result<Vec<*const Value>, ValueError> {
        let mut seen = FxHashSet::default();
        let mut path = Vec::new();
        let mut v = self;
        while v.is_indirect() {
            let slot = v.as_address_of_referent();
            if slot.is_null() {
                return Err(ValueError::NullReferent { hops: path.len() });
            }
            if !seen.insert(slot as usize) {
                return Err(ValueError::Cycle {
                    slot: slot as usize as u64,
                    hops: path.len(),
                });
            }
            path.push(slot);
            // SAFETY: non-null, liveness forwarded from the caller.
            v = unsafe { *slot };
        }
        Ok(path)
    }

    /// [`Value::resolve_final`] then [`Value::as_int`]
    ///
    /// # Safety
    ///
    /// Same as [`Value::resolve_final`].
    #[inline(always)]
    pub unsafe fn as_int_through_refs(self) -> i64 {
        unsafe { self.resolve_final() }.as_int()
    }

    /// [`Value::resolve_final`] then [`Value::as_num`]
    ///
    /// # Safety
    ///
    /// Same as [`Value::resolve_final`].
    #[inline(always)]
    pub unsafe fn as_num_through_refs(self) -> f64 {
        unsafe { self.resolve_final() }.as_num()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_hops_is_identity() {
        let v = Value::int(5);
        unsafe {
            assert_eq!(v.resolve_final(), v);
            assert_eq!(v.try_resolve_final(), Ok(v));
            assert!(v.trace_chain().unwrap().is_empty());
        }
    }

    #[test]
    fn test_null_referent_is_reported() {
        let v = Value::indirect(std::ptr::null());
        unsafe {
            assert_eq!(
                v.try_resolve_final(),
                Err(ValueError::NullReferent { hops: 0 })
            );
            assert_eq!(v.trace_chain(), Err(ValueError::NullReferent { hops: 0 }));
        }
    }

    #[test]
    fn test_self_cycle_is_caught() {
        let mut slot = Value::nul();
        let p: *mut Value = &mut slot;
        unsafe { *p = Value::indirect(p) };
        let start = Value::indirect(p);
        unsafe {
            assert_eq!(
                start.trace_chain(),
                Err(ValueError::Cycle {
                    slot: p as usize as u64,
                    hops: 1,
                })
            );
            assert_eq!(
                start.try_resolve_final(),
                Err(ValueError::ChainTooLong {
                    limit: MAX_REF_HOPS
                })
            );
        }
    }

    #[test]
    fn test_longest_allowed_chain_resolves() {
        let mut slots = vec![Value::int(77); MAX_REF_HOPS];
        let base = slots.as_mut_ptr();
        for i in 1..MAX_REF_HOPS {
            unsafe { *base.add(i) = Value::indirect(base.add(i - 1)) };
        }
        let head = Value::indirect(&slots[MAX_REF_HOPS - 1]);
        unsafe {
            assert_eq!(head.as_int_through_refs(), 77);
            assert_eq!(head.trace_chain().unwrap().len(), MAX_REF_HOPS);
        }
    }
}
