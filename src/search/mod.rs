//! Comparator-driven binary search over boxed values
//!
//! [`bfind`] returns the lower bound of `val` in a slice sorted under a
//! caller-supplied strict "less than": the number of elements `e` for which
//! `less(e, val)` holds. Equal runs resolve to their first element.
//!
//! Two window-narrowing strategies are provided. They make the same number of
//! comparisons up to one and always return the same index; which one is faster
//! depends on the comparator and the machine.
//!
//! - [`Strategy::Window`]: shrink a `[low, low + count)` window (the default)
//! - [`Strategy::Bisect`]: shrink a `[min, max)` window
//!
//! Ready-made comparators live in [`cmp`].

pub mod cmp;

use crate::value::Value;

/// Window-narrowing strategy for [`bfind_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Window,
    Bisect,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Window, Strategy::Bisect];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Window => "window",
            Strategy::Bisect => "bisect",
        }
    }
}

/// Lower bound of `val` in `seq` under `less`, using [`Strategy::Window`]
#[inline]
pub fn bfind<F>(seq: &[Value], val: Value, mut less: F) -> usize
where
    F: FnMut(Value, Value) -> bool,
{
    let mut low = 0;
    let mut count = seq.len();
    while count > 0 {
        let step = count >> 1;
        let mid = low + step;
        if less(seq[mid], val) {
            low = mid + 1;
            count -= step + 1;
        } else {
            count = step;
        }
    }
    low
}

/// Lower bound of `val` in `seq` under `less`, using [`Strategy::Bisect`]
#[inline]
pub fn bfind_bisect<F>(seq: &[Value], val: Value, mut less: F) -> usize
where
    F: FnMut(Value, Value) -> bool,
{
    let mut min = 0;
    let mut max = seq.len();
    while min < max {
        let mid = min + ((max - min) >> 1);
        if less(seq[mid], val) {
            min = mid + 1;
        } else {
            max = mid;
        }
    }
    min
}

/// Lower bound of `val` in `seq` under `less`, using `strategy`
pub fn bfind_with<F>(strategy: Strategy, seq: &[Value], val: Value, less: F) -> usize
where
    F: FnMut(Value, Value) -> bool,
{
    match strategy {
        Strategy::Window => bfind(seq, val, less),
        Strategy::Bisect => bfind_bisect(seq, val, less),
    }
}
