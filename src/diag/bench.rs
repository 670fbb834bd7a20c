//! Timed conversion and search loops
//!
//! Each loop checks what it computes, so an optimiser cannot drop the work and
//! a broken codec shows up as failures instead of a fast time.

use super::constants::SEARCH_DIVISOR;
use crate::search::{bfind_with, cmp, Strategy};
use crate::value::{Value, INSTANCE_MAX, INT_MAX};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Outcome of one timed loop
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub label: String,
    pub iterations: u64,
    pub elapsed: Duration,
    pub failures: u64,
}

impl BenchReport {
    /// Iterations per second, `None` when the loop was too fast to time
    pub fn rate(&self) -> Option<f64> {
        let secs = self.elapsed.as_secs_f64();
        (secs > 0.0).then(|| self.iterations as f64 / secs)
    }

    pub fn passed(&self) -> bool {
        self.failures == 0
    }
}

fn timed<F>(label: impl Into<String>, iterations: u64, mut body: F) -> BenchReport
where
    F: FnMut(u64) -> bool,
{
    let mut failures = 0;
    let start = Instant::now();
    for i in 0..iterations {
        if !body(black_box(i)) {
            failures += 1;
        }
    }
    BenchReport {
        label: label.into(),
        iterations,
        elapsed: start.elapsed(),
        failures,
    }
}

/// Round trips through every payload-carrying constructor
pub fn run_conversions(iterations: u64) -> Vec<BenchReport> {
    let mut reports = vec![
        timed("int->tv->int", iterations, |i| {
            let x = (i as i64) & INT_MAX;
            Value::int(x).as_int() == x
        }),
        timed("ins->tv->ins", iterations, |i| {
            let x = i & INSTANCE_MAX;
            Value::instance(x).as_instance() == x
        }),
        timed("num->tv->num", iterations, |i| {
            let x = i as f64;
            Value::num(x).as_num() == x
        }),
        timed("str->tv->str", iterations, |i| {
            let p = (i & 0xFFFF_FFFF) as usize as *const u8;
            Value::bytes(p).as_bytes_ptr() == p
        }),
    ];

    let slots = [
        Value::int(100),
        Value::int(101),
        Value::int(102),
        Value::int(103),
    ];
    let refs: Vec<Value> = slots.iter().map(|s| Value::indirect(s)).collect();
    reports.push(timed("ref->tv->int", iterations / 4, |i| {
        let k = (i & 3) as usize;
        // SAFETY: `slots` is alive and read-only for the whole loop.
        unsafe { refs[k].as_int_through_refs() == 100 + k as i64 }
    }));

    let mut chained = slots;
    for k in 1..chained.len() {
        let prev: *const Value = &chained[k - 1];
        chained[k] = Value::indirect(prev);
    }
    let chain_refs: Vec<Value> = chained.iter().map(|s| Value::indirect(s)).collect();
    reports.push(timed("ref->..->int", iterations / 4, |i| {
        // SAFETY: `chained` is alive and read-only for the whole loop.
        unsafe { chain_refs[(i & 3) as usize].as_int_through_refs() == 100 }
    }));

    reports
}

/// Lower-bound searches with every comparator and both strategies
pub fn run_searches(iterations: u64) -> Vec<BenchReport> {
    const EXPECTED: [usize; 8] = [0, 1, 1, 1, 4, 4, 4, 7];
    let keys = [5, 10, 10, 10, 20, 20, 20, 30];
    let nums: Vec<Value> = keys.iter().map(|&k| Value::num(k as f64)).collect();
    let ints: Vec<Value> = keys.iter().map(|&k| Value::int(k)).collect();
    let refs: Vec<Value> = nums.iter().map(|n| Value::indirect(n)).collect();
    let n = iterations / SEARCH_DIVISOR;

    let mut reports = Vec::new();
    for strategy in Strategy::ALL {
        let name = strategy.name();
        reports.push(timed(format!("bfind(num, {})", name), n, |i| {
            let k = (i & 7) as usize;
            bfind_with(strategy, &nums, nums[k], cmp::num_less) == EXPECTED[k]
        }));
        reports.push(timed(format!("bfind(int, {})", name), n, |i| {
            let k = (i & 7) as usize;
            bfind_with(strategy, &ints, ints[k], cmp::int_less) == EXPECTED[k]
        }));
        reports.push(timed(format!("bfind(ref, {})", name), n, |i| {
            let k = (i & 7) as usize;
            // SAFETY: `nums` is alive and read-only for the whole loop.
            let found = bfind_with(strategy, &refs, nums[k], |a, b| unsafe {
                cmp::num_less_through_refs(a, b)
            });
            found == EXPECTED[k]
        }));
    }

    const EXPECTED_ODD: [usize; 9] = [0, 1, 1, 1, 4, 5, 5, 5, 8];
    let odd: Vec<Value> = [5, 10, 10, 10, 20, 30, 30, 30, 40]
        .iter()
        .map(|&k| Value::int(k))
        .collect();
    reports.push(timed("bfind(int, 9 elements)", n, |i| {
        let k = (i % 9) as usize;
        bfind_with(Strategy::default(), &odd, odd[k], cmp::int_less) == EXPECTED_ODD[k]
    }));

    reports
}
