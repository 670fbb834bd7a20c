// Defaults for the diagnostics driver and the inspector

/// Iterations per conversion loop in `tval perf` when none is given
pub const DEFAULT_PERF_ITERATIONS: u64 = 10_000_000;

/// Search loops run `iterations / SEARCH_DIVISOR` times; each one does a
/// full binary search instead of a single conversion
pub const SEARCH_DIVISOR: u64 = 20;

/// Event poll timeout for the inspector, in milliseconds
pub const TICK_RATE_MS: u64 = 50;
