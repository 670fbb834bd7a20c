//! # Introduction
//!
//! tval packs any one of thirteen value kinds into a single 64-bit word
//! ("NaN boxing") and searches sorted runs of such words with a
//! caller-supplied ordering.
//!
//! ## Layers
//!
//! ```text
//! constructors → Value (u64) → predicates / accessors / resolution
//!                     │
//!                     └─ &[Value] + less(a, b) → search::bfind → index
//! ```
//!
//! 1. [`value`]: the codec: [`value::Value`], its [`value::Kind`]s, the
//!    [`value::Unboxed`] enum, indirect-chain resolution and
//!    [`value::ValueError`].
//! 2. [`search`]: lower-bound binary search with two equivalent strategies
//!    and a set of ready-made comparators.
//! 3. [`diag`]: sample catalog, per-value reports and benchmark loops behind
//!    the `tval check` and `tval perf` commands.
//! 4. [`ui`]: ratatui-based inspector; not part of the stable library API.
//!
//! ## Kinds
//!
//! `Nul` (the all-zero word), `NanMarker`, `Nil`, `Bool`, `Int` (47-bit),
//! `Num` (any double, bit for bit), `Instance` (47-bit unsigned), the
//! address-bearing `Callable`, `Opaque`, `Bytes`, `Sequence`, `Record`, and
//! `Indirect`, a reference to another value slot.

pub mod diag;
pub mod search;
pub mod ui;
pub mod value;
