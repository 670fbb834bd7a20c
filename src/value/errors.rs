//! Error type for checked value operations
//!
//! The fast accessors on [`Value`](super::Value) treat a kind mismatch as a
//! programmer error and only check it in debug builds. The checked forms
//! (`expect_*`, `try_*`, [`Value::try_resolve_final`], [`Value::trace_chain`])
//! report the same conditions as a [`ValueError`] instead.
//!
//! [`Value::try_resolve_final`]: super::Value::try_resolve_final
//! [`Value::trace_chain`]: super::Value::trace_chain

use super::kind::Kind;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Accessor used on a value of another kind
    KindMismatch { expected: Kind, found: Kind },

    /// Integer outside the range an `Int` word holds
    IntOutOfRange { value: i64 },

    /// Handle outside the range an `Instance` word holds
    InstanceOutOfRange { value: u64 },

    /// Address wider than a pointer-bearing word holds
    AddressOutOfRange { kind: Kind, address: u64 },

    /// Address given for a kind that carries no address
    NotAnAddress { kind: Kind },

    /// Indirect value pointing at address zero
    NullReferent { hops: usize },

    /// Chain still indirect after the hop limit
    ChainTooLong { limit: usize },

    /// Chain revisits a slot it already went through
    Cycle { slot: u64, hops: usize },
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::KindMismatch { expected, found } => {
                write!(f, "Expected {}, got {}", expected, found)
            }
            ValueError::IntOutOfRange { value } => {
                write!(
                    f,
                    "Integer {} does not fit the {}..={} payload",
                    value,
                    super::layout::INT_MIN,
                    super::layout::INT_MAX
                )
            }
            ValueError::InstanceOutOfRange { value } => {
                write!(
                    f,
                    "Instance {} does not fit the 0..={} payload",
                    value,
                    super::layout::INSTANCE_MAX
                )
            }
            ValueError::AddressOutOfRange { kind, address } => {
                write!(f, "Address 0x{:x} too wide for a {} value", address, kind)
            }
            ValueError::NotAnAddress { kind } => {
                write!(f, "{} values do not carry an address", kind)
            }
            ValueError::NullReferent { hops } => {
                write!(f, "Null indirect referent after {} hop(s)", hops)
            }
            ValueError::ChainTooLong { limit } => {
                write!(f, "Indirect chain longer than {} hops", limit)
            }
            ValueError::Cycle { slot, hops } => {
                write!(
                    f,
                    "Indirect chain cycles back to slot 0x{:x} after {} hop(s)",
                    slot, hops
                )
            }
        }
    }
}

impl std::error::Error for ValueError {}
