//! Value classification

use std::fmt;

/// The thirteen kinds a boxed value can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Nul,
    NanMarker,
    Nil,
    Bool,
    Int,
    Num,
    Instance,
    Callable,
    Opaque,
    Bytes,
    Sequence,
    Record,
    Indirect,
}

impl Kind {
    /// Every kind, in declaration order
    pub const ALL: [Kind; 13] = [
        Kind::Nul,
        Kind::NanMarker,
        Kind::Nil,
        Kind::Bool,
        Kind::Int,
        Kind::Num,
        Kind::Instance,
        Kind::Callable,
        Kind::Opaque,
        Kind::Bytes,
        Kind::Sequence,
        Kind::Record,
        Kind::Indirect,
    ];

    /// Stable diagnostic label
    pub fn name(self) -> &'static str {
        match self {
            Kind::Nul => "nul",
            Kind::NanMarker => "nan",
            Kind::Nil => "nil",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Num => "num",
            Kind::Instance => "instance",
            Kind::Callable => "callable",
            Kind::Opaque => "opaque",
            Kind::Bytes => "bytes",
            Kind::Sequence => "sequence",
            Kind::Record => "record",
            Kind::Indirect => "indirect",
        }
    }

    /// Position in [`Kind::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether values of this kind carry a non-owning address
    pub fn is_address(self) -> bool {
        matches!(
            self,
            Kind::Callable
                | Kind::Opaque
                | Kind::Bytes
                | Kind::Sequence
                | Kind::Record
                | Kind::Indirect
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
