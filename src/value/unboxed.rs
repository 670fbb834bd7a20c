//! Unpacked form of a [`Value`]
//!
//! [`Unboxed`] carries the same thirteen kinds as an ordinary Rust enum, so
//! code that wants to `match` on a value never sees the bit layout. Packing
//! goes through the same constructors as [`Value`], so the usual payload
//! limits apply.

use super::{Kind, Value};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Unboxed {
    Nul,
    NanMarker,
    Nil,
    Bool(bool),
    Int(i64),
    Num(f64),
    Instance(u64),
    Callable(*const ()),
    Opaque(*const ()),
    Bytes(*const u8),
    Sequence(*const ()),
    Record(*const ()),
    Indirect(*const Value),
}

impl Unboxed {
    pub fn kind(&self) -> Kind {
        match self {
            Unboxed::Nul => Kind::Nul,
            Unboxed::NanMarker => Kind::NanMarker,
            Unboxed::Nil => Kind::Nil,
            Unboxed::Bool(_) => Kind::Bool,
            Unboxed::Int(_) => Kind::Int,
            Unboxed::Num(_) => Kind::Num,
            Unboxed::Instance(_) => Kind::Instance,
            Unboxed::Callable(_) => Kind::Callable,
            Unboxed::Opaque(_) => Kind::Opaque,
            Unboxed::Bytes(_) => Kind::Bytes,
            Unboxed::Sequence(_) => Kind::Sequence,
            Unboxed::Record(_) => Kind::Record,
            Unboxed::Indirect(_) => Kind::Indirect,
        }
    }

    pub fn pack(self) -> Value {
        match self {
            Unboxed::Nul => Value::nul(),
            Unboxed::NanMarker => Value::nan_marker(),
            Unboxed::Nil => Value::nil(),
            Unboxed::Bool(b) => Value::boolean(b),
            Unboxed::Int(i) => Value::int(i),
            Unboxed::Num(d) => Value::num(d),
            Unboxed::Instance(u) => Value::instance(u),
            Unboxed::Callable(p) => Value::callable(p),
            Unboxed::Opaque(p) => Value::opaque(p),
            Unboxed::Bytes(p) => Value::bytes(p),
            Unboxed::Sequence(p) => Value::sequence(p),
            Unboxed::Record(p) => Value::record(p),
            Unboxed::Indirect(p) => Value::indirect(p),
        }
    }
}

impl Value {
    /// Decode into an [`Unboxed`]. Total: every value unpacks.
    pub fn unpack(self) -> Unboxed {
        match self.kind() {
            Kind::Nul => Unboxed::Nul,
            Kind::NanMarker => Unboxed::NanMarker,
            Kind::Nil => Unboxed::Nil,
            Kind::Bool => Unboxed::Bool(self.as_bool()),
            Kind::Int => Unboxed::Int(self.as_int()),
            Kind::Num => Unboxed::Num(self.as_num()),
            Kind::Instance => Unboxed::Instance(self.as_instance()),
            Kind::Callable => Unboxed::Callable(self.as_callable_ptr()),
            Kind::Opaque => Unboxed::Opaque(self.as_opaque_ptr()),
            Kind::Bytes => Unboxed::Bytes(self.as_bytes_ptr()),
            Kind::Sequence => Unboxed::Sequence(self.as_sequence_ptr()),
            Kind::Record => Unboxed::Record(self.as_record_ptr()),
            Kind::Indirect => Unboxed::Indirect(self.as_address_of_referent()),
        }
    }
}

impl From<Unboxed> for Value {
    fn from(u: Unboxed) -> Self {
        u.pack()
    }
}

impl From<Value> for Unboxed {
    fn from(v: Value) -> Self {
        v.unpack()
    }
}
