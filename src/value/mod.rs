//! Boxed value representation
//!
//! This module defines [`Value`], a single 64-bit word that holds any one of
//! thirteen [`Kind`]s: absence markers, booleans, integers, IEEE-754 doubles,
//! instance handles, five flavours of non-owning address, and indirect
//! references to other value slots.
//!
//! - [`layout`]: the bit layout (the only code that touches raw bits)
//! - [`kind`]: the [`Kind`] classification
//! - [`unboxed`]: [`Unboxed`], the same thirteen kinds as an ordinary enum
//! - [`refs`]: resolving chains of [`Kind::Indirect`] values
//! - [`errors`]: [`ValueError`] for the checked API
//!
//! # Contract
//!
//! The `as_*` accessors are meant for hot loops where the kind is already
//! known. Calling one on the wrong kind is a programmer error: it panics in
//! debug builds and returns garbage (never UB) in release builds. Use
//! `get_*` or `expect_*` when the kind is not known up front.
//!
//! Values never own what they point to. Keeping a referent alive while a
//! value refers to it is the caller's job.

pub mod errors;
pub mod kind;
pub(crate) mod layout;
pub mod refs;
pub mod unboxed;

pub use errors::ValueError;
pub use kind::Kind;
pub use layout::{ADDRESS_MAX, INSTANCE_MAX, INT_MAX, INT_MIN};
pub use refs::MAX_REF_HOPS;
pub use unboxed::Unboxed;

use std::fmt;

/// A NaN-boxed value. The all-zero word is [`Value::NUL`].
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Value(u64);

impl Value {
    pub const NUL: Value = Value(layout::NUL_WORD);
    pub const NAN_MARKER: Value = Value(layout::NAN_MARKER_WORD);
    pub const NIL: Value = Value(layout::NIL_WORD);
    pub const TRUE: Value = Value(layout::BOOL_BASE | 1);
    pub const FALSE: Value = Value(layout::BOOL_BASE);

    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn nul() -> Self {
        Value::NUL
    }

    /// The "not a number" marker. Distinct from any `Num` NaN.
    pub fn nan_marker() -> Self {
        Value::NAN_MARKER
    }

    pub fn nil() -> Self {
        Value::NIL
    }

    pub fn boolean(b: bool) -> Self {
        Value(layout::encode_bool(b))
    }

    /// Boolean from C-style truthiness: anything nonzero is true
    pub fn truthy(x: i64) -> Self {
        Value::boolean(x != 0)
    }

    /// Integer in `INT_MIN..=INT_MAX`. Wider integers are a contract
    /// violation; release builds keep the low 47 bits.
    #[inline(always)]
    pub fn int(i: i64) -> Self {
        debug_assert!(
            (INT_MIN..=INT_MAX).contains(&i),
            "integer {} does not fit an Int payload",
            i
        );
        Value(layout::encode_int(i))
    }

    /// Integer truncated to the low 47 bits. Always an `Int`.
    pub fn int_wrapping(i: i64) -> Self {
        Value(layout::encode_int(i))
    }

    pub fn try_int(i: i64) -> Result<Self, ValueError> {
        if (INT_MIN..=INT_MAX).contains(&i) {
            Ok(Value(layout::encode_int(i)))
        } else {
            Err(ValueError::IntOutOfRange { value: i })
        }
    }

    /// Any double, NaNs included. Always a `Num`.
    #[inline(always)]
    pub fn num(d: f64) -> Self {
        Value(layout::encode_num(d.to_bits()))
    }

    /// Handle in `0..=INSTANCE_MAX`. Wider handles are a contract violation;
    /// release builds keep the low 47 bits.
    #[inline(always)]
    pub fn instance(u: u64) -> Self {
        debug_assert!(u <= INSTANCE_MAX, "instance {} does not fit", u);
        Value(layout::encode_instance(u))
    }

    /// Handle truncated to the low 47 bits. Always an `Instance`.
    pub fn instance_wrapping(u: u64) -> Self {
        Value(layout::encode_instance(u))
    }

    pub fn try_instance(u: u64) -> Result<Self, ValueError> {
        if u <= INSTANCE_MAX {
            Ok(Value(layout::encode_instance(u)))
        } else {
            Err(ValueError::InstanceOutOfRange { value: u })
        }
    }

    pub fn callable<T>(ptr: *const T) -> Self {
        Value::from_address(layout::CALLABLE_BASE, ptr as usize as u64)
    }

    pub fn opaque<T>(ptr: *const T) -> Self {
        Value::from_address(layout::OPAQUE_BASE, ptr as usize as u64)
    }

    pub fn bytes(ptr: *const u8) -> Self {
        Value::from_address(layout::BYTES_BASE, ptr as usize as u64)
    }

    pub fn sequence<T>(ptr: *const T) -> Self {
        Value::from_address(layout::SEQUENCE_BASE, ptr as usize as u64)
    }

    pub fn record<T>(ptr: *const T) -> Self {
        Value::from_address(layout::RECORD_BASE, ptr as usize as u64)
    }

    /// Reference to another value slot, which may itself hold an `Indirect`
    pub fn indirect(slot: *const Value) -> Self {
        Value::from_address(layout::INDIRECT_BASE, slot as usize as u64)
    }

    /// Address-bearing value of the given kind, checked
    pub fn try_address(kind: Kind, address: u64) -> Result<Self, ValueError> {
        if !kind.is_address() {
            return Err(ValueError::NotAnAddress { kind });
        }
        if address > ADDRESS_MAX {
            return Err(ValueError::AddressOutOfRange { kind, address });
        }
        Ok(Value(layout::encode_address(layout::base_of(kind), address)))
    }

    #[inline(always)]
    fn from_address(base: u64, address: u64) -> Self {
        debug_assert!(
            address <= ADDRESS_MAX,
            "address 0x{:x} does not fit a pointer payload",
            address
        );
        Value(layout::encode_address(base, address))
    }

    /// Decode any word. Every `u64` is a well-formed value.
    pub const fn from_raw_bits(bits: u64) -> Self {
        Value(bits)
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    #[inline(always)]
    pub fn kind(self) -> Kind {
        layout::classify(self.0)
    }

    pub fn name(self) -> &'static str {
        self.kind().name()
    }

    /// The stored word. For debugging and serialization only.
    pub fn raw_bits(self) -> u64 {
        self.0
    }

    #[inline(always)]
    pub fn is_nul(self) -> bool {
        layout::small_is(self.0, 0)
    }

    #[inline(always)]
    pub fn is_nan_marker(self) -> bool {
        layout::small_is(self.0, 1)
    }

    #[inline(always)]
    pub fn is_nil(self) -> bool {
        layout::small_is(self.0, 2)
    }

    #[inline(always)]
    pub fn is_bool(self) -> bool {
        layout::small_is(self.0, 3)
    }

    #[inline(always)]
    pub fn is_int(self) -> bool {
        layout::slot_is(self.0, 1)
    }

    #[inline(always)]
    pub fn is_num(self) -> bool {
        layout::is_num(self.0)
    }

    #[inline(always)]
    pub fn is_instance(self) -> bool {
        layout::slot_is(self.0, 2)
    }

    #[inline(always)]
    pub fn is_callable(self) -> bool {
        layout::in_address_range(self.0, layout::CALLABLE_BASE)
    }

    #[inline(always)]
    pub fn is_opaque(self) -> bool {
        layout::in_address_range(self.0, layout::OPAQUE_BASE)
    }

    #[inline(always)]
    pub fn is_bytes(self) -> bool {
        layout::in_address_range(self.0, layout::BYTES_BASE)
    }

    #[inline(always)]
    pub fn is_sequence(self) -> bool {
        layout::in_address_range(self.0, layout::SEQUENCE_BASE)
    }

    #[inline(always)]
    pub fn is_record(self) -> bool {
        layout::in_address_range(self.0, layout::RECORD_BASE)
    }

    #[inline(always)]
    pub fn is_indirect(self) -> bool {
        layout::in_address_range(self.0, layout::INDIRECT_BASE)
    }

    /// Whether this value carries a non-owning address of any kind
    pub fn is_address(self) -> bool {
        self.kind().is_address()
    }

    // =========================================================================
    // Fast accessors (kind checked in debug builds only)
    // =========================================================================

    #[inline(always)]
    pub fn as_bool(self) -> bool {
        debug_assert!(self.is_bool(), "as_bool() called on {} value", self.name());
        layout::decode_bool(self.0)
    }

    #[inline(always)]
    pub fn as_int(self) -> i64 {
        debug_assert!(self.is_int(), "as_int() called on {} value", self.name());
        layout::decode_int(self.0)
    }

    #[inline(always)]
    pub fn as_num(self) -> f64 {
        debug_assert!(self.is_num(), "as_num() called on {} value", self.name());
        f64::from_bits(layout::decode_num(self.0))
    }

    #[inline(always)]
    pub fn as_instance(self) -> u64 {
        debug_assert!(
            self.is_instance(),
            "as_instance() called on {} value",
            self.name()
        );
        layout::decode_instance(self.0)
    }

    #[inline(always)]
    pub fn as_callable_ptr(self) -> *const () {
        debug_assert!(
            self.is_callable(),
            "as_callable_ptr() called on {} value",
            self.name()
        );
        layout::decode_address(self.0, layout::CALLABLE_BASE) as usize as *const ()
    }

    #[inline(always)]
    pub fn as_opaque_ptr(self) -> *const () {
        debug_assert!(
            self.is_opaque(),
            "as_opaque_ptr() called on {} value",
            self.name()
        );
        layout::decode_address(self.0, layout::OPAQUE_BASE) as usize as *const ()
    }

    #[inline(always)]
    pub fn as_bytes_ptr(self) -> *const u8 {
        debug_assert!(
            self.is_bytes(),
            "as_bytes_ptr() called on {} value",
            self.name()
        );
        layout::decode_address(self.0, layout::BYTES_BASE) as usize as *const u8
    }

    #[inline(always)]
    pub fn as_sequence_ptr(self) -> *const () {
        debug_assert!(
            self.is_sequence(),
            "as_sequence_ptr() called on {} value",
            self.name()
        );
        layout::decode_address(self.0, layout::SEQUENCE_BASE) as usize as *const ()
    }

    #[inline(always)]
    pub fn as_record_ptr(self) -> *const () {
        debug_assert!(
            self.is_record(),
            "as_record_ptr() called on {} value",
            self.name()
        );
        layout::decode_address(self.0, layout::RECORD_BASE) as usize as *const ()
    }

    #[inline(always)]
    pub fn as_address_of_referent(self) -> *const Value {
        debug_assert!(
            self.is_indirect(),
            "as_address_of_referent() called on {} value",
            self.name()
        );
        layout::decode_address(self.0, layout::INDIRECT_BASE) as usize as *const Value
    }

    /// Address carried by any pointer-bearing kind, `None` otherwise
    pub fn address(self) -> Option<u64> {
        let kind = self.kind();
        kind.is_address()
            .then(|| layout::decode_address(self.0, layout::base_of(kind)))
    }

    // =========================================================================
    // Checked accessors
    // =========================================================================

    pub fn get_bool(self) -> Option<bool> {
        self.is_bool().then(|| layout::decode_bool(self.0))
    }

    pub fn get_int(self) -> Option<i64> {
        self.is_int().then(|| layout::decode_int(self.0))
    }

    pub fn get_num(self) -> Option<f64> {
        self.is_num()
            .then(|| f64::from_bits(layout::decode_num(self.0)))
    }

    pub fn get_instance(self) -> Option<u64> {
        self.is_instance().then(|| layout::decode_instance(self.0))
    }

    pub fn get_referent(self) -> Option<*const Value> {
        self.is_indirect().then(|| self.as_address_of_referent())
    }

    fn expect_kind(self, expected: Kind) -> Result<(), ValueError> {
        let found = self.kind();
        if found == expected {
            Ok(())
        } else {
            Err(ValueError::KindMismatch { expected, found })
        }
    }

    pub fn expect_bool(self) -> Result<bool, ValueError> {
        self.expect_kind(Kind::Bool)?;
        Ok(layout::decode_bool(self.0))
    }

    pub fn expect_int(self) -> Result<i64, ValueError> {
        self.expect_kind(Kind::Int)?;
        Ok(layout::decode_int(self.0))
    }

    pub fn expect_num(self) -> Result<f64, ValueError> {
        self.expect_kind(Kind::Num)?;
        Ok(f64::from_bits(layout::decode_num(self.0)))
    }

    pub fn expect_instance(self) -> Result<u64, ValueError> {
        self.expect_kind(Kind::Instance)?;
        Ok(layout::decode_instance(self.0))
    }

    /// Address of a value of exactly `kind`
    pub fn expect_address(self, kind: Kind) -> Result<u64, ValueError> {
        if !kind.is_address() {
            return Err(ValueError::NotAnAddress { kind });
        }
        self.expect_kind(kind)?;
        Ok(layout::decode_address(self.0, layout::base_of(kind)))
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::num(d)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::boolean(b)
    }
}

/// Truncating, like [`Value::int_wrapping`]: the result is always an `Int`.
/// Use [`Value::try_int`] to reject integers outside `INT_MIN..=INT_MAX`.
impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::int_wrapping(i)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({} 0x{:016X})", self, self.0)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unpack() {
            Unboxed::Nul | Unboxed::NanMarker | Unboxed::Nil => f.write_str(self.name()),
            Unboxed::Bool(b) => write!(f, "bool {}", b),
            Unboxed::Int(i) => write!(f, "int {}", i),
            Unboxed::Num(d) => write!(f, "num {}", d),
            Unboxed::Instance(u) => write!(f, "instance {}", u),
            Unboxed::Callable(p) | Unboxed::Opaque(p) | Unboxed::Sequence(p) | Unboxed::Record(p) => {
                write!(f, "{} {:p}", self.name(), p)
            }
            Unboxed::Bytes(p) => write!(f, "bytes {:p}", p),
            Unboxed::Indirect(p) => write!(f, "indirect {:p}", p),
        }
    }
}
