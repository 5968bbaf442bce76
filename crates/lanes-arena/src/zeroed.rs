//! Marker trait for types the arena may hand out by reference.
//!
//! The arena's backing buffer is zero-initialised at construction, so a
//! typed allocation is a reinterpretation of all-zero bytes. That is only
//! sound for types where the all-zero bit pattern is a valid value — which
//! is exactly what [`Zeroed`] asserts.

#![allow(unsafe_code)]

use lanes_core::{AlignedPair, AlignedQuad};

/// Types whose all-zero bit pattern is a valid, initialised value.
///
/// # Safety
///
/// Implementors must guarantee that a region of `size_of::<Self>()` zero
/// bytes, at any address satisfying `align_of::<Self>()`, is a valid
/// `Self`. The type must also be inhabited and have no padding whose
/// contents could be observed (plain `repr(C)` arrays and primitives
/// qualify; types containing references or `NonZero*` integers do not).
pub unsafe trait Zeroed {}

// SAFETY: all-zero bytes are valid for every primitive number type.
unsafe impl Zeroed for u8 {}
// SAFETY: see above.
unsafe impl Zeroed for u16 {}
// SAFETY: see above.
unsafe impl Zeroed for u32 {}
// SAFETY: see above.
unsafe impl Zeroed for u64 {}
// SAFETY: see above.
unsafe impl Zeroed for i8 {}
// SAFETY: see above.
unsafe impl Zeroed for i16 {}
// SAFETY: see above.
unsafe impl Zeroed for i32 {}
// SAFETY: see above.
unsafe impl Zeroed for i64 {}
// SAFETY: all-zero f32/f64 is positive zero, a valid value.
unsafe impl Zeroed for f32 {}
// SAFETY: see above.
unsafe impl Zeroed for f64 {}

// SAFETY: an array of Zeroed elements has no padding and every element is
// valid when zeroed.
unsafe impl<T: Zeroed, const N: usize> Zeroed for [T; N] {}

// SAFETY: repr(C, align(16)) newtype over [f64; 2]; the alignment padding
// at the type level adds no bytes (size == 16) and the payload is Zeroed.
unsafe impl Zeroed for AlignedPair {}

// SAFETY: repr(C, align(32)) newtype over [f64; 4]; size == 32, payload
// is Zeroed.
unsafe impl Zeroed for AlignedQuad {}
