//! Alignment-carrying wrappers for fixed-width f64 vectors.
//!
//! The aligned kernel variants use load/store instructions that fault (or
//! silently misbehave) when the operand address is not a multiple of the
//! vector register width. Rather than checking addresses at runtime on the
//! hot path, those kernels accept [`AlignedPair`] / [`AlignedQuad`]
//! parameters: the `repr(align)` attribute makes the guarantee a property
//! of the type, so a misaligned call cannot be written in safe code.

use std::fmt;
use std::ops::{Index, IndexMut};

/// A 2-lane f64 vector whose storage is 16-byte aligned.
///
/// Matches the operand shape of a 128-bit (SSE2) register. Values of this
/// type are valid inputs to both the aligned and unaligned pair kernels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C, align(16))]
pub struct AlignedPair(pub [f64; 2]);

/// A 4-lane f64 vector whose storage is 32-byte aligned.
///
/// Matches the operand shape of a 256-bit (AVX2) register. Values of this
/// type are valid inputs to both the aligned and unaligned quad kernels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C, align(32))]
pub struct AlignedQuad(pub [f64; 4]);

impl AlignedPair {
    /// Wrap a 2-lane array in aligned storage.
    pub fn new(lanes: [f64; 2]) -> Self {
        Self(lanes)
    }

    /// An all-zero pair.
    pub fn zeroed() -> Self {
        Self([0.0; 2])
    }

    /// Borrow the lanes as a plain array.
    pub fn as_array(&self) -> &[f64; 2] {
        &self.0
    }

    /// Mutably borrow the lanes as a plain array.
    pub fn as_mut_array(&mut self) -> &mut [f64; 2] {
        &mut self.0
    }

    /// Pointer to lane 0. Guaranteed to be a multiple of 16.
    pub fn as_ptr(&self) -> *const f64 {
        self.0.as_ptr()
    }

    /// Mutable pointer to lane 0. Guaranteed to be a multiple of 16.
    pub fn as_mut_ptr(&mut self) -> *mut f64 {
        self.0.as_mut_ptr()
    }
}

impl AlignedQuad {
    /// Wrap a 4-lane array in aligned storage.
    pub fn new(lanes: [f64; 4]) -> Self {
        Self(lanes)
    }

    /// An all-zero quad.
    pub fn zeroed() -> Self {
        Self([0.0; 4])
    }

    /// Borrow the lanes as a plain array.
    pub fn as_array(&self) -> &[f64; 4] {
        &self.0
    }

    /// Mutably borrow the lanes as a plain array.
    pub fn as_mut_array(&mut self) -> &mut [f64; 4] {
        &mut self.0
    }

    /// Pointer to lane 0. Guaranteed to be a multiple of 32.
    pub fn as_ptr(&self) -> *const f64 {
        self.0.as_ptr()
    }

    /// Mutable pointer to lane 0. Guaranteed to be a multiple of 32.
    pub fn as_mut_ptr(&mut self) -> *mut f64 {
        self.0.as_mut_ptr()
    }
}

impl Default for AlignedPair {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl Default for AlignedQuad {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl From<[f64; 2]> for AlignedPair {
    fn from(lanes: [f64; 2]) -> Self {
        Self(lanes)
    }
}

impl From<[f64; 4]> for AlignedQuad {
    fn from(lanes: [f64; 4]) -> Self {
        Self(lanes)
    }
}

impl Index<usize> for AlignedPair {
    type Output = f64;

    fn index(&self, lane: usize) -> &f64 {
        &self.0[lane]
    }
}

impl IndexMut<usize> for AlignedPair {
    fn index_mut(&mut self, lane: usize) -> &mut f64 {
        &mut self.0[lane]
    }
}

impl Index<usize> for AlignedQuad {
    type Output = f64;

    fn index(&self, lane: usize) -> &f64 {
        &self.0[lane]
    }
}

impl IndexMut<usize> for AlignedQuad {
    fn index_mut(&mut self, lane: usize) -> &mut f64 {
        &mut self.0[lane]
    }
}

impl fmt::Display for AlignedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.0[0], self.0[1])
    }
}

impl fmt::Display for AlignedQuad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.0[0], self.0[1], self.0[2], self.0[3])
    }
}
