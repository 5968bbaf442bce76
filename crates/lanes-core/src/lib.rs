//! Core types for the Lanes SIMD benchmark workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the alignment-carrying vector wrappers and the width/alignment
//! constants shared by the kernels and the allocator.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod aligned;

pub use aligned::{AlignedPair, AlignedQuad};

/// Number of f64 lanes in a 128-bit (SSE2) vector register.
pub const PAIR_WIDTH: usize = 2;

/// Number of f64 lanes in a 256-bit (AVX2) vector register.
pub const QUAD_WIDTH: usize = 4;

/// Byte alignment required by aligned 128-bit loads and stores.
pub const SSE2_ALIGN: usize = 16;

/// Byte alignment required by aligned 256-bit loads and stores.
pub const AVX2_ALIGN: usize = 32;
