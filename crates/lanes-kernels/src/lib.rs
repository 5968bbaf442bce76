//! Fixed-width f64 vector addition kernels.
//!
//! Each width (2 and 4 lanes) has three strategy variants that compute the
//! same per-lane IEEE-754 addition and differ only in execution path:
//!
//! | width | scalar              | unaligned SIMD  | aligned SIMD            |
//! |-------|---------------------|-----------------|-------------------------|
//! | 2     | [`add_pair_scalar`] | [`add_pair_sse2`] | [`add_pair_sse2_aligned`] |
//! | 4     | [`add_quad_scalar`] | [`add_quad_avx2`] | [`add_quad_avx2_aligned`] |
//!
//! The aligned variants take [`AlignedPair`](lanes_core::AlignedPair) /
//! [`AlignedQuad`](lanes_core::AlignedQuad) operands, so their address
//! precondition is discharged by the type system instead of a runtime
//! check on the hot path.
//!
//! [`add_pair`] and [`add_quad`] are runtime-dispatched entry points that
//! pick the unaligned SIMD path when the CPU supports it and fall back to
//! scalar otherwise. On non-x86 targets every variant is the scalar
//! implementation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod pair;
pub mod quad;

pub use pair::{add_pair, add_pair_scalar, add_pair_sse2, add_pair_sse2_aligned};
pub use quad::{add_quad, add_quad_scalar, add_quad_avx2, add_quad_avx2_aligned};
