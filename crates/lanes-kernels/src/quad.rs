//! Four-lane (256-bit AVX2) addition kernels.

#![allow(unsafe_code)]

use lanes_core::AlignedQuad;

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Add two 4-lane vectors one lane at a time.
///
/// The baseline every other quad variant must match bit-for-bit.
#[inline]
pub fn add_quad_scalar(l: &[f64; 4], r: &[f64; 4], out: &mut [f64; 4]) {
    out[0] = l[0] + r[0];
    out[1] = l[1] + r[1];
    out[2] = l[2] + r[2];
    out[3] = l[3] + r[3];
}

/// Add two 4-lane vectors with a single 256-bit AVX operation.
///
/// Uses unaligned loads and stores, so the operands may sit at any
/// address a `[f64; 4]` can legally occupy. Falls back to
/// [`add_quad_scalar`] when AVX is unavailable.
#[inline]
pub fn add_quad_avx2(l: &[f64; 4], r: &[f64; 4], out: &mut [f64; 4]) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        if is_x86_feature_detected!("avx") {
            // SAFETY: AVX support was just verified.
            unsafe { add_quad_avx2_unaligned(l, r, out) };
            return;
        }
    }
    add_quad_scalar(l, r, out);
}

/// Add two 4-lane vectors with aligned 256-bit AVX loads and stores.
///
/// The 32-byte address precondition of `_mm256_load_pd` /
/// `_mm256_store_pd` is guaranteed by the [`AlignedQuad`] parameter type,
/// so no runtime address check is performed. Buffers from
/// `lanes_arena::BumpArena` at 32-byte alignment satisfy the same
/// precondition for the raw-array route. Falls back to
/// [`add_quad_scalar`] when AVX is unavailable.
#[inline]
pub fn add_quad_avx2_aligned(l: &AlignedQuad, r: &AlignedQuad, out: &mut AlignedQuad) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        if is_x86_feature_detected!("avx") {
            // SAFETY: AVX support was just verified, and AlignedQuad's
            // repr(align(32)) guarantees the 32-byte address requirement
            // of the aligned load/store forms.
            unsafe { add_quad_avx2_load_store(l, r, out) };
            return;
        }
    }
    add_quad_scalar(l.as_array(), r.as_array(), out.as_mut_array());
}

/// Runtime-dispatched quad addition: unaligned AVX when available,
/// scalar otherwise.
#[inline]
pub fn add_quad(l: &[f64; 4], r: &[f64; 4], out: &mut [f64; 4]) {
    add_quad_avx2(l, r, out);
}

/// # Safety
///
/// Caller must ensure the CPU supports AVX.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[target_feature(enable = "avx")]
unsafe fn add_quad_avx2_unaligned(l: &[f64; 4], r: &[f64; 4], out: &mut [f64; 4]) {
    _mm256_storeu_pd(
        out.as_mut_ptr(),
        _mm256_add_pd(_mm256_loadu_pd(l.as_ptr()), _mm256_loadu_pd(r.as_ptr())),
    );
}

/// # Safety
///
/// Caller must ensure the CPU supports AVX. The 32-byte alignment the
/// aligned forms require is provided by the parameter types.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[target_feature(enable = "avx")]
unsafe fn add_quad_avx2_load_store(l: &AlignedQuad, r: &AlignedQuad, out: &mut AlignedQuad) {
    _mm256_store_pd(
        out.as_mut_ptr(),
        _mm256_add_pd(_mm256_load_pd(l.as_ptr()), _mm256_load_pd(r.as_ptr())),
    );
}
