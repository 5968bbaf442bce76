//! Two-lane (128-bit SSE2) addition kernels.

#![allow(unsafe_code)]

use lanes_core::AlignedPair;

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Add two 2-lane vectors one lane at a time.
///
/// The baseline every other pair variant must match bit-for-bit.
#[inline]
pub fn add_pair_scalar(l: &[f64; 2], r: &[f64; 2], out: &mut [f64; 2]) {
    out[0] = l[0] + r[0];
    out[1] = l[1] + r[1];
}

/// Add two 2-lane vectors with a single 128-bit SSE2 operation.
///
/// Uses unaligned loads and stores, so the operands may sit at any
/// address a `[f64; 2]` can legally occupy. Falls back to
/// [`add_pair_scalar`] when SSE2 is unavailable (non-x86 targets, or
/// 32-bit x86 CPUs without it).
#[inline]
pub fn add_pair_sse2(l: &[f64; 2], r: &[f64; 2], out: &mut [f64; 2]) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        if is_x86_feature_detected!("sse2") {
            // SAFETY: SSE2 support was just verified.
            unsafe { add_pair_sse2_unaligned(l, r, out) };
            return;
        }
    }
    add_pair_scalar(l, r, out);
}

/// Add two 2-lane vectors with aligned 128-bit SSE2 loads and stores.
///
/// The 16-byte address precondition of `_mm_load_pd` / `_mm_store_pd` is
/// guaranteed by the [`AlignedPair`] parameter type, so no runtime
/// address check is performed. Falls back to [`add_pair_scalar`] when
/// SSE2 is unavailable.
#[inline]
pub fn add_pair_sse2_aligned(l: &AlignedPair, r: &AlignedPair, out: &mut AlignedPair) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        if is_x86_feature_detected!("sse2") {
            // SAFETY: SSE2 support was just verified, and AlignedPair's
            // repr(align(16)) guarantees the 16-byte address requirement
            // of the aligned load/store forms.
            unsafe { add_pair_sse2_load_store(l, r, out) };
            return;
        }
    }
    add_pair_scalar(l.as_array(), r.as_array(), out.as_mut_array());
}

/// Runtime-dispatched pair addition: unaligned SSE2 when available,
/// scalar otherwise.
#[inline]
pub fn add_pair(l: &[f64; 2], r: &[f64; 2], out: &mut [f64; 2]) {
    add_pair_sse2(l, r, out);
}

/// # Safety
///
/// Caller must ensure the CPU supports SSE2.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[target_feature(enable = "sse2")]
unsafe fn add_pair_sse2_unaligned(l: &[f64; 2], r: &[f64; 2], out: &mut [f64; 2]) {
    _mm_storeu_pd(
        out.as_mut_ptr(),
        _mm_add_pd(_mm_loadu_pd(l.as_ptr()), _mm_loadu_pd(r.as_ptr())),
    );
}

/// # Safety
///
/// Caller must ensure the CPU supports SSE2. The 16-byte alignment the
/// aligned forms require is provided by the parameter types.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[target_feature(enable = "sse2")]
unsafe fn add_pair_sse2_load_store(l: &AlignedPair, r: &AlignedPair, out: &mut AlignedPair) {
    _mm_store_pd(
        out.as_mut_ptr(),
        _mm_add_pd(_mm_load_pd(l.as_ptr()), _mm_load_pd(r.as_ptr())),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_three(l: [f64; 2], r: [f64; 2]) -> ([f64; 2], [f64; 2], [f64; 2]) {
        let mut scalar = [0.0; 2];
        add_pair_scalar(&l, &r, &mut scalar);

        let mut unaligned = [0.0; 2];
        add_pair_sse2(&l, &r, &mut unaligned);

        let mut aligned = AlignedPair::zeroed();
        add_pair_sse2_aligned(&AlignedPair::new(l), &AlignedPair::new(r), &mut aligned);

        (scalar, unaligned, *aligned.as_array())
    }

    fn bits(v: [f64; 2]) -> [u64; 2] {
        [v[0].to_bits(), v[1].to_bits()]
    }

    #[test]
    fn known_values() {
        let (s, u, a) = all_three([1.0, 2.0], [3.0, 4.0]);
        assert_eq!(s, [4.0, 6.0]);
        assert_eq!(u, [4.0, 6.0]);
        assert_eq!(a, [4.0, 6.0]);
    }

    #[test]
    fn zero_vector_is_identity() {
        let l = [3.5, -7.25];
        let (s, u, a) = all_three(l, [0.0, 0.0]);
        assert_eq!(s, l);
        assert_eq!(u, l);
        assert_eq!(a, l);
    }

    #[test]
    fn nan_propagates_per_lane() {
        let (s, u, a) = all_three([f64::NAN, 1.0], [2.0, f64::NAN]);
        for out in [s, u, a] {
            assert!(out[0].is_nan());
            assert!(out[1].is_nan());
        }
    }

    #[test]
    fn infinities_follow_ieee_rules() {
        let (s, u, a) = all_three([f64::INFINITY, f64::NEG_INFINITY], [1.0, f64::INFINITY]);
        for out in [s, u, a] {
            assert_eq!(out[0], f64::INFINITY);
            assert!(out[1].is_nan()); // -inf + inf
        }
    }

    #[test]
    fn dispatch_matches_scalar() {
        let l = [0.1, -0.2];
        let r = [1e300, -1e-300];
        let mut scalar = [0.0; 2];
        let mut dispatched = [0.0; 2];
        add_pair_scalar(&l, &r, &mut scalar);
        add_pair(&l, &r, &mut dispatched);
        assert_eq!(bits(scalar), bits(dispatched));
    }

    mod proptests {
        use super::*;
        use proptest::num::f64 as pf64;
        use proptest::prelude::*;

        /// Everything except NaN. When both operands are NaN the hardware
        /// returns the *first* operand's payload, so commutativity is not
        /// bit-exact for NaN inputs (covered separately by the
        /// propagation test above).
        fn non_nan() -> impl Strategy<Value = f64> {
            pf64::POSITIVE
                | pf64::NEGATIVE
                | pf64::NORMAL
                | pf64::SUBNORMAL
                | pf64::ZERO
                | pf64::INFINITE
        }

        proptest! {
            #[test]
            fn strategies_are_bit_identical(
                l in proptest::array::uniform2(any::<f64>()),
                r in proptest::array::uniform2(any::<f64>()),
            ) {
                let (s, u, a) = all_three(l, r);
                prop_assert_eq!(bits(s), bits(u));
                prop_assert_eq!(bits(s), bits(a));
            }

            #[test]
            fn addition_commutes_per_lane(
                l in proptest::array::uniform2(non_nan()),
                r in proptest::array::uniform2(non_nan()),
            ) {
                let mut lr = [0.0; 2];
                let mut rl = [0.0; 2];
                add_pair(&l, &r, &mut lr);
                add_pair(&r, &l, &mut rl);
                prop_assert_eq!(bits(lr), bits(rl));
            }
        }
    }
}
