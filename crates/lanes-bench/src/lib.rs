//! Benchmark profiles and operand generation for the Lanes workspace.
//!
//! Provides deterministic operand builders shared by the criterion
//! benches and the `vector_add` example: fixed reference operands
//! matching the illustrative driver, and seeded random operands for
//! throughput runs.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use lanes_arena::{ArenaError, BumpArena};
use lanes_core::{AlignedPair, AlignedQuad};

/// Reference pair operands: `[1, 2] + [3, 4] = [4, 6]`.
pub const PAIR_LEFT: [f64; 2] = [1.0, 2.0];
/// Right-hand side of the reference pair addition.
pub const PAIR_RIGHT: [f64; 2] = [3.0, 4.0];

/// Reference quad operands: `[1, 2, 3, 4] + [5, 6, 7, 8] = [6, 8, 10, 12]`.
pub const QUAD_LEFT: [f64; 4] = [1.0, 2.0, 3.0, 4.0];
/// Right-hand side of the reference quad addition.
pub const QUAD_RIGHT: [f64; 4] = [5.0, 6.0, 7.0, 8.0];

/// Generate a deterministic pair of 2-lane operands from a seed.
pub fn random_pair_operands(seed: u64) -> ([f64; 2], [f64; 2]) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (rng.random(), rng.random())
}

/// Generate a deterministic pair of 4-lane operands from a seed.
pub fn random_quad_operands(seed: u64) -> ([f64; 4], [f64; 4]) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (rng.random(), rng.random())
}

/// Allocate the reference quad operands from a fresh arena.
///
/// This is the pairing the aligned kernel variant exists for: both
/// operands come from 32-byte-aligned arena blocks rather than relying
/// on incidental stack alignment.
pub fn arena_quad_operands() -> Result<(AlignedQuad, AlignedQuad), ArenaError> {
    let mut arena = BumpArena::new(BumpArena::DEFAULT_CAPACITY);
    let left = {
        let q = arena.alloc::<AlignedQuad>()?;
        *q.as_mut_array() = QUAD_LEFT;
        *q
    };
    let right = {
        let q = arena.alloc::<AlignedQuad>()?;
        *q.as_mut_array() = QUAD_RIGHT;
        *q
    };
    Ok((left, right))
}

/// Aligned-wrapper versions of the reference pair operands.
pub fn aligned_pair_operands() -> (AlignedPair, AlignedPair) {
    (AlignedPair::new(PAIR_LEFT), AlignedPair::new(PAIR_RIGHT))
}
