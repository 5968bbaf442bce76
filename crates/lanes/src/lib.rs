//! Lanes: scalar vs SIMD f64 vector addition with an aligned bump allocator.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Lanes sub-crates. For most users, adding `lanes` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use lanes::prelude::*;
//!
//! // Works-anywhere entry point: SIMD when the CPU supports it.
//! let l = [1.0, 2.0, 3.0, 4.0];
//! let r = [5.0, 6.0, 7.0, 8.0];
//! let mut out = [0.0; 4];
//! add_quad(&l, &r, &mut out);
//! assert_eq!(out, [6.0, 8.0, 10.0, 12.0]);
//!
//! // Strict-alignment variant: the operand type carries the guarantee
//! // the aligned 256-bit loads require.
//! let mut arena = BumpArena::new(BumpArena::DEFAULT_CAPACITY);
//! let quad = arena.alloc::<AlignedQuad>().unwrap();
//! *quad.as_mut_array() = [1.0, 2.0, 3.0, 4.0];
//! let left = *quad;
//! let mut sum = AlignedQuad::zeroed();
//! add_quad_avx2_aligned(&left, &AlignedQuad::new(r), &mut sum);
//! assert_eq!(sum.as_array(), &[6.0, 8.0, 10.0, 12.0]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lanes-core` | Aligned wrappers, width/alignment constants |
//! | [`arena`] | `lanes-arena` | [`BumpArena`], [`ArenaError`], `Zeroed` |
//! | [`kernels`] | `lanes-kernels` | The six addition kernels and dispatchers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Aligned wrappers and width/alignment constants (`lanes-core`).
pub use lanes_core as types;

/// Bump arena and its error type (`lanes-arena`).
pub use lanes_arena as arena;

/// Addition kernels, all widths and strategies (`lanes-kernels`).
pub use lanes_kernels as kernels;

pub use lanes_arena::{ArenaError, BumpArena};
pub use lanes_core::{AlignedPair, AlignedQuad};
pub use lanes_kernels::{add_pair, add_quad};

/// Commonly used items in one import.
pub mod prelude {
    pub use lanes_arena::{ArenaError, BumpArena, Zeroed};
    pub use lanes_core::{AlignedPair, AlignedQuad, AVX2_ALIGN, SSE2_ALIGN};
    pub use lanes_kernels::{
        add_pair, add_pair_scalar, add_pair_sse2, add_pair_sse2_aligned, add_quad,
        add_quad_avx2, add_quad_avx2_aligned, add_quad_scalar,
    };
}
