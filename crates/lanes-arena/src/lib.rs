//! Aligned bump allocation for the Lanes SIMD benchmark workspace.
//!
//! Provides [`BumpArena`], a fixed-capacity append-only allocator that
//! hands out sub-regions of a single owned byte buffer at caller-chosen
//! alignments. This crate is the only one in the workspace (along with
//! `lanes-kernels`) that may contain `unsafe` code.
//!
//! # Why this exists
//!
//! The aligned SIMD kernel variants require operand addresses that are
//! multiples of the vector register width (16 or 32 bytes). Default stack
//! and heap alignment does not guarantee that for plain `[f64; N]` data.
//! The arena produces buffers that mechanically satisfy the precondition
//! instead of leaving it to incidental layout.
//!
//! # Design
//!
//! The backing store is an owned, zero-initialised `Vec<u8>` plus an
//! integer cursor — no raw-pointer bookkeeping. Allocation only ever
//! advances the cursor; there is no free, reset, or reuse. Exhaustion is
//! the sole failure mode and leaves the arena state untouched.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod bump;
pub mod error;
pub mod zeroed;

pub use bump::BumpArena;
pub use error::ArenaError;
pub use zeroed::Zeroed;
