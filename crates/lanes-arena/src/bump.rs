//! Fixed-capacity bump allocator with per-allocation alignment.
//!
//! [`BumpArena`] owns a contiguous zero-initialised byte buffer and an
//! integer cursor. Each allocation skips forward to the next address that
//! satisfies the requested alignment, claims the block, and advances the
//! cursor past it. Nothing is ever reclaimed: the arena is append-only
//! for its whole lifetime, which suits single-pass setup work (one
//! benchmark iteration's operands) and nothing longer-lived.

#![allow(unsafe_code)]

use crate::error::ArenaError;
use crate::zeroed::Zeroed;

/// A fixed-capacity, append-only allocator for aligned blocks.
///
/// Alignment is computed against real addresses (buffer base + offset),
/// not offsets alone, so a returned block's pointer is always a multiple
/// of the requested alignment regardless of where the backing buffer
/// itself landed.
///
/// Blocks are non-owning views into the arena's buffer: they borrow the
/// arena and cannot outlive it, which the lifetimes enforce.
///
/// # Failure semantics
///
/// Exhaustion is the only failure mode. A failed allocation returns
/// [`ArenaError::CapacityExceeded`] and leaves the cursor untouched, so a
/// subsequent smaller request can still succeed.
pub struct BumpArena {
    /// Backing storage. Zero-initialised at construction, never resized.
    data: Vec<u8>,
    /// Offset of the next free byte.
    cursor: usize,
}

impl BumpArena {
    /// Default capacity used by the benchmark profiles: enough for a few
    /// dozen quad operands with worst-case 32-byte alignment padding.
    pub const DEFAULT_CAPACITY: usize = 4096;

    /// Create an arena with the given capacity in bytes.
    ///
    /// The buffer is zero-initialised; typed allocations reinterpret the
    /// zero bytes as values (see [`Zeroed`]).
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity],
            cursor: 0,
        }
    }

    /// Allocate `size` bytes at an address that is a multiple of `align`.
    ///
    /// `align` must be a power of two (debug-asserted, not validated in
    /// release builds — caller responsibility, matching the contract of
    /// the underlying aligned load/store instructions this feeds).
    ///
    /// On success the returned slice starts at the first suitably aligned
    /// address at or after the cursor, and the cursor moves past the
    /// block. On failure nothing changes.
    pub fn alloc_bytes(&mut self, size: usize, align: usize) -> Result<&mut [u8], ArenaError> {
        debug_assert!(align.is_power_of_two(), "alignment must be a power of two");

        let exhausted = ArenaError::CapacityExceeded {
            requested: size,
            remaining: self.remaining(),
        };

        let base = self.data.as_ptr() as usize;
        // The aligned start position, as an offset into the buffer.
        // Checked arithmetic: a request near usize::MAX must surface as
        // exhaustion, never as a wrapped-around "valid" offset.
        let addr = base.checked_add(self.cursor).ok_or(exhausted.clone())?;
        let pad = addr.wrapping_neg() & (align - 1);
        let start = self.cursor.checked_add(pad).ok_or(exhausted.clone())?;
        let end = start.checked_add(size).ok_or(exhausted.clone())?;
        if end > self.data.len() {
            return Err(exhausted);
        }

        self.cursor = end;
        Ok(&mut self.data[start..end])
    }

    /// Allocate a `T` at its natural alignment.
    ///
    /// Equivalent to [`BumpArena::alloc_aligned`] with
    /// `align_of::<T>()`.
    pub fn alloc<T: Zeroed>(&mut self) -> Result<&mut T, ArenaError> {
        self.alloc_aligned(std::mem::align_of::<T>())
    }

    /// Allocate a `T` at a caller-specified alignment.
    ///
    /// `align` must be a power of two and at least `align_of::<T>()`
    /// (debug-asserted). Use this to place a plain `[f64; 4]` on a
    /// 32-byte boundary without going through
    /// [`AlignedQuad`](lanes_core::AlignedQuad).
    pub fn alloc_aligned<T: Zeroed>(&mut self, align: usize) -> Result<&mut T, ArenaError> {
        debug_assert!(
            align >= std::mem::align_of::<T>(),
            "requested alignment weaker than the type's natural alignment"
        );
        let bytes = self.alloc_bytes(std::mem::size_of::<T>(), align)?;
        let ptr = bytes.as_mut_ptr().cast::<T>();
        // SAFETY: `bytes` is exactly `size_of::<T>()` bytes at an address
        // that is a multiple of `align >= align_of::<T>()`. The block has
        // never been handed out before (the cursor is monotonic and blocks
        // are disjoint), so it still holds the construction-time zeroes,
        // which `T: Zeroed` guarantees form a valid value. The returned
        // reference borrows `self` mutably, so no aliasing access exists
        // while it lives.
        Ok(unsafe { &mut *ptr })
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Bytes consumed so far, including alignment padding.
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Bytes remaining from the cursor to the end of the buffer.
    ///
    /// Invariant: `used() + remaining() == capacity()`.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }
}
