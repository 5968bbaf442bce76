//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The arena cannot satisfy the request: after alignment padding there
    /// are fewer than `requested` bytes left before the end of the buffer.
    CapacityExceeded {
        /// Number of payload bytes requested (excluding alignment padding).
        requested: usize,
        /// Bytes remaining in the arena at the time of the request.
        remaining: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes, {remaining} bytes remaining"
                )
            }
        }
    }
}

impl Error for ArenaError {}
