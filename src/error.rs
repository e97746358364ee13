// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fatal conditions that stop a search.
//!
//! An `n` with no solution inside the search window is not an error; it is
//! reported through [`crate::engine::Outcome::Exhausted`].

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// The table would need more bits than this platform can address.
    #[error("membership table bound {bound} is too large for this platform")]
    TableTooLarge { bound: u64 },

    /// The allocator refused the table.
    #[error("could not allocate {bytes} bytes for membership table bound {bound}")]
    TableAllocation { bound: u64, bytes: usize },

    /// `n + c⁴` wrapped: the search has left the range `u64` can represent.
    #[error("n + c^4 overflows 64 bits at n={n}, c={c}")]
    TargetOverflow { n: u64, c: u16 },

    /// The table marked a value that has no witness.
    #[error("membership table marks {value}, but no a^2 + b^3 equals it")]
    InconsistentTable { value: u64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to write results: {0}")]
    Io(#[from] io::Error),
}
