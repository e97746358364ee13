// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable, owned by the search loop).

pub mod statistics;

/// Position of the search: the current `n`, the current `c` for that `n`, and
/// how many `n` have run out of `c` values so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchState {
    /// The `n` being searched (or about to be).
    pub n: u64,
    /// Last `c` tried for `n`; 0 before the first attempt.
    pub c: u16,
    /// Number of exhausted `n` seen so far.
    pub exceptions: u32,
}

impl SearchState {
    pub fn new(start: u64) -> Self {
        Self {
            n: start,
            c: 0,
            exceptions: 0,
        }
    }

    /// Move to the next `n`, resetting `c`. Returns `false` at `u64::MAX`.
    pub fn advance(&mut self) -> bool {
        match self.n.checked_add(1) {
            Some(next) => {
                self.n = next;
                self.c = 0;
                true
            }
            None => false,
        }
    }
}
