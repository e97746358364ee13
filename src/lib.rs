// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for positive integer solutions of `n + c⁴ = a² + b³`.
//!
//! For each `n` in turn the search reports the first `c` (and a witness
//! `(a, b)`) that solves the equation, or records `n` as an *exception* when no
//! `c <= 65535` works. Nothing here proves an exception has no solution; it
//! only says none was found below 2⁶⁴.
//!
//! See <https://math.stackexchange.com/questions/5116900> for the question
//! that motivates the search.
//!
//! # Architecture
//!
//! The implementation uses the same two-tier memory model as our other
//! search programs:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! - [`memo::MembershipTable`]: one bit per integer up to a chosen bound,
//!   set when the integer is `a² + b³`. Built once before the search.
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! - [`state::SearchState`]: current `n`, current `c`, exceptions so far
//! - [`state::statistics::Statistics`]: counters for the run summary
//!
//! # Search Algorithm
//!
//! For each target `n + c⁴`:
//!
//! 1. **At or below the bound**: O(1) table lookup; a hit is resolved to a
//!    witness by scanning `b` and taking one integer square root per step.
//! 2. **Above the bound**: the same `O(∛x)` scan decides directly, so the table
//!    never has to cover all of `u64`.
//!
//! All intermediate products use `u128`; `n + c⁴` is overflow-checked in every
//! build profile.

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod memo;
pub mod numeric;
pub mod state;

// Re-export commonly used types
pub use config::SearchConfig;
pub use context::SearchContext;
pub use engine::{run_search, Outcome, Reporter, SearchEngine, Solution, Termination};
pub use error::SearchError;
