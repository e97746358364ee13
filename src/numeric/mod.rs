// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integer arithmetic for the search.
//!
//! - `isqrt`: exact floor square root of a `u64`
//! - `witness`: deciding `x = a² + b³` and recovering `(a, b)`

pub mod isqrt;
pub mod witness;

pub use isqrt::isqrt;
pub use witness::{find_witness, is_expressible, Strategy, Witness};

/// Largest `c` whose fourth power fits in a `u64`.
pub const MAX_C: u16 = u16::MAX;

/// `c⁴`. Exact for every `u16`, since `65535⁴ < 2⁶⁴`.
pub const fn fourth_power(c: u16) -> u64 {
    let c2 = (c as u64) * (c as u64);
    c2 * c2
}
