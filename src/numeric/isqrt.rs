// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact integer square root.

/// Floor of the square root of `n`.
///
/// Seeded from the `f64` square root, then refined by Newton iteration until
/// `r <= n / r` and `r + 1 > n / (r + 1)`, i.e. `r² <= n < (r + 1)²`. The
/// refinement is what makes the result exact: the seed alone is wrong for
/// many `n` above 2⁵³.
///
/// # Examples
///
/// ```
/// use quartic_search::numeric::isqrt;
///
/// assert_eq!(isqrt(0), 0);
/// assert_eq!(isqrt(24), 4);
/// assert_eq!(isqrt(25), 5);
/// assert_eq!(isqrt(u64::MAX), u32::MAX as u64);
/// ```
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    // Never zero for n >= 2, and at most 2^32 even after f64 rounding.
    let mut r = ((n as f64).sqrt() as u64).max(1);
    while !(r <= n / r && r + 1 > n / (r + 1)) {
        r = (r + n / r) / 2;
    }
    r
}
