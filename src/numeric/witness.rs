// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Deciding whether `x = a² + b³` for positive integers `a`, `b`.
//!
//! Two search orders are provided:
//!
//! - [`Strategy::SquaresOuter`] walks `a` upward and, for each `a`, walks `b`
//!   until the sum passes `x`. It costs `O(√x · ∛x)` and is only sensible as an
//!   existence check on small values.
//! - [`Strategy::CubesOuter`] walks `b` upward and solves for `a` with one
//!   integer square root per step. It costs `O(∛x)` and is what the search
//!   uses whenever a witness is needed.
//!
//! All products are formed in `u128`: `b³` alone approaches 2⁹⁶ before the
//! loops give up.

use std::fmt;

use super::isqrt;

/// A pair of positive integers with `a² + b³` equal to the tested value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Witness {
    pub a: u64,
    pub b: u64,
}

impl Witness {
    /// `a² + b³`, without overflow.
    pub fn value(self) -> u128 {
        square(self.a) + cube(self.b)
    }
}

impl fmt::Display for Witness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})^2 + ({})^3", self.a, self.b)
    }
}

/// Order in which the `(a, b)` plane is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Outer loop over `a`, inner loop over `b`.
    SquaresOuter,
    /// Outer loop over `b`, `a` recovered by integer square root.
    #[default]
    CubesOuter,
}

impl Strategy {
    /// First witness for `x` in this strategy's scan order, if any.
    pub fn find(self, x: u64) -> Option<Witness> {
        match self {
            Strategy::SquaresOuter => find_witness_by_squares(x),
            Strategy::CubesOuter => find_witness(x),
        }
    }
}

#[inline]
pub(crate) fn square(v: u64) -> u128 {
    let v = u128::from(v);
    v * v
}

#[inline]
pub(crate) fn cube(v: u64) -> u128 {
    let v = u128::from(v);
    v * v * v
}

/// Whether `x = a² + b³` has a positive solution, scanning over `a` first.
pub fn is_expressible(x: u64) -> bool {
    find_witness_by_squares(x).is_some()
}

fn find_witness_by_squares(x: u64) -> Option<Witness> {
    let target = u128::from(x);
    (1u64..)
        .take_while(|&a| square(a) < target)
        .find_map(|a| {
            let a2 = square(a);
            (1u64..)
                .map(|b| (b, a2 + cube(b)))
                .take_while(|&(_, sum)| sum <= target)
                .find(|&(_, sum)| sum == target)
                .map(|(b, _)| Witness { a, b })
        })
}

/// First witness for `x` in increasing `b`, or `None` once `b³ >= x`.
///
/// # Examples
///
/// ```
/// use quartic_search::numeric::{find_witness, Witness};
///
/// assert_eq!(find_witness(2), Some(Witness { a: 1, b: 1 }));
/// assert_eq!(find_witness(3), None);
/// ```
pub fn find_witness(x: u64) -> Option<Witness> {
    let target = u128::from(x);
    (1u64..)
        .map(|b| (b, cube(b)))
        .take_while(|&(_, b3)| b3 < target)
        .find_map(|(b, b3)| {
            // b3 < target <= u64::MAX, so the remainder fits and is positive.
            let a = isqrt((target - b3) as u64);
            (square(a) + b3 == target).then_some(Witness { a, b })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every value in `0..=limit` that is a sum of a positive square and cube.
    fn oracle(limit: u64) -> Vec<bool> {
        let mut seen = vec![false; limit as usize + 1];
        for a in 1..=limit {
            for b in 1..=limit {
                let v = square(a) + cube(b);
                if v > u128::from(limit) {
                    break;
                }
                seen[v as usize] = true;
            }
        }
        seen
    }

    #[test]
    fn test_smallest_values() {
        assert_eq!(find_witness(0), None);
        assert_eq!(find_witness(1), None);
        assert_eq!(find_witness(2), Some(Witness { a: 1, b: 1 }));
        assert_eq!(find_witness(3), None);
        assert_eq!(find_witness(5), Some(Witness { a: 2, b: 1 }));
        assert_eq!(find_witness(9), Some(Witness { a: 1, b: 2 }));
    }

    #[test]
    fn test_strategies_agree_with_oracle() {
        let limit = 3000;
        let expected = oracle(limit);
        for x in 0..=limit {
            let by_cubes = find_witness(x);
            let by_squares = Strategy::SquaresOuter.find(x);
            assert_eq!(by_cubes.is_some(), expected[x as usize], "cubes-outer on {}", x);
            assert_eq!(by_squares.is_some(), expected[x as usize], "squares-outer on {}", x);
            assert_eq!(is_expressible(x), expected[x as usize]);
            for w in by_cubes.into_iter().chain(by_squares) {
                assert!(w.a > 0 && w.b > 0);
                assert_eq!(w.value(), u128::from(x));
            }
        }
    }

    #[test]
    fn test_scan_order() {
        // 17 = 4^2 + 1^3 = 3^2 + 2^3.
        assert_eq!(Strategy::CubesOuter.find(17), Some(Witness { a: 4, b: 1 }));
        assert_eq!(Strategy::SquaresOuter.find(17), Some(Witness { a: 3, b: 2 }));
    }

    #[test]
    fn test_large_known_witnesses() {
        let cases = [
            (3_000_000_000u64, 2_000_000u64),
            (123_456_789, 1_234),
            (1, 2_642_245),
            (4_294_967_295, 1),
        ];
        for (a, b) in cases {
            let x = u64::try_from(square(a) + cube(b)).unwrap();
            let w = find_witness(x).expect("witness exists");
            assert_eq!(w.value(), u128::from(x), "x = {}", x);
        }
    }

    #[test]
    fn test_near_u64_max() {
        // Must terminate without overflow even though b^3 passes 2^64.
        let x = u64::MAX;
        if let Some(w) = find_witness(x) {
            assert_eq!(w.value(), u128::from(x));
        }
    }

    #[test]
    fn test_pure() {
        for x in [2, 3, 100, 1_000_003, u64::MAX - 12] {
            assert_eq!(find_witness(x), find_witness(x));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Witness { a: 3, b: 2 }.to_string(), "(3)^2 + (2)^3");
    }
}
