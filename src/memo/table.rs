// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bit-per-integer record of which values are `a² + b³`.

use std::time::Instant;

use crate::error::SearchError;
use crate::numeric::witness::{cube, square};

/// Dense bitset over `0..=bound`, bit `v` set iff `v = a² + b³` for some
/// positive `a`, `b`.
///
/// Built once by [`MembershipTable::build`] and read-only afterwards.
///
/// # Examples
///
/// ```
/// use quartic_search::memo::MembershipTable;
///
/// let table = MembershipTable::build(100).unwrap();
/// assert!(table.contains(2));   // 1^2 + 1^3
/// assert!(!table.contains(3));
/// assert!(table.contains(100)); // 6^2 + 4^3
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipTable {
    bits: Vec<u8>,
    bound: u64,
}

impl MembershipTable {
    /// Allocate and populate the table for `0..=bound`.
    ///
    /// Fails if `bound + 1` bits cannot be addressed or allocated.
    pub fn build(bound: u64) -> Result<Self, SearchError> {
        let started = Instant::now();
        let mut table = Self::allocate(bound)?;
        log::info!(
            "[MembershipTable] Populating bound {} ({} bytes)...",
            bound,
            table.bits.len()
        );

        let limit = u128::from(bound);
        // a^2 < bound cannot lose a sum: a^2 >= bound gives a^2 + b^3 > bound.
        for a in (1u64..).take_while(|&a| square(a) < limit) {
            let a2 = square(a);
            for b in 1u64.. {
                let sum = a2 + cube(b);
                if sum > limit {
                    break;
                }
                table.insert(sum as u64);
            }
        }

        log::info!(
            "[MembershipTable] Complete in {:.2?} ({} of {} values expressible)",
            started.elapsed(),
            table.population(),
            u128::from(bound) + 1
        );
        Ok(table)
    }

    fn allocate(bound: u64) -> Result<Self, SearchError> {
        let bytes = usize::try_from(bound)
            .ok()
            .and_then(|b| b.checked_add(1))
            .map(|nbits| nbits.div_ceil(8))
            .ok_or(SearchError::TableTooLarge { bound })?;

        let mut bits = Vec::new();
        bits.try_reserve_exact(bytes)
            .map_err(|_| SearchError::TableAllocation { bound, bytes })?;
        bits.resize(bytes, 0);
        Ok(Self { bits, bound })
    }

    fn insert(&mut self, value: u64) {
        let value = value as usize;
        self.bits[value / 8] |= 1 << (value % 8);
    }

    /// Whether `value` is `a² + b³`.
    ///
    /// # Panics
    ///
    /// Panics if `value > self.bound()`; callers check the bound first.
    #[inline]
    pub fn contains(&self, value: u64) -> bool {
        assert!(
            value <= self.bound,
            "Table query {} out of bounds (bound {})",
            value,
            self.bound
        );
        let value = value as usize;
        (self.bits[value / 8] >> (value % 8)) & 1 != 0
    }

    /// Largest value the table covers.
    pub fn bound(&self) -> u64 {
        self.bound
    }

    /// Storage used by the bitset.
    pub fn size_bytes(&self) -> usize {
        self.bits.len()
    }

    /// Number of marked values.
    pub fn population(&self) -> u64 {
        self.bits.iter().map(|byte| u64::from(byte.count_ones())).sum()
    }

    /// Marked values in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        (0..=self.bound).filter(move |&v| self.contains(v))
    }
}
