// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, precomputed).
//!
//! The membership table is computed once before the search starts and only
//! read afterwards. Lookups record membership, not witnesses; a hit is
//! resolved to `(a, b)` by [`crate::numeric::find_witness`].

pub mod table;

pub use table::MembershipTable;
