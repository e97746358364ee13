// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext owns everything a run touches:
//! - Tier 1 (MEMO): the membership table, built once and then read-only
//! - Tier 2 (DYNAMIC): the search position and the statistics counters
//!
//! The table is released when the context is dropped, after the last query.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::memo::MembershipTable;
use crate::state::statistics::Statistics;
use crate::state::SearchState;

/// Search context combining MEMO and DYNAMIC state.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     table: MembershipTable,    // Tier 1: immutable after build
///     state: SearchState,        // Tier 2: (n, c, exceptions)
///     statistics: Statistics,    // Tier 2: counters
/// }
/// ```
#[derive(Debug)]
pub struct SearchContext {
    /// Membership table (Tier 1)
    pub table: MembershipTable,
    /// Current search position (Tier 2)
    pub state: SearchState,
    /// Counters (Tier 2)
    pub statistics: Statistics,
}

impl SearchContext {
    /// Build the membership table for `config` and position the search at
    /// `config.start`.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let table = MembershipTable::build(config.table_bound)?;
        Ok(Self::with_table(table, config.start))
    }

    /// Create a context around an already built table.
    pub fn with_table(table: MembershipTable, start: u64) -> Self {
        Self {
            table,
            state: SearchState::new(start),
            statistics: Statistics::new(),
        }
    }
}
