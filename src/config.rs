// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run parameters.

use crate::error::SearchError;
use crate::numeric::MAX_C;

/// Parameters for one search run.
///
/// # Examples
///
/// ```
/// use quartic_search::config::SearchConfig;
///
/// let config = SearchConfig::new(1_000_000, 5).with_end(1_000);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.start, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Largest value held in the membership table.
    pub table_bound: u64,
    /// Stop once this many `n` have gone unsolved.
    pub max_exceptions: u32,
    /// First `n` searched.
    pub start: u64,
    /// Last `n` searched; `None` runs until `n` reaches `u64::MAX`.
    pub end: Option<u64>,
    /// Largest `c` tried for each `n`.
    pub max_c: u16,
}

impl SearchConfig {
    pub fn new(table_bound: u64, max_exceptions: u32) -> Self {
        Self {
            table_bound,
            max_exceptions,
            start: 1,
            end: None,
            max_c: MAX_C,
        }
    }

    pub fn with_start(mut self, start: u64) -> Self {
        self.start = start;
        self
    }

    pub fn with_end(mut self, end: u64) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_max_c(mut self, max_c: u16) -> Self {
        self.max_c = max_c;
        self
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.start == 0 {
            return Err(SearchError::InvalidConfig(
                "start must be a positive integer".into(),
            ));
        }
        if self.max_c == 0 {
            return Err(SearchError::InvalidConfig(
                "max-c must be at least 1".into(),
            ));
        }
        if let Some(end) = self.end {
            if end < self.start {
                return Err(SearchError::InvalidConfig(format!(
                    "end {} is below start {}",
                    end, self.start
                )));
            }
        }
        Ok(())
    }
}
