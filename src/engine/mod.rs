// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Main search loop.
//!
//! For each `n`, starting at the configured start, the engine tries
//! `c = 1, 2, ..., max_c` and stops at the first `c` for which `n + c⁴` is a
//! sum `a² + b³`:
//!
//! 1. At or below the table bound, the membership table answers; a hit is
//!    then resolved to a witness by [`find_witness`].
//! 2. Above the table bound, [`find_witness`] decides directly.
//!
//! An `n` that runs out of `c` values is an *exception*. The run ends when the
//! exception count reaches its limit, when the configured last `n` has been
//! searched, or at `n = u64::MAX - 1`.
//!
//! # Example
//!
//! ```
//! use quartic_search::config::SearchConfig;
//! use quartic_search::engine::{run_search, LineReporter, Termination};
//!
//! let config = SearchConfig::new(100, 5).with_end(4);
//! let mut reporter = LineReporter::new(Vec::new());
//! let summary = run_search(&config, &mut reporter).unwrap();
//!
//! assert_eq!(summary.termination, Termination::RangeExhausted { n: 4 });
//! let text = String::from_utf8(reporter.into_inner()).unwrap();
//! assert!(text.starts_with("Look-up table completed.\n1 + (1)^4 = (1)^2 + (1)^3\n"));
//! ```

pub mod report;

pub use report::{LineReporter, Reporter, Solution};

use crate::config::SearchConfig;
use crate::context::SearchContext;
use crate::error::SearchError;
use crate::numeric::{find_witness, fourth_power};
use crate::state::statistics::{Counters, Statistics};

/// Last `n` ever searched; `n + 1⁴` must still fit in a `u64`.
const LAST_N: u64 = u64::MAX - 1;

/// Result of searching a single `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A `c` with a witness was found.
    Solved(Solution),
    /// Every `c` up to the limit failed.
    Exhausted { n: u64 },
}

/// Why a run stopped. `n` is the last value searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The exception limit was reached at `n`.
    ExceptionLimit { n: u64 },
    /// `n` was the last value in range.
    RangeExhausted { n: u64 },
}

/// What a finished run leaves behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSummary {
    pub termination: Termination,
    pub exceptions: u32,
    pub statistics: Statistics,
}

/// Drives the search over a [`SearchContext`].
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine {
    max_exceptions: u32,
    max_c: u16,
    last_n: u64,
}

impl SearchEngine {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            max_exceptions: config.max_exceptions,
            max_c: config.max_c,
            last_n: config.end.map_or(LAST_N, |end| end.min(LAST_N)),
        }
    }

    /// Search `ctx.state.n` without reporting.
    ///
    /// Leaves `ctx.state.c` at the last `c` tried.
    pub fn solve(&self, ctx: &mut SearchContext) -> Result<Outcome, SearchError> {
        let n = ctx.state.n;
        for c in 1..=self.max_c {
            ctx.state.c = c;
            ctx.statistics.increment_counter(Counters::TargetsTested);

            let target = n
                .checked_add(fourth_power(c))
                .ok_or(SearchError::TargetOverflow { n, c })?;

            let witness = if target <= ctx.table.bound() {
                if !ctx.table.contains(target) {
                    continue;
                }
                ctx.statistics.increment_counter(Counters::TableHits);
                find_witness(target).ok_or(SearchError::InconsistentTable { value: target })?
            } else {
                match find_witness(target) {
                    Some(witness) => {
                        ctx.statistics.increment_counter(Counters::FallbackSolutions);
                        witness
                    }
                    None => continue,
                }
            };
            return Ok(Outcome::Solved(Solution { n, c, witness }));
        }
        Ok(Outcome::Exhausted { n })
    }

    /// Search `ctx.state.n`, report the result and count exceptions.
    pub fn step<R: Reporter + ?Sized>(
        &self,
        ctx: &mut SearchContext,
        reporter: &mut R,
    ) -> Result<Outcome, SearchError> {
        let outcome = self.solve(ctx)?;
        match &outcome {
            Outcome::Solved(solution) => {
                ctx.statistics.increment_counter(Counters::Solutions);
                log::trace!("n={} solved at c={}", solution.n, solution.c);
                reporter.solution(solution)?;
            }
            Outcome::Exhausted { n } => {
                ctx.state.exceptions = ctx.state.exceptions.saturating_add(1);
                ctx.statistics.increment_counter(Counters::Exceptions);
                log::info!(
                    "n={} exhausted c <= {} (exception {} of {})",
                    n,
                    self.max_c,
                    ctx.state.exceptions,
                    self.max_exceptions
                );
                reporter.exhausted(*n)?;
            }
        }
        Ok(outcome)
    }

    /// Search from `ctx.state.n` until the run terminates.
    pub fn run<R: Reporter + ?Sized>(
        &self,
        ctx: &mut SearchContext,
        reporter: &mut R,
    ) -> Result<Termination, SearchError> {
        loop {
            let outcome = self.step(ctx, reporter)?;
            let n = ctx.state.n;

            if matches!(outcome, Outcome::Exhausted { .. })
                && ctx.state.exceptions >= self.max_exceptions
            {
                return Ok(Termination::ExceptionLimit { n });
            }
            if n >= self.last_n || !ctx.state.advance() {
                return Ok(Termination::RangeExhausted { n });
            }
        }
    }
}

/// Build the table for `config`, announce it, and search until termination.
///
/// The table lives exactly as long as this call.
pub fn run_search<R: Reporter + ?Sized>(
    config: &SearchConfig,
    reporter: &mut R,
) -> Result<SearchSummary, SearchError> {
    let mut ctx = SearchContext::new(config)?;
    reporter.table_completed(&ctx.table)?;

    let engine = SearchEngine::new(config);
    let termination = engine.run(&mut ctx, reporter)?;

    log::info!("Search stopped: {:?}", termination);
    log::info!("Statistics: {}", ctx.statistics);

    Ok(SearchSummary {
        termination,
        exceptions: ctx.state.exceptions,
        statistics: ctx.statistics,
    })
}
