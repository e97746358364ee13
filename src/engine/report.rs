// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Where search results go.
//!
//! The engine hands every event to a [`Reporter`]. [`LineReporter`] writes the
//! plain text lines the `quartic` binary prints; tests point it at a `Vec<u8>`.

use std::fmt;
use std::io::{self, Write};

use crate::memo::MembershipTable;
use crate::numeric::Witness;

/// One solved `n`: `n + c⁴ = a² + b³`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    pub n: u64,
    pub c: u16,
    pub witness: Witness,
}

impl Solution {
    /// Whether the equation actually holds.
    pub fn holds(&self) -> bool {
        let c = u128::from(self.c);
        u128::from(self.n) + c * c * c * c == self.witness.value()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + ({})^4 = {}", self.n, self.c, self.witness)
    }
}

/// Receives search events in the order they happen.
pub trait Reporter {
    /// The membership table is built and the search is about to start.
    fn table_completed(&mut self, table: &MembershipTable) -> io::Result<()>;

    /// `solution.n` was solved.
    fn solution(&mut self, solution: &Solution) -> io::Result<()>;

    /// No `c` in range solved `n`.
    fn exhausted(&mut self, n: u64) -> io::Result<()>;
}

/// Writes one line per event.
#[derive(Debug)]
pub struct LineReporter<W: Write> {
    out: W,
}

impl<W: Write> LineReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for LineReporter<W> {
    fn table_completed(&mut self, _table: &MembershipTable) -> io::Result<()> {
        writeln!(self.out, "Look-up table completed.")
    }

    fn solution(&mut self, solution: &Solution) -> io::Result<()> {
        writeln!(self.out, "{}", solution)
    }

    fn exhausted(&mut self, n: u64) -> io::Result<()> {
        writeln!(self.out, "No solution for n={} with a^2 + b^3 < 2^64.", n)
    }
}
