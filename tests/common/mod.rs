// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use quartic_search::config::SearchConfig;
use quartic_search::engine::{run_search, LineReporter, SearchSummary};

/// Run a full search and return its summary and printed lines.
pub fn run_to_lines(config: &SearchConfig) -> (SearchSummary, Vec<String>) {
    let mut reporter = LineReporter::new(Vec::new());
    let summary = run_search(config, &mut reporter).expect("search runs");
    let text = String::from_utf8(reporter.into_inner()).expect("utf-8 output");
    (summary, text.lines().map(String::from).collect())
}

/// Parse `N + (C)^4 = (A)^2 + (B)^3` into `(n, c, a, b)`.
pub fn parse_solution(line: &str) -> Option<(u64, u64, u64, u64)> {
    let (lhs, rhs) = line.split_once(" = ")?;
    let (n, c) = lhs.split_once(" + ")?;
    let (a, b) = rhs.split_once(" + ")?;
    let inner = |s: &str, power: &str| -> Option<u64> {
        s.strip_prefix('(')?.strip_suffix(power)?.strip_suffix(')')?.parse().ok()
    };
    Some((n.parse().ok()?, inner(c, "^4")?, inner(a, "^2")?, inner(b, "^3")?))
}

/// Check a printed solution by substituting back into the equation.
pub fn equation_holds(n: u64, c: u64, a: u64, b: u64) -> bool {
    let (n, c, a, b) = (n as u128, c as u128, a as u128, b as u128);
    a > 0 && b > 0 && c > 0 && n + c * c * c * c == a * a + b * b * b
}

/// Parse `No solution for n=N with a^2 + b^3 < 2^64.` into `N`.
pub fn parse_exhausted(line: &str) -> Option<u64> {
    line.strip_prefix("No solution for n=")?
        .strip_suffix(" with a^2 + b^3 < 2^64.")?
        .parse()
        .ok()
}
