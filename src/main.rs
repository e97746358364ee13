// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use std::io::{self, Write};

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};

use quartic_search::engine::{run_search, LineReporter};
use quartic_search::numeric::MAX_C;
use quartic_search::SearchConfig;

const ABOUT: &str = "This program prints integer solutions to the equation n + c^4 = a^2 + b^3.";

#[derive(Parser, Debug)]
#[command(name = "quartic", version, about = ABOUT)]
struct Args {
    /// Largest value recorded in the a^2 + b^3 look-up table
    #[arg(value_name = "LOOKUP_TABLE_BOUND")]
    table_bound: u64,

    /// Stop after this many n without a solution
    #[arg(value_name = "MAX_EXCEPTIONS")]
    max_exceptions: u32,

    /// First n to search
    #[arg(long, default_value_t = 1)]
    start: u64,

    /// Last n to search (default: run until n reaches 2^64 - 1)
    #[arg(long)]
    end: Option<u64>,

    /// Largest c tried for each n
    #[arg(long, default_value_t = MAX_C)]
    max_c: u16,

    /// Diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> SearchConfig {
        let config = SearchConfig::new(self.table_bound, self.max_exceptions)
            .with_start(self.start)
            .with_max_c(self.max_c);
        match self.end {
            Some(end) => config.with_end(end),
            None => config,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            // Missing positionals is a request for usage, not a failure.
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", ABOUT)?;
            writeln!(stdout, "{}", Args::command().render_usage())?;
            return Ok(());
        }
        Err(err) => err.exit(),
    };
    init_logging(args.verbose);

    let config = args.config();
    log::debug!("{:?}", config);

    let mut reporter = LineReporter::new(io::stdout().lock());
    let summary = run_search(&config, &mut reporter)?;
    reporter.into_inner().flush()?;

    log::debug!("{} exceptions", summary.exceptions);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_positional_arguments() {
        let args = Args::try_parse_from(["quartic", "100", "5"]).unwrap();
        assert_eq!(args.config(), SearchConfig::new(100, 5));
    }

    #[test]
    fn test_options() {
        let args = Args::try_parse_from([
            "quartic", "1000", "2", "--start", "7", "--end", "9", "--max-c", "10", "-vv",
        ])
        .unwrap();
        assert_eq!(
            args.config(),
            SearchConfig::new(1000, 2).with_start(7).with_end(9).with_max_c(10)
        );
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_missing_arguments() {
        let err = Args::try_parse_from(["quartic", "100"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_rejects_c_above_u16() {
        assert!(Args::try_parse_from(["quartic", "100", "5", "--max-c", "65536"]).is_err());
    }
}
