//! Command-line parsing for the `numint` binary.
//!
//! Kept separate from [`crate::app`] so argument definitions stay apart from
//! dispatch and the math code.

use clap::Parser;

/// Numerical integration demo: Monte Carlo, trapezoidal, and Simpson
/// estimates for a set of reference integrals.
#[derive(Debug, Parser)]
#[command(name = "numint", version, about)]
pub struct Cli {
    /// Number of random trials for the Monte Carlo estimator.
    #[arg(long, default_value_t = 1_000_000)]
    pub mc_samples: usize,

    /// Number of sub-intervals for the trapezoid and Simpson estimators.
    #[arg(long, default_value_t = 1_000)]
    pub steps: usize,

    /// Random seed for the Monte Carlo estimator (fixed seed => reproducible run).
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Split Monte Carlo trials across worker threads.
    #[arg(long, default_value_t = false)]
    pub parallel: bool,
}
