//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that
//! parses CLI arguments, runs the three integrators against the reference
//! functions, and prints the comparison report.

use clap::Parser;

use crate::cli::Cli;
use crate::domain::BoundedFn;
use crate::error::Result;
use crate::integrate;
use crate::report::{MethodRow, format_case};

/// Entry point for the `numint` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // The classic demo pair: a quarter circle whose area is pi/4, and a
    // parabola with a closed-form integral of 2/3.
    run_case(
        "quarter circle: sqrt(1 - x^2) on [0, 1]",
        |x: f64| (1.0 - x * x).sqrt(),
        0.0,
        1.0,
        std::f64::consts::FRAC_PI_4,
        &cli,
    )?;
    run_case(
        "parabola: x^2 on [-1, 1]",
        |x: f64| x * x,
        -1.0,
        1.0,
        2.0 / 3.0,
        &cli,
    )?;

    Ok(())
}

fn run_case<F>(label: &str, f: F, lower: f64, upper: f64, expected: f64, cli: &Cli) -> Result<()>
where
    F: Fn(f64) -> f64 + Sync,
{
    let bf = BoundedFn::new(f, lower, upper)?;

    // Bound the sampling rectangle from the same grid the deterministic
    // methods use. Both reference functions peak on a grid point, so this is
    // exact here; a caller with a known analytic bound should pass it instead.
    let max_value = bf.estimate_max(cli.steps)?;

    let mc = if cli.parallel {
        integrate::par_monte_carlo(&bf, cli.mc_samples, max_value, cli.seed)?
    } else {
        integrate::monte_carlo_seeded(&bf, cli.mc_samples, max_value, cli.seed)?
    };
    let trap = integrate::trapezoid(&bf, cli.steps)?;
    let simp = integrate::simpson(&bf, cli.steps)?;

    let rows = vec![
        MethodRow {
            method: "monte carlo",
            estimate: mc,
        },
        MethodRow {
            method: "trapezoid",
            estimate: trap,
        },
        MethodRow {
            method: "simpson",
            estimate: simp,
        },
    ];

    println!("{}", format_case(label, expected, &rows));
    Ok(())
}
