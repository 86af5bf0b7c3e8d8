//! Monte Carlo (rejection sampling) integration.
//!
//! The estimator throws darts at the bounding rectangle
//! `[lower, upper] x [0, max_value]` and scales the rectangle's area by the
//! fraction that landed below the curve. It only makes geometric sense for
//! functions that are non-negative over the interval, and `max_value` must
//! actually bound `f`: a too-small `max_value` silently under-estimates
//! because mass above the rectangle is never sampled.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::domain::BoundedFn;
use crate::error::{IntegrateError, Result};

/// Iterations handled per worker chunk in [`par_monte_carlo`].
///
/// Fixed so that a given seed produces the same chunk layout (and therefore
/// the same estimate) regardless of thread count.
const PAR_CHUNK: usize = 65_536;

/// Estimate the integral by rejection sampling with a caller-supplied source
/// of randomness.
///
/// Standard error shrinks as `1/sqrt(iterations)`; there is no other
/// convergence guarantee. Pass a seeded rng for reproducible results, or
/// `rand::thread_rng()` when reproducibility does not matter.
pub fn monte_carlo<F, R>(
    bf: &BoundedFn<F>,
    iterations: usize,
    max_value: f64,
    rng: &mut R,
) -> Result<f64>
where
    F: Fn(f64) -> f64,
    R: Rng + ?Sized,
{
    validate(iterations, max_value)?;
    if bf.width() == 0.0 {
        return Ok(0.0);
    }

    let below = sample_below(bf, iterations, max_value, rng);
    Ok(estimate(bf, iterations, max_value, below))
}

/// [`monte_carlo`] with a `StdRng` seeded from `seed`.
pub fn monte_carlo_seeded<F>(
    bf: &BoundedFn<F>,
    iterations: usize,
    max_value: f64,
    seed: u64,
) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    let mut rng = StdRng::seed_from_u64(seed);
    monte_carlo(bf, iterations, max_value, &mut rng)
}

/// Parallel variant: trials are split into fixed-size chunks, each chunk draws
/// from its own `StdRng` seeded as `seed + chunk_index`, and the below-curve
/// counts are summed in a single reduction.
///
/// Same estimator as [`monte_carlo`], and deterministic for a fixed seed.
pub fn par_monte_carlo<F>(
    bf: &BoundedFn<F>,
    iterations: usize,
    max_value: f64,
    seed: u64,
) -> Result<f64>
where
    F: Fn(f64) -> f64 + Sync,
{
    validate(iterations, max_value)?;
    if bf.width() == 0.0 {
        return Ok(0.0);
    }

    let chunks = iterations.div_ceil(PAR_CHUNK);
    let below: u64 = (0..chunks)
        .into_par_iter()
        .map(|chunk| {
            let start = chunk * PAR_CHUNK;
            let len = PAR_CHUNK.min(iterations - start);
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(chunk as u64));
            sample_below(bf, len, max_value, &mut rng)
        })
        .sum();

    Ok(estimate(bf, iterations, max_value, below))
}

fn validate(iterations: usize, max_value: f64) -> Result<()> {
    if iterations == 0 {
        return Err(IntegrateError::invalid_argument(
            "monte carlo: need at least 1 iteration",
        ));
    }
    if !max_value.is_finite() || max_value <= 0.0 {
        return Err(IntegrateError::invalid_argument(format!(
            "monte carlo: max_value must be finite and positive (got {max_value})"
        )));
    }
    Ok(())
}

fn sample_below<F, R>(bf: &BoundedFn<F>, trials: usize, max_value: f64, rng: &mut R) -> u64
where
    F: Fn(f64) -> f64,
    R: Rng + ?Sized,
{
    let mut below = 0u64;
    for _ in 0..trials {
        let x = rng.gen_range(bf.lower()..bf.upper());
        let y = rng.gen_range(0.0..max_value);
        if y < bf.eval(x) {
            below += 1;
        }
    }
    below
}

fn estimate<F>(bf: &BoundedFn<F>, iterations: usize, max_value: f64, below: u64) -> f64
where
    F: Fn(f64) -> f64,
{
    below as f64 / iterations as f64 * bf.width() * max_value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_function_within_statistical_tolerance() {
        let bf = BoundedFn::new(|_| 2.0, 0.0, 3.0).unwrap();
        let result = monte_carlo_seeded(&bf, 200_000, 4.0, 7).unwrap();
        assert!((result - 6.0).abs() < 0.1, "got {result}");
    }

    #[test]
    fn quarter_circle_approaches_pi_over_4() {
        let bf = BoundedFn::new(|x: f64| (1.0 - x * x).sqrt(), 0.0, 1.0).unwrap();
        let result = monte_carlo_seeded(&bf, 400_000, 1.0, 42).unwrap();
        assert!(
            (result - std::f64::consts::FRAC_PI_4).abs() < 0.005,
            "got {result}"
        );
    }

    #[test]
    fn same_seed_reproduces_exactly() {
        let bf = BoundedFn::new(|x| x * x, -1.0, 1.0).unwrap();
        let a = monte_carlo_seeded(&bf, 10_000, 1.0, 99).unwrap();
        let b = monte_carlo_seeded(&bf, 10_000, 1.0, 99).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn variance_shrinks_with_iteration_count() {
        // Sample variance across seeds should fall roughly linearly in the
        // iteration count; 16x the trials at a loose 3x threshold keeps the
        // test well clear of statistical noise.
        let bf = BoundedFn::new(|x: f64| (1.0 - x * x).sqrt(), 0.0, 1.0).unwrap();
        let var = |iters: usize| {
            let estimates: Vec<f64> = (0..20)
                .map(|seed| monte_carlo_seeded(&bf, iters, 1.0, seed).unwrap())
                .collect();
            let mean = estimates.iter().sum::<f64>() / estimates.len() as f64;
            estimates.iter().map(|e| (e - mean).powi(2)).sum::<f64>() / (estimates.len() - 1) as f64
        };
        let coarse = var(2_000);
        let fine = var(32_000);
        assert!(
            coarse > 3.0 * fine,
            "variance did not shrink: coarse {coarse}, fine {fine}"
        );
    }

    #[test]
    fn undersized_max_value_underestimates_silently() {
        // f = 1 on [0, 1] with max_value 0.5: every draw lands below the
        // curve, so the estimate collapses to the rectangle area 0.5.
        let bf = BoundedFn::new(|_| 1.0, 0.0, 1.0).unwrap();
        let result = monte_carlo_seeded(&bf, 10_000, 0.5, 1).unwrap();
        assert!((result - 0.5).abs() < 1e-12, "got {result}");
    }

    #[test]
    fn degenerate_interval_integrates_to_zero() {
        let bf = BoundedFn::new(|_| 1.0, 2.0, 2.0).unwrap();
        assert_eq!(monte_carlo_seeded(&bf, 100, 1.0, 0).unwrap(), 0.0);
    }

    #[test]
    fn invalid_arguments_are_rejected() {
        let bf = BoundedFn::new(|x| x, 0.0, 1.0).unwrap();
        assert!(monte_carlo_seeded(&bf, 0, 1.0, 0).is_err());
        assert!(monte_carlo_seeded(&bf, 100, 0.0, 0).is_err());
        assert!(monte_carlo_seeded(&bf, 100, -1.0, 0).is_err());
        assert!(monte_carlo_seeded(&bf, 100, f64::NAN, 0).is_err());
    }

    #[test]
    fn parallel_matches_the_estimator() {
        let bf = BoundedFn::new(|x: f64| (1.0 - x * x).sqrt(), 0.0, 1.0).unwrap();
        let par = par_monte_carlo(&bf, 300_000, 1.0, 5).unwrap();
        assert!(
            (par - std::f64::consts::FRAC_PI_4).abs() < 0.005,
            "got {par}"
        );
        // Fixed seed, fixed chunk layout: exact reproducibility.
        let again = par_monte_carlo(&bf, 300_000, 1.0, 5).unwrap();
        assert_eq!(par, again);
    }
}
