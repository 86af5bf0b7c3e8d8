//! The bounded-function value type.
//!
//! A `BoundedFn` couples a real-valued function with the closed interval it is
//! to be integrated over. The integrators in [`crate::integrate`] take it by
//! reference; nothing here mutates after construction.

use crate::error::{IntegrateError, Result};

/// A function `f: R -> R` paired with the interval `[lower, upper]`.
///
/// Invariant: both bounds are finite and `lower <= upper`, checked once in
/// [`BoundedFn::new`] so the integrators never have to re-validate.
#[derive(Clone, Copy)]
pub struct BoundedFn<F>
where
    F: Fn(f64) -> f64,
{
    f: F,
    lower: f64,
    upper: f64,
}

impl<F> BoundedFn<F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(f: F, lower: f64, upper: f64) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(IntegrateError::invalid_argument(format!(
                "bounds must be finite (got [{lower}, {upper}])"
            )));
        }
        if lower > upper {
            return Err(IntegrateError::invalid_argument(format!(
                "lower bound {lower} exceeds upper bound {upper}"
            )));
        }
        Ok(Self { f, lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Width of the integration interval.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Evaluate the wrapped function.
    pub fn eval(&self, x: f64) -> f64 {
        (self.f)(x)
    }

    /// Evenly spaced sample grid over the interval.
    ///
    /// Returns `num_steps + 1` points with `points[i] = lower + i * width / num_steps`.
    /// The last point is pinned to `upper` exactly rather than trusting the
    /// accumulated division to land there.
    pub fn sample_points(&self, num_steps: usize) -> Result<Vec<f64>> {
        if num_steps == 0 {
            return Err(IntegrateError::invalid_argument(
                "sample grid needs at least 1 step",
            ));
        }

        let step = self.width() / num_steps as f64;
        let mut points = Vec::with_capacity(num_steps + 1);
        for i in 0..num_steps {
            points.push(self.lower + i as f64 * step);
        }
        points.push(self.upper);
        Ok(points)
    }

    /// Estimate the maximum of `f` over the interval by sampling the grid.
    ///
    /// This is not exact: a maximum lying between grid points is missed, which
    /// biases a Monte Carlo run fed with this value toward under-estimating.
    /// Callers who know a true bound should pass it directly instead.
    pub fn estimate_max(&self, num_steps: usize) -> Result<f64> {
        let points = self.sample_points(num_steps)?;
        // Seed from the first sample so functions that are negative everywhere
        // still report their actual observed maximum.
        let mut max = self.eval(points[0]);
        for &x in &points[1..] {
            let y = self.eval(x);
            if y > max {
                max = y;
            }
        }
        Ok(max)
    }
}
