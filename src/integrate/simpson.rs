//! Composite Simpson's 1/3 rule.

use crate::domain::BoundedFn;
use crate::error::{IntegrateError, Result};

/// Integrate by composite Simpson's rule.
///
/// The rule needs an even number of sub-intervals, so `iterations` is doubled
/// internally: the grid has `2 * iterations + 1` points and
/// `dx = width / (2 * iterations)`. Odd-indexed interior points get weight 4,
/// even-indexed interior points weight 2, endpoints weight 1:
///
/// `dx/3 * (f(x0) + 4*sumOdd + 2*sumEven + f(x2n))`
///
/// Exact for polynomials of degree <= 3 regardless of `iterations`.
pub fn simpson<F>(bf: &BoundedFn<F>, iterations: usize) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    if iterations == 0 {
        return Err(IntegrateError::invalid_argument(
            "simpson: need at least 1 iteration",
        ));
    }

    let n = 2 * iterations;
    let xs = bf.sample_points(n)?;
    let dx = bf.width() / n as f64;

    let mut sum_odd = 0.0;
    for i in 1..=iterations {
        sum_odd += bf.eval(xs[2 * i - 1]);
    }

    let mut sum_even = 0.0;
    for i in 1..iterations {
        sum_even += bf.eval(xs[2 * i]);
    }

    Ok(dx / 3.0 * (bf.eval(xs[0]) + 4.0 * sum_odd + 2.0 * sum_even + bf.eval(xs[n])))
}
