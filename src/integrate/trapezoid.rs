//! Composite trapezoidal rule.

use crate::domain::BoundedFn;
use crate::error::{IntegrateError, Result};

/// Integrate by the composite trapezoidal rule over `intervals` sub-intervals.
///
/// Uses the closed form `dx/2 * (f(x0) + 2*Σ f(interior) + f(xn))`, which
/// weights each interior point once per adjacent trapezoid pair. Summing
/// `(f(x1) + f(x2)) * dx` per pair instead double-counts the interior and
/// overshoots by roughly a factor of two.
///
/// `intervals == 1` is valid and yields the single coarse trapezoid
/// `(f(a) + f(b)) / 2 * (b - a)`.
pub fn trapezoid<F>(bf: &BoundedFn<F>, intervals: usize) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    if intervals == 0 {
        return Err(IntegrateError::invalid_argument(
            "trapezoid: need at least 1 sub-interval",
        ));
    }

    let xs = bf.sample_points(intervals)?;
    let dx = bf.width() / intervals as f64;

    let mut sum = 0.5 * (bf.eval(xs[0]) + bf.eval(xs[intervals]));
    for &x in &xs[1..intervals] {
        sum += bf.eval(x);
    }

    Ok(dx * sum)
}
