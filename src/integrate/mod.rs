//! Definite-integral estimators.
//!
//! Three methods over a [`crate::domain::BoundedFn`]:
//!
//! | Method | Kind | Error behavior |
//! |--------|------|----------------|
//! | [`monte_carlo`] | rejection sampling | std. error ∝ 1/sqrt(iterations) |
//! | [`trapezoid`] | composite trapezoidal rule | O(h²) for smooth functions |
//! | [`simpson`] | composite Simpson 1/3 rule | O(h⁴), exact for cubics |
//!
//! All three are pure functions of the bounded function and a count; the only
//! state is the random source passed explicitly into [`monte_carlo`].

mod monte_carlo;
mod simpson;
mod trapezoid;

pub use monte_carlo::{monte_carlo, monte_carlo_seeded, par_monte_carlo};
pub use simpson::simpson;
pub use trapezoid::trapezoid;
