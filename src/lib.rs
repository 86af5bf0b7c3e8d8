//! `numint` library crate.
//!
//! The binary (`numint`) is a thin wrapper around this library so that:
//!
//! - the integrators are testable without spawning processes
//! - the math core stays reusable apart from the demo driver

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod integrate;
pub mod report;

pub use domain::BoundedFn;
pub use error::{IntegrateError, Result};
pub use integrate::{monte_carlo, monte_carlo_seeded, par_monte_carlo, simpson, trapezoid};
