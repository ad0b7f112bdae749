//! Solvers for `f(x) = 0`.
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed convergence on a sign-change bracket
//! - [`newton`]: quadratic convergence from a starting point, using `f'`
//!
//! Both solvers share a [`Config`] (tolerance and iteration budget) and use
//! the same convergence test: an iteration converges when `|f|` or the step
//! error falls below the tolerance.

mod config;

pub use config::{Config, ConfigError};

pub mod bisection;
pub mod newton;
