//! Root-finding solvers for real functions of one variable.
//!
//! # Modules
//!
//! - [`scan`]: sweeps a [`Range`](scan::Range) to find sign-change brackets
//!   for bisection and ranked starting points for Newton-Raphson
//! - [`equation`]: the iterative solvers, each recording one trace row per
//!   iteration and reporting its outcome through a `Status`
//!
//! Solvers take any [`RealFunction`](mathroots_core::RealFunction) and an
//! [`Observer`](mathroots_core::Observer) that sees every iteration and may stop
//! the solver early. Pass `()` when no observation is needed.
//!
//! # Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for trace records.

mod sign;

pub mod equation;
pub mod scan;

pub use sign::Sign;
