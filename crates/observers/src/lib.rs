//! Reusable observers for the mathroots solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the bisection and Newton-Raphson solvers.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasIterate`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`IterationLogger`]: emits one `tracing` event per solver iteration
//!
//! [`Observer`]: mathroots_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasIterate`]: traits::HasIterate
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod logger;

pub use logger::IterationLogger;
