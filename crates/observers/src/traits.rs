//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasResidual`]: events that carry a function value
//! - [`HasIterate`]: events that carry an iteration number, the point the
//!   function was evaluated at, and a step error
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use mathroots_core::Observer;
//! use mathroots_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use mathroots_solvers::equation::{bisection, newton};

/// An event that carries a function value.
pub trait HasResidual {
    /// Returns the function value evaluated during this iteration.
    fn residual(&self) -> f64;
}

/// An event that describes one solver iteration.
pub trait HasIterate {
    /// Returns the iteration number, starting at 1.
    fn iter(&self) -> usize;

    /// Returns the point the function was evaluated at.
    fn x(&self) -> f64;

    /// Returns the step error reported for this iteration.
    fn step_error(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- bisection ---

impl HasResidual for bisection::Event<'_> {
    fn residual(&self) -> f64 {
        self.record().fc
    }
}

impl HasIterate for bisection::Event<'_> {
    fn iter(&self) -> usize {
        self.record().iter
    }

    fn x(&self) -> f64 {
        self.record().c
    }

    fn step_error(&self) -> f64 {
        self.record().error
    }
}

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- newton ---

impl HasResidual for newton::Event<'_> {
    fn residual(&self) -> f64 {
        self.record().fx
    }
}

impl HasIterate for newton::Event<'_> {
    fn iter(&self) -> usize {
        self.record().iter
    }

    fn x(&self) -> f64 {
        self.record().x
    }

    fn step_error(&self) -> f64 {
        self.record().error
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
