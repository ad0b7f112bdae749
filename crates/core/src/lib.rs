//! Core traits for the mathroots workspace.
//!
//! This crate defines the small set of abstractions that the expression
//! compiler, the solvers, and the observers build on:
//!
//! - [`RealFunction`]: a unary real function that never fails, returning NaN
//!   or an infinity where it is undefined
//! - [`Observer`]: receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::RealFunction;
pub use observer::Observer;
