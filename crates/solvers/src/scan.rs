//! Sweeps over a sampling grid.
//!
//! - [`find_intervals`] returns every grid cell where the function changes
//!   sign, ready for bisection.
//! - [`find_seeds`] ranks grid points by how close `f` is to zero and returns
//!   starting points for Newton-Raphson.
//!
//! Both sweeps evaluate the function on the grid `start + i * step` and skip
//! points where it is not finite.

mod intervals;
mod range;
mod seeds;

pub use intervals::{Interval, find_intervals};
pub use range::{Range, RangeError};
pub use seeds::{FALLBACK_SEED, SeedOptions, SeedOptionsError, Seeds, find_seeds};
