//! Newton-Raphson for `f(x) = 0` from a starting point.
//!
//! # Algorithm
//!
//! Each iteration evaluates `f(x)` and `f'(x)` and steps to
//! `x_next = x - f(x) / f'(x)`. The step error is `|x_next - x|`. The solver
//! converges when `|f(x)|` or the step error drops below the tolerance, and
//! reports `x_next` as the root.
//!
//! # Failures
//!
//! - [`Status::ZeroDerivative`]: `|f'(x)|` fell below [`ZERO_DERIVATIVE`].
//!   The failed attempt counts as an iteration but adds no trace row, and no
//!   root is reported.
//! - [`Status::MaxIters`]: the iteration budget ran out; the last iterate is
//!   kept as an unverified estimate.
//!
//! Non-finite values are not errors: they propagate through the iteration and
//! prevent convergence.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per recorded iteration. Observers can return
//! [`Action::StopEarly`] to halt with the latest iterate. A stop requested on
//! the iteration that converges is ignored.

mod action;
mod error;
mod event;
mod record;
mod solution;


pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use record::Record;
pub use solution::{Solution, Status};

use mathroots_core::{Observer, RealFunction};

use super::Config;

/// Derivative magnitude below which a Newton step is refused.
pub const ZERO_DERIVATIVE: f64 = 1e-12;

/// Finds a root of `f` starting from `x0`, using `df` as its derivative.
///
/// See the [module docs](self) for convergence and failure behavior.
///
/// # Errors
///
/// Returns [`Error::NonFiniteSeed`] if `x0` is not finite.
pub fn solve<F, D, Obs>(
    f: &F,
    df: &D,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: RealFunction + ?Sized,
    D: RealFunction + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    if !x0.is_finite() {
        return Err(Error::NonFiniteSeed { x0 });
    }

    let mut trace = Vec::new();
    let mut x = x0;
    let mut error = f64::INFINITY;

    for iter in 1..=config.max_iters() {
        let fx = f.eval(x);
        let dfx = df.eval(x);

        if dfx.abs() < ZERO_DERIVATIVE {
            return Ok(Solution {
                status: Status::ZeroDerivative { x, dfx },
                root: None,
                residual: None,
                iters: iter,
                error,
                trace,
            });
        }

        let x_next = x - fx / dfx;
        error = (x_next - x).abs();

        trace.push(Record {
            iter,
            x,
            fx,
            dfx,
            x_next,
            error,
        });

        let action = observer.observe(&Event::new(&trace));

        let status = if config.is_converged(fx, error) {
            Status::Converged
        } else if let Some(Action::StopEarly) = action {
            Status::StoppedByObserver
        } else {
            x = x_next;
            continue;
        };
        return Ok(Solution::finished(
            status,
            x_next,
            f.eval(x_next),
            error,
            trace,
        ));
    }

    Ok(Solution::finished(
        Status::MaxIters,
        x,
        f.eval(x),
        error,
        trace,
    ))
}

/// Finds a root of `f` starting from `x0` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `x0` is not finite.
pub fn solve_unobserved<F, D>(f: &F, df: &D, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: RealFunction + ?Sized,
    D: RealFunction + ?Sized,
{
    solve(f, df, x0, config, ())
}
