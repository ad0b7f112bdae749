//! Bisection for `f(x) = 0` on a sign-change bracket.
//!
//! # Algorithm
//!
//! Each iteration evaluates the midpoint `c` of the current bracket `[a, b]`
//! and keeps the half where the sign change persists: `b = c` when
//! `f(a) * f(c) < 0`, otherwise `a = c`. The step error is the bracket width
//! on the first iteration and `|c - c_prev|` afterwards.
//!
//! The solver converges when `|f(c)|` or the step error drops below the
//! tolerance. An endpoint that is already an exact root is returned at once
//! with zero iterations.
//!
//! # Failures
//!
//! Brackets whose endpoint values share a sign (or are not finite) end with
//! [`Status::NoSignChange`] and no root. Exhausting the iteration budget ends
//! with [`Status::MaxIters`] and the last midpoint as an unverified estimate.
//! Neither is an `Err`: errors are reserved for malformed input.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the iteration's
//! [`Record`] has been appended to the trace. Observers can return
//! [`Action::StopEarly`] to halt with the current midpoint. A stop requested
//! on the iteration that converges is ignored.

mod action;
mod error;
mod event;
mod record;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use record::Record;
pub use solution::{Solution, Status};

use mathroots_core::{Observer, RealFunction};

use super::Config;

/// Finds a root of `f` inside `bracket` using bisection.
///
/// The bracket bounds may be given in either order.
/// See the [module docs](self) for convergence and failure behavior.
///
/// # Errors
///
/// Returns [`Error::NonFiniteBracket`] or [`Error::ZeroWidthBracket`] if the
/// bracket bounds cannot describe an interval.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: RealFunction + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let [mut a, mut b] = ordered(bracket)?;
    let mut fa = f.eval(a);
    let mut fb = f.eval(b);

    if fa == 0.0 {
        return Ok(Solution::endpoint(a));
    }
    if fb == 0.0 {
        return Ok(Solution::endpoint(b));
    }
    let brackets_root = fa * fb < 0.0;
    if !brackets_root {
        return Ok(Solution::no_sign_change(fa, fb));
    }

    let mut trace = Vec::new();
    let mut c = a;
    let mut fc = fa;
    let mut error = f64::INFINITY;

    for iter in 1..=config.max_iters() {
        let c_prev = c;
        c = 0.5 * (a + b);
        fc = f.eval(c);
        error = if iter == 1 {
            (b - a).abs()
        } else {
            (c - c_prev).abs()
        };

        trace.push(Record {
            iter,
            a,
            b,
            c,
            fa,
            fb,
            fc,
            error,
        });

        let action = observer.observe(&Event::new(&trace, [a, b]));

        if config.is_converged(fc, error) {
            return Ok(Solution::finished(Status::Converged, c, fc, error, trace));
        }
        if let Some(Action::StopEarly) = action {
            return Ok(Solution::finished(Status::StoppedByObserver, c, fc, error, trace));
        }

        if fa * fc < 0.0 {
            b = c;
            fb = fc;
        } else {
            a = c;
            fa = fc;
        }
    }

    Ok(Solution::finished(Status::MaxIters, c, fc, error, trace))
}

/// Finds a root of `f` inside `bracket` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bracket bounds cannot describe an interval.
pub fn solve_unobserved<F>(f: &F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: RealFunction + ?Sized,
{
    solve(f, bracket, config, ())
}

/// Validates the bracket and returns it in ascending order.
fn ordered(bracket: [f64; 2]) -> Result<[f64; 2], Error> {
    let [a, b] = bracket;
    if !a.is_finite() || !b.is_finite() {
        return Err(Error::NonFiniteBracket { a, b });
    }
    if a == b {
        return Err(Error::ZeroWidthBracket { x: a });
    }
    Ok(if a < b { [a, b] } else { [b, a] })
}
