use mathroots_core::Observer;

use crate::traits::{HasIterate, HasResidual};

/// Logs every solver iteration as a `trace`-level `tracing` event.
///
/// The logger never steers the solver. The `candidate` label identifies which
/// bracket or seed a run belongs to when several runs are interleaved in the
/// same log.
///
/// ```rust
/// use mathroots_observers::IterationLogger;
/// use mathroots_solvers::equation::{Config, bisection};
///
/// let f = |x: f64| x * x - 2.0;
/// let logger = IterationLogger::new("[0, 2]");
/// let solution = bisection::solve(&f, [0.0, 2.0], &Config::default(), logger).unwrap();
/// assert!(solution.is_converged());
/// ```
#[derive(Debug, Clone)]
pub struct IterationLogger {
    candidate: String,
}

impl IterationLogger {
    /// Creates a logger that tags its events with `candidate`.
    pub fn new(candidate: impl Into<String>) -> Self {
        Self {
            candidate: candidate.into(),
        }
    }

    /// Returns the candidate label.
    #[must_use]
    pub fn candidate(&self) -> &str {
        &self.candidate
    }
}

impl<E, A> Observer<E, A> for IterationLogger
where
    E: HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        tracing::trace!(
            candidate = %self.candidate,
            iter = event.iter(),
            x = event.x(),
            residual = event.residual(),
            error = event.step_error(),
            "iteration"
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use mathroots_solvers::equation::{Config, bisection, newton};

    #[test]
    fn logging_does_not_change_results() {
        let f = |x: f64| x.powi(3) - 8.0;
        let df = |x: f64| 3.0 * x * x;
        let config = Config::default();

        let logged = newton::solve(&f, &df, 1.0, &config, IterationLogger::new("seed 1"))
            .expect("finite seed");
        let plain = newton::solve_unobserved(&f, &df, 1.0, &config).expect("finite seed");
        assert!(logged.is_converged());
        assert_eq!(logged, plain);

        let logged = bisection::solve(&f, [1.0, 3.0], &config, IterationLogger::new("[1, 3]"))
            .expect("valid bracket");
        let plain = bisection::solve_unobserved(&f, [1.0, 3.0], &config).expect("valid bracket");
        assert_eq!(logged, plain);
    }

    #[test]
    fn keeps_its_label() {
        assert_eq!(IterationLogger::new("seed -5").candidate(), "seed -5");
    }
}
