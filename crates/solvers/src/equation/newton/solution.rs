use super::Record;

/// How a Newton-Raphson run ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// The derivative at `x` was too close to zero to take a step.
    ZeroDerivative { x: f64, dfx: f64 },

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton-Raphson run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The root, or the last iterate if the solver did not converge.
    ///
    /// `None` when the derivative vanished.
    pub root: Option<f64>,

    /// `f(root)`, when a root estimate exists.
    pub residual: Option<f64>,

    /// Number of iterations attempted, including a failed final attempt.
    pub iters: usize,

    /// Step error of the last recorded iteration, or infinity if none.
    pub error: f64,

    /// One record per completed iteration, in order.
    pub trace: Vec<Record>,
}

impl Solution {
    /// Returns true if the run converged to a root.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    pub(super) fn finished(
        status: Status,
        x: f64,
        fx: f64,
        error: f64,
        trace: Vec<Record>,
    ) -> Self {
        Self {
            status,
            root: Some(x),
            residual: Some(fx),
            iters: trace.len(),
            error,
            trace,
        }
    }
}
