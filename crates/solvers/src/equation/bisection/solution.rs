use super::Record;

/// How a bisection run ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// The endpoint values do not bracket a root.
    NoSignChange { fa: f64, fb: f64 },

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The root, or the last midpoint if the solver did not converge.
    ///
    /// `None` when no iteration could run.
    pub root: Option<f64>,

    /// `f(root)`, when a root estimate exists.
    pub residual: Option<f64>,

    /// Number of iterations performed.
    pub iters: usize,

    /// Step error of the final iteration.
    pub error: f64,

    /// One record per iteration, in order.
    pub trace: Vec<Record>,
}

impl Solution {
    /// Returns true if the run converged to a root.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    pub(super) fn endpoint(x: f64) -> Self {
        Self {
            status: Status::Converged,
            root: Some(x),
            residual: Some(0.0),
            iters: 0,
            error: 0.0,
            trace: Vec::new(),
        }
    }

    pub(super) fn no_sign_change(fa: f64, fb: f64) -> Self {
        Self {
            status: Status::NoSignChange { fa, fb },
            root: None,
            residual: None,
            iters: 0,
            error: 0.0,
            trace: Vec::new(),
        }
    }

    pub(super) fn finished(
        status: Status,
        c: f64,
        fc: f64,
        error: f64,
        trace: Vec<Record>,
    ) -> Self {
        Self {
            status,
            root: Some(c),
            residual: Some(fc),
            iters: trace.len(),
            error,
            trace,
        }
    }
}
