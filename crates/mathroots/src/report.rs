//! Structured results of a solve.
//!
//! Every type here is plain data and serializes with `serde`, so hosts can
//! render tables, plots, or exports without touching the solvers.

use mathroots_solvers::equation::{bisection, newton};
use serde::{Serialize, ser::SerializeStruct};
use thiserror::Error;

use crate::settings::Method;

/// The bracket or starting point a solver run began from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Candidate {
    Interval { a: f64, b: f64 },
    Seed { x0: f64, fallback: bool },
}

/// One row of a solver trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IterationRecord {
    Bisection(bisection::Record),
    Newton(newton::Record),
}

impl IterationRecord {
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            IterationRecord::Bisection(record) => record.iter,
            IterationRecord::Newton(record) => record.iter,
        }
    }

    #[must_use]
    pub fn error(&self) -> f64 {
        match self {
            IterationRecord::Bisection(record) => record.error,
            IterationRecord::Newton(record) => record.error,
        }
    }
}

/// Why a candidate did not produce a root.
#[derive(Debug, Clone, Copy, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Failure {
    #[error(
        "f({a}) = {fa:.6} and f({b}) = {fb:.6} have the same sign; bisection cannot be applied"
    )]
    SameSign { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("the derivative is zero at x = {x:.6}; Newton-Raphson cannot continue")]
    SingularDerivative { x: f64 },

    #[error("no convergence after {max_iterations} iterations")]
    NonConvergence {
        max_iterations: usize,
        estimate: Option<f64>,
    },

    #[error("stopped early after {iterations} iterations")]
    StoppedEarly {
        iterations: usize,
        estimate: Option<f64>,
    },
}

/// How a single candidate ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Converged { root: f64, function_value: f64 },
    Failed(Failure),
}

/// The outcome of solving from one candidate.
///
/// Results are created once by the driver and never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    pub candidate: Candidate,
    pub outcome: Outcome,

    /// Iterations performed, including a failed final attempt.
    pub iterations: usize,

    /// Step error when the run ended.
    pub final_error: f64,

    pub trace: Vec<IterationRecord>,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        matches!(self.outcome, Outcome::Converged { .. })
    }

    /// Returns the root if the run converged.
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        match self.outcome {
            Outcome::Converged { root, .. } => Some(root),
            Outcome::Failed(_) => None,
        }
    }

    /// Returns the root, or the last iterate of a run that ran out of
    /// iterations or was stopped early.
    ///
    /// Only a converged run's value is a verified root; check
    /// [`success`](Self::success) before trusting it.
    #[must_use]
    pub fn estimate(&self) -> Option<f64> {
        match self.outcome {
            Outcome::Converged { root, .. } => Some(root),
            Outcome::Failed(
                Failure::NonConvergence { estimate, .. } | Failure::StoppedEarly { estimate, .. },
            ) => estimate,
            Outcome::Failed(Failure::SameSign { .. } | Failure::SingularDerivative { .. }) => None,
        }
    }

    /// Returns `f(root)` if the run converged.
    #[must_use]
    pub fn function_value(&self) -> Option<f64> {
        match self.outcome {
            Outcome::Converged { function_value, .. } => Some(function_value),
            Outcome::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&Failure> {
        match &self.outcome {
            Outcome::Converged { .. } => None,
            Outcome::Failed(failure) => Some(failure),
        }
    }

    /// Returns a one-line human-readable summary.
    #[must_use]
    pub fn message(&self) -> String {
        match &self.outcome {
            Outcome::Converged { root, .. } => format!(
                "root found at x = {root:.8} after {} iterations",
                self.iterations
            ),
            Outcome::Failed(failure) => failure.to_string(),
        }
    }
}

impl Serialize for SolveResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SolveResult", 9)?;
        state.serialize_field("candidate", &self.candidate)?;
        state.serialize_field("success", &self.success())?;
        state.serialize_field("root", &self.estimate())?;
        state.serialize_field("function_value", &self.function_value())?;
        state.serialize_field("iterations", &self.iterations)?;
        state.serialize_field("final_error", &self.final_error)?;
        state.serialize_field("message", &self.message())?;
        state.serialize_field("failure", &self.failure())?;
        state.serialize_field("trace", &self.trace)?;
        state.end()
    }
}

/// Everything a solve produced, in candidate order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveReport {
    /// The equation as entered.
    pub equation: String,

    /// The canonical expression that was solved.
    pub expression: String,

    /// The symbolic derivative, for Newton solves.
    pub derivative: Option<String>,

    pub method: Method,

    /// True if no seed was found and Newton started from the fallback seed.
    pub fallback_seed: bool,

    pub results: Vec<SolveResult>,

    /// Converged Newton results dropped as duplicates of an earlier root.
    pub duplicates: usize,
}

impl SolveReport {
    /// Returns the roots of every converged result, in candidate order.
    #[must_use]
    pub fn roots(&self) -> Vec<f64> {
        self.results.iter().filter_map(SolveResult::root).collect()
    }

    /// Returns the sum of iterations across all results.
    #[must_use]
    pub fn total_iterations(&self) -> usize {
        self.results.iter().map(|result| result.iterations).sum()
    }

    /// Returns the results that did not converge.
    pub fn failures(&self) -> impl Iterator<Item = &SolveResult> {
        self.results.iter().filter(|result| !result.success())
    }

    /// Returns true if no candidate was found at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
