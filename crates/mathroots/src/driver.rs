//! Runs a solver over every candidate of a search range.

use mathroots_core::RealFunction;
use mathroots_expr::CompiledExpr;
use mathroots_observers::IterationLogger;
use mathroots_solvers::{
    equation::{Config, bisection, newton},
    scan::{Interval, Range, find_intervals, find_seeds},
};
use tracing::{debug, info, warn};

use crate::{
    dedup::dedup,
    error::SolveError,
    report::{Candidate, Failure, IterationRecord, Outcome, SolveReport, SolveResult},
    settings::{Method, Settings},
};

/// Solves `f` with the method and search range chosen by `settings`.
///
/// Expects settings that already passed [`Settings::validate`]. A failure on
/// one candidate never stops the others.
pub(crate) fn run(
    equation: &str,
    expression: &str,
    f: &CompiledExpr,
    settings: &Settings,
) -> Result<SolveReport, SolveError> {
    let config = settings.solver_config()?;
    let range = settings.search_range()?;

    info!(
        expression,
        method = %settings.method,
        start = range.start(),
        end = range.end(),
        step = range.step(),
        "solving"
    );

    let report = match settings.method {
        Method::Bisection => {
            let results = bisect_all(f, &range, &config)?;
            SolveReport {
                equation: equation.to_owned(),
                expression: expression.to_owned(),
                derivative: None,
                method: Method::Bisection,
                fallback_seed: false,
                results,
                duplicates: 0,
            }
        }
        Method::Newton => {
            let df = f.derivative();
            let seeds = find_seeds(f, &range, settings.seed_options());
            if seeds.is_fallback() {
                warn!(expression, "no seeds found, starting from the fallback seed");
            }

            let results = newton_all(f, &df, seeds.values(), seeds.is_fallback(), &config)?;
            let (results, duplicates) = dedup(results, settings.root_tolerance);
            if duplicates > 0 {
                debug!(duplicates, "dropped duplicate roots");
            }

            SolveReport {
                equation: equation.to_owned(),
                expression: expression.to_owned(),
                derivative: Some(df.to_string()),
                method: Method::Newton,
                fallback_seed: seeds.is_fallback(),
                results,
                duplicates,
            }
        }
    };

    info!(
        roots = report.roots().len(),
        failures = report.failures().count(),
        iterations = report.total_iterations(),
        "solve finished"
    );
    Ok(report)
}

fn bisect_all<F>(f: &F, range: &Range, config: &Config) -> Result<Vec<SolveResult>, SolveError>
where
    F: RealFunction + ?Sized,
{
    let intervals = find_intervals(f, range);
    if intervals.is_empty() {
        warn!("no sign-change intervals found in the search range");
    }

    let mut results = Vec::with_capacity(intervals.len());
    for interval in &intervals {
        let label = format!("[{}, {}]", interval.a, interval.b);
        let solution = bisection::solve(f, interval.bounds(), config, IterationLogger::new(&label))?;
        let result = from_bisection(interval, solution, config);
        debug!(candidate = %label, "{}", result.message());
        results.push(result);
    }

    Ok(results)
}

fn newton_all<F, D>(
    f: &F,
    df: &D,
    seeds: &[f64],
    fallback: bool,
    config: &Config,
) -> Result<Vec<SolveResult>, SolveError>
where
    F: RealFunction + ?Sized,
    D: RealFunction + ?Sized,
{
    let mut results = Vec::with_capacity(seeds.len());
    for &x0 in seeds {
        let label = format!("x0 = {x0}");
        let solution = newton::solve(f, df, x0, config, IterationLogger::new(&label))?;
        let result = from_newton(x0, fallback, solution, config);
        debug!(candidate = %label, "{}", result.message());
        results.push(result);
    }

    Ok(results)
}

fn from_bisection(interval: &Interval, solution: bisection::Solution, config: &Config) -> SolveResult {
    let outcome = match (solution.status, solution.root) {
        (bisection::Status::Converged, Some(root)) => Outcome::Converged {
            root,
            function_value: solution.residual.unwrap_or(f64::NAN),
        },
        (bisection::Status::NoSignChange { fa, fb }, _) => Outcome::Failed(Failure::SameSign {
            a: interval.a,
            b: interval.b,
            fa,
            fb,
        }),
        (bisection::Status::StoppedByObserver, estimate) => {
            Outcome::Failed(Failure::StoppedEarly {
                iterations: solution.iters,
                estimate,
            })
        }
        (bisection::Status::MaxIters | bisection::Status::Converged, estimate) => {
            Outcome::Failed(Failure::NonConvergence {
                max_iterations: config.max_iters(),
                estimate,
            })
        }
    };

    SolveResult {
        candidate: Candidate::Interval {
            a: interval.a,
            b: interval.b,
        },
        outcome,
        iterations: solution.iters,
        final_error: solution.error,
        trace: solution
            .trace
            .into_iter()
            .map(IterationRecord::Bisection)
            .collect(),
    }
}

fn from_newton(x0: f64, fallback: bool, solution: newton::Solution, config: &Config) -> SolveResult {
    let outcome = match (solution.status, solution.root) {
        (newton::Status::Converged, Some(root)) => Outcome::Converged {
            root,
            function_value: solution.residual.unwrap_or(f64::NAN),
        },
        (newton::Status::ZeroDerivative { x, .. }, _) => {
            Outcome::Failed(Failure::SingularDerivative { x })
        }
        (newton::Status::StoppedByObserver, estimate) => Outcome::Failed(Failure::StoppedEarly {
            iterations: solution.iters,
            estimate,
        }),
        (newton::Status::MaxIters | newton::Status::Converged, estimate) => {
            Outcome::Failed(Failure::NonConvergence {
                max_iterations: config.max_iters(),
                estimate,
            })
        }
    };

    SolveResult {
        candidate: Candidate::Seed { x0, fallback },
        outcome,
        iterations: solution.iters,
        final_error: solution.error,
        trace: solution
            .trace
            .into_iter()
            .map(IterationRecord::Newton)
            .collect(),
    }
}
