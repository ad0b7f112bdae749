use mathroots_expr::ParseError;
use mathroots_solvers::equation::{bisection, newton};
use thiserror::Error;

use crate::settings::SettingsError;

/// Errors that stop a solve before any candidate is tried.
///
/// Problems with individual brackets or seeds are not errors; they are
/// reported as failed results inside the [`SolveReport`](crate::SolveReport).
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid equation: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("bisection rejected its bracket: {0}")]
    Bisection(#[from] bisection::Error),

    #[error("Newton-Raphson rejected its seed: {0}")]
    Newton(#[from] newton::Error),
}
