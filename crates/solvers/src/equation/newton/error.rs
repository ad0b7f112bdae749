use thiserror::Error;

/// Errors that can occur during Newton-Raphson solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("starting point must be finite (got {x0})")]
    NonFiniteSeed { x0: f64 },
}
