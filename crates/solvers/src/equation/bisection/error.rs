use thiserror::Error;

/// Errors that can occur during bisection solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("bracket bounds must be finite (got [{a}, {b}])")]
    NonFiniteBracket { a: f64, b: f64 },

    #[error("bracket has zero width at x = {x}")]
    ZeroWidthBracket { x: f64 },
}
