use thiserror::Error;

/// Configuration shared by the equation solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-6, 100).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated tolerance and iteration budget.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is not finite and positive, or if
    /// `max_iters` is zero.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            tolerance,
            max_iters,
        })
    }

    /// Returns the convergence tolerance for `|f|` and the step error.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns true if either convergence criterion is met.
    pub(crate) fn is_converged(&self, residual: f64, error: f64) -> bool {
        residual.abs() < self.tolerance || error < self.tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let config = Config::default();
        assert_eq!(config.tolerance(), 1e-6);
        assert_eq!(config.max_iters(), 100);
    }

    #[test]
    fn rejects_bad_tolerance() {
        assert_eq!(Config::new(0.0, 10), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(-1e-6, 10), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(f64::NAN, 10), Err(ConfigError::Tolerance));
    }

    #[test]
    fn rejects_zero_iterations() {
        assert_eq!(Config::new(1e-6, 0), Err(ConfigError::MaxIters));
    }

    #[test]
    fn convergence_uses_either_criterion() {
        let config = Config::new(1e-3, 10).unwrap();
        assert!(config.is_converged(1e-4, 1.0));
        assert!(config.is_converged(-1e-4, 1.0));
        assert!(config.is_converged(1.0, 1e-4));
        assert!(!config.is_converged(1.0, 1.0));
        assert!(!config.is_converged(f64::NAN, f64::NAN));
    }
}
