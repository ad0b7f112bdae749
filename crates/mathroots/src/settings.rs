use std::{fmt, str::FromStr};

use mathroots_solvers::{
    equation::{Config, ConfigError},
    scan::{Range, RangeError, SeedOptions, SeedOptionsError},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The root-finding method used by a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Bisection on every sign-change bracket of the search range.
    #[default]
    Bisection,

    /// Newton-Raphson from every seed found in the search range.
    Newton,
}

impl Method {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Method::Bisection => "bisection",
            Method::Newton => "newton",
        }
    }

    /// The search range used when the settings ask for an automatic interval.
    #[must_use]
    pub fn default_range(self) -> Range {
        match self {
            Method::Bisection => Range::default_brackets(),
            Method::Newton => Range::default_seeds(),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bisection" | "bisect" => Ok(Method::Bisection),
            "newton" | "newton-raphson" | "newton_raphson" => Ok(Method::Newton),
            _ => Err(SettingsError::UnknownMethod(s.to_owned())),
        }
    }
}

/// User-facing solve settings.
///
/// A `Settings` value is a snapshot: a solve reads it by reference and
/// callers replace it wholesale rather than editing it mid-solve. Missing
/// fields take their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub method: Method,

    /// Convergence threshold on `|f|` and on the step error.
    pub tolerance: f64,

    pub max_iterations: usize,

    /// Use the method's default search range instead of the interval below.
    pub auto_interval: bool,

    pub interval_start: f64,
    pub interval_end: f64,
    pub interval_step: f64,

    /// Newton roots closer than this to an earlier root are dropped.
    pub root_tolerance: f64,

    /// Maximum number of Newton seeds tried.
    pub seed_limit: usize,

    /// Grid points with `|f(x)|` below this become Newton seeds.
    pub near_zero_threshold: f64,
}

/// Errors that can occur when loading or validating [`Settings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("unknown method '{0}' (expected 'bisection' or 'newton')")]
    UnknownMethod(String),

    #[error("invalid solver settings: {0}")]
    Solver(#[from] ConfigError),

    #[error("invalid search interval: {0}")]
    Range(#[from] RangeError),

    #[error("invalid seed settings: {0}")]
    Seeds(#[from] SeedOptionsError),

    #[error("root tolerance must be finite and non-negative (got {0})")]
    RootTolerance(f64),

    #[error("could not parse settings: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            method: Method::Bisection,
            tolerance: 1e-6,
            max_iterations: 100,
            auto_interval: true,
            interval_start: -100.0,
            interval_end: 100.0,
            interval_step: 0.1,
            root_tolerance: 0.01,
            seed_limit: 5,
            near_zero_threshold: 10.0,
        }
    }
}

impl Settings {
    /// Parses settings from TOML and validates them.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for these settings or
    /// if the values fail [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks every value a solve depends on.
    ///
    /// The manual interval is checked even when `auto_interval` is set, so a
    /// stored snapshot stays usable if the flag is later turned off.
    ///
    /// # Errors
    ///
    /// Returns the first invalid value found.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.solver_config()?;
        Range::new(self.interval_start, self.interval_end, self.interval_step)?;
        self.seed_options().validate()?;
        if !self.root_tolerance.is_finite() || self.root_tolerance < 0.0 {
            return Err(SettingsError::RootTolerance(self.root_tolerance));
        }
        Ok(())
    }

    /// Returns the solver configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance or iteration limit is invalid.
    pub fn solver_config(&self) -> Result<Config, SettingsError> {
        Ok(Config::new(self.tolerance, self.max_iterations)?)
    }

    /// Returns the range to scan for brackets or seeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the manual interval is used and is invalid.
    pub fn search_range(&self) -> Result<Range, SettingsError> {
        if self.auto_interval {
            return Ok(self.method.default_range());
        }
        Ok(Range::new(
            self.interval_start,
            self.interval_end,
            self.interval_step,
        )?)
    }

    #[must_use]
    pub fn seed_options(&self) -> SeedOptions {
        SeedOptions {
            limit: self.seed_limit,
            threshold: self.near_zero_threshold,
        }
    }

    /// Returns a copy that scans `[start, end]` in steps of `step`.
    #[must_use]
    pub fn with_interval(self, start: f64, end: f64, step: f64) -> Self {
        Self {
            auto_interval: false,
            interval_start: start,
            interval_end: end,
            interval_step: step,
            ..self
        }
    }
}
