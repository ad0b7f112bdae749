use thiserror::Error;

/// Slack applied when counting grid steps, so a span that is a whole number
/// of steps up to rounding keeps its final point.
const GRID_SLACK: f64 = 1e-9;

/// Largest number of grid points a range may produce.
const MAX_POINTS: usize = 10_000_000;

/// A sampling grid `start, start + step, ...` that never passes `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    start: f64,
    end: f64,
    step: f64,
    intervals: usize,
}

/// Errors that can occur when constructing a [`Range`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RangeError {
    #[error("range bounds must be finite (got start = {start}, end = {end})")]
    NonFinite { start: f64, end: f64 },

    #[error("range start must be less than end (got start = {start}, end = {end})")]
    Empty { start: f64, end: f64 },

    #[error("range step must be finite and positive (got {step})")]
    Step { step: f64 },

    #[error("range step is too small for the span ({points:.0} grid points)")]
    TooFine { points: f64 },
}

impl Range {
    /// Creates a validated sampling range.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite, if `start >= end`, if the
    /// step is not finite and positive, or if the grid would be unreasonably
    /// large.
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self, RangeError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(RangeError::NonFinite { start, end });
        }
        if start >= end {
            return Err(RangeError::Empty { start, end });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(RangeError::Step { step });
        }

        let span = (end - start) / step + GRID_SLACK;
        if !span.is_finite() || span >= MAX_POINTS as f64 {
            return Err(RangeError::TooFine { points: span });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let intervals = span.floor() as usize;

        Ok(Self {
            start,
            end,
            step,
            intervals,
        })
    }

    /// The default range for bracket scanning: `[-100, 100]` in steps of `0.1`.
    #[must_use]
    pub fn default_brackets() -> Self {
        // Known-good values, unwrap is safe
        Self::new(-100.0, 100.0, 0.1).unwrap()
    }

    /// The default range for Newton seeds: `[-100, 100]` in steps of `1`.
    #[must_use]
    pub fn default_seeds() -> Self {
        // Known-good values, unwrap is safe
        Self::new(-100.0, 100.0, 1.0).unwrap()
    }

    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the grid position with index `i`.
    #[must_use]
    pub fn point(&self, i: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let offset = i as f64 * self.step;
        self.start + offset
    }

    /// Returns the number of grid points, including `start`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals + 1
    }

    /// A range always contains at least its start point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the grid positions in ascending order.
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(|i| self.point(i))
    }
}
