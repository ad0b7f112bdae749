use std::cmp::Ordering;

use mathroots_core::RealFunction;
use thiserror::Error;

use super::Range;

/// The seed returned when a sweep finds no candidates.
pub const FALLBACK_SEED: f64 = 0.0;

/// Controls how many seeds are kept and which grid points qualify.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedOptions {
    /// Maximum number of seeds returned.
    pub limit: usize,

    /// Grid points with `|f(x)|` below this value become candidates.
    pub threshold: f64,
}

/// Errors that can occur when validating [`SeedOptions`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SeedOptionsError {
    #[error("seed limit must be at least 1")]
    Limit,

    #[error("near-zero threshold must be finite and positive (got {0})")]
    Threshold(f64),
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            limit: 5,
            threshold: 10.0,
        }
    }
}

impl SeedOptions {
    /// Validates the options.
    ///
    /// # Errors
    ///
    /// Returns an error if `limit` is zero or `threshold` is not finite and
    /// positive.
    pub fn validate(&self) -> Result<(), SeedOptionsError> {
        if self.limit == 0 {
            return Err(SeedOptionsError::Limit);
        }
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(SeedOptionsError::Threshold(self.threshold));
        }
        Ok(())
    }
}

/// Starting points for Newton-Raphson, best first.
#[derive(Debug, Clone, PartialEq)]
pub struct Seeds {
    values: Vec<f64>,
    fallback: bool,
}

impl Seeds {
    fn fallback() -> Self {
        Self {
            values: vec![FALLBACK_SEED],
            fallback: true,
        }
    }

    /// Returns the seeds, ordered by increasing `|f(x)|`.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns true if the sweep found nothing and [`FALLBACK_SEED`] was used.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// Finds promising starting points for Newton-Raphson.
///
/// Every grid point of `range` (including `end`) with `|f(x)|` below the
/// threshold is a candidate, as is the midpoint of each pair of neighbours
/// whose values differ in sign. A value of exactly zero has its own sign
/// here, so a grid root next to a nonzero value also contributes a midpoint.
///
/// Candidates are ranked by `|f|` (stable, so ties keep grid order) and the
/// best `options.limit` are returned. Non-finite values are skipped. If no
/// candidate survives, the result holds only [`FALLBACK_SEED`] and is flagged
/// as a fallback.
pub fn find_seeds<F>(f: &F, range: &Range, options: SeedOptions) -> Seeds
where
    F: RealFunction + ?Sized,
{
    let mut candidates: Vec<(f64, f64)> = Vec::new();
    let mut prev: Option<(f64, f64)> = None;

    for x in range.points() {
        let Some(fx) = f.eval_finite(x) else {
            prev = None;
            continue;
        };

        if let Some((px, pfx)) = prev
            && sign(pfx) != sign(fx)
        {
            let mid = 0.5 * (px + x);
            if let Some(fm) = f.eval_finite(mid) {
                candidates.push((mid, fm.abs()));
            }
        }

        if fx.abs() < options.threshold {
            candidates.push((x, fx.abs()));
        }

        prev = Some((x, fx));
    }

    if candidates.is_empty() {
        return Seeds::fallback();
    }

    candidates.sort_by(|a, b| a.1.total_cmp(&b.1));
    candidates.truncate(options.limit.max(1));

    Seeds {
        values: candidates.into_iter().map(|(x, _)| x).collect(),
        fallback: false,
    }
}

/// Three-valued sign: negative, zero, or positive.
fn sign(value: f64) -> Option<Ordering> {
    value.partial_cmp(&0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn coarse_grid_finds_zero_and_both_crossings() {
        let f = |x: f64| x.powi(3) - x;
        let range = Range::new(-10.0, 10.0, 10.0).unwrap();
        let seeds = find_seeds(&f, &range, SeedOptions::default());

        assert!(!seeds.is_fallback());
        assert_eq!(seeds.values(), &[0.0, -5.0, 5.0]);
    }

    #[test]
    fn ranks_by_magnitude_and_truncates() {
        let f = |x: f64| x - 0.3;
        let range = Range::new(-2.0, 2.0, 1.0).unwrap();
        let options = SeedOptions {
            limit: 2,
            ..SeedOptions::default()
        };
        let seeds = find_seeds(&f, &range, options);

        assert_eq!(seeds.values().len(), 2);
        assert_relative_eq!(seeds.values()[0], 0.5);
        assert_relative_eq!(seeds.values()[1], 0.0);
    }

    #[test]
    fn skips_non_finite_values() {
        let f = |x: f64| x.sqrt() - 2.0;
        let range = Range::new(-5.0, 5.0, 1.0).unwrap();
        let seeds = find_seeds(&f, &range, SeedOptions::default());

        assert!(!seeds.is_fallback());
        assert_eq!(seeds.values()[0], 4.0);
        assert!(seeds.values().iter().all(|&x| x >= 0.0));
    }

    #[test]
    fn falls_back_when_nothing_is_near_zero() {
        let f = |x: f64| x * x + 1000.0;
        let seeds = find_seeds(&f, &Range::default_seeds(), SeedOptions::default());

        assert!(seeds.is_fallback());
        assert_eq!(seeds.values(), &[FALLBACK_SEED]);
    }

    #[test]
    fn options_validation() {
        assert!(SeedOptions::default().validate().is_ok());

        let zero_limit = SeedOptions {
            limit: 0,
            ..SeedOptions::default()
        };
        assert_eq!(zero_limit.validate(), Err(SeedOptionsError::Limit));

        let bad_threshold = SeedOptions {
            threshold: -1.0,
            ..SeedOptions::default()
        };
        assert_eq!(
            bad_threshold.validate(),
            Err(SeedOptionsError::Threshold(-1.0))
        );
    }
}
