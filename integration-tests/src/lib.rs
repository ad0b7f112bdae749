//! Shared fixtures for the end-to-end tests.

use mathroots::{Method, Settings};

/// Settings for a Newton solve over a manual interval.
#[must_use]
pub fn newton_over(start: f64, end: f64, step: f64) -> Settings {
    Settings {
        method: Method::Newton,
        ..Settings::default()
    }
    .with_interval(start, end, step)
}

/// Settings for a bisection solve over a manual interval.
#[must_use]
pub fn bisection_over(start: f64, end: f64, step: f64) -> Settings {
    Settings::default().with_interval(start, end, step)
}

/// A settings file as a user would write it.
pub const SETTINGS_TOML: &str = r#"
method = "newton"
tolerance = 1e-10
max_iterations = 50
auto_interval = false
interval_start = -10.0
interval_end = 10.0
interval_step = 10.0
"#;

/// Returns the roots sorted ascending.
#[must_use]
pub fn sorted(mut roots: Vec<f64>) -> Vec<f64> {
    roots.sort_by(f64::total_cmp);
    roots
}
