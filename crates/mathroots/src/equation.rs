use mathroots_expr::{CompiledExpr, ParseError, compile_equation};

use crate::{driver, error::SolveError, report::SolveReport, settings::Settings};

/// An equation `f(x) = 0` held as the text a user typed.
///
/// The text is normalized and compiled fresh for every operation, so editing
/// it with [`set`](Self::set) takes effect immediately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Equation {
    text: String,
}

/// The result of [`Equation::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    Valid {
        /// The normalized text, e.g. `2*x**2 - 8`.
        processed: String,

        /// The parsed expression as printed back, e.g. `2*x**2 - 8`.
        expression: String,
    },
    Invalid(ParseError),
}

impl Validation {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid { .. })
    }
}

impl Equation {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Replaces the equation text.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Returns true if the text is empty or only whitespace.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Normalizes and compiles the equation.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the normalized text is not a valid
    /// expression in `x`.
    pub fn compile(&self) -> Result<(String, CompiledExpr), ParseError> {
        compile_equation(&self.text)
    }

    /// Checks whether the equation can be solved.
    #[must_use]
    pub fn validate(&self) -> Validation {
        match self.compile() {
            Ok((processed, f)) => Validation::Valid {
                processed,
                expression: f.to_string(),
            },
            Err(error) => Validation::Invalid(error),
        }
    }

    /// Evaluates `f(x)`, returning NaN if the equation does not compile.
    #[must_use]
    pub fn evaluate_at(&self, x: f64) -> f64 {
        self.compile().map_or(f64::NAN, |(_, f)| f.eval(x))
    }

    /// Samples `f` at `points` evenly spaced positions from `x_min` to `x_max`.
    ///
    /// Undefined points keep their NaN or infinite value so plots can show
    /// gaps. Every value is NaN if the equation does not compile.
    #[must_use]
    pub fn sample(&self, x_min: f64, x_max: f64, points: usize) -> Vec<(f64, f64)> {
        let f = self.compile().ok().map(|(_, f)| f);
        let eval = |x: f64| f.as_ref().map_or(f64::NAN, |f| f.eval(x));

        match points {
            0 => Vec::new(),
            1 => vec![(x_min, eval(x_min))],
            _ => {
                #[allow(clippy::cast_precision_loss)]
                let step = (x_max - x_min) / (points - 1) as f64;
                (0..points)
                    .map(|i| {
                        #[allow(clippy::cast_precision_loss)]
                        let x = if i == points - 1 {
                            x_max
                        } else {
                            x_min + i as f64 * step
                        };
                        (x, eval(x))
                    })
                    .collect()
            }
        }
    }

    /// Finds the roots of the equation.
    ///
    /// Scans the search range from `settings` for brackets (bisection) or
    /// seeds (Newton-Raphson) and solves from each one independently. Newton
    /// roots that repeat an earlier root are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid or the equation does not
    /// compile. Failures of individual candidates are reported inside the
    /// [`SolveReport`] instead.
    pub fn solve(&self, settings: &Settings) -> Result<SolveReport, SolveError> {
        settings.validate()?;
        let (expression, f) = self.compile()?;
        driver::run(&self.text, &expression, &f, settings)
    }
}
