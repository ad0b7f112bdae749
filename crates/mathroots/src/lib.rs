//! Find the real roots of single-variable equations entered as text.
//!
//! An [`Equation`] holds the text a user typed (`2x^2 - 8 = 0`,
//! `sen(x) - x/2`). Solving it normalizes and compiles the text, scans a
//! search range for sign-change brackets or Newton seeds, runs the chosen
//! solver from every candidate, and returns a [`SolveReport`] with one
//! [`SolveResult`] per candidate, including the full iteration trace.
//!
//! ```rust
//! use mathroots::{Equation, Settings};
//!
//! let report = Equation::new("x^2 - 4 = 0").solve(&Settings::default()).unwrap();
//! let roots = report.roots();
//! assert_eq!(roots.len(), 2);
//! assert!((roots[0] + 2.0).abs() < 1e-6);
//! ```
//!
//! [`Settings`] chooses the method (bisection or Newton-Raphson), tolerances,
//! and the search interval, and can be loaded from TOML.
//! [`from_latex`] cleans up LaTeX from formula recognizers before it is used
//! as equation text.

mod dedup;
mod driver;
mod equation;
mod error;
mod latex;
mod report;
mod settings;

pub use dedup::dedup;
pub use equation::{Equation, Validation};
pub use error::SolveError;
pub use latex::from_latex;
pub use report::{Candidate, Failure, IterationRecord, Outcome, SolveReport, SolveResult};
pub use settings::{Method, Settings, SettingsError};

pub use mathroots_expr::{CompiledExpr, ParseError, normalize};
