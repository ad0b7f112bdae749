//! `mathroots`: find the real roots of an equation from the command line.
//!
//! ```text
//! mathroots solve "x^3 - x" --method newton --range -10 10 10
//! mathroots validate "2x^2 - 8 = 0"
//! mathroots eval "sin(x)" 0 1.5708
//! ```
//!
//! Logging goes to stderr and is controlled by `MATHROOTS_LOG` (or
//! `RUST_LOG`), defaulting to `warn`.

mod render;

use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use mathroots::{Equation, Method, Settings, Validation, from_latex};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mathroots", version, about = "Find the real roots of f(x) = 0")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find the roots of an equation.
    Solve(SolveArgs),

    /// Check that an equation parses and show its canonical form.
    Validate {
        #[command(flatten)]
        input: EquationInput,
    },

    /// Evaluate f(x) at one or more points.
    Eval {
        #[command(flatten)]
        input: EquationInput,

        /// Points to evaluate at.
        #[arg(required = true, allow_negative_numbers = true)]
        x: Vec<f64>,
    },
}

#[derive(Debug, Args)]
struct EquationInput {
    /// The equation, e.g. "x^2 - 4 = 0" or "sen(x) - x/2".
    #[arg(allow_hyphen_values = true)]
    equation: String,

    /// Treat the equation as LaTeX, e.g. "x^{3} - \frac{x}{2}".
    #[arg(long)]
    latex: bool,
}

impl EquationInput {
    fn equation(&self) -> Equation {
        if self.latex {
            Equation::new(from_latex(&self.equation))
        } else {
            Equation::new(self.equation.as_str())
        }
    }
}

#[derive(Debug, Args)]
struct SolveArgs {
    #[command(flatten)]
    input: EquationInput,

    /// Solver to use: bisection or newton.
    #[arg(short, long)]
    method: Option<Method>,

    /// Convergence tolerance on |f| and the step error.
    #[arg(short, long)]
    tolerance: Option<f64>,

    /// Iteration limit per candidate.
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Scan this interval instead of the method's default.
    #[arg(
        long,
        num_args = 3,
        value_names = ["START", "END", "STEP"],
        allow_negative_numbers = true
    )]
    range: Option<Vec<f64>>,

    /// Load settings from a TOML file; flags override its values.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Print every iteration of every candidate.
    #[arg(long)]
    trace: bool,

    /// Print the full report as JSON.
    #[arg(long, conflicts_with = "trace")]
    json: bool,
}

impl SolveArgs {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.settings {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read settings from {}", path.display()))?;
                Settings::from_toml_str(&text)
                    .with_context(|| format!("invalid settings in {}", path.display()))?
            }
            None => Settings::default(),
        };

        if let Some(method) = self.method {
            settings.method = method;
        }
        if let Some(tolerance) = self.tolerance {
            settings.tolerance = tolerance;
        }
        if let Some(max_iterations) = self.max_iterations {
            settings.max_iterations = max_iterations;
        }
        if let Some(&[start, end, step]) = self.range.as_deref() {
            settings = settings.with_interval(start, end, step);
        }

        Ok(settings)
    }
}

fn main() -> Result<ExitCode> {
    init_logging();

    match Cli::parse().command {
        Command::Solve(args) => solve(&args),
        Command::Validate { input } => Ok(validate(&input.equation())),
        Command::Eval { input, x } => Ok(eval(&input.equation(), &x)),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("MATHROOTS_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn solve(args: &SolveArgs) -> Result<ExitCode> {
    let settings = args.settings()?;
    let equation = args.input.equation();
    tracing::debug!(?settings, "resolved settings");

    let report = equation
        .solve(&settings)
        .with_context(|| format!("cannot solve '{}'", equation.text()))?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{json}");
    } else {
        print!("{}", render::report(&report, args.trace));
    }

    Ok(if report.roots().is_empty() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn validate(equation: &Equation) -> ExitCode {
    match equation.validate() {
        Validation::Valid {
            processed,
            expression,
        } => {
            println!("valid");
            println!("processed:  {processed}");
            println!("expression: {expression}");
            ExitCode::SUCCESS
        }
        Validation::Invalid(error) => {
            println!("invalid: {error}");
            ExitCode::FAILURE
        }
    }
}

fn eval(equation: &Equation, points: &[f64]) -> ExitCode {
    if let Validation::Invalid(error) = equation.validate() {
        println!("invalid: {error}");
        return ExitCode::FAILURE;
    }
    for &x in points {
        println!("f({x}) = {}", equation.evaluate_at(x));
    }
    ExitCode::SUCCESS
}
