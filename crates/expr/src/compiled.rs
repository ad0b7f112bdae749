use std::fmt;

use mathroots_core::RealFunction;

use crate::{error::ParseError, expr::Expr, normalize::normalize, parser::parse};

/// A parsed expression ready for numeric evaluation.
///
/// Compilation is cheap, so callers may compile the same text once per solve
/// without caching.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledExpr {
    expr: Expr,
}

/// Compiles canonical text into an evaluable function of `x`.
///
/// # Errors
///
/// Returns a [`ParseError`] if the text is empty, syntactically invalid, or
/// references unsupported identifiers or functions.
pub fn compile(canonical: &str) -> Result<CompiledExpr, ParseError> {
    parse(canonical).map(CompiledExpr::new)
}

/// Normalizes raw equation text and compiles the result.
///
/// Returns the canonical text alongside the compiled function so callers can
/// show users what was actually solved.
///
/// # Errors
///
/// Returns a [`ParseError`] if the normalized text does not compile.
pub fn compile_equation(raw: &str) -> Result<(String, CompiledExpr), ParseError> {
    let canonical = normalize(raw);
    let compiled = compile(&canonical)?;
    Ok((canonical, compiled))
}

impl CompiledExpr {
    /// Wraps an expression tree.
    #[must_use]
    pub fn new(expr: Expr) -> Self {
        Self { expr }
    }

    /// Returns the underlying expression tree.
    #[must_use]
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Evaluates the function at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.expr.eval(x)
    }

    /// Returns the symbolic derivative with respect to `x`.
    #[must_use]
    pub fn derivative(&self) -> CompiledExpr {
        Self::new(self.expr.derivative())
    }
}

impl RealFunction for CompiledExpr {
    fn eval(&self, x: f64) -> f64 {
        self.expr.eval(x)
    }
}

impl fmt::Display for CompiledExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.expr, f)
    }
}
