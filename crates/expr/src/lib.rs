//! Equation text to evaluable functions.
//!
//! The pipeline has three stages:
//!
//! 1. [`normalize`] rewrites human-entered notation (`2x^2`, `sen(x)`,
//!    `x(x+1) = 3`) into a canonical form (`2*x**2`, `sin(x)`, `x*(x+1)`).
//! 2. [`compile`] parses canonical text into an [`Expr`] tree over a closed set
//!    of nodes: literals, the constants π and e, the variable `x`, arithmetic
//!    operators, and calls to a fixed whitelist of [`Func`]tions.
//! 3. The resulting [`CompiledExpr`] evaluates directly on `f64` and can produce
//!    its symbolic [`derivative`](CompiledExpr::derivative).
//!
//! Evaluation never fails. Points outside a function's domain evaluate to NaN
//! or an infinity, which scanners skip and solvers propagate.

mod compiled;
mod derivative;
mod display;
mod error;
mod expr;
mod lexer;
mod normalize;
mod parser;

pub use compiled::{CompiledExpr, compile, compile_equation};
pub use error::ParseError;
pub use expr::{BinaryOp, Constant, Expr, Func, VARIABLE};
pub use normalize::normalize;
