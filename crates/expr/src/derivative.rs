//! Symbolic differentiation with respect to `x`.
//!
//! Rules are applied structurally and results are built through simplifying
//! constructors that fold numeric literals and drop `0`/`1` identities, which
//! keeps derivative trees close to what one would write by hand
//! (`x**3 - x` differentiates to `3*x**2 - 1`).

use crate::expr::{BinaryOp, Expr, Func};

impl Expr {
    /// Returns the derivative of the expression with respect to `x`.
    #[must_use]
    pub fn derivative(&self) -> Expr {
        match self {
            Expr::Number(_) | Expr::Constant(_) => num(0.0),
            Expr::Var => num(1.0),
            Expr::Neg(inner) => neg(inner.derivative()),
            Expr::Binary(op, lhs, rhs) => binary_derivative(*op, lhs, rhs),
            Expr::Call(func, arg) => mul(outer_derivative(*func, arg), arg.derivative()),
        }
    }
}

fn binary_derivative(op: BinaryOp, u: &Expr, v: &Expr) -> Expr {
    match op {
        BinaryOp::Add => add(u.derivative(), v.derivative()),
        BinaryOp::Sub => sub(u.derivative(), v.derivative()),
        BinaryOp::Mul => add(
            mul(u.derivative(), v.clone()),
            mul(u.clone(), v.derivative()),
        ),
        BinaryOp::Div => div(
            sub(
                mul(u.derivative(), v.clone()),
                mul(u.clone(), v.derivative()),
            ),
            pow(v.clone(), num(2.0)),
        ),
        BinaryOp::Pow => power_derivative(u, v),
    }
}

/// d/dx u**v, specialised for constant exponents and constant bases.
fn power_derivative(u: &Expr, v: &Expr) -> Expr {
    if v.is_constant() {
        return mul(
            mul(v.clone(), pow(u.clone(), sub(v.clone(), num(1.0)))),
            u.derivative(),
        );
    }

    if u.is_constant() {
        return mul(
            mul(pow(u.clone(), v.clone()), call(Func::Log, u.clone())),
            v.derivative(),
        );
    }

    // u**v * (v' * log(u) + v * u' / u)
    mul(
        pow(u.clone(), v.clone()),
        add(
            mul(v.derivative(), call(Func::Log, u.clone())),
            div(mul(v.clone(), u.derivative()), u.clone()),
        ),
    )
}

/// Derivative of `func` evaluated at `u`, before the chain-rule factor `u'`.
fn outer_derivative(func: Func, u: &Expr) -> Expr {
    let u = || u.clone();
    let one_minus_square = || sub(num(1.0), pow(u(), num(2.0)));

    match func {
        Func::Sin => call(Func::Cos, u()),
        Func::Cos => neg(call(Func::Sin, u())),
        Func::Tan => div(num(1.0), pow(call(Func::Cos, u()), num(2.0))),
        Func::Asin => div(num(1.0), call(Func::Sqrt, one_minus_square())),
        Func::Acos => neg(div(num(1.0), call(Func::Sqrt, one_minus_square()))),
        Func::Atan => div(num(1.0), add(num(1.0), pow(u(), num(2.0)))),
        Func::Sinh => call(Func::Cosh, u()),
        Func::Cosh => call(Func::Sinh, u()),
        Func::Tanh => div(num(1.0), pow(call(Func::Cosh, u()), num(2.0))),
        Func::Asinh => div(
            num(1.0),
            call(Func::Sqrt, add(pow(u(), num(2.0)), num(1.0))),
        ),
        Func::Acosh => div(
            num(1.0),
            call(Func::Sqrt, sub(pow(u(), num(2.0)), num(1.0))),
        ),
        Func::Atanh => div(num(1.0), one_minus_square()),
        Func::Exp => call(Func::Exp, u()),
        Func::Log => div(num(1.0), u()),
        Func::Log10 => div(num(1.0), mul(u(), call(Func::Log, num(10.0)))),
        Func::Sqrt => div(num(1.0), mul(num(2.0), call(Func::Sqrt, u()))),
        Func::Abs => div(u(), call(Func::Abs, u())),
    }
}

fn num(value: f64) -> Expr {
    Expr::Number(value)
}

fn call(func: Func, arg: Expr) -> Expr {
    Expr::Call(func, Box::new(arg))
}

fn neg(expr: Expr) -> Expr {
    match expr {
        Expr::Number(value) => num(-value),
        Expr::Neg(inner) => *inner,
        other => Expr::Neg(Box::new(other)),
    }
}

fn add(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs.as_number(), rhs.as_number()) {
        (Some(a), Some(b)) => num(a + b),
        (Some(a), _) if a == 0.0 => rhs,
        (_, Some(b)) if b == 0.0 => lhs,
        _ => Expr::Binary(BinaryOp::Add, Box::new(lhs), Box::new(rhs)),
    }
}

fn sub(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs.as_number(), rhs.as_number()) {
        (Some(a), Some(b)) => num(a - b),
        (Some(a), _) if a == 0.0 => neg(rhs),
        (_, Some(b)) if b == 0.0 => lhs,
        _ => Expr::Binary(BinaryOp::Sub, Box::new(lhs), Box::new(rhs)),
    }
}

fn mul(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs.as_number(), rhs.as_number()) {
        (Some(a), Some(b)) => num(a * b),
        (Some(a), _) if a == 0.0 => num(0.0),
        (_, Some(b)) if b == 0.0 => num(0.0),
        (Some(a), _) if a == 1.0 => rhs,
        (_, Some(b)) if b == 1.0 => lhs,
        (Some(a), _) if a == -1.0 => neg(rhs),
        (_, Some(b)) if b == -1.0 => neg(lhs),
        _ => Expr::Binary(BinaryOp::Mul, Box::new(lhs), Box::new(rhs)),
    }
}

fn div(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs.as_number(), rhs.as_number()) {
        (Some(a), Some(b)) if b != 0.0 => num(a / b),
        (Some(a), _) if a == 0.0 => num(0.0),
        (_, Some(b)) if b == 1.0 => lhs,
        _ => Expr::Binary(BinaryOp::Div, Box::new(lhs), Box::new(rhs)),
    }
}

fn pow(base: Expr, exponent: Expr) -> Expr {
    match (base.as_number(), exponent.as_number()) {
        (Some(a), Some(b)) => num(a.powf(b)),
        (_, Some(b)) if b == 0.0 => num(1.0),
        (_, Some(b)) if b == 1.0 => base,
        _ => Expr::Binary(BinaryOp::Pow, Box::new(base), Box::new(exponent)),
    }
}

#[cfg(test)]
mod tests {
    use crate::compile;

    use approx::assert_relative_eq;

    /// Central finite difference for cross-checking symbolic results.
    fn numeric_derivative(text: &str, x: f64) -> f64 {
        let f = compile(text).expect("should parse");
        let h = 1e-6;
        (f.eval(x + h) - f.eval(x - h)) / (2.0 * h)
    }

    fn symbolic_derivative(text: &str, x: f64) -> f64 {
        compile(text).expect("should parse").derivative().eval(x)
    }

    #[test]
    fn polynomial_derivative_is_simplified() {
        let df = compile("x**3 - x").expect("should parse").derivative();
        assert_eq!(df.to_string(), "3*x**2 - 1");
        assert_relative_eq!(df.eval(0.0), -1.0);
        assert_relative_eq!(df.eval(2.0), 11.0);
    }

    #[test]
    fn constant_derivative_is_zero() {
        let df = compile("pi + 4").expect("should parse").derivative();
        assert_eq!(df.to_string(), "0");
    }

    #[test]
    fn matches_finite_differences() {
        let cases = [
            ("sin(x)*cos(x)", 0.7),
            ("tan(x)", 0.3),
            ("asin(x) + acos(x)/2", 0.4),
            ("atan(x**2)", 1.3),
            ("sinh(x) - cosh(x) + tanh(x)", 0.5),
            ("asinh(x) + acosh(x + 2) + atanh(x/2)", 0.6),
            ("exp(2*x)/x", 1.1),
            ("log(x) + log10(x)", 2.5),
            ("sqrt(x**2 + 1)", -1.5),
            ("abs(x - 3)", 1.0),
            ("2**x", 1.5),
            ("x**x", 1.7),
            ("e**(-x**2)", 0.8),
        ];

        for (text, x) in cases {
            assert_relative_eq!(
                symbolic_derivative(text, x),
                numeric_derivative(text, x),
                epsilon = 1e-6,
                max_relative = 1e-6
            );
        }
    }
}
