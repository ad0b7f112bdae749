use std::f64::consts::{E, PI};

/// Name of the single free variable in an equation.
pub const VARIABLE: &str = "x";

/// Expression tree for a real function of `x`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),
    /// A named mathematical constant.
    Constant(Constant),
    /// The free variable `x`.
    Var,
    /// Unary negation.
    Neg(Box<Expr>),
    /// A binary arithmetic operation.
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    /// A call to a whitelisted function.
    Call(Func, Box<Expr>),
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Named constants recognized by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    /// π, written `pi` or `π`.
    Pi,
    /// Euler's number, written `e`.
    E,
}

/// Functions that equations may call.
///
/// Logarithms follow the usual analysis convention: `log` is the natural
/// logarithm and `log10` the decimal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    Exp,
    Log,
    Log10,
    Sqrt,
    Abs,
}

impl Constant {
    /// Returns the constant for a canonical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pi" | "π" => Some(Self::Pi),
            "e" => Some(Self::E),
            _ => None,
        }
    }

    /// Returns the canonical name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
        }
    }

    /// Returns the numeric value.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Pi => PI,
            Self::E => E,
        }
    }
}

impl Func {
    /// Every supported function, in documentation order.
    pub const ALL: [Func; 17] = [
        Func::Sin,
        Func::Cos,
        Func::Tan,
        Func::Asin,
        Func::Acos,
        Func::Atan,
        Func::Sinh,
        Func::Cosh,
        Func::Tanh,
        Func::Asinh,
        Func::Acosh,
        Func::Atanh,
        Func::Exp,
        Func::Log,
        Func::Log10,
        Func::Sqrt,
        Func::Abs,
    ];

    /// Returns the function for a canonical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|func| func.name() == name)
    }

    /// Returns the canonical name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Asinh => "asinh",
            Self::Acosh => "acosh",
            Self::Atanh => "atanh",
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Log10 => "log10",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
        }
    }

    /// Applies the function to a value.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Sin => value.sin(),
            Self::Cos => value.cos(),
            Self::Tan => value.tan(),
            Self::Asin => value.asin(),
            Self::Acos => value.acos(),
            Self::Atan => value.atan(),
            Self::Sinh => value.sinh(),
            Self::Cosh => value.cosh(),
            Self::Tanh => value.tanh(),
            Self::Asinh => value.asinh(),
            Self::Acosh => value.acosh(),
            Self::Atanh => value.atanh(),
            Self::Exp => value.exp(),
            Self::Log => value.ln(),
            Self::Log10 => value.log10(),
            Self::Sqrt => value.sqrt(),
            Self::Abs => value.abs(),
        }
    }
}

impl BinaryOp {
    /// Applies the operator to two values.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }
}

impl Expr {
    /// Evaluates the expression at `x`.
    ///
    /// Undefined operations follow IEEE 754: `1/0` is infinite and `log(-1)`
    /// is NaN.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Expr::Number(value) => *value,
            Expr::Constant(constant) => constant.value(),
            Expr::Var => x,
            Expr::Neg(inner) => -inner.eval(x),
            Expr::Binary(op, lhs, rhs) => op.apply(lhs.eval(x), rhs.eval(x)),
            Expr::Call(func, arg) => func.apply(arg.eval(x)),
        }
    }

    /// Returns true if the expression does not depend on `x`.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        match self {
            Expr::Number(_) | Expr::Constant(_) => true,
            Expr::Var => false,
            Expr::Neg(inner) | Expr::Call(_, inner) => inner.is_constant(),
            Expr::Binary(_, lhs, rhs) => lhs.is_constant() && rhs.is_constant(),
        }
    }

    /// Returns the literal value if this is a number node.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Expr::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Counts the nodes in the tree.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Expr::Number(_) | Expr::Constant(_) | Expr::Var => 1,
            Expr::Neg(inner) | Expr::Call(_, inner) => 1 + inner.size(),
            Expr::Binary(_, lhs, rhs) => 1 + lhs.size() + rhs.size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    #[test]
    fn evaluates_polynomial() {
        // x**2 - 4
        let expr = binary(
            BinaryOp::Sub,
            binary(BinaryOp::Pow, Expr::Var, Expr::Number(2.0)),
            Expr::Number(4.0),
        );

        assert_relative_eq!(expr.eval(3.0), 5.0);
        assert_relative_eq!(expr.eval(-2.0), 0.0);
        assert!(!expr.is_constant());
        assert_eq!(expr.size(), 5);
    }

    #[test]
    fn undefined_points_are_not_finite() {
        let log = Expr::Call(Func::Log, Box::new(Expr::Var));
        assert!(log.eval(-1.0).is_nan());

        let reciprocal = binary(BinaryOp::Div, Expr::Number(1.0), Expr::Var);
        assert!(reciprocal.eval(0.0).is_infinite());
    }

    #[test]
    fn function_names_round_trip() {
        for func in Func::ALL {
            assert_eq!(Func::from_name(func.name()), Some(func));
        }
        assert_eq!(Func::from_name("sen"), None);
    }

    #[test]
    fn constants_have_expected_values() {
        assert_eq!(Constant::from_name("π"), Some(Constant::Pi));
        assert_relative_eq!(Constant::E.value(), std::f64::consts::E);
        let expr = Expr::Call(Func::Sin, Box::new(Expr::Constant(Constant::Pi)));
        assert!(expr.is_constant());
        assert_relative_eq!(expr.eval(0.0), 0.0, epsilon = 1e-12);
    }
}
