use std::fmt;

use crate::expr::{BinaryOp, Expr};

/// Precedence levels used to decide where parentheses are required.
const PREC_ADD: u8 = 1;
const PREC_MUL: u8 = 2;
const PREC_NEG: u8 = 3;
const PREC_POW: u8 = 4;
const PREC_ATOM: u8 = 5;

impl BinaryOp {
    fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => " + ",
            BinaryOp::Sub => " - ",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "**",
        }
    }

    fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => PREC_ADD,
            BinaryOp::Mul | BinaryOp::Div => PREC_MUL,
            BinaryOp::Pow => PREC_POW,
        }
    }
}

impl Expr {
    fn precedence(&self) -> u8 {
        match self {
            Expr::Number(value) if value.is_sign_negative() => PREC_NEG,
            Expr::Number(_) | Expr::Constant(_) | Expr::Var | Expr::Call(..) => PREC_ATOM,
            Expr::Neg(_) => PREC_NEG,
            Expr::Binary(op, ..) => op.precedence(),
        }
    }
}

/// Prints the expression in canonical form, e.g. `3*x**2 - 1`.
///
/// The output parses back to an equivalent tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write_number(f, *value),
            Expr::Constant(constant) => f.write_str(constant.name()),
            Expr::Var => f.write_str(crate::VARIABLE),
            Expr::Neg(inner) => {
                f.write_str("-")?;
                write_operand(f, inner, inner.precedence() < PREC_NEG)
            }
            Expr::Call(func, arg) => write!(f, "{}({arg})", func.name()),
            Expr::Binary(op, lhs, rhs) => {
                let prec = op.precedence();
                let (lhs_parens, rhs_parens) = if *op == BinaryOp::Pow {
                    (lhs.precedence() <= prec, rhs.precedence() < prec)
                } else {
                    let non_associative = matches!(op, BinaryOp::Sub | BinaryOp::Div);
                    (
                        lhs.precedence() < prec,
                        rhs.precedence() < prec || (non_associative && rhs.precedence() == prec),
                    )
                };
                write_operand(f, lhs, lhs_parens)?;
                f.write_str(op.symbol())?;
                write_operand(f, rhs, rhs_parens)
            }
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("nan");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
    }
    write!(f, "{value}")
}

#[cfg(test)]
mod tests {
    use crate::compile;

    fn round_trip(text: &str) -> String {
        compile(text).expect("should parse").to_string()
    }

    #[test]
    fn prints_canonical_spacing() {
        assert_eq!(round_trip("x**2-4"), "x**2 - 4");
        assert_eq!(round_trip("2 * x + sin( x )"), "2*x + sin(x)");
    }

    #[test]
    fn keeps_required_parentheses() {
        assert_eq!(round_trip("x - (x - 1)"), "x - (x - 1)");
        assert_eq!(round_trip("x/(2*x)"), "x/(2*x)");
        assert_eq!(round_trip("(x + 1)*(x - 1)"), "(x + 1)*(x - 1)");
        assert_eq!(round_trip("(x**2)**3"), "(x**2)**3");
        assert_eq!(round_trip("x**2**3"), "x**2**3");
        assert_eq!(round_trip("(-x)**2"), "(-x)**2");
        assert_eq!(round_trip("-(x + 1)"), "-(x + 1)");
        assert_eq!(round_trip("-x**2"), "-x**2");
    }

    #[test]
    fn drops_redundant_parentheses() {
        assert_eq!(round_trip("(x*2) + (3)"), "x*2 + 3");
        assert_eq!(round_trip("((x))"), "x");
    }

    #[test]
    fn printed_form_parses_to_the_same_values() {
        for text in ["-(x*3)**2 / (1 - x)", "e**-x + pi", "2**-(x - 1)"] {
            let printed = round_trip(text);
            let original = compile(text).expect("should parse");
            let reparsed = compile(&printed).expect("printed form should parse");
            for x in [-1.5, 0.5, 2.0] {
                assert_eq!(original.eval(x).to_bits(), reparsed.eval(x).to_bits());
            }
        }
    }
}
