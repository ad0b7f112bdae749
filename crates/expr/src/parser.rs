use crate::{
    error::ParseError,
    expr::{BinaryOp, Constant, Expr, Func, VARIABLE},
    lexer::{Token, TokenKind, tokenize},
};

/// Binding power of prefix negation.
///
/// Lower than `**` so that `-x**2` parses as `-(x**2)`, higher than `*` so
/// that `-2*x` parses as `(-2)*x`.
const PREFIX_BP: u8 = 5;

/// Deepest expression tree the parser will build.
///
/// Evaluation, differentiation and printing all recurse over the tree, so
/// deeper input is rejected instead of risking a stack overflow.
pub(crate) const MAX_DEPTH: usize = 256;

/// A parsed subtree and its depth.
type Node = (Expr, usize);

/// Parses canonical text into an expression tree.
///
/// # Errors
///
/// Returns a [`ParseError`] if the text is empty, contains characters or
/// tokens outside the grammar, or references identifiers other than `x`,
/// the constants, and the whitelisted functions.
pub(crate) fn parse(text: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        end: text.len(),
        nesting: 0,
    };
    let (expr, _) = parser.expression(0)?;

    match parser.peek() {
        None => Ok(expr),
        Some(token) => Err(unexpected(token)),
    }
}

/// Pratt parser over a token buffer.
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    end: usize,
    nesting: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn offset(&self) -> usize {
        self.peek().map_or(self.end, |token| token.offset)
    }

    fn expression(&mut self, min_bp: u8) -> Result<Node, ParseError> {
        self.nesting += 1;
        if self.nesting > MAX_DEPTH {
            return Err(ParseError::TooDeep {
                offset: self.offset(),
            });
        }

        let (mut lhs, mut depth) = self.prefix()?;

        while let Some(token) = self.peek() {
            if token.kind == TokenKind::RParen {
                break;
            }
            let Some((op, left_bp, right_bp)) = infix_binding_power(&token.kind) else {
                return Err(unexpected(token));
            };
            if left_bp < min_bp {
                break;
            }
            let offset = token.offset;
            self.pos += 1;

            let (rhs, rhs_depth) = self.expression(right_bp)?;
            depth = deeper(depth.max(rhs_depth), offset)?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }

        self.nesting -= 1;
        Ok((lhs, depth))
    }

    fn prefix(&mut self) -> Result<Node, ParseError> {
        let token = self.next().ok_or(ParseError::UnexpectedEnd)?;

        match token.kind {
            TokenKind::Number(value) => Ok((Expr::Number(value), 1)),
            TokenKind::Minus => {
                let (operand, depth) = self.expression(PREFIX_BP)?;
                Ok((Expr::Neg(Box::new(operand)), deeper(depth, token.offset)?))
            }
            TokenKind::Plus => self.expression(PREFIX_BP),
            TokenKind::LParen => {
                let inner = self.expression(0)?;
                self.expect_close()?;
                Ok(inner)
            }
            TokenKind::Ident(name) => self.identifier(name, token.offset),
            _ => Err(unexpected(&token)),
        }
    }

    fn identifier(&mut self, name: String, offset: usize) -> Result<Node, ParseError> {
        if name == VARIABLE {
            return Ok((Expr::Var, 1));
        }
        if let Some(constant) = Constant::from_name(&name) {
            return Ok((Expr::Constant(constant), 1));
        }
        let Some(func) = Func::from_name(&name) else {
            let is_call = self
                .peek()
                .is_some_and(|token| token.kind == TokenKind::LParen);
            return Err(if is_call {
                ParseError::UnknownFunction { name, offset }
            } else {
                ParseError::UnknownIdentifier { name, offset }
            });
        };

        match self.next() {
            Some(Token {
                kind: TokenKind::LParen,
                ..
            }) => {
                let (arg, depth) = self.expression(0)?;
                self.expect_close()?;
                Ok((Expr::Call(func, Box::new(arg)), deeper(depth, offset)?))
            }
            _ => Err(ParseError::MissingArgument { name, offset }),
        }
    }

    fn expect_close(&mut self) -> Result<(), ParseError> {
        match self.next() {
            Some(Token {
                kind: TokenKind::RParen,
                ..
            }) => Ok(()),
            Some(token) => Err(unexpected(&token)),
            None => Err(ParseError::UnexpectedEnd),
        }
    }
}

/// Returns the operator and its left/right binding powers.
///
/// `**` is right-associative; the others are left-associative.
fn infix_binding_power(kind: &TokenKind) -> Option<(BinaryOp, u8, u8)> {
    match kind {
        TokenKind::Plus => Some((BinaryOp::Add, 1, 2)),
        TokenKind::Minus => Some((BinaryOp::Sub, 1, 2)),
        TokenKind::Star => Some((BinaryOp::Mul, 3, 4)),
        TokenKind::Slash => Some((BinaryOp::Div, 3, 4)),
        TokenKind::Pow => Some((BinaryOp::Pow, 7, 6)),
        _ => None,
    }
}

/// Returns the depth of a node one level above `depth`.
fn deeper(depth: usize, offset: usize) -> Result<usize, ParseError> {
    if depth >= MAX_DEPTH {
        return Err(ParseError::TooDeep { offset });
    }
    Ok(depth + 1)
}

fn unexpected(token: &Token) -> ParseError {
    ParseError::UnexpectedToken {
        found: token.kind.describe(),
        offset: token.offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn eval(text: &str, x: f64) -> f64 {
        parse(text).expect("should parse").eval(x)
    }

    #[test]
    fn respects_precedence() {
        assert_relative_eq!(eval("1 + 2*3", 0.0), 7.0);
        assert_relative_eq!(eval("(1 + 2)*3", 0.0), 9.0);
        assert_relative_eq!(eval("8/4/2", 0.0), 1.0);
        assert_relative_eq!(eval("10 - 4 - 3", 0.0), 3.0);
    }

    #[test]
    fn power_is_right_associative_and_binds_tighter_than_negation() {
        assert_relative_eq!(eval("2**3**2", 0.0), 512.0);
        assert_relative_eq!(eval("-x**2", 3.0), -9.0);
        assert_relative_eq!(eval("2**-x", 1.0), 0.5);
        assert_relative_eq!(eval("-2*x", 3.0), -6.0);
    }

    #[test]
    fn parses_calls_constants_and_variable() {
        assert_relative_eq!(eval("sin(pi/2) + log(e)", 0.0), 2.0, epsilon = 1e-12);
        assert_relative_eq!(eval("sqrt(x) * abs(-x)", 4.0), 8.0);
        assert_relative_eq!(eval("π", 0.0), std::f64::consts::PI);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn rejects_unknown_identifiers() {
        assert_eq!(
            parse("y + 1"),
            Err(ParseError::UnknownIdentifier {
                name: "y".into(),
                offset: 0
            })
        );
    }

    #[test]
    fn rejects_unknown_functions() {
        assert_eq!(
            parse("2*foo(x)"),
            Err(ParseError::UnknownFunction {
                name: "foo".into(),
                offset: 2
            })
        );
    }

    #[test]
    fn rejects_function_without_argument() {
        assert!(matches!(
            parse("sin + 1"),
            Err(ParseError::MissingArgument { .. })
        ));
    }

    #[test]
    fn rejects_malformed_structure() {
        assert_eq!(parse("x +"), Err(ParseError::UnexpectedEnd));
        assert_eq!(parse("(x + 1"), Err(ParseError::UnexpectedEnd));
        assert!(matches!(
            parse("x + 1)"),
            Err(ParseError::UnexpectedToken { offset: 5, .. })
        ));
        assert!(matches!(
            parse("x 2"),
            Err(ParseError::UnexpectedToken { offset: 2, .. })
        ));
        assert!(matches!(
            parse("*x"),
            Err(ParseError::UnexpectedToken { offset: 0, .. })
        ));
    }

    #[test]
    fn rejects_input_nested_too_deeply() {
        let parens = format!("{}x{}", "(".repeat(200_000), ")".repeat(200_000));
        assert_eq!(
            parse(&parens),
            Err(ParseError::TooDeep { offset: MAX_DEPTH })
        );

        let negations = format!("{}x", "-".repeat(200_000));
        assert!(matches!(parse(&negations), Err(ParseError::TooDeep { .. })));

        let powers = vec!["x"; 1_000].join("**");
        assert!(matches!(parse(&powers), Err(ParseError::TooDeep { .. })));

        let sum = vec!["x"; 100_000].join(" + ");
        assert!(matches!(parse(&sum), Err(ParseError::TooDeep { .. })));
    }

    #[test]
    fn accepts_reasonable_nesting() {
        let nested = format!("{}x{}", "(".repeat(100), ")".repeat(100));
        assert_relative_eq!(eval(&nested, 2.0), 2.0);

        let sum = vec!["x"; 100].join(" + ");
        assert_relative_eq!(eval(&sum, 1.0), 100.0);
    }
}
