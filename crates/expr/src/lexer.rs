use crate::error::ParseError;

/// Kinds of lexical tokens in canonical equation text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Pow,
    LParen,
    RParen,
}

/// A token and the byte offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) offset: usize,
}

impl TokenKind {
    /// Human-readable description for error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            TokenKind::Number(value) => format!("number {value}"),
            TokenKind::Ident(name) => format!("identifier '{name}'"),
            TokenKind::Plus => "'+'".into(),
            TokenKind::Minus => "'-'".into(),
            TokenKind::Star => "'*'".into(),
            TokenKind::Slash => "'/'".into(),
            TokenKind::Pow => "'**'".into(),
            TokenKind::LParen => "'('".into(),
            TokenKind::RParen => "')'".into(),
        }
    }
}

/// Returns true if `ch` can start an identifier.
pub(crate) fn is_ident_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

/// Returns true if `ch` can continue an identifier.
pub(crate) fn is_ident_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Returns the byte length of the numeric literal at the start of `text`.
///
/// Accepts `12`, `1.5`, `.5`, `3.` and an optional exponent (`1e-6`, `2.5E3`).
/// The exponent is only consumed when digits follow it, so `2e` is the number
/// `2` followed by the identifier `e`. Returns `None` if `text` does not start
/// with a number.
pub(crate) fn number_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_digits = digits_from(0);
    let mut len = int_digits;
    let mut frac_digits = 0;
    if bytes.get(len) == Some(&b'.') {
        frac_digits = digits_from(len + 1);
        if int_digits > 0 || frac_digits > 0 {
            len += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(len), Some(b'e' | b'E')) {
        let mut exp = len + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            len = exp + exp_digits;
        }
    }

    Some(len)
}

/// Splits canonical text into tokens.
///
/// Both `**` and `^` lex as the power operator.
///
/// # Errors
///
/// Returns an error on characters outside the expression grammar or on
/// malformed numeric literals.
pub(crate) fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(offset, ch)) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        if ch.is_ascii_digit() || ch == '.' {
            let len = number_len(&text[offset..]).ok_or(ParseError::UnexpectedChar { ch, offset })?;
            let literal = &text[offset..offset + len];
            let value = literal.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                text: literal.to_string(),
                offset,
            })?;
            tokens.push(Token {
                kind: TokenKind::Number(value),
                offset,
            });
            while chars.peek().is_some_and(|&(i, _)| i < offset + len) {
                chars.next();
            }
            continue;
        }

        if is_ident_start(ch) {
            let mut name = String::new();
            while let Some(&(_, c)) = chars.peek() {
                if !is_ident_continue(c) {
                    break;
                }
                name.push(c);
                chars.next();
            }
            tokens.push(Token {
                kind: TokenKind::Ident(name),
                offset,
            });
            continue;
        }

        chars.next();
        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '/' => TokenKind::Slash,
            '^' => TokenKind::Pow,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '*' => {
                if chars.peek().is_some_and(|&(_, c)| c == '*') {
                    chars.next();
                    TokenKind::Pow
                } else {
                    TokenKind::Star
                }
            }
            _ => return Err(ParseError::UnexpectedChar { ch, offset }),
        };
        tokens.push(Token { kind, offset });
    }

    Ok(tokens)
}
