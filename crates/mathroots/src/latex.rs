//! Cleanup of LaTeX produced by formula recognizers.

/// Function commands that keep their name once the backslash is removed.
const FUNCTIONS: &[&str] = &[
    "sin", "cos", "tan", "arcsin", "arccos", "arctan", "sinh", "cosh", "tanh", "exp", "ln", "log",
];

/// Converts LaTeX math into the plain notation accepted by [`Equation`].
///
/// - `$` delimiters are dropped.
/// - `x^{3}` becomes `x^3`; compound exponents keep parentheses: `x^{n+1}`
///   becomes `x^(n+1)`.
/// - `\frac{a}{b}` becomes `(a)/(b)` and `\sqrt{a}` becomes `sqrt(a)`.
/// - `\cdot` and `\times` become `*`, `\div` becomes `/`.
/// - `\left` and `\right` are dropped, keeping the delimiter that follows.
/// - `\pi` becomes `pi`; function commands such as `\sin` lose the backslash
///   and take a call argument, so `\sin x` becomes `sin(x)`.
/// - `\log_{10}` becomes `log10`.
/// - Any remaining braces become parentheses.
///
/// The result is not validated; pass it to [`Equation`] for that.
///
/// [`Equation`]: crate::Equation
#[must_use]
pub fn from_latex(latex: &str) -> String {
    let chars: Vec<char> = latex.chars().filter(|&ch| ch != '$').collect();
    convert(&chars).trim().to_owned()
}

fn convert(chars: &[char]) -> String {
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\\' => {
                let (name, next) = command_name(chars, i + 1);
                i = command(chars, &name, next, &mut out);
            }
            '^' if chars.get(i + 1) == Some(&'{') => {
                let (inner, next) = group(chars, i + 1);
                let exponent = convert(inner);
                if is_single_token(&exponent) {
                    out.push('^');
                    out.push_str(&exponent);
                } else {
                    out.push_str("^(");
                    out.push_str(&exponent);
                    out.push(')');
                }
                i = next;
            }
            '{' => {
                let (inner, next) = group(chars, i);
                out.push('(');
                out.push_str(&convert(inner));
                out.push(')');
                i = next;
            }
            '}' => i += 1,
            ch => {
                out.push(ch);
                i += 1;
            }
        }
    }

    out
}

/// Emits the replacement for `\name` and returns the index after its arguments.
fn command(chars: &[char], name: &str, mut i: usize, out: &mut String) -> usize {
    match name {
        "frac" => {
            let (numerator, next) = group(chars, skip_spaces(chars, i));
            let (denominator, next) = group(chars, skip_spaces(chars, next));
            out.push('(');
            out.push_str(&convert(numerator));
            out.push_str(")/(");
            out.push_str(&convert(denominator));
            out.push(')');
            next
        }
        "sqrt" => {
            out.push_str("sqrt");
            call_argument(chars, i, out)
        }
        "cdot" | "times" => {
            out.push('*');
            i
        }
        "div" => {
            out.push('/');
            i
        }
        "left" | "right" => {
            // `\left.` is an invisible delimiter.
            if chars.get(i) == Some(&'.') {
                i += 1;
            }
            i
        }
        "pi" => {
            out.push_str("pi");
            i
        }
        "log" if chars.get(i) == Some(&'_') => {
            let (base, next) = if chars.get(i + 1) == Some(&'{') {
                group(chars, i + 1)
            } else {
                (chars.get(i + 1..i + 2).unwrap_or(&[]), i + 2)
            };
            out.push_str("log");
            out.extend(base.iter().filter(|ch| !ch.is_whitespace()));
            call_argument(chars, next.min(chars.len()), out)
        }
        name if FUNCTIONS.contains(&name) => {
            out.push_str(name);
            call_argument(chars, i, out)
        }
        // Spacing commands such as `\,` and `\;`.
        "" => i + 1,
        other => {
            out.push_str(other);
            i
        }
    }
}

/// Emits a parenthesized argument for a function command.
///
/// Accepts `{...}`, an explicit `(`, or a single bare token (`\sin x`).
fn call_argument(chars: &[char], i: usize, out: &mut String) -> usize {
    let start = skip_spaces(chars, i);
    match chars.get(start) {
        Some('{') => {
            let (inner, next) = group(chars, start);
            out.push('(');
            out.push_str(&convert(inner));
            out.push(')');
            next
        }
        Some('(') | None => i,
        Some(ch) if ch.is_alphanumeric() || *ch == '.' => {
            let end = chars[start..]
                .iter()
                .position(|ch| !(ch.is_alphanumeric() || *ch == '.'))
                .map_or(chars.len(), |len| start + len);
            out.push('(');
            out.extend(&chars[start..end]);
            out.push(')');
            end
        }
        Some(_) => i,
    }
}

fn command_name(chars: &[char], start: usize) -> (String, usize) {
    let end = chars[start.min(chars.len())..]
        .iter()
        .position(|ch| !ch.is_ascii_alphabetic())
        .map_or(chars.len(), |len| start + len);
    (chars[start.min(end)..end].iter().collect(), end)
}

/// Returns the contents of the brace group opening at `open` and the index
/// after its closing brace. An unclosed group runs to the end of the input.
fn group(chars: &[char], open: usize) -> (&[char], usize) {
    if chars.get(open) != Some(&'{') {
        return (&[], open);
    }

    let mut depth = 0usize;
    for (offset, &ch) in chars[open..].iter().enumerate() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let close = open + offset;
                    return (&chars[open + 1..close], close + 1);
                }
            }
            _ => {}
        }
    }

    (&chars[open + 1..], chars.len())
}

fn skip_spaces(chars: &[char], mut i: usize) -> usize {
    while chars.get(i).is_some_and(|ch| ch.is_whitespace()) {
        i += 1;
    }
    i
}

/// A plain number or a plain name needs no parentheses as an exponent.
fn is_single_token(text: &str) -> bool {
    !text.is_empty()
        && (text.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
            || text.chars().all(char::is_alphabetic))
}
