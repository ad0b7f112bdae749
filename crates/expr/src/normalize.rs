use crate::{
    expr::Func,
    lexer::{is_ident_continue, is_ident_start, number_len},
};

/// Alternative spellings accepted in user input and their canonical names.
const ALIASES: &[(&str, &str)] = &[
    ("sen", "sin"),
    ("tg", "tan"),
    ("ln", "log"),
    ("arcsin", "asin"),
    ("arcsen", "asin"),
    ("asen", "asin"),
    ("arccos", "acos"),
    ("arctan", "atan"),
    ("arctg", "atan"),
    ("senh", "sinh"),
    ("raiz", "sqrt"),
    ("π", "pi"),
];

/// Rewrites human-entered equation text into canonical form.
///
/// - Anything after `=` is dropped; the equation is read as `lhs = 0`.
/// - `^` becomes `**`.
/// - Implicit multiplication is made explicit: `2x` → `2*x`, `)x` → `)*x`,
///   `x(x+1)` → `x*(x+1)`, `2(x)` → `2*(x)`, `)(` → `)*(`. A name followed by
///   `(` is left alone when it is a function, so `sin(x)` stays a call.
/// - Alias names are replaced by their canonical spelling (`sen` → `sin`,
///   `ln` → `log`).
///
/// Normalization never fails. Text that still is not a valid expression is
/// rejected later by [`compile`](crate::compile). Applying `normalize` to its
/// own output returns it unchanged.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let lhs = raw.split_once('=').map_or(raw, |(lhs, _)| lhs).trim();
    let powered = lhs.replace('^', "**");
    let explicit = insert_multiplication(&powered);
    replace_aliases(&explicit)
}

/// A lexical run of equation text.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Segment<'a> {
    Number(&'a str),
    Ident(&'a str),
    Other(char),
}

fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        let len = if let Some(len) = number_len(rest) {
            out.push(Segment::Number(&rest[..len]));
            len
        } else if is_ident_start(ch) {
            let len = rest
                .char_indices()
                .find(|&(_, c)| !is_ident_continue(c))
                .map_or(rest.len(), |(i, _)| i);
            out.push(Segment::Ident(&rest[..len]));
            len
        } else {
            out.push(Segment::Other(ch));
            ch.len_utf8()
        };
        rest = &rest[len..];
    }

    out
}

fn canonical_name(name: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map_or(name, |(_, canonical)| canonical)
}

fn is_function(name: &str) -> bool {
    Func::from_name(canonical_name(name)).is_some()
}

fn insert_multiplication(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut prev: Option<Segment<'_>> = None;

    for segment in segments(text) {
        let needs_star = match (prev, segment) {
            (
                Some(Segment::Number(_) | Segment::Other(')')),
                Segment::Ident(_) | Segment::Other('('),
            ) => true,
            (Some(Segment::Other(')')), Segment::Number(_)) => true,
            (Some(Segment::Ident(name)), Segment::Other('(')) => !is_function(name),
            _ => false,
        };
        if needs_star {
            out.push('*');
        }

        match segment {
            Segment::Number(text) | Segment::Ident(text) => out.push_str(text),
            Segment::Other(ch) => out.push(ch),
        }
        prev = Some(segment);
    }

    out
}

fn replace_aliases(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in segments(text) {
        match segment {
            Segment::Ident(name) => out.push_str(canonical_name(name)),
            Segment::Number(text) => out.push_str(text),
            Segment::Other(ch) => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_right_hand_side() {
        assert_eq!(normalize("x^2 - 4 = 0"), "x**2 - 4");
        assert_eq!(normalize("  x = 3 "), "x");
    }

    #[test]
    fn replaces_caret_with_power() {
        assert_eq!(normalize("x^3 - x"), "x**3 - x");
    }

    #[test]
    fn inserts_implicit_multiplication() {
        assert_eq!(normalize("2x"), "2*x");
        assert_eq!(normalize("3.5x^2"), "3.5*x**2");
        assert_eq!(normalize("(x+1)x"), "(x+1)*x");
        assert_eq!(normalize("x(x+1)"), "x*(x+1)");
        assert_eq!(normalize("2(x+1)"), "2*(x+1)");
        assert_eq!(normalize("(x+1)(x-1)"), "(x+1)*(x-1)");
        assert_eq!(normalize("(x+1)2"), "(x+1)*2");
    }

    #[test]
    fn leaves_function_calls_alone() {
        assert_eq!(normalize("sin(x) + 2cos(x)"), "sin(x) + 2*cos(x)");
        assert_eq!(normalize("log10(x)"), "log10(x)");
    }

    #[test]
    fn keeps_scientific_notation() {
        assert_eq!(normalize("x - 1e-6"), "x - 1e-6");
        assert_eq!(normalize("2.5E3x"), "2.5E3*x");
        assert_eq!(normalize("2e"), "2*e");
    }

    #[test]
    fn maps_aliases_on_whole_names() {
        assert_eq!(normalize("sen(x) - ln(x)"), "sin(x) - log(x)");
        assert_eq!(normalize("2sen(x)"), "2*sin(x)");
        assert_eq!(normalize("arctg(x) + tg(x)"), "atan(x) + tan(x)");
        assert_eq!(normalize("x - π"), "x - pi");
        // `sin` and `asin` contain no alias as a whole word.
        assert_eq!(normalize("asin(x) + sinh(x)"), "asin(x) + sinh(x)");
    }

    #[test]
    fn is_idempotent_on_canonical_text() {
        for canonical in ["x**2 - 4", "2*x*(x + 1)", "sin(x) - log(x)/x", "x - 1e-6"] {
            assert_eq!(normalize(canonical), canonical);
        }
        for raw in ["2x^2 - 3x(x+1) = 5", "sen(2x)", "(x-1)(x+2)"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn never_fails_on_garbage() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("=== "), "");
        assert_eq!(normalize("$#@"), "$#@");
    }
}
