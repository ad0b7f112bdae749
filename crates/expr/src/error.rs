use thiserror::Error;

/// Errors that can occur when parsing canonical equation text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("equation is empty")]
    Empty,

    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("invalid number '{text}' at offset {offset}")]
    InvalidNumber { text: String, offset: usize },

    #[error("unexpected {found} at offset {offset}")]
    UnexpectedToken { found: String, offset: usize },

    #[error("unexpected end of equation")]
    UnexpectedEnd,

    #[error("unknown identifier '{name}' at offset {offset}")]
    UnknownIdentifier { name: String, offset: usize },

    #[error("unknown function '{name}' at offset {offset}")]
    UnknownFunction { name: String, offset: usize },

    #[error("function '{name}' must be followed by a parenthesized argument")]
    MissingArgument { name: String, offset: usize },

    #[error("equation is nested too deeply at offset {offset}")]
    TooDeep { offset: usize },
}
