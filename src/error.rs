use thiserror::Error;

/// Lexing errors.
///
/// Raised while scanning the raw input: characters that start no token and
/// literals too large to be represented exactly.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the structural errors found while walking the grammar: unclosed
/// parentheses per construct, a decimal point without digits, and tokens in
/// positions no rule accepts.
pub mod parse_error;
/// Arithmetic errors.
///
/// Contains the failures raised while computing a value, such as division by
/// zero.
pub mod math_error;

pub use lex_error::LexError;
pub use math_error::MathError;
pub use parse_error::ParseError;

/// The phase an [`Error`] was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Tokenizing.
    Lex,
    /// Grammar walking.
    Parse,
    /// Arithmetic.
    Math,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex => write!(f, "lex"),
            Self::Parse => write!(f, "parse"),
            Self::Math => write!(f, "math"),
        }
    }
}

/// Any error a single calculation can fail with.
///
/// Each phase error converts into this type with `?`, so the public entry
/// points return one error type while keeping the three failure classes
/// apart.
///
/// # Example
/// ```
/// use descalc::{
///     calculate,
///     error::{Error, ErrorKind, MathError},
/// };
///
/// let err = calculate("1/0").unwrap_err();
/// assert_eq!(err, Error::Math(MathError::DivisionByZero));
/// assert_eq!(err.kind(), ErrorKind::Math);
/// assert_eq!(err.to_string(), "division by zero");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token sequence does not match the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation hit an arithmetic failure.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl Error {
    /// Returns which phase raised this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lex,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Math(_) => ErrorKind::Math,
        }
    }
}
