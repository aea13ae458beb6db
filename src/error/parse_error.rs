use thiserror::Error;

use crate::{interpreter::lexer::Token, operator::Group};

/// Represents all structural errors found while walking the grammar.
///
/// The syntax checker and the evaluator share one grammar walker, so both
/// report exactly these errors for the same malformed input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A construct opened with `(`, `sin(`, `cos(` or `tan(` was not closed.
    #[error("Expected closing parenthesis ')' after {group} but none found.")]
    MissingRightParen {
        /// The construct that was left open.
        group: Group,
    },
    /// A decimal point not followed by a digit run.
    #[error("Expected digits after decimal point.")]
    MissingFraction,
    /// A token in a position where no grammar rule accepts it.
    #[error("Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: Token,
    },
    /// The input ended where a value was required.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// Parentheses, calls or prefix minuses nested deeper than the walker
    /// allows.
    #[error("Expression is nested more than {limit} levels deep.")]
    NestingTooDeep {
        /// The deepest nesting accepted.
        limit: usize,
    },
    /// A complete expression was followed by more tokens.
    #[error("Extra tokens after expression, starting at: {token}.")]
    UnexpectedTrailingTokens {
        /// The first token that was not consumed.
        token: Token,
    },
}
