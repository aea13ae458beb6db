//! # descalc
//!
//! descalc is an arithmetic expression interpreter written in Rust.
//! It tokenizes, checks and evaluates expressions built from integers,
//! decimals, `+ - * / % ^`, power-of-ten suffixes (`E`) and the
//! trigonometric functions `sin`, `cos` and `tan`. Every result carries a
//! classification saying whether it is an integer, which decides whether
//! `/` is floor division.
//!
//! ```
//! let n = descalc::calculate("2^3^2").unwrap();
//! assert_eq!(n.value, 64.0);
//!
//! let n = descalc::calculate("sin(0)").unwrap();
//! assert!(!n.is_integer);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    error::{Error, ParseError},
    interpreter::{evaluator::evaluate, lexer::Token, parser::check, value::Number},
};

/// Provides the error types for all three phases.
///
/// Lexing, parsing and evaluation each have their own error enum; the
/// umbrella `Error` wraps them so a whole calculation has one failure type
/// while callers can still tell the phases apart.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (lexer, grammar, arithmetic).
/// - Produces human-readable messages naming the offending character, token
///   or construct.
pub mod error;
/// Ties together lexing, grammar walking and evaluation.
///
/// # Responsibilities
/// - Converts text into tokens.
/// - Walks the grammar once per requested action.
/// - Defines the numeric result type.
pub mod interpreter;
/// The operator and function vocabulary shared by the grammar actions.
pub mod operator;
/// Numeric helpers for literal conversion and digit arithmetic.
pub mod util;

/// Evaluates a complete expression.
///
/// The whole input must form one expression; anything left over after it is
/// an error.
///
/// # Errors
/// Returns an error if tokenizing, the grammar or the arithmetic fails.
///
/// # Examples
/// ```
/// use descalc::calculate;
///
/// let n = calculate("12.340").unwrap();
/// assert!((n.value - 12.34).abs() < 1e-12);
/// assert!(!n.is_integer);
///
/// assert!(calculate("(2+3").is_err());
/// assert!(calculate("2 3").is_err());
/// ```
pub fn calculate(source: &str) -> Result<Number, Error> {
    let tokens = interpreter::lexer::tokenize(source)?;
    let (rest, number) = evaluate(&tokens)?;
    reject_trailing(rest)?;
    debug!("{source:?} = {number}");
    Ok(number)
}

/// Checks the syntax of a complete expression without evaluating it.
///
/// # Returns
/// The recognized tokens, for echoing back to the user.
///
/// # Errors
/// Returns a lexing or grammar error. Arithmetic is never performed, so
/// `1/0` validates.
///
/// # Examples
/// ```
/// use descalc::{interpreter::lexer::Token, validate};
///
/// let tokens = validate("-3+4").unwrap();
/// assert_eq!(tokens[0], Token::UnarySub);
///
/// assert!(validate("1/0").is_ok());
/// ```
pub fn validate(source: &str) -> Result<Vec<Token>, Error> {
    let tokens = interpreter::lexer::tokenize(source)?;
    let rest = check(&tokens)?;
    reject_trailing(rest)?;
    Ok(tokens)
}

fn reject_trailing(rest: &[Token]) -> Result<(), ParseError> {
    match rest.first() {
        Some(&token) => Err(ParseError::UnexpectedTrailingTokens { token }),
        None => Ok(()),
    }
}
