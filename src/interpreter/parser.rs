use log::debug;

use crate::{
    error::ParseError,
    interpreter::{
        grammar::{Action, walk_expression},
        lexer::{Fraction, Token},
    },
    operator::{BinaryOperator, TrigFunction},
};

/// The syntax-checking action: recognizes constructs and computes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxCheck;

impl Action for SyntaxCheck {
    type Output = ();
    type Error = ParseError;

    fn literal(&self, _whole: f64, _fraction: Option<Fraction>) {}

    fn binary(&self, _op: BinaryOperator, (): (), (): ()) -> Result<(), ParseError> {
        Ok(())
    }

    fn scientific(&self, (): (), (): ()) {}

    fn trig(&self, _function: TrigFunction, (): ()) {}

    fn negate(&self, (): ()) {}
}

/// Checks that a prefix of `tokens` forms an expression.
///
/// No value is computed, so this never fails with an arithmetic error:
/// `1/0` is well formed.
///
/// # Parameters
/// - `tokens`: The token sequence to check.
///
/// # Returns
/// The tokens following the expression.
///
/// # Errors
/// Returns the `ParseError` of the first grammar rule that fails.
///
/// # Example
/// ```
/// use descalc::interpreter::{
///     lexer::{Token, tokenize},
///     parser::check,
/// };
///
/// let tokens = tokenize("1/0 )").unwrap();
/// assert_eq!(check(&tokens).unwrap(), &[Token::RightParen]);
///
/// let tokens = tokenize("(2+3").unwrap();
/// assert!(check(&tokens).is_err());
/// ```
pub fn check(tokens: &[Token]) -> Result<&[Token], ParseError> {
    let (rest, ()) = walk_expression(&SyntaxCheck, tokens)?;
    debug!("syntax check consumed {} of {} tokens",
           tokens.len() - rest.len(),
           tokens.len());
    Ok(rest)
}
