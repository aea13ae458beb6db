use log::trace;

use crate::{
    error::ParseError,
    interpreter::lexer::{Fraction, Token},
    operator::{BinaryOperator, Group, TrigFunction},
};

/// Deepest nesting of parentheses, calls and prefix minuses the walker
/// follows before giving up with `ParseError::NestingTooDeep`.
pub const MAX_NESTING: usize = 128;

/// What the grammar walker does with each construct it recognizes.
///
/// The walker owns the grammar: precedence, associativity, where a
/// parenthesis must close. An `Action` only decides what a recognized
/// construct produces. [`SyntaxCheck`](crate::interpreter::parser::SyntaxCheck)
/// produces nothing, [`Evaluator`](crate::interpreter::evaluator::Evaluator)
/// produces a [`Number`](crate::interpreter::value::Number). Because both run
/// through the same functions, they always accept the same inputs.
pub trait Action {
    /// The value carried up from each grammar rule.
    type Output;
    /// The error type. Structural errors are raised by the walker itself.
    type Error: From<ParseError>;

    /// A numeric literal, `whole` or `whole.fraction`.
    fn literal(&self, whole: f64, fraction: Option<Fraction>) -> Self::Output;

    /// A binary operator applied to two already folded operands.
    fn binary(&self,
              op: BinaryOperator,
              left: Self::Output,
              right: Self::Output)
              -> Result<Self::Output, Self::Error>;

    /// `mantissa E exponent`.
    fn scientific(&self, mantissa: Self::Output, exponent: Self::Output) -> Self::Output;

    /// A trigonometric call on its evaluated argument.
    fn trig(&self, function: TrigFunction, argument: Self::Output) -> Self::Output;

    /// Prefix negation.
    fn negate(&self, operand: Self::Output) -> Self::Output;

    /// A parenthesized expression.
    fn group(&self, inner: Self::Output) -> Self::Output {
        inner
    }
}

/// The remaining tokens and the value of the rule that consumed the rest.
pub type Step<'a, T> = (&'a [Token], T);

/// Result of one grammar rule under action `A`.
pub type WalkResult<'a, A> = Result<Step<'a, <A as Action>::Output>, <A as Action>::Error>;

/// Walks an expression, the lowest-precedence rule.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `action`: What to produce for each recognized construct.
/// - `tokens`: The tokens still to be consumed.
///
/// # Returns
/// The unconsumed suffix and the folded value.
pub fn walk_expression<'a, A: Action>(action: &A, tokens: &'a [Token]) -> WalkResult<'a, A> {
    expression(action, tokens, 0)
}

fn expression<'a, A: Action>(action: &A, tokens: &'a [Token], depth: usize) -> WalkResult<'a, A> {
    let (mut rest, mut left) = term(action, tokens, depth)?;
    loop {
        if let [token, tail @ ..] = rest
           && let Some(op) = BinaryOperator::additive(token)
        {
            let (after, right) = term(action, tail, depth)?;
            trace!("reduce {op} at expression level");
            left = action.binary(op, left, right)?;
            rest = after;
            continue;
        }
        break;
    }
    Ok((rest, left))
}

/// `term := power (("*" | "/" | "%") power)*`
fn term<'a, A: Action>(action: &A, tokens: &'a [Token], depth: usize) -> WalkResult<'a, A> {
    let (mut rest, mut left) = power(action, tokens, depth)?;
    loop {
        if let [token, tail @ ..] = rest
           && let Some(op) = BinaryOperator::multiplicative(token)
        {
            let (after, right) = power(action, tail, depth)?;
            trace!("reduce {op} at term level");
            left = action.binary(op, left, right)?;
            rest = after;
            continue;
        }
        break;
    }
    Ok((rest, left))
}

/// `power := scientific ("^" scientific)*`
///
/// Exponentiation is folded left to right, so `2^3^2` is `(2^3)^2`.
fn power<'a, A: Action>(action: &A, tokens: &'a [Token], depth: usize) -> WalkResult<'a, A> {
    let (mut rest, mut left) = scientific(action, tokens, depth)?;
    loop {
        if let [token, tail @ ..] = rest
           && let Some(op) = BinaryOperator::power(token)
        {
            let (after, right) = scientific(action, tail, depth)?;
            trace!("reduce {op} at power level");
            left = action.binary(op, left, right)?;
            rest = after;
            continue;
        }
        break;
    }
    Ok((rest, left))
}

/// `scientific := atom ("E" atom)?`
fn scientific<'a, A: Action>(action: &A, tokens: &'a [Token], depth: usize) -> WalkResult<'a, A> {
    let (rest, mantissa) = atom(action, tokens, depth)?;
    match rest {
        [Token::ScientificMarker, tail @ ..] => {
            let (after, exponent) = atom(action, tail, depth)?;
            Ok((after, action.scientific(mantissa, exponent)))
        },
        _ => Ok((rest, mantissa)),
    }
}

/// Walks an atom.
///
/// Grammar:
/// ```text
///     atom := number ("." fraction)?
///           | ("sin(" | "cos(" | "tan(") expression ")"
///           | "(" expression ")"
///           | neg term
/// ```
/// A prefix minus takes a whole term as its operand, so `-2*3` negates
/// `2*3` and `-2^2` negates `2^2`.
///
/// # Errors
/// - `MissingFraction` if a `.` is not followed by digits.
/// - `MissingRightParen` naming the construct that was left open.
/// - `NestingTooDeep` past [`MAX_NESTING`] levels.
/// - `UnexpectedToken` for any token that cannot start an atom.
/// - `UnexpectedEndOfInput` if no token is left.
fn atom<'a, A: Action>(action: &A, tokens: &'a [Token], depth: usize) -> WalkResult<'a, A> {
    match tokens {
        [Token::Number(whole), Token::Dot, tail @ ..] => match tail {
            [Token::Fraction(fraction), rest @ ..] => {
                Ok((rest, action.literal(*whole, Some(*fraction))))
            },
            _ => Err(ParseError::MissingFraction.into()),
        },
        [Token::Number(whole), rest @ ..] => Ok((rest, action.literal(*whole, None))),
        [Token::Sin, tail @ ..] => call(action, TrigFunction::Sin, tail, depth),
        [Token::Cos, tail @ ..] => call(action, TrigFunction::Cos, tail, depth),
        [Token::Tan, tail @ ..] => call(action, TrigFunction::Tan, tail, depth),
        [Token::LeftParen, tail @ ..] => {
            let (rest, inner) = enclosed(action, Group::Paren, tail, depth)?;
            Ok((rest, action.group(inner)))
        },
        [Token::UnarySub, tail @ ..] => {
            let (rest, operand) = term(action, tail, nested(depth)?)?;
            Ok((rest, action.negate(operand)))
        },
        [token, ..] => Err(ParseError::UnexpectedToken { token: *token }.into()),
        [] => Err(ParseError::UnexpectedEndOfInput.into()),
    }
}

fn call<'a, A: Action>(action: &A,
                       function: TrigFunction,
                       tokens: &'a [Token],
                       depth: usize)
                       -> WalkResult<'a, A> {
    let (rest, argument) = enclosed(action, Group::Call(function), tokens, depth)?;
    Ok((rest, action.trig(function, argument)))
}

/// Walks `expression ")"`, the opening token having been consumed.
fn enclosed<'a, A: Action>(action: &A,
                           group: Group,
                           tokens: &'a [Token],
                           depth: usize)
                           -> WalkResult<'a, A> {
    let (rest, inner) = expression(action, tokens, nested(depth)?)?;
    match rest {
        [Token::RightParen, tail @ ..] => Ok((tail, inner)),
        _ => Err(ParseError::MissingRightParen { group }.into()),
    }
}

/// Returns the depth one level further in, if still within the limit.
const fn nested(depth: usize) -> Result<usize, ParseError> {
    if depth >= MAX_NESTING {
        return Err(ParseError::NestingTooDeep { limit: MAX_NESTING });
    }
    Ok(depth + 1)
}
