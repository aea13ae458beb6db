use log::{debug, trace};

use crate::{
    error::{Error, MathError},
    interpreter::{
        grammar::{Action, Step, walk_expression},
        lexer::{Fraction, Token},
        value::Number,
    },
    operator::{BinaryOperator, TrigFunction},
    util::num::{double_is_int, ints_to_double},
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, Error>;

/// The evaluating action: folds every construct into a [`Number`].
///
/// The evaluator holds no state, so one instance can be shared freely and
/// evaluating the same tokens twice gives the same result.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Action for Evaluator {
    type Output = Number;
    type Error = Error;

    /// Plain literals are integers. Anything written with a decimal point is
    /// a float, including `5.0`.
    fn literal(&self, whole: f64, fraction: Option<Fraction>) -> Number {
        match fraction {
            None => Number::integer(whole),
            Some(Fraction { digits,
                            leading_zeros, }) => {
                Number::float(ints_to_double(whole, digits, leading_zeros))
            },
        }
    }

    /// Evaluates a binary operation.
    ///
    /// The result is an integer only if both operands are. Division of two
    /// integers is floor division; any other division is a float division.
    /// `%` is the floating-point remainder and performs no zero check, so
    /// `x % 0` is NaN.
    ///
    /// # Errors
    /// `MathError::DivisionByZero` if the right operand of `/` is zero.
    #[allow(clippy::float_cmp)]
    fn binary(&self, op: BinaryOperator, left: Number, right: Number) -> EvalResult<Number> {
        let is_integer = left.is_integer && right.is_integer;
        let (l, r) = (left.value, right.value);

        let value = match op {
            BinaryOperator::Add => l + r,
            BinaryOperator::Sub => l - r,
            BinaryOperator::Mul => l * r,
            BinaryOperator::Div => {
                if r == 0.0 {
                    return Err(MathError::DivisionByZero.into());
                }
                if is_integer { (l / r).floor() } else { l / r }
            },
            BinaryOperator::Mod => l % r,
            BinaryOperator::Pow => l.powf(r),
        };
        trace!("{left} {op} {right} = {value}");
        Ok(Number { value, is_integer })
    }

    /// The classification is taken from the result alone: `1E3` is an
    /// integer, `1E-3` is not.
    fn scientific(&self, mantissa: Number, exponent: Number) -> Number {
        let value = mantissa.value * 10f64.powf(exponent.value);
        Number { value,
                 is_integer: double_is_int(value) }
    }

    fn trig(&self, function: TrigFunction, argument: Number) -> Number {
        Number::float(function.apply(argument.value))
    }

    fn negate(&self, operand: Number) -> Number {
        Number { value: -operand.value,
                 ..operand }
    }
}

/// Evaluates the expression at the start of `tokens`.
///
/// # Parameters
/// - `tokens`: The token sequence to evaluate.
///
/// # Returns
/// The tokens following the expression and its value.
///
/// # Errors
/// - `Error::Parse` for the same structural violations [`check`] reports.
/// - `Error::Math` for division by zero.
///
/// [`check`]: crate::interpreter::parser::check
///
/// # Example
/// ```
/// use descalc::interpreter::{evaluator::evaluate, lexer::tokenize};
///
/// let tokens = tokenize("5/2").unwrap();
/// let (rest, n) = evaluate(&tokens).unwrap();
/// assert!(rest.is_empty());
/// assert_eq!(n.value, 2.0);
/// assert!(n.is_integer);
///
/// let tokens = tokenize("5.0/2").unwrap();
/// let (_, n) = evaluate(&tokens).unwrap();
/// assert_eq!(n.value, 2.5);
/// assert!(!n.is_integer);
/// ```
pub fn evaluate(tokens: &[Token]) -> EvalResult<Step<'_, Number>> {
    let (rest, number) = walk_expression(&Evaluator, tokens)?;
    debug!("evaluated {} tokens to {number}", tokens.len() - rest.len());
    Ok((rest, number))
}
