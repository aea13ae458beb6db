/// Numeric helpers.
///
/// This module provides the digit arithmetic that rebuilds decimal literals
/// from their integer and fractional tokens, and the whole-number test used
/// to classify power-of-ten results. Keeping these in one place means the
/// lexer and the evaluator agree on how a fractional token encodes its
/// digits.
pub mod num;
