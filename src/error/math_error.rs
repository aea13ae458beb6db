use thiserror::Error;

/// Represents arithmetic failures raised during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// The right operand of `/` evaluated to exactly zero.
    #[error("division by zero")]
    DivisionByZero,
}
