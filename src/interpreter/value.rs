/// The result of evaluating an expression or any part of one.
///
/// `is_integer` is a classification, not a property of `value`: it is true
/// only when every operand that contributed to the value was itself an
/// integer. Trigonometric results and decimal literals are never integers,
/// even when `value` happens to be whole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number {
    /// The magnitude.
    pub value:      f64,
    /// Whether the value is classified as an integer.
    pub is_integer: bool,
}

impl Number {
    /// Creates an integer-classified number.
    #[must_use]
    pub const fn integer(value: f64) -> Self {
        Self { value,
               is_integer: true }
    }

    /// Creates a float-classified number.
    #[must_use]
    pub const fn float(value: f64) -> Self {
        Self { value,
               is_integer: false }
    }
}

/// Integers print without a fractional part, floats always with one.
///
/// # Example
/// ```
/// use descalc::interpreter::value::Number;
///
/// assert_eq!(Number::integer(2.0).to_string(), "2");
/// assert_eq!(Number::float(2.0).to_string(), "2.0");
/// assert_eq!(Number::float(2.5).to_string(), "2.5");
/// ```
impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_integer {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{:?}", self.value)
        }
    }
}
