use crate::interpreter::lexer::Token;

/// A binary operator of the grammar.
///
/// Operators are grouped by the grammar level that folds them: additive
/// (`+`, `-`), multiplicative (`*`, `/`, `%`) and power (`^`). All of them
/// are folded left to right, including `^`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
}

impl BinaryOperator {
    /// Maps a token to an additive operator, if it is one.
    #[must_use]
    pub const fn additive(token: &Token) -> Option<Self> {
        match token {
            Token::Add => Some(Self::Add),
            Token::Sub => Some(Self::Sub),
            _ => None,
        }
    }

    /// Maps a token to a multiplicative operator, if it is one.
    #[must_use]
    pub const fn multiplicative(token: &Token) -> Option<Self> {
        match token {
            Token::Mul => Some(Self::Mul),
            Token::Div => Some(Self::Div),
            Token::Mod => Some(Self::Mod),
            _ => None,
        }
    }

    /// Maps a token to the power operator, if it is one.
    #[must_use]
    pub const fn power(token: &Token) -> Option<Self> {
        match token {
            Token::Exp => Some(Self::Pow),
            _ => None,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        };
        write!(f, "{symbol}")
    }
}

/// A trigonometric function keyword. Arguments are in radians.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrigFunction {
    /// `sin(`
    Sin,
    /// `cos(`
    Cos,
    /// `tan(`
    Tan,
}

impl TrigFunction {
    /// Applies the function to `x`.
    ///
    /// # Example
    /// ```
    /// use descalc::operator::TrigFunction;
    ///
    /// assert_eq!(TrigFunction::Sin.apply(0.0), 0.0);
    /// assert_eq!(TrigFunction::Cos.apply(0.0), 1.0);
    /// ```
    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
        }
    }
}

impl std::fmt::Display for TrigFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sin => write!(f, "sin"),
            Self::Cos => write!(f, "cos"),
            Self::Tan => write!(f, "tan"),
        }
    }
}

/// A construct closed by `)`. Used to say which one was left open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// `( expression )`
    Paren,
    /// The argument list of a trigonometric call.
    Call(TrigFunction),
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Paren => write!(f, "parenthesized expression"),
            Self::Call(function) => write!(f, "{function} argument"),
        }
    }
}
