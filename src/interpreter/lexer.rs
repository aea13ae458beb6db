use log::{debug, trace};
use logos::Logos;

use crate::{
    error::LexError,
    util::num::{MAX_FRACTION_DIGITS, strip_trailing_zeros},
};

/// The digits written after a decimal point.
///
/// Trailing zeroes are dropped and leading zeroes are counted rather than
/// folded into `digits`, so `.047`, `.0470` and `.47` stay distinct and no
/// run of zeroes can overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    /// The significant digits, without trailing zeroes. Zero for `.0`.
    pub digits:        u64,
    /// Zeroes between the dot and `digits`.
    pub leading_zeros: u32,
}

impl Fraction {
    /// Reads a fractional digit run as written.
    ///
    /// Only the first [`MAX_FRACTION_DIGITS`] significant digits are kept.
    ///
    /// # Example
    /// ```
    /// use descalc::interpreter::lexer::Fraction;
    ///
    /// assert_eq!(Fraction::from_digits("0470"),
    ///            Fraction { digits:        47,
    ///                       leading_zeros: 1, });
    /// assert_eq!(Fraction::from_digits("000").digits, 0);
    /// ```
    #[must_use]
    pub fn from_digits(written: &str) -> Self {
        let significant = written.trim_start_matches('0');
        let leading_zeros =
            u32::try_from(written.len() - significant.len()).unwrap_or(u32::MAX);
        let significant = significant.trim_end_matches('0');
        let kept = &significant[..significant.len().min(MAX_FRACTION_DIGITS)];
        let digits = strip_trailing_zeros(kept.parse().unwrap_or(0));

        Self { digits,
               leading_zeros }
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.digits == 0 {
            return write!(f, "0");
        }
        for _ in 0..self.leading_zeros {
            write!(f, "0")?;
        }
        write!(f, "{}", self.digits)
    }
}

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// `UnarySub` and `Fraction` have no pattern of their own: every `-` is
/// scanned as `Sub` and every digit run as `Number`, and [`tokenize`]
/// re-labels them from the token emitted before.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// `+`
    #[token("+")]
    Add,
    /// `-` after a number-like token.
    #[token("-")]
    Sub,
    /// `-` in prefix position.
    UnarySub,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `%`
    #[token("%")]
    Mod,
    /// `^`
    #[token("^")]
    Exp,
    /// `.`
    #[token(".")]
    Dot,
    /// `E` or `e`, introducing a power-of-ten suffix.
    #[token("E")]
    #[token("e")]
    ScientificMarker,
    /// `sin(`
    #[token("sin(")]
    Sin,
    /// `cos(`
    #[token("cos(")]
    Cos,
    /// `tan(`
    #[token("tan(")]
    Tan,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// A digit run. Runs beyond `2^53` are rounded to the nearest `f64`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(f64),
    /// A digit run directly after `.`.
    Fraction(Fraction),
}

impl Token {
    /// Returns whether a `-` following this token is a subtraction.
    #[must_use]
    pub const fn is_number_like(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Fraction(_) | Self::RightParen)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::UnarySub => write!(f, "neg"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
            Self::Mod => write!(f, "%"),
            Self::Exp => write!(f, "^"),
            Self::Dot => write!(f, "."),
            Self::ScientificMarker => write!(f, "E"),
            Self::Sin => write!(f, "sin("),
            Self::Cos => write!(f, "cos("),
            Self::Tan => write!(f, "tan("),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Fraction(fraction) => write!(f, "{fraction}"),
        }
    }
}

/// Converts source text into its token sequence.
///
/// Whitespace is skipped. Two tokens depend on what was emitted before them:
/// - `-` becomes [`Token::UnarySub`] unless the previous token is a number
///   or `)`.
/// - A digit run right after `.` becomes a [`Token::Fraction`] that keeps
///   its leading zeroes, so `.047` and `.0470` are the same and differ from
///   `.47`.
///
/// # Parameters
/// - `source`: The text to scan.
///
/// # Errors
/// `UnrecognizedCharacter` for any character that starts no token.
///
/// # Example
/// ```
/// use descalc::interpreter::lexer::{Fraction, Token, tokenize};
///
/// let tokens = tokenize("-3 - 1.05").unwrap();
/// assert_eq!(tokens,
///            vec![Token::UnarySub,
///                 Token::Number(3.0),
///                 Token::Sub,
///                 Token::Number(1.0),
///                 Token::Dot,
///                 Token::Fraction(Fraction { digits:        5,
///                                            leading_zeros: 1, })]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        let Ok(token) = token else {
            return Err(lex_failure(lexer.slice(), position));
        };

        let previous = tokens.last();
        let token = match token {
            Token::Sub if !previous.is_some_and(Token::is_number_like) => Token::UnarySub,
            Token::Number(_) if previous == Some(&Token::Dot) => {
                Token::Fraction(Fraction::from_digits(lexer.slice()))
            },
            other => other,
        };
        trace!("token {token} at {position}");
        tokens.push(token);
    }

    debug!("tokenized {} characters into {} tokens", source.len(), tokens.len());
    Ok(tokens)
}

/// Parses an integer literal from the current token slice.
///
/// Every digit run parses; values an `f64` cannot hold exactly are rounded.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Builds the error for a slice logos could not turn into a token.
fn lex_failure(slice: &str, position: usize) -> LexError {
    let character = slice.chars().next().unwrap_or('\0');
    LexError::UnrecognizedCharacter { character, position }
}
