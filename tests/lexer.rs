use descalc::{
    error::LexError,
    interpreter::lexer::{Fraction, Token, tokenize},
};
use Token::{Add, Cos, Dot, Mul, Number, RightParen, ScientificMarker, Sin, Sub, Tan, UnarySub};

fn assert_tokens(src: &str, expected: &[Token]) {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("{src:?} failed to tokenize: {e}"));
    assert_eq!(tokens, expected, "tokens of {src:?}");
}

const fn fraction(digits: u64, leading_zeros: u32) -> Token {
    Token::Fraction(Fraction { digits,
                               leading_zeros })
}

#[test]
fn fractional_digits_keep_their_position() {
    assert_tokens("12.340", &[Number(12.0), Dot, fraction(34, 0)]);
    assert_tokens("12.34", &[Number(12.0), Dot, fraction(34, 0)]);
    assert_tokens("1.047", &[Number(1.0), Dot, fraction(47, 1)]);
    assert_tokens("1.0470", &[Number(1.0), Dot, fraction(47, 1)]);
    assert_tokens("1.47", &[Number(1.0), Dot, fraction(47, 0)]);
    assert_tokens("1.001", &[Number(1.0), Dot, fraction(1, 2)]);
}

#[test]
fn zero_fractions_collapse_to_zero() {
    assert_tokens("1.0", &[Number(1.0), Dot, fraction(0, 1)]);
    assert_tokens("1.000", &[Number(1.0), Dot, fraction(0, 3)]);
}

#[test]
fn integer_runs_drop_leading_zeroes() {
    assert_tokens("007", &[Number(7.0)]);
    assert_tokens("100", &[Number(100.0)]);
}

#[test]
fn minus_depends_on_the_previous_token() {
    assert_tokens("-3+4", &[UnarySub, Number(3.0), Add, Number(4.0)]);
    assert_tokens("3-4", &[Number(3.0), Sub, Number(4.0)]);
    assert_tokens("(1)-2",
                  &[Token::LeftParen, Number(1.0), RightParen, Sub, Number(2.0)]);
    assert_tokens("2*-3", &[Number(2.0), Mul, UnarySub, Number(3.0)]);
    assert_tokens("3--4", &[Number(3.0), Sub, UnarySub, Number(4.0)]);
    assert_tokens("1.5-2", &[Number(1.0), Dot, fraction(5, 0), Sub, Number(2.0)]);
}

#[test]
fn scientific_marker_is_not_number_like() {
    assert_tokens("1E-3", &[Number(1.0), ScientificMarker, UnarySub, Number(3.0)]);
    assert_tokens("2e5", &[Number(2.0), ScientificMarker, Number(5.0)]);
}

#[test]
fn function_keywords_include_the_parenthesis() {
    assert_tokens("sin(1)+cos(2)*tan(3)",
                  &[Sin,
                    Number(1.0),
                    RightParen,
                    Add,
                    Cos,
                    Number(2.0),
                    RightParen,
                    Mul,
                    Tan,
                    Number(3.0),
                    RightParen]);
}

#[test]
fn whitespace_is_skipped() {
    assert_tokens(" 1 +\t2 \n", &[Number(1.0), Add, Number(2.0)]);
    assert_tokens("", &[]);
}

#[test]
fn unrecognized_characters_are_reported_with_position() {
    assert_eq!(tokenize("1 # 2"),
               Err(LexError::UnrecognizedCharacter { character: '#',
                                                     position:  2, }));
    assert_eq!(tokenize("x"),
               Err(LexError::UnrecognizedCharacter { character: 'x',
                                                     position:  0, }));
}

#[test]
fn long_digit_runs_are_not_errors() {
    assert_tokens("10000000000000000", &[Number(1e16)]);
    assert_tokens("1000000000000000000000000000000", &[Number(1e30)]);
    assert_tokens("0.50000000000000000", &[Number(0.0), Dot, fraction(5, 0)]);
    assert_tokens("0.00000000000000001", &[Number(0.0), Dot, fraction(1, 16)]);
    assert_tokens("1.0000000000000000000000000000001", &[Number(1.0), Dot, fraction(1, 30)]);
}

#[test]
fn overlong_fractions_keep_their_leading_digits() {
    assert_tokens("0.12345678901234567890123",
                  &[Number(0.0), Dot, fraction(1_234_567_890_123_456_789, 0)]);
    assert_tokens("0.1000000000000000000005", &[Number(0.0), Dot, fraction(1, 0)]);
}

#[test]
fn tokens_display_as_source_text() {
    let tokens = tokenize("-sin(1.05)^2%3/4E1").unwrap();
    let text = tokens.iter()
                     .map(ToString::to_string)
                     .collect::<Vec<_>>()
                     .join(" ");
    assert_eq!(text, "neg sin( 1 . 05 ) ^ 2 % 3 / 4 E 1");
}
