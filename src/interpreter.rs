/// The evaluator module computes the value of a token sequence.
///
/// The evaluator is the grammar walker run with an action that folds every
/// recognized construct into a number and its integer classification. It
/// keeps no state between calls.
///
/// # Responsibilities
/// - Applies the arithmetic of each operator, including floor division for
///   integer operands.
/// - Tracks whether every contributing operand was an integer.
/// - Reports arithmetic errors such as division by zero.
pub mod evaluator;
/// The grammar module holds the single recursive-descent walker.
///
/// Both the syntax checker and the evaluator are this walker with a different
/// [`grammar::Action`]. Precedence, associativity and every structural error
/// live here, so the two cannot drift apart.
///
/// # Responsibilities
/// - Implements `expression`, `term`, `power`, `scientific` and `atom`.
/// - Threads the unconsumed token suffix through every rule.
/// - Raises `ParseError` for malformed input.
pub mod grammar;
/// The lexer module tokenizes source text.
///
/// The lexer reads the raw input and produces the token sequence consumed by
/// the grammar. It distinguishes subtraction from prefix negation and keeps
/// the positional meaning of zeroes after a decimal point.
///
/// # Responsibilities
/// - Converts the input characters into tokens.
/// - Rebuilds fractional digit runs so leading zeroes survive.
/// - Reports lexical errors for unrecognized characters and oversized
///   literals.
pub mod lexer;
/// The parser module checks syntax without evaluating.
///
/// It runs the grammar walker with an action that produces nothing, which
/// validates an expression without any arithmetic taking place.
pub mod parser;
/// The value module defines the evaluation result type.
pub mod value;
