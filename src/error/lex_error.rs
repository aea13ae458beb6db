use thiserror::Error;

/// Represents all errors that can occur while tokenizing input.
///
/// Positions are byte offsets into the source string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("Unrecognized character '{character}' at position {position}.")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
}
