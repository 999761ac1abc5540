use thiserror::Error;

/// Result type of identifier decoding.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Reasons an identifier, or a prefix of one, cannot be valid.
///
/// Positions are 1-based character positions in the input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("bad character in position {position}: {character:?}")]
    UnmappedCharacter { position: usize, character: char },
    #[error("non-numeric character in position {position}: {character:?} (expected one of 2-9)")]
    OutOfRangeDigit { position: usize, character: char },
    #[error("ID invalid starting at position {position}")]
    ParityMismatch { position: usize },
    #[error("ID invalid starting after position 5")]
    ChecksumMismatch,
    #[error("ID exceeds 64 bits at position {position}")]
    Overflow { position: usize },
    #[error("ID incomplete: got {length} characters, need at least 6")]
    Incomplete { length: usize },
}

impl DecodeError {
    /// The position the error was detected at, if it points to one character.
    pub fn position(&self) -> Option<usize> {
        match self {
            DecodeError::UnmappedCharacter { position, .. }
            | DecodeError::OutOfRangeDigit { position, .. }
            | DecodeError::ParityMismatch { position }
            | DecodeError::Overflow { position } => Some(*position),
            DecodeError::ChecksumMismatch | DecodeError::Incomplete { .. } => None,
        }
    }

    /// Returns true if the input was a clean prefix rejected only for being
    /// shorter than an identifier, as when parsing an `Identifier`.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, DecodeError::Incomplete { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_points_at_the_failing_character() {
        assert_eq!(DecodeError::ParityMismatch { position: 3 }.position(), Some(3));
        assert_eq!(
            DecodeError::UnmappedCharacter {
                position: 5,
                character: '!'
            }
            .position(),
            Some(5)
        );
        assert_eq!(DecodeError::ChecksumMismatch.position(), None);
        assert_eq!(DecodeError::Incomplete { length: 2 }.position(), None);
    }

    #[test]
    fn only_short_input_is_incomplete() {
        assert!(DecodeError::Incomplete { length: 5 }.is_incomplete());
        assert!(!DecodeError::ChecksumMismatch.is_incomplete());
        assert!(!DecodeError::Overflow { position: 18 }.is_incomplete());
    }
}
