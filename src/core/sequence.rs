//! Letter sequence representation
//!
//! The ordered letters a session asks about, one per step.

use std::fmt;

/// Shortest custom sequence accepted by [`LetterSequence::custom`]
pub const MIN_CUSTOM_LEN: usize = 3;

/// Longest custom sequence accepted by [`LetterSequence::custom`]
pub const MAX_CUSTOM_LEN: usize = 50;

/// An ordered, immutable sequence of alphabetic letters
///
/// Duplicates are kept as given. An empty sequence is representable; a session
/// built on one is complete after its first transition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterSequence {
    letters: Vec<char>,
}

/// Error type for invalid letter sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    InvalidLetter(char),
    TooShort(usize),
    TooLong(usize),
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLetter(c) => write!(f, "Sequence must contain only letters, found {c:?}"),
            Self::TooShort(len) => write!(
                f,
                "Sequence must be between {MIN_CUSTOM_LEN} and {MAX_CUSTOM_LEN} characters, got {len}"
            ),
            Self::TooLong(len) => write!(
                f,
                "Sequence must be between {MIN_CUSTOM_LEN} and {MAX_CUSTOM_LEN} characters, got {len}"
            ),
        }
    }
}

impl std::error::Error for SequenceError {}

impl LetterSequence {
    /// Create a sequence from a string of letters
    ///
    /// # Errors
    /// Returns `SequenceError::InvalidLetter` for the first non-alphabetic character.
    ///
    /// # Examples
    /// ```
    /// use mind_reader::core::LetterSequence;
    ///
    /// let seq = LetterSequence::new("NTRLCSEUAI").unwrap();
    /// assert_eq!(seq.len(), 10);
    /// assert_eq!(seq.get(0), Some('N'));
    ///
    /// assert!(LetterSequence::new("AB1").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, SequenceError> {
        let letters: Vec<char> = text.chars().collect();

        if let Some(&bad) = letters.iter().find(|c| !c.is_alphabetic()) {
            return Err(SequenceError::InvalidLetter(bad));
        }

        Ok(Self { letters })
    }

    /// Create a user-defined sequence
    ///
    /// Surrounding whitespace is trimmed; the rest must be 3 to 50 ASCII letters.
    ///
    /// # Errors
    /// Returns `SequenceError` if the length is out of range or a character is not
    /// an ASCII letter.
    pub fn custom(text: &str) -> Result<Self, SequenceError> {
        let trimmed = text.trim();
        let len = trimmed.chars().count();

        if len < MIN_CUSTOM_LEN {
            return Err(SequenceError::TooShort(len));
        }
        if len > MAX_CUSTOM_LEN {
            return Err(SequenceError::TooLong(len));
        }
        if let Some(bad) = trimmed.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(SequenceError::InvalidLetter(bad));
        }

        Self::new(trimmed)
    }

    /// Number of letters (and therefore of steps in a full session)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letter at `index`, or `None` past the end
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied()
    }

    /// All letters in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }
}

impl fmt::Display for LetterSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.letters {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_creation_valid() {
        let seq = LetterSequence::new("SEATJK").unwrap();
        assert_eq!(seq.letters(), &['S', 'E', 'A', 'T', 'J', 'K']);
        assert_eq!(seq.to_string(), "SEATJK");
    }

    #[test]
    fn sequence_keeps_duplicates() {
        let seq = LetterSequence::new("AAB").unwrap();
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.get(1), Some('A'));
    }

    #[test]
    fn sequence_empty_is_allowed() {
        let seq = LetterSequence::new("").unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.get(0), None);
    }

    #[test]
    fn sequence_rejects_non_letters() {
        assert_eq!(
            LetterSequence::new("AB C"),
            Err(SequenceError::InvalidLetter(' '))
        );
        assert_eq!(
            LetterSequence::new("A1"),
            Err(SequenceError::InvalidLetter('1'))
        );
    }

    #[test]
    fn custom_length_limits() {
        assert_eq!(LetterSequence::custom("AB"), Err(SequenceError::TooShort(2)));
        assert_eq!(
            LetterSequence::custom(&"A".repeat(51)),
            Err(SequenceError::TooLong(51))
        );
        assert!(LetterSequence::custom("ABC").is_ok());
        assert!(LetterSequence::custom(&"Z".repeat(50)).is_ok());
    }

    #[test]
    fn custom_trims_whitespace() {
        let seq = LetterSequence::custom("  xyz \n").unwrap();
        assert_eq!(seq.to_string(), "xyz");
    }

    #[test]
    fn custom_rejects_non_ascii_letters() {
        assert_eq!(
            LetterSequence::custom("ÄÖÜ"),
            Err(SequenceError::InvalidLetter('Ä'))
        );
        assert_eq!(
            LetterSequence::custom("abcé"),
            Err(SequenceError::InvalidLetter('é'))
        );
        // Built-in sequences go through `new`, which is not restricted to ASCII
        assert!(LetterSequence::new("ÄÖÜ").is_ok());
    }

    #[test]
    fn custom_rejects_inner_symbols() {
        assert_eq!(
            LetterSequence::custom("AB-CD"),
            Err(SequenceError::InvalidLetter('-'))
        );
    }

    #[test]
    fn get_past_end() {
        let seq = LetterSequence::new("N").unwrap();
        assert_eq!(seq.get(0), Some('N'));
        assert_eq!(seq.get(1), None);
    }
}
