//! Letter analysis command
//!
//! Shows how each letter of a sequence splits a word list.

use crate::core::LetterSequence;
use crate::filter::classify;
use crate::output::formatters::split_balance;
use rayon::prelude::*;

/// How one letter divides the word list
#[derive(Debug, Clone, PartialEq)]
pub struct LetterStats {
    pub letter: char,
    pub containing: usize,
    pub missing: usize,
    /// 1.0 for an even split, 0.0 when the letter separates nothing
    pub balance: f64,
}

/// Result of analysing a word list against a letter sequence
pub struct AnalysisResult {
    pub total_words: usize,
    pub letters: Vec<LetterStats>,
}

impl AnalysisResult {
    /// The most evenly splitting letter, first in sequence order on ties
    #[must_use]
    pub fn best_letter(&self) -> Option<&LetterStats> {
        self.letters
            .iter()
            .rev()
            .max_by(|a, b| a.balance.total_cmp(&b.balance))
    }
}

/// Count, for every letter of `letters`, how many of `words` contain it
///
/// Letters are reported in sequence order, duplicates included.
///
/// # Examples
/// ```
/// use mind_reader::commands::analyze_letters;
/// use mind_reader::core::LetterSequence;
///
/// let letters = LetterSequence::new("AZ").unwrap();
/// let result = analyze_letters(&["cat", "dog"], &letters);
///
/// assert_eq!(result.letters[0].containing, 1);
/// assert_eq!(result.letters[1].containing, 0);
/// ```
#[must_use]
pub fn analyze_letters<S: AsRef<str> + Sync>(words: &[S], letters: &LetterSequence) -> AnalysisResult {
    let total_words = words.len();

    let stats = letters
        .letters()
        .par_iter()
        .map(|&letter| {
            let containing = words
                .iter()
                .filter(|w| classify(w.as_ref(), letter))
                .count();
            LetterStats {
                letter,
                containing,
                missing: total_words - containing,
                balance: split_balance(containing, total_words),
            }
        })
        .collect();

    AnalysisResult {
        total_words,
        letters: stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{READ_MINDS, READ_MINDS_SEQUENCE};

    #[test]
    fn counts_default_data() {
        let letters = LetterSequence::new(READ_MINDS_SEQUENCE).unwrap();
        let result = analyze_letters(READ_MINDS, &letters);

        assert_eq!(result.total_words, 10);
        assert_eq!(result.letters.len(), 10);

        let n = &result.letters[0];
        assert_eq!(n.letter, 'N');
        assert_eq!((n.containing, n.missing), (6, 4));

        for stats in &result.letters {
            assert_eq!(stats.containing + stats.missing, 10);
        }
    }

    #[test]
    fn keeps_sequence_order_and_duplicates() {
        let letters = LetterSequence::new("BAB").unwrap();
        let result = analyze_letters(&["ab", "b", "c"], &letters);
        let order: Vec<char> = result.letters.iter().map(|s| s.letter).collect();
        assert_eq!(order, ['B', 'A', 'B']);
    }

    #[test]
    fn best_letter_is_most_even() {
        let letters = LetterSequence::new("XAE").unwrap();
        // A: 2 of 4, E: 2 of 4, X: 0 of 4
        let result = analyze_letters(&["cat", "hat", "pen", "den"], &letters);
        let best = result.best_letter().unwrap();
        assert_eq!(best.letter, 'A');
    }

    #[test]
    fn empty_inputs() {
        let letters = LetterSequence::new("").unwrap();
        let result = analyze_letters(&["cat"], &letters);
        assert!(result.best_letter().is_none());

        let letters = LetterSequence::new("A").unwrap();
        let none: [&str; 0] = [];
        let result = analyze_letters(&none, &letters);
        assert_eq!(result.letters[0].containing, 0);
        assert!(result.letters[0].balance.abs() < f64::EPSILON);
    }
}
