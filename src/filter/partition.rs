//! Dual-interpretation partitioning
//!
//! A single choice about a letter is read two ways at once:
//! - Left pattern: `L` means "contains the letter", `R` means "does not"
//! - Right pattern: `R` means "contains the letter", `L` means "does not"
//!
//! For one pool and one choice, every word satisfies exactly one of the two patterns.

use crate::core::Choice;

/// The two halves of a partitioned pool
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub left_words: Vec<String>,
    pub right_words: Vec<String>,
}

impl Partition {
    /// Total words across both halves
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.left_words.len() + self.right_words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.left_words.is_empty() && self.right_words.is_empty()
    }
}

/// Check whether `letter` appears anywhere in `word`, ignoring case
///
/// # Examples
/// ```
/// use mind_reader::filter::classify;
///
/// assert!(classify("Necessary", 'n'));
/// assert!(classify("Swingset", 'N'));
/// assert!(!classify("Umbrella", 'N'));
/// ```
#[must_use]
pub fn classify(word: &str, letter: char) -> bool {
    let needle: String = letter.to_uppercase().collect();
    word.to_uppercase().contains(&needle)
}

/// Split `words` by the left and right interpretations of `choice` on `letter`
///
/// Order within each half follows the input order.
///
/// # Examples
/// ```
/// use mind_reader::core::Choice;
/// use mind_reader::filter::partition;
///
/// let words = ["Necessary", "Toothbrush", "Clementine"];
/// let split = partition(&words, 'N', Choice::Left);
///
/// assert_eq!(split.left_words, ["Necessary", "Clementine"]);
/// assert_eq!(split.right_words, ["Toothbrush"]);
/// ```
#[must_use]
pub fn partition<S: AsRef<str>>(words: &[S], letter: char, choice: Choice) -> Partition {
    partition_by(words, choice, |word| classify(word, letter))
}

/// Partition with an arbitrary "contains" test
///
/// Used directly when there is no letter left to ask about. The empty letter
/// is contained in every word.
pub(crate) fn partition_by<S, F>(words: &[S], choice: Choice, contains: F) -> Partition
where
    S: AsRef<str>,
    F: Fn(&str) -> bool,
{
    let mut result = Partition {
        left_words: Vec::with_capacity(words.len()),
        right_words: Vec::with_capacity(words.len()),
    };

    for word in words {
        let word = word.as_ref();
        let has_letter = contains(word);

        let left_pattern = matches!(
            (choice, has_letter),
            (Choice::Left, true) | (Choice::Right, false)
        );

        if left_pattern {
            result.left_words.push(word.to_string());
        } else {
            result.right_words.push(word.to_string());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [&str; 5] = ["Necessary", "Toothbrush", "Remember", "Loveable", "Clementine"];

    #[test]
    fn classify_ignores_case() {
        assert!(classify("Necessary", 'N'));
        assert!(classify("Necessary", 'n'));
        assert!(classify("UMBRELLA", 'u'));
        assert!(!classify("Toothbrush", 'N'));
    }

    #[test]
    fn classify_empty_word() {
        assert!(!classify("", 'A'));
    }

    #[test]
    fn classify_non_ascii() {
        assert!(classify("Ärger", 'ä'));
        assert!(!classify("Arger", 'ä'));
    }

    #[test]
    fn left_choice_puts_containing_words_left() {
        let split = partition(&SAMPLE, 'N', Choice::Left);
        assert_eq!(split.left_words, ["Necessary", "Clementine"]);
        assert_eq!(split.right_words, ["Toothbrush", "Remember", "Loveable"]);
    }

    #[test]
    fn right_choice_puts_containing_words_right() {
        let split = partition(&SAMPLE, 'N', Choice::Right);
        assert_eq!(split.left_words, ["Toothbrush", "Remember", "Loveable"]);
        assert_eq!(split.right_words, ["Necessary", "Clementine"]);
    }

    #[test]
    fn choices_mirror_each_other() {
        for letter in 'A'..='Z' {
            let left = partition(&SAMPLE, letter, Choice::Left);
            let right = partition(&SAMPLE, letter, Choice::Right);
            assert_eq!(left.left_words, right.right_words, "letter {letter}");
            assert_eq!(left.right_words, right.left_words, "letter {letter}");
        }
    }

    #[test]
    fn partition_is_complete_and_disjoint() {
        // Duplicates included on purpose: pools are not deduplicated
        let words = ["Apple", "apple", "Berry", "Cherry", "Apple", ""];

        for letter in 'A'..='Z' {
            for choice in Choice::ALL {
                let split = partition(&words, letter, choice);
                assert_eq!(split.len(), words.len(), "{letter} {choice}");

                // Every input word is accounted for exactly once
                let mut recombined: Vec<&str> = split
                    .left_words
                    .iter()
                    .chain(split.right_words.iter())
                    .map(String::as_str)
                    .collect();
                let mut expected = words.to_vec();
                recombined.sort_unstable();
                expected.sort_unstable();
                assert_eq!(recombined, expected, "{letter} {choice}");

                // Each side holds only words matching its pattern
                let contains_side = match choice {
                    Choice::Left => &split.left_words,
                    Choice::Right => &split.right_words,
                };
                assert!(contains_side.iter().all(|w| classify(w, letter)));
            }
        }
    }

    #[test]
    fn partition_empty_pool() {
        let words: [&str; 0] = [];
        let split = partition(&words, 'A', Choice::Left);
        assert!(split.is_empty());
    }

    #[test]
    fn partition_by_everything_contains() {
        let split = partition_by(&SAMPLE, Choice::Left, |_| true);
        assert_eq!(split.left_words.len(), SAMPLE.len());
        assert!(split.right_words.is_empty());

        let split = partition_by(&SAMPLE, Choice::Right, |_| true);
        assert!(split.left_words.is_empty());
        assert_eq!(split.right_words.len(), SAMPLE.len());
    }
}
