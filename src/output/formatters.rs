//! Formatting utilities for terminal output

use crate::core::Choice;
use crate::filter::GameResult;

/// How many words of each pool the results summary lists before "... and N more"
pub const PREVIEW_WORDS: usize = 5;

/// Format a choice history as `L → R → R`
#[must_use]
pub fn format_history(choices: &[Choice]) -> String {
    choices
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// List up to `limit` words, noting how many were left out
///
/// # Examples
/// ```
/// use mind_reader::output::formatters::preview_words;
///
/// let words = ["a", "b", "c"].map(String::from);
/// assert_eq!(preview_words(&words, 2), "a, b... and 1 more");
/// assert_eq!(preview_words(&words, 5), "a, b, c");
/// ```
#[must_use]
pub fn preview_words(words: &[String], limit: usize) -> String {
    let shown = words
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    if words.len() > limit {
        format!("{shown}... and {} more", words.len() - limit)
    } else {
        shown
    }
}

/// Plain-text results summary shown when a session completes
#[must_use]
pub fn summary_text(result: &GameResult) -> String {
    format!(
        "Game Complete!\n\n\
         Total Choices: {}\n\n\
         Left Pattern Words ({}):\n{}\n\n\
         Right Pattern Words ({}):\n{}\n",
        result.total_choices,
        result.left_words.len(),
        preview_words(&result.left_words, PREVIEW_WORDS),
        result.right_words.len(),
        preview_words(&result.right_words, PREVIEW_WORDS),
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how evenly a letter splits a pool
///
/// Full when exactly half the words contain the letter, empty when all or none do.
#[must_use]
pub fn balance_bar(containing: usize, total: usize, width: usize) -> String {
    create_progress_bar(split_balance(containing, total), 1.0, width)
}

/// 1.0 for an even split, 0.0 when the letter separates nothing
#[must_use]
pub fn split_balance(containing: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let smaller = containing.min(total - containing);
    (2 * smaller) as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn history_arrows() {
        assert_eq!(
            format_history(&[Choice::Left, Choice::Right, Choice::Right]),
            "L → R → R"
        );
        assert_eq!(format_history(&[]), "");
    }

    #[test]
    fn history_round_trips_through_parse() {
        let choices = [Choice::Right, Choice::Left];
        assert_eq!(Choice::parse_many(&format_history(&choices)).unwrap(), choices);
    }

    #[test]
    fn preview_exact_limit_has_no_suffix() {
        let list = words(&["a", "b", "c", "d", "e"]);
        assert_eq!(preview_words(&list, 5), "a, b, c, d, e");
    }

    #[test]
    fn preview_empty() {
        assert_eq!(preview_words(&[], 5), "");
    }

    #[test]
    fn summary_lists_counts_and_previews() {
        let result = GameResult {
            left_words: words(&["Necessary", "Impression"]),
            right_words: words(&["a", "b", "c", "d", "e", "f", "g"]),
            total_choices: 2,
            final_choice: Some(Choice::Right),
        };
        let text = summary_text(&result);

        assert!(text.starts_with("Game Complete!"));
        assert!(text.contains("Total Choices: 2"));
        assert!(text.contains("Left Pattern Words (2):\nNecessary, Impression"));
        assert!(text.contains("Right Pattern Words (7):\na, b, c, d, e... and 2 more"));
    }

    #[test]
    fn summary_exact_layout() {
        let result = GameResult {
            left_words: words(&["Necessary", "Impression"]),
            right_words: words(&["Toothbrush"]),
            total_choices: 2,
            final_choice: Some(Choice::Right),
        };

        assert_eq!(
            summary_text(&result),
            "Game Complete!\n\nTotal Choices: 2\n\n\
             Left Pattern Words (2):\nNecessary, Impression\n\n\
             Right Pattern Words (1):\nToothbrush\n"
        );
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn split_balance_extremes() {
        assert!((split_balance(5, 10) - 1.0).abs() < f64::EPSILON);
        assert!(split_balance(0, 10).abs() < f64::EPSILON);
        assert!(split_balance(10, 10).abs() < f64::EPSILON);
        assert!(split_balance(0, 0).abs() < f64::EPSILON);
        assert!((split_balance(6, 10) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn balance_bar_even_split_is_full() {
        assert_eq!(balance_bar(4, 8, 4), "████");
        assert_eq!(balance_bar(0, 8, 4), "░░░░");
    }
}
