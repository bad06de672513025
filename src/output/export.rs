//! Result export in txt, csv and json

use super::formatters::summary_text;
use crate::filter::GameResult;
use clap::ValueEnum;
use std::fmt;

/// File format for exported results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// The results summary as shown on screen
    #[default]
    Txt,
    /// One `side,word` row per remaining word
    Csv,
    /// The full result as JSON
    Json,
}

impl ExportFormat {
    /// File extension without the dot
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Render `result` in the chosen format
///
/// # Errors
/// Returns an error only if JSON serialization fails.
pub fn export_result(result: &GameResult, format: ExportFormat) -> Result<String, serde_json::Error> {
    match format {
        ExportFormat::Txt => Ok(summary_text(result)),
        ExportFormat::Csv => Ok(to_csv(result)),
        ExportFormat::Json => serde_json::to_string_pretty(result),
    }
}

fn to_csv(result: &GameResult) -> String {
    let mut out = String::from("side,word\n");
    let rows = result
        .left_words
        .iter()
        .map(|w| ("left", w))
        .chain(result.right_words.iter().map(|w| ("right", w)));

    for (side, word) in rows {
        out.push_str(side);
        out.push(',');
        out.push_str(&csv_field(word));
        out.push('\n');
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Choice;

    fn sample() -> GameResult {
        GameResult {
            left_words: vec!["Necessary".to_string(), "Impression".to_string()],
            right_words: vec!["Toothbrush".to_string()],
            total_choices: 2,
            final_choice: Some(Choice::Right),
        }
    }

    #[test]
    fn txt_is_summary() {
        let text = export_result(&sample(), ExportFormat::Txt).unwrap();
        assert!(text.contains("Right Pattern Words (1):\nToothbrush"));
    }

    #[test]
    fn csv_rows_per_word() {
        let csv = export_result(&sample(), ExportFormat::Csv).unwrap();
        assert_eq!(
            csv,
            "side,word\nleft,Necessary\nleft,Impression\nright,Toothbrush\n"
        );
    }

    #[test]
    fn csv_quotes_awkward_words() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn json_parses_back() {
        let json = export_result(&sample(), ExportFormat::Json).unwrap();
        let parsed: GameResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn extensions() {
        assert_eq!(ExportFormat::default(), ExportFormat::Txt);
        assert_eq!(ExportFormat::Csv.to_string(), "csv");
    }
}
