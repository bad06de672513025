//! Display functions for command results

use super::formatters::{PREVIEW_WORDS, balance_bar, format_history, preview_words};
use crate::commands::{AnalysisResult, Ending, ReplayResult, SimulationStatistics};
use crate::wordlists::{SequencePreset, WordList};
use colored::Colorize;

/// Print the result of replaying a choice string
pub fn print_replay_result(result: &ReplayResult, verbose: bool) {
    let state = &result.state;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Replaying: {}",
        format_history(state.sequence()).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let letter = step.letter.map_or_else(|| "-".to_string(), |c| c.to_string());
        println!("\nStep {}: {} {}", i + 1, letter.bold(), step.choice);

        if verbose {
            println!("  Left:  {} → {}", step.left_before, step.left_after);
            println!("  Right: {} → {}", step.right_before, step.right_after);
        }
    }

    if result.ignored > 0 {
        println!(
            "\n{}",
            format!("{} choices after completion were ignored", result.ignored).yellow()
        );
    }

    println!();
    if state.is_complete() {
        println!("{}", "✅ Game Complete!".green().bold());
    } else {
        let (step, total) = state.progress();
        println!(
            "{}",
            format!("⏳ In progress: step {step}/{total}").yellow().bold()
        );
    }

    println!("\nTotal Choices: {}", state.sequence().len());
    println!(
        "\n{} ({}):\n{}",
        "Left Pattern Words".bright_cyan().bold(),
        state.left_words().len(),
        preview_words(state.left_words(), PREVIEW_WORDS)
    );
    println!(
        "\n{} ({}):\n{}",
        "Right Pattern Words".bright_cyan().bold(),
        state.right_words().len(),
        preview_words(state.right_words(), PREVIEW_WORDS)
    );

    if state.is_complete() {
        let summary = state.result();
        if let Some(word) = summary.revealed_word() {
            println!("\n🔮 You were thinking of: {}", word.bright_green().bold());
        }
    }
}

/// Print how each letter splits the word list
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LETTER ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} words:", result.total_words);
    for stats in &result.letters {
        let bar = balance_bar(stats.containing, result.total_words, 20);
        println!(
            "   {}  [{}] {:3} with / {:3} without",
            stats.letter.to_string().bright_yellow().bold(),
            bar.green(),
            stats.containing,
            stats.missing
        );
    }

    if let Some(best) = result.best_letter() {
        println!(
            "\n   Most even split: {} ({:.0}% balance)",
            best.letter.to_string().bright_green().bold(),
            best.balance * 100.0
        );
    }
}

/// Print the statistics of a simulation run
pub fn print_simulation_statistics(stats: &SimulationStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Sessions:".bright_cyan().bold());
    println!("   Sessions played:  {}", stats.sessions);
    println!(
        "   Average choices:  {}",
        format!("{:.2}", stats.average_choices).bright_yellow().bold()
    );
    println!(
        "   Fewest:           {}",
        format!("{}", stats.min_choices).green()
    );
    println!(
        "   Most:             {}",
        format!("{}", stats.max_choices).yellow()
    );
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    println!("\n🏁 {}", "Endings:".bright_cyan().bold());
    for (ending, label) in [
        (Ending::Revealed, "One word left"),
        (Ending::EmptyPool, "Empty pool"),
        (Ending::OutOfLetters, "Out of letters"),
    ] {
        let count = stats.endings.get(&ending).copied().unwrap_or(0);
        println!("   {label:<16}  {count}");
    }

    if stats.sessions == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for choices in stats.min_choices..=stats.max_choices {
        if let Some(&count) = stats.choice_distribution.get(&choices) {
            let pct = (count as f64 / stats.sessions as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {choices:2}: {bar} {count:6} ({pct:5.1}%)");
        }
    }
}

/// Print the built-in word lists and letter sequences
pub fn print_catalog(lists: &[WordList], sequences: &[SequencePreset]) {
    println!("\n{}", "Word lists".bright_cyan().bold());
    for list in lists {
        println!(
            "   {:<14} {:<24} {} words",
            list.id.bright_yellow(),
            list.name,
            list.words.len()
        );
    }

    println!("\n{}", "Letter sequences".bright_cyan().bold());
    for preset in sequences {
        println!(
            "   {:<14} {:<24} {}",
            preset.id.bright_yellow(),
            preset.name,
            preset.sequence
        );
    }
    println!();
}
