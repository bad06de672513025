//! Mind Reader - CLI
//!
//! Letter-by-letter word guessing game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use mind_reader::{
    commands::{ReplayConfig, analyze_letters, replay, run_simple, run_simulation},
    output::{
        ExportFormat, export_result, print_analysis_result, print_catalog, print_replay_result,
        print_simulation_statistics,
    },
    wordlists::{
        DEFAULT_LIST_ID, DEFAULT_SEQUENCE_ID, SequencePreset, WordList, builtin_sequences,
        builtin_word_lists, resolve_sequence, resolve_word_list,
    },
};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mind_reader",
    about = "Think of a word, answer L or R for each letter, and let the pools find it",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: a built-in id (see `lists`) or a path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_LIST_ID)]
    wordlist: String,

    /// Letter sequence: a built-in id (see `lists`) or 3-50 custom letters
    #[arg(short = 'l', long, global = true, default_value = DEFAULT_SEQUENCE_ID)]
    letters: String,

    /// Write log output to this file
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Apply a recorded string of choices, e.g. "LRRL"
    Replay {
        /// The choices to apply, L or R per letter
        choices: String,

        /// Show pool sizes before and after every step
        #[arg(long)]
        detail: bool,

        /// Export the result in this format instead of printing it
        #[arg(short, long, value_enum)]
        export: Option<ExportFormat>,

        /// File to write the export to (default: stdout)
        #[arg(short, long, requires = "export")]
        output: Option<PathBuf>,
    },

    /// Show how each letter of the sequence splits the word list
    Analyze,

    /// Play random sessions and report how they end
    Simulate {
        /// Number of sessions to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Seed for reproducible runs
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },

    /// List built-in word lists and letter sequences
    Lists,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Terminal logging would draw over the TUI
    init_logging(cli.log.as_ref(), cli.verbose, !matches!(command, Commands::Play))?;

    let select = || -> Result<(WordList, SequencePreset)> {
        let (word_list, preset) = load_selection(&cli.wordlist, &cli.letters)?;
        log::info!(
            "Using word list {} ({} words) with letters {}",
            word_list.id,
            word_list.words.len(),
            preset.sequence
        );
        Ok((word_list, preset))
    };

    match command {
        Commands::Play => {
            let (word_list, preset) = select()?;
            run_play_command(word_list, preset)
        }
        Commands::Simple => {
            let (word_list, preset) = select()?;
            run_simple(&word_list, &preset.sequence)
        }
        Commands::Replay {
            choices,
            detail,
            export,
            output,
        } => {
            let (word_list, preset) = select()?;
            run_replay_command(&word_list, &preset, choices, detail, export, output)
        }
        Commands::Analyze => {
            let (word_list, preset) = select()?;
            let result = analyze_letters(&word_list.words, &preset.sequence);
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Simulate { count, seed } => {
            let (word_list, preset) = select()?;
            println!(
                "Simulating {count} sessions on {} with letters {}...",
                word_list.name, preset.sequence
            );
            let stats = run_simulation(&word_list.words, &preset.sequence, count, seed, true);
            print_simulation_statistics(&stats);
            Ok(())
        }
        Commands::Lists => {
            print_catalog(&builtin_word_lists(), &builtin_sequences());
            Ok(())
        }
    }
}

/// Install the logger
///
/// With `--log` everything at info level or above (more with `-v`) goes to the
/// file. Without it, warnings go to stderr, except in the TUI where nothing is logged.
fn init_logging(log_file: Option<&PathBuf>, verbose: u8, to_terminal: bool) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        WriteLogger::init(level.max(LevelFilter::Info), config, file)?;
    } else if to_terminal {
        TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)?;
    }

    Ok(())
}

/// Resolve the -w and -l flags
fn load_selection(wordlist: &str, letters: &str) -> Result<(WordList, SequencePreset)> {
    let word_list = resolve_word_list(wordlist)
        .with_context(|| format!("Cannot use word list '{wordlist}'"))?;
    let preset = resolve_sequence(letters)
        .with_context(|| format!("Cannot use letter sequence '{letters}'"))?;
    Ok((word_list, preset))
}

fn run_replay_command(
    word_list: &WordList,
    preset: &SequencePreset,
    choices: String,
    detail: bool,
    export: Option<ExportFormat>,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = ReplayConfig::new(choices);
    let result = replay(&config, &word_list.words, &preset.sequence)?;

    let Some(format) = export else {
        print_replay_result(&result, detail);
        return Ok(());
    };

    let text = export_result(&result.state.result(), format)?;
    match output {
        Some(path) => {
            std::fs::write(&path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Exported {format} to {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn run_play_command(word_list: WordList, preset: SequencePreset) -> Result<()> {
    use mind_reader::interactive::{App, run_tui};

    let app = App::new(word_list, preset.sequence);
    run_tui(app)
}
