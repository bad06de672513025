//! Simulate command - random sessions
//!
//! Plays many sessions with random choices and reports how they end.

use crate::core::{Choice, LetterSequence};
use crate::filter::{FilterState, initialize, transition};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Why a session completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ending {
    /// A pool narrowed to exactly one word
    Revealed,
    /// A pool ran dry
    EmptyPool,
    /// Every letter was asked about with both pools still open
    OutOfLetters,
}

impl Ending {
    fn of(state: &FilterState) -> Self {
        let (left, right) = (state.left_words().len(), state.right_words().len());
        if left == 1 || right == 1 {
            Self::Revealed
        } else if left == 0 || right == 0 {
            Self::EmptyPool
        } else {
            Self::OutOfLetters
        }
    }
}

/// Outcome of a single simulated session
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub choices: usize,
    pub ending: Ending,
}

/// Statistics over all simulated sessions
#[derive(Debug)]
pub struct SimulationStatistics {
    pub sessions: usize,
    pub average_choices: f64,
    pub min_choices: usize,
    pub max_choices: usize,
    pub choice_distribution: FxHashMap<usize, usize>,
    pub endings: FxHashMap<Ending, usize>,
    pub duration: Duration,
}

/// Play one session to completion with choices drawn from `rng`
pub fn play_random<S: AsRef<str>, R: Rng>(
    words: &[S],
    letters: &LetterSequence,
    rng: &mut R,
) -> SessionOutcome {
    let mut state = initialize(words, letters);

    // Terminates: the index passes the end of the sequence within len + 1 steps
    loop {
        let choice = if rng.random_bool(0.5) {
            Choice::Left
        } else {
            Choice::Right
        };
        state = transition(&state, choice);
        if state.is_complete() {
            break;
        }
    }

    SessionOutcome {
        choices: state.sequence().len(),
        ending: Ending::of(&state),
    }
}

/// Run `sessions` random sessions in parallel
///
/// Session `i` is seeded with `seed + i`, so a given seed always reproduces the
/// same statistics. Pass `show_progress = false` to suppress the progress bar.
pub fn run_simulation<S: AsRef<str> + Sync>(
    words: &[S],
    letters: &LetterSequence,
    sessions: usize,
    seed: u64,
    show_progress: bool,
) -> SimulationStatistics {
    let pb = if show_progress {
        let pb = ProgressBar::new(sessions as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb.set_message("simulating");
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let outcomes: Vec<SessionOutcome> = (0..sessions)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let outcome = play_random(words, letters, &mut rng);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("done");

    summarize(&outcomes, start.elapsed())
}

fn summarize(outcomes: &[SessionOutcome], duration: Duration) -> SimulationStatistics {
    let mut choice_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut endings: FxHashMap<Ending, usize> = FxHashMap::default();

    for outcome in outcomes {
        *choice_distribution.entry(outcome.choices).or_insert(0) += 1;
        *endings.entry(outcome.ending).or_insert(0) += 1;
    }

    let total: usize = outcomes.iter().map(|o| o.choices).sum();
    let sessions = outcomes.len();

    SimulationStatistics {
        sessions,
        average_choices: if sessions == 0 {
            0.0
        } else {
            total as f64 / sessions as f64
        },
        min_choices: outcomes.iter().map(|o| o.choices).min().unwrap_or(0),
        max_choices: outcomes.iter().map(|o| o.choices).max().unwrap_or(0),
        choice_distribution,
        endings,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{READ_MINDS, READ_MINDS_SEQUENCE};

    fn letters() -> LetterSequence {
        LetterSequence::new(READ_MINDS_SEQUENCE).unwrap()
    }

    #[test]
    fn random_session_always_completes() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let outcome = play_random(READ_MINDS, &letters(), &mut rng);
            assert!(outcome.choices >= 1);
            assert!(outcome.choices <= READ_MINDS_SEQUENCE.len());
        }
    }

    #[test]
    fn empty_sequence_takes_one_choice() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty = LetterSequence::new("").unwrap();
        let outcome = play_random(READ_MINDS, &empty, &mut rng);
        assert_eq!(outcome.choices, 1);
    }

    #[test]
    fn simulation_is_reproducible() {
        let a = run_simulation(READ_MINDS, &letters(), 200, 42, false);
        let b = run_simulation(READ_MINDS, &letters(), 200, 42, false);

        assert_eq!(a.sessions, 200);
        assert_eq!(a.choice_distribution, b.choice_distribution);
        assert_eq!(a.endings, b.endings);
    }

    #[test]
    fn simulation_counts_add_up() {
        let stats = run_simulation(READ_MINDS, &letters(), 150, 3, false);
        assert_eq!(stats.choice_distribution.values().sum::<usize>(), 150);
        assert_eq!(stats.endings.values().sum::<usize>(), 150);
        assert!(stats.min_choices <= stats.max_choices);
        assert!(stats.average_choices >= stats.min_choices as f64);
        assert!(stats.average_choices <= stats.max_choices as f64);
    }

    #[test]
    fn zero_sessions() {
        let stats = run_simulation(READ_MINDS, &letters(), 0, 0, false);
        assert_eq!(stats.sessions, 0);
        assert!(stats.average_choices.abs() < f64::EPSILON);
        assert_eq!(stats.max_choices, 0);
    }

    #[test]
    fn ending_classification() {
        let letters = LetterSequence::new("Z").unwrap();
        // Nobody contains Z: Right keeps every word left, none right
        let state = transition(&initialize(&["ab", "cd", "ef"], &letters), Choice::Right);
        assert_eq!(Ending::of(&state), Ending::EmptyPool);

        let letters = LetterSequence::new("A").unwrap();
        let state = transition(&initialize(&["ab", "ac", "de", "fg"], &letters), Choice::Left);
        assert_eq!(Ending::of(&state), Ending::OutOfLetters);

        let state = transition(&initialize(&["ab", "cd", "ef"], &letters), Choice::Left);
        assert_eq!(Ending::of(&state), Ending::Revealed);
    }
}
