//! Command implementations

pub mod analyze;
pub mod replay;
pub mod simple;
pub mod simulate;

pub use analyze::{AnalysisResult, LetterStats, analyze_letters};
pub use replay::{ReplayConfig, ReplayResult, ReplayStep, replay};
pub use simple::{run_simple, run_simple_with};
pub use simulate::{Ending, SimulationStatistics, run_simulation};
