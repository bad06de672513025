//! Terminal output formatting
//!
//! Display utilities for CLI results, pretty-printing and export.

pub mod display;
pub mod export;
pub mod formatters;

pub use display::{
    print_analysis_result, print_catalog, print_replay_result, print_simulation_statistics,
};
pub use export::{ExportFormat, export_result};
