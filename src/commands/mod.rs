//! Command implementations

pub mod analyze;
pub mod simple;

pub use analyze::{AnalysisResult, analyze_root};
pub use simple::{Command, play_lines, run_simple};
