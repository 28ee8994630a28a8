//! Per-attempt coverage session and derived statistics.

pub mod coverage;

pub use coverage::{CoverageSession, CoverageStats, PaintResult, COMPLETION_THRESHOLD_PERCENT};
