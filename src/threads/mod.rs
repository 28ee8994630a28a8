//! Sampling threads feeding the coverage engine.
//!
//! Two independent sources, mirroring the UI layer's event model:
//! - [`ScanThread`]: fixed-rate depth tick (the animation-frame loop).
//! - [`TrackingThread`]: irregular geodetic fixes (the positioning
//!   watch).
//!
//! Both mutate shared state behind locks and exit when the running flag
//! clears or their input channel disconnects.

pub mod scan_thread;
pub mod tracking_thread;

pub use scan_thread::{ScanThread, ScanThreadConfig};
pub use tracking_thread::{PositionUpdate, TrackingThread};
