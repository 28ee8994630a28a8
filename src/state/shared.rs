//! Thread-safe shared state polled by UI collaborators.
//!
//! Written by the scan/tracking threads, read by overlay and badge
//! rendering. The engine keeps no process-wide singletons: every scanning
//! attempt owns its own handle.

use std::sync::{Arc, RwLock};

use crate::core::GeoVertex;
use crate::sensors::SensingMode;
use crate::session::CoverageStats;

/// Snapshot of everything the UI needs between queries.
#[derive(Clone, Debug, Default)]
pub struct SharedScanState {
    /// Adopted sensing path, once a scan has started.
    pub mode: Option<SensingMode>,
    /// Accuracy badge text for the active path.
    pub accuracy_label: String,
    /// Latest coverage statistics.
    pub stats: CoverageStats,
    /// Walking mode: the last fix was inside the boundary.
    pub is_inside_boundary: bool,
    /// Walking mode: last geodetic fix received.
    pub last_fix: Option<GeoVertex>,
    /// A scanning session is active.
    pub running: bool,
}

/// Handle type for shared state.
pub type SharedScanStateHandle = Arc<RwLock<SharedScanState>>;

/// Create a fresh shared state handle.
pub fn create_shared_state() -> SharedScanStateHandle {
    Arc::new(RwLock::new(SharedScanState::default()))
}
