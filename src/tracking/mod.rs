//! Walking-mode geofenced coverage tracking.

pub mod geofence;

pub use geofence::{FixOutcome, GeofencedTracker};
