//! Tracking thread: consumes the geodetic position stream in walking
//! mode.
//!
//! Stands in for the positioning watch callback of the UI layer: fixes
//! arrive irregularly (typically 1 Hz or on movement), independent of
//! the scan tick. Stream errors are logged and never terminate tracking.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError};

use crate::state::SharedScanStateHandle;
use crate::tracking::GeofencedTracker;

/// One event from the positioning stream.
#[derive(Clone, Debug)]
pub enum PositionUpdate {
    /// A geodetic fix.
    Fix {
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lon: f64,
    },
    /// A stream error; tracking keeps the last known state.
    Error(String),
}

/// Tracking thread handle.
pub struct TrackingThread {
    handle: JoinHandle<()>,
}

impl TrackingThread {
    /// Spawn the tracking loop. The thread owns the tracker.
    pub fn spawn(
        tracker: GeofencedTracker,
        fix_rx: Receiver<PositionUpdate>,
        state: SharedScanStateHandle,
        running: Arc<AtomicBool>,
        poll_interval: Duration,
    ) -> Self {
        let handle = thread::Builder::new()
            .name("tracking".into())
            .spawn(move || run_loop(tracker, fix_rx, state, running, poll_interval))
            .expect("failed to spawn tracking thread");
        Self { handle }
    }

    /// Wait for the thread to finish.
    pub fn join(self) -> thread::Result<()> {
        self.handle.join()
    }
}

fn run_loop(
    mut tracker: GeofencedTracker,
    fix_rx: Receiver<PositionUpdate>,
    state: SharedScanStateHandle,
    running: Arc<AtomicBool>,
    poll_interval: Duration,
) {
    log::info!(
        "tracking thread starting: {} voxel estimate",
        tracker.total_voxel_estimate()
    );

    if let Ok(mut st) = state.write() {
        st.running = true;
    }

    while running.load(Ordering::Relaxed) {
        match fix_rx.recv_timeout(poll_interval) {
            Ok(PositionUpdate::Fix { lat, lon }) => {
                tracker.on_fix(lat, lon);
                if let Ok(mut st) = state.write() {
                    st.stats = tracker.stats();
                    st.is_inside_boundary = tracker.is_inside_boundary();
                    st.last_fix = tracker.last_fix();
                }
            }
            Ok(PositionUpdate::Error(message)) => {
                tracker.on_error(&message);
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => {
                log::info!("position stream closed, tracking thread stopping");
                break;
            }
        }
    }

    if let Ok(mut st) = state.write() {
        st.running = false;
    }
    log::info!("tracking thread stopped");
}
