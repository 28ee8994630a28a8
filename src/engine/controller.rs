//! Scanning-session lifecycle: start either sampling mode, stop
//! everything from one place.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crossbeam_channel::{unbounded, Sender};

use crate::config::EngineConfig;
use crate::core::Point;
use crate::geometry::GeoPolygon;
use crate::sensors::{DepthSensingService, LidarLink};
use crate::session::CoverageSession;
use crate::state::{create_shared_state, SharedScanStateHandle};
use crate::threads::{PositionUpdate, ScanThread, ScanThreadConfig, TrackingThread};
use crate::tracking::GeofencedTracker;

/// Owns one scanning session's threads, channels, and shared state.
///
/// `stop` is the single cancellation entry point: it ends the scan tick
/// loop, closes the position stream, and joins the threads, which
/// release the sensor session on their way out. It is idempotent and
/// safe to call on a controller that never started.
pub struct ScanController {
    running: Arc<AtomicBool>,
    state: SharedScanStateHandle,
    scan: Option<ScanThread>,
    tracking: Option<TrackingThread>,
    position_tx: Option<Sender<Point>>,
    fix_tx: Option<Sender<PositionUpdate>>,
}

impl ScanController {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
            state: create_shared_state(),
            scan: None,
            tracking: None,
            position_tx: None,
            fix_tx: None,
        }
    }

    /// Shared state handle for UI polling.
    pub fn state(&self) -> SharedScanStateHandle {
        self.state.clone()
    }

    /// Start a depth-scanning session over the given platform link.
    ///
    /// Runs sensing-path selection, spawns the scan tick loop, and
    /// returns the session handle for stats queries and boundary edits.
    /// Any previously running session is stopped first.
    pub fn start_depth_scan(
        &mut self,
        config: &EngineConfig,
        link: Box<dyn LidarLink>,
    ) -> Arc<RwLock<CoverageSession>> {
        self.stop();

        let service = DepthSensingService::initialize(link);
        let session = Arc::new(RwLock::new(CoverageSession::new(config.grid.voxel_size)));
        let (position_tx, position_rx) = unbounded();

        self.running.store(true, Ordering::Relaxed);
        self.position_tx = Some(position_tx);
        self.scan = Some(ScanThread::spawn(
            ScanThreadConfig {
                tick_hz: config.sensing.tick_hz,
                min_confidence: config.sensing.min_confidence,
            },
            service,
            session.clone(),
            self.state.clone(),
            position_rx,
            self.running.clone(),
        ));

        session
    }

    /// Start a geofenced walking session over a confirmed boundary.
    ///
    /// Any previously running session is stopped first.
    pub fn start_walking(&mut self, config: &EngineConfig, boundary: GeoPolygon) {
        self.stop();

        let tracker = GeofencedTracker::new(boundary, config.grid.walking_voxel_size);
        let (fix_tx, fix_rx) = unbounded();

        self.running.store(true, Ordering::Relaxed);
        self.fix_tx = Some(fix_tx);
        self.tracking = Some(TrackingThread::spawn(
            tracker,
            fix_rx,
            self.state.clone(),
            self.running.clone(),
            Duration::from_millis(config.tracking.channel_poll_ms),
        ));
    }

    /// Sender for injected device positions (depth-scan mode).
    pub fn position_sender(&self) -> Option<Sender<Point>> {
        self.position_tx.clone()
    }

    /// Sender for geodetic position updates (walking mode).
    pub fn fix_sender(&self) -> Option<Sender<PositionUpdate>> {
        self.fix_tx.clone()
    }

    /// A session is currently active.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Stop the active session: end the tick loop, close the position
    /// streams, join the threads (releasing the sensor session).
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        self.position_tx = None;
        self.fix_tx = None;

        if let Some(scan) = self.scan.take() {
            if scan.join().is_err() {
                log::warn!("scan thread panicked during shutdown");
            }
        }
        if let Some(tracking) = self.tracking.take() {
            if tracking.join().is_err() {
                log::warn!("tracking thread panicked during shutdown");
            }
        }
    }
}

impl Default for ScanController {
    fn default() -> Self {
        Self::new()
    }
}
