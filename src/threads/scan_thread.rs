//! Scan thread: ticks the active depth adapter and paints its frames.
//!
//! Stands in for the per-frame animation callback of the UI layer: runs
//! at a fixed rate, drains injected positions, integrates the latest
//! depth frame into the shared session, and publishes statistics.
//!
//! The session handle is the single mutable shared resource; all paints
//! happen under its write lock, so the check-then-insert of the grid
//! stays atomic with respect to readers and other writers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Receiver, TryRecvError};

use crate::core::Point;
use crate::sensors::DepthSensingService;
use crate::session::CoverageSession;
use crate::state::SharedScanStateHandle;

/// Configuration for the scan thread.
#[derive(Clone, Copy, Debug)]
pub struct ScanThreadConfig {
    /// Tick rate in Hz. Display refresh rate in the UI layer.
    pub tick_hz: f32,
    /// Minimum per-point confidence painted into the grid.
    pub min_confidence: f32,
}

impl Default for ScanThreadConfig {
    fn default() -> Self {
        Self {
            tick_hz: 60.0,
            min_confidence: 0.5,
        }
    }
}

/// Scan thread handle.
pub struct ScanThread {
    handle: JoinHandle<()>,
}

impl ScanThread {
    /// Spawn the scan loop.
    ///
    /// The thread owns the sensing service and disposes it on exit, so a
    /// stop request always releases the sensor session.
    pub fn spawn(
        config: ScanThreadConfig,
        service: DepthSensingService,
        session: Arc<RwLock<CoverageSession>>,
        state: SharedScanStateHandle,
        position_rx: Receiver<Point>,
        running: Arc<AtomicBool>,
    ) -> Self {
        let handle = thread::Builder::new()
            .name("scan".into())
            .spawn(move || run_loop(config, service, session, state, position_rx, running))
            .expect("failed to spawn scan thread");
        Self { handle }
    }

    /// Wait for the thread to finish.
    pub fn join(self) -> thread::Result<()> {
        self.handle.join()
    }
}

fn run_loop(
    config: ScanThreadConfig,
    mut service: DepthSensingService,
    session: Arc<RwLock<CoverageSession>>,
    state: SharedScanStateHandle,
    position_rx: Receiver<Point>,
    running: Arc<AtomicBool>,
) {
    log::info!(
        "scan thread starting: mode={}, {} Hz",
        service.mode().as_str(),
        config.tick_hz
    );

    if let Ok(mut st) = state.write() {
        st.mode = Some(service.mode());
        st.accuracy_label = service.accuracy_label();
        st.running = true;
    }

    let tick = Duration::from_secs_f32(1.0 / config.tick_hz.max(1.0));

    while running.load(Ordering::Relaxed) {
        // Drain injected positions (device-motion upstream)
        let mut disconnected = false;
        loop {
            match position_rx.try_recv() {
                Ok(p) => {
                    if p.is_finite() {
                        service.update_position(p.x, p.y);
                    } else {
                        log::warn!("discarding non-finite injected position");
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }
        if disconnected {
            log::info!("position channel closed, scan thread stopping");
            break;
        }

        let newly_painted = match session.write() {
            Ok(mut s) => service.integrate_frame(&mut s, config.min_confidence),
            Err(_) => 0,
        };

        if newly_painted > 0 {
            if let (Ok(s), Ok(mut st)) = (session.read(), state.write()) {
                st.stats = s.stats();
            }
        }

        thread::sleep(tick);
    }

    service.dispose();
    if let Ok(mut st) = state.write() {
        st.running = false;
    }
    log::info!("scan thread stopped");
}
