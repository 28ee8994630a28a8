//! Sensing-path selection and frame integration.

use serde::{Deserialize, Serialize};

use crate::session::CoverageSession;

use super::lidar::{LidarDepthAdapter, LidarLink};
use super::port::{DepthFrame, DepthSensingPort, SensorCapabilities};
use super::visual::VisualSlamAdapter;

/// Which sensing path a session adopted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensingMode {
    /// Hardware depth sensor.
    Lidar,
    /// Motion-derived estimation fallback.
    VisualSlam,
}

impl SensingMode {
    /// Short identifier for logs and UI badges.
    pub fn as_str(&self) -> &'static str {
        match self {
            SensingMode::Lidar => "lidar",
            SensingMode::VisualSlam => "visual-slam",
        }
    }
}

/// Owns the selected adapter for one scanning session.
///
/// Selection runs once at initialization and is never re-evaluated
/// mid-session: probe the hardware path, request access on success, and
/// fall back to the estimation path on an unsupported platform or a
/// denied prompt. The fallback never fails its own access request.
pub struct DepthSensingService {
    port: Box<dyn DepthSensingPort>,
    mode: SensingMode,
}

impl DepthSensingService {
    /// Select a sensing path over the given platform link.
    pub fn initialize(link: Box<dyn LidarLink>) -> Self {
        let mut lidar = LidarDepthAdapter::new(link);
        if lidar.is_available() && lidar.request_access() {
            log::info!("depth sensing initialized: mode=lidar");
            return Self {
                port: Box::new(lidar),
                mode: SensingMode::Lidar,
            };
        }
        log::info!("depth sensing initialized: mode=visual-slam (fallback)");
        Self {
            port: Box::new(VisualSlamAdapter::new()),
            mode: SensingMode::VisualSlam,
        }
    }

    /// Adopted sensing path.
    pub fn mode(&self) -> SensingMode {
        self.mode
    }

    /// Accuracy string of the active adapter, for UI badges.
    pub fn accuracy_label(&self) -> String {
        self.port.accuracy_label()
    }

    /// Capability description of the active adapter.
    pub fn capabilities(&self) -> SensorCapabilities {
        self.port.capabilities()
    }

    /// Most recent frame from the active adapter.
    pub fn depth_frame(&mut self) -> Option<DepthFrame> {
        self.port.depth_frame()
    }

    /// Forward an externally derived position to the active adapter.
    pub fn update_position(&mut self, x: f32, y: f32) {
        self.port.update_position(x, y);
    }

    /// Paint the current frame's samples into a session.
    ///
    /// Samples below `min_confidence` or with non-finite coordinates are
    /// skipped. Returns the number of newly discovered cells; zero means
    /// no UI refresh is needed.
    pub fn integrate_frame(&mut self, session: &mut CoverageSession, min_confidence: f32) -> usize {
        let Some(frame) = self.port.depth_frame() else {
            return 0;
        };
        let mut newly_painted = 0;
        for p in &frame.points {
            if p.confidence < min_confidence || !p.x.is_finite() || !p.y.is_finite() {
                continue;
            }
            if session.paint(p.x, p.y).is_new {
                newly_painted += 1;
            }
        }
        newly_painted
    }

    /// Release the active adapter's sensor session. Idempotent.
    pub fn dispose(&mut self) {
        self.port.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::sim::{SimulatedLidarConfig, SimulatedLidarLink};

    #[test]
    fn test_selects_lidar_when_supported() {
        let service =
            DepthSensingService::initialize(Box::new(SimulatedLidarLink::new(
                SimulatedLidarConfig::default(),
            )));
        assert_eq!(service.mode(), SensingMode::Lidar);
        assert!(service.capabilities().has_lidar);
        assert!(service.accuracy_label().contains("\u{b1}0.8%"));
    }

    #[test]
    fn test_falls_back_when_unsupported() {
        let mut service =
            DepthSensingService::initialize(Box::new(SimulatedLidarLink::absent()));
        assert_eq!(service.mode(), SensingMode::VisualSlam);
        assert!(service.accuracy_label().contains("\u{b1}4%"));
        assert!(!service.capabilities().has_lidar);

        // The fallback produces frames once positions are injected
        service.update_position(1.0, 1.0);
        assert!(service.depth_frame().is_some());
    }

    #[test]
    fn test_falls_back_when_denied() {
        let service = DepthSensingService::initialize(Box::new(SimulatedLidarLink::new(
            SimulatedLidarConfig {
                grant_access: false,
                ..SimulatedLidarConfig::default()
            },
        )));
        assert_eq!(service.mode(), SensingMode::VisualSlam);
    }

    #[test]
    fn test_integrate_frame_paints_session() {
        let mut service =
            DepthSensingService::initialize(Box::new(SimulatedLidarLink::new(
                SimulatedLidarConfig {
                    seed: 42,
                    ..SimulatedLidarConfig::default()
                },
            )));
        let mut session = CoverageSession::new(0.05);

        service.update_position(0.0, 0.0);
        let painted = service.integrate_frame(&mut session, 0.5);
        assert!(painted > 0);
        assert!(session.stats().voxel_count >= painted);

        // Re-integrating the same area discovers little to nothing new
        let repainted = service.integrate_frame(&mut session, 0.5);
        assert!(repainted <= painted);
    }

    #[test]
    fn test_min_confidence_filter() {
        let mut service =
            DepthSensingService::initialize(Box::new(SimulatedLidarLink::absent()));
        let mut session = CoverageSession::new(0.1);

        service.update_position(0.0, 0.0);
        // Visual-SLAM confidence is 0.6; a 0.9 floor rejects everything
        assert_eq!(service.integrate_frame(&mut session, 0.9), 0);
        assert_eq!(service.integrate_frame(&mut session, 0.5), 1);
    }
}
