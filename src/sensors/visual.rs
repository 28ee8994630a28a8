//! Fallback sensing path: motion-derived position estimation.

use super::port::{
    timestamp_us, DepthFrame, DepthPoint, DepthSensingPort, DepthSource, SensorCapabilities,
};

/// Per-point confidence reported by the estimation path.
pub const VISUAL_CONFIDENCE: f32 = 0.6;

/// Expected measurement error of the estimation path, percent.
pub const VISUAL_ACCURACY_PERCENT: f32 = 4.0;

/// Nominal working range of the estimation path in meters.
pub const VISUAL_MAX_RANGE_M: f32 = 10.0;

/// Estimation-path adapter.
///
/// Carries no motion estimation of its own:
/// [`update_position`](DepthSensingPort::update_position) is the
/// injection point that upstream code drives from whatever signal is
/// available: device-motion deltas, or simulated motion in the absence
/// of hardware. Each injected position becomes a one-point frame at
/// reduced confidence.
///
/// `request_access` always succeeds; this path exists precisely for
/// environments where the hardware path is unsupported or denied.
#[derive(Debug, Default)]
pub struct VisualSlamAdapter {
    latest: Option<DepthFrame>,
}

impl VisualSlamAdapter {
    /// Create the adapter with no position yet.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DepthSensingPort for VisualSlamAdapter {
    fn is_available(&self) -> bool {
        true
    }

    fn request_access(&mut self) -> bool {
        true
    }

    fn depth_frame(&mut self) -> Option<DepthFrame> {
        self.latest.clone()
    }

    fn capabilities(&self) -> SensorCapabilities {
        SensorCapabilities {
            has_lidar: false,
            has_depth_sensing: false,
            max_range_m: VISUAL_MAX_RANGE_M,
            accuracy_percent: VISUAL_ACCURACY_PERCENT,
        }
    }

    fn accuracy_label(&self) -> String {
        format!("\u{b1}{}% (Calibrated)", VISUAL_ACCURACY_PERCENT)
    }

    fn update_position(&mut self, x: f32, y: f32) {
        self.latest = Some(DepthFrame {
            timestamp_us: timestamp_us(),
            points: vec![DepthPoint {
                x,
                y,
                z: 0.0,
                confidence: VISUAL_CONFIDENCE,
            }],
            source: DepthSource::VisualSlam,
        });
    }

    fn dispose(&mut self) {
        self.latest = None;
    }
}
