//! High-accuracy sensing path: a depth sensor behind a link seam.

use super::port::{
    timestamp_us, DepthFrame, DepthPoint, DepthSensingPort, DepthSource, SensorCapabilities,
};

/// Per-point confidence reported by the hardware path.
pub const LIDAR_CONFIDENCE: f32 = 0.95;

/// Expected measurement error of the hardware path, percent.
pub const LIDAR_ACCURACY_PERCENT: f32 = 0.8;

/// Usable range of the depth sensor in meters.
pub const LIDAR_MAX_RANGE_M: f32 = 5.0;

/// Low-level link to the platform depth stack.
///
/// Platform integrations implement this; the engine ships
/// [`SimulatedLidarLink`](super::sim::SimulatedLidarLink) for
/// hardware-free development.
pub trait LidarLink: Send {
    /// The platform exposes a depth sensor. Must not prompt.
    fn probe(&self) -> bool;

    /// Open the sensor session. May prompt the user for access; returns
    /// false when denied or unsupported.
    fn open(&mut self) -> bool;

    /// Read the latest batch of ground-plane samples, or `None` when the
    /// sensor produced nothing since the last read.
    fn read_points(&mut self) -> Option<Vec<DepthPoint>>;

    /// Close the sensor session. Idempotent.
    fn close(&mut self);

    /// Inject the device's current position, for links that synthesize
    /// samples around it. No-op for real hardware.
    fn update_position(&mut self, _x: f32, _y: f32) {}
}

/// Depth-sensor adapter over a [`LidarLink`].
pub struct LidarDepthAdapter {
    link: Box<dyn LidarLink>,
    session_open: bool,
    latest: Option<DepthFrame>,
}

impl LidarDepthAdapter {
    /// Wrap a platform link. The session is not opened until
    /// [`request_access`](DepthSensingPort::request_access).
    pub fn new(link: Box<dyn LidarLink>) -> Self {
        Self {
            link,
            session_open: false,
            latest: None,
        }
    }
}

impl DepthSensingPort for LidarDepthAdapter {
    fn is_available(&self) -> bool {
        self.link.probe()
    }

    fn request_access(&mut self) -> bool {
        if !self.link.probe() {
            log::info!("depth sensor not present, access not requested");
            return false;
        }
        self.session_open = self.link.open();
        if !self.session_open {
            log::info!("depth sensor access denied");
        }
        self.session_open
    }

    fn depth_frame(&mut self) -> Option<DepthFrame> {
        if !self.session_open {
            return None;
        }
        // A read miss is a transient condition: keep the previous frame.
        if let Some(points) = self.link.read_points() {
            self.latest = Some(DepthFrame {
                timestamp_us: timestamp_us(),
                points,
                source: DepthSource::Lidar,
            });
        }
        self.latest.clone()
    }

    fn capabilities(&self) -> SensorCapabilities {
        SensorCapabilities {
            has_lidar: true,
            has_depth_sensing: true,
            max_range_m: LIDAR_MAX_RANGE_M,
            accuracy_percent: LIDAR_ACCURACY_PERCENT,
        }
    }

    fn accuracy_label(&self) -> String {
        format!("\u{b1}{}% (LIDAR)", LIDAR_ACCURACY_PERCENT)
    }

    fn update_position(&mut self, x: f32, y: f32) {
        self.link.update_position(x, y);
    }

    fn dispose(&mut self) {
        if self.session_open {
            self.link.close();
            self.session_open = false;
            self.latest = None;
            log::debug!("depth sensor session released");
        }
    }
}
