//! Depth-sensing port: the contract both sensing paths satisfy.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// One sample from a depth frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepthPoint {
    /// East offset in local meters.
    pub x: f32,
    /// North offset in local meters.
    pub y: f32,
    /// Height above the ground plane in meters.
    pub z: f32,
    /// Per-point confidence in [0, 1].
    pub confidence: f32,
}

/// Which sensing path produced a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepthSource {
    /// Hardware depth sensor.
    Lidar,
    /// Motion-derived position estimation.
    VisualSlam,
}

/// One depth snapshot. Transient: replaced on every sensor tick, never
/// persisted.
#[derive(Clone, Debug)]
pub struct DepthFrame {
    /// Capture time, microseconds since the Unix epoch.
    pub timestamp_us: u64,
    /// Ground-plane samples.
    pub points: Vec<DepthPoint>,
    /// Producing path.
    pub source: DepthSource,
}

/// Static description of a sensing path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorCapabilities {
    /// A hardware depth sensor is present.
    pub has_lidar: bool,
    /// The platform exposes a depth API.
    pub has_depth_sensing: bool,
    /// Maximum usable range in meters.
    pub max_range_m: f32,
    /// Expected measurement error as a percentage.
    pub accuracy_percent: f32,
}

/// Hardware abstraction over the two sensing paths.
///
/// Both adapters ultimately produce position samples painted into the
/// same voxel grid; the port only changes where those samples come from
/// and how confident they are.
///
/// Capability absence and permission denial are ordinary `false` returns;
/// the port never throws for an unsupported environment.
pub trait DepthSensingPort: Send {
    /// Capability probe. Does not prompt for permission.
    fn is_available(&self) -> bool;

    /// Acquire the underlying sensor session. May prompt the user.
    /// Returns false when denied or unsupported.
    fn request_access(&mut self) -> bool;

    /// Most recent frame, or `None` if none has been produced yet.
    fn depth_frame(&mut self) -> Option<DepthFrame>;

    /// Static capability description.
    fn capabilities(&self) -> SensorCapabilities;

    /// Human-readable accuracy string for UI badges.
    fn accuracy_label(&self) -> String;

    /// Inject an externally derived position in local meters.
    ///
    /// No-op by default: the hardware path derives position on its own.
    /// The estimation path overrides this as its only input signal, so
    /// callers never need to know which adapter they hold.
    fn update_position(&mut self, _x: f32, _y: f32) {}

    /// Release any sensor/session handle. Idempotent.
    fn dispose(&mut self);
}

/// Microseconds since the Unix epoch, for frame timestamps.
pub(crate) fn timestamp_us() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(0)
}
