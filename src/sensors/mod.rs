//! Depth-sensing hardware abstraction.
//!
//! Two paths satisfy one port: the hardware depth sensor (high accuracy,
//! may be absent or denied) and the motion-derived estimation fallback
//! (always available, lower confidence). Selection happens once per
//! session in [`DepthSensingService::initialize`].

pub mod lidar;
pub mod port;
pub mod service;
pub mod sim;
pub mod visual;

pub use lidar::{LidarDepthAdapter, LidarLink};
pub use port::{DepthFrame, DepthPoint, DepthSensingPort, DepthSource, SensorCapabilities};
pub use service::{DepthSensingService, SensingMode};
pub use sim::{SimulatedLidarConfig, SimulatedLidarLink};
pub use visual::VisualSlamAdapter;
