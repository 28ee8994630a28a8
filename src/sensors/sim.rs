//! Simulated depth-sensor link for hardware-free development and tests.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use super::lidar::{LidarLink, LIDAR_CONFIDENCE};
use super::port::DepthPoint;

/// Simulation parameters.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedLidarConfig {
    /// Report the sensor as present.
    pub present: bool,
    /// Grant the access request.
    pub grant_access: bool,
    /// Ground samples synthesized per frame.
    pub points_per_frame: usize,
    /// Radius of the sampled disc around the device, meters.
    pub spread_m: f32,
    /// Gaussian noise added to each sample, meters.
    pub noise_stddev_m: f32,
    /// RNG seed; 0 uses entropy for non-deterministic behavior.
    pub seed: u64,
}

impl Default for SimulatedLidarConfig {
    fn default() -> Self {
        Self {
            present: true,
            grant_access: true,
            points_per_frame: 64,
            spread_m: 0.5,
            noise_stddev_m: 0.01,
            seed: 0,
        }
    }
}

/// Synthesizes ground-plane depth samples on a disc around the current
/// device position.
pub struct SimulatedLidarLink {
    config: SimulatedLidarConfig,
    open: bool,
    x: f32,
    y: f32,
    rng: SmallRng,
}

impl SimulatedLidarLink {
    /// Create a link with the given parameters.
    pub fn new(config: SimulatedLidarConfig) -> Self {
        let rng = if config.seed == 0 {
            SmallRng::from_entropy()
        } else {
            SmallRng::seed_from_u64(config.seed)
        };
        Self {
            config,
            open: false,
            x: 0.0,
            y: 0.0,
            rng,
        }
    }

    /// Convenience constructor for an environment with no depth API.
    pub fn absent() -> Self {
        Self::new(SimulatedLidarConfig {
            present: false,
            ..SimulatedLidarConfig::default()
        })
    }

    #[inline]
    fn gaussian(&mut self, stddev: f32) -> f32 {
        if stddev == 0.0 {
            return 0.0;
        }
        let n: f32 = self.rng.sample(StandardNormal);
        n * stddev
    }
}

impl LidarLink for SimulatedLidarLink {
    fn probe(&self) -> bool {
        self.config.present
    }

    fn open(&mut self) -> bool {
        self.open = self.config.present && self.config.grant_access;
        self.open
    }

    fn read_points(&mut self) -> Option<Vec<DepthPoint>> {
        if !self.open {
            return None;
        }
        let n = self.config.points_per_frame;
        let mut points = Vec::with_capacity(n);
        for i in 0..n {
            // Even angular spacing, random radius: covers the disc
            // without clumping at the center.
            let angle = (i as f32 / n as f32) * std::f32::consts::TAU;
            let radius = self.config.spread_m * self.rng.gen::<f32>().sqrt();
            let noise = self.config.noise_stddev_m;
            points.push(DepthPoint {
                x: self.x + radius * angle.cos() + self.gaussian(noise),
                y: self.y + radius * angle.sin() + self.gaussian(noise),
                z: self.gaussian(noise),
                confidence: LIDAR_CONFIDENCE,
            });
        }
        Some(points)
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn update_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }
}
