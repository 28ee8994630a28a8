//! Coordinate primitives for the coverage engine.
//!
//! Three coordinate spaces are in play:
//! - **Local meters** ([`Point`]): a flat metric frame anchored at a
//!   session-specific origin. All painting happens here.
//! - **Geodetic degrees** ([`GeoVertex`]): WGS-84 latitude/longitude, used by
//!   walking-mode boundaries and the positioning stream.
//! - **Voxel cells** ([`VoxelCoord`]): integer cell indices obtained by
//!   quantizing local meters at a fixed cell size.

use serde::{Deserialize, Serialize};

/// Position in local meters.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// East offset in meters.
    pub x: f32,
    /// North offset in meters.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Origin point.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(&self, other: Point) -> Point {
        Point::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(&self, other: Point) -> Point {
        Point::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Both components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Geodetic coordinate in degrees.
///
/// `f64` throughout: a degree of latitude is ~111 km, so centimeter
/// resolution needs more mantissa than `f32` carries.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoVertex {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lon: f64,
}

impl GeoVertex {
    /// Create a new geodetic vertex.
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Both components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

/// Integer voxel cell index.
///
/// Two positions map to the same coordinate iff they fall in the same
/// square cell of side `voxel_size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct VoxelCoord {
    /// Column index (east).
    pub gx: i32,
    /// Row index (north).
    pub gy: i32,
}

impl VoxelCoord {
    /// Create a new voxel coordinate.
    #[inline]
    pub fn new(gx: i32, gy: i32) -> Self {
        Self { gx, gy }
    }

    /// Quantize a local-meter position to its cell.
    #[inline]
    pub fn from_world(x: f32, y: f32, voxel_size: f32) -> Self {
        Self {
            gx: (x / voxel_size).floor() as i32,
            gy: (y / voxel_size).floor() as i32,
        }
    }

    /// Center of this cell in local meters.
    #[inline]
    pub fn world_center(&self, voxel_size: f32) -> (f32, f32) {
        (
            (self.gx as f32 + 0.5) * voxel_size,
            (self.gy as f32 + 0.5) * voxel_size,
        )
    }
}
