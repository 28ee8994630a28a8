//! Axis-aligned bounding boxes in local and geodetic space.
//!
//! [`Bounds`] gates the polygon containment test: a point outside a
//! polygon's box cannot be inside the polygon, so the O(n) ray cast is
//! skipped. [`GeoBounds`] sizes the walking-mode voxel estimate.

use serde::{Deserialize, Serialize};

use super::point::{GeoVertex, Point};
use super::transform::haversine_m;

/// Axis-aligned bounding box in local meters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum corner (smallest x and y).
    pub min: Point,
    /// Maximum corner (largest x and y).
    pub max: Point,
}

impl Bounds {
    /// Create a bounding box from min and max corners.
    #[inline]
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Smallest box containing all points.
    ///
    /// Returns an inverted (min > max) box for an empty slice; such a box
    /// contains nothing.
    pub fn from_points(points: &[Point]) -> Self {
        let mut min = Point::new(f32::INFINITY, f32::INFINITY);
        let mut max = Point::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        for p in points {
            min = min.min(*p);
            max = max.max(*p);
        }
        Self { min, max }
    }

    /// Width (x extent) in meters.
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height (y extent) in meters.
    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Center of the box.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Point-inside test, edges inclusive.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.min.x && x <= self.max.x && y >= self.min.y && y <= self.max.y
    }
}

/// Axis-aligned bounding box in geodetic degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl GeoBounds {
    /// Smallest box containing all vertices.
    ///
    /// Returns an inverted box for an empty slice.
    pub fn from_vertices(vertices: &[GeoVertex]) -> Self {
        let mut b = Self {
            min_lat: f64::INFINITY,
            max_lat: f64::NEG_INFINITY,
            min_lon: f64::INFINITY,
            max_lon: f64::NEG_INFINITY,
        };
        for v in vertices {
            b.min_lat = b.min_lat.min(v.lat);
            b.max_lat = b.max_lat.max(v.lat);
            b.min_lon = b.min_lon.min(v.lon);
            b.max_lon = b.max_lon.max(v.lon);
        }
        b
    }

    /// Point-inside test, edges inclusive.
    #[inline]
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }

    /// East-west extent in meters, measured along the southern edge.
    pub fn width_m(&self) -> f64 {
        haversine_m(
            GeoVertex::new(self.min_lat, self.min_lon),
            GeoVertex::new(self.min_lat, self.max_lon),
        )
    }

    /// North-south extent in meters, measured along the western edge.
    pub fn height_m(&self) -> f64 {
        haversine_m(
            GeoVertex::new(self.min_lat, self.min_lon),
            GeoVertex::new(self.max_lat, self.min_lon),
        )
    }
}
