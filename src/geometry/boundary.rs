//! Target-plot boundary polygon in local meters.

use serde::{Deserialize, Serialize};

use crate::core::{Bounds, Point};
use crate::error::{KshetraError, Result};

/// Simple closed polygon defining the measurement plot.
///
/// Vertices are assumed non-self-intersecting; this is not validated.
/// Immutable once constructed: a boundary change is a wholesale
/// replacement, never an in-place edit.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Boundary {
    vertices: Vec<Point>,
    bounds: Bounds,
}

impl Boundary {
    /// Construct from at least 3 vertices.
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(KshetraError::InvalidBoundary(vertices.len()));
        }
        Ok(Self::new_unchecked(vertices))
    }

    /// Construct without the vertex-count check.
    ///
    /// Callers must guarantee `vertices.len() >= 3`.
    pub(crate) fn new_unchecked(vertices: Vec<Point>) -> Self {
        let bounds = Bounds::from_points(&vertices);
        Self { vertices, bounds }
    }

    /// Axis-aligned rectangle from two opposite corners.
    pub fn from_rectangle(top_left: Point, bottom_right: Point) -> Self {
        Self::new_unchecked(vec![
            top_left,
            Point::new(bottom_right.x, top_left.y),
            bottom_right,
            Point::new(top_left.x, bottom_right.y),
        ])
    }

    /// Polygon vertices in order.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Precomputed bounding box.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Polygon area in square meters (shoelace formula, orientation
    /// independent).
    pub fn area_m2(&self) -> f32 {
        let n = self.vertices.len();
        let mut sum = 0.0f32;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            sum += a.x * b.y - b.x * a.y;
        }
        (sum * 0.5).abs()
    }

    /// Point-in-polygon test (even-odd ray cast).
    ///
    /// The bounding-box rejection runs first; every vertex lies inside the
    /// box, so it can never reject a point the ray cast would accept.
    /// A point exactly on an edge may be classified either way; the
    /// tie-break is consistent in both directions but otherwise
    /// implementation-defined.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        if !self.bounds.contains(x, y) {
            return false;
        }
        ray_cast(&self.vertices, x, y)
    }
}

/// Even-odd ray cast: count edge crossings of a ray running +x from the
/// query point.
pub(crate) fn ray_cast(vertices: &[Point], x: f32, y: f32) -> bool {
    let n = vertices.len();
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];
        if (vi.y > y) != (vj.y > y) {
            let x_cross = (vj.x - vi.x) * (y - vi.y) / (vj.y - vi.y) + vi.x;
            if x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
