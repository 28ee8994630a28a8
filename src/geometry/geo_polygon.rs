//! Target-plot boundary polygon in geodetic degrees.

use serde::{Deserialize, Serialize};

use crate::core::transform::geo_to_local;
use crate::core::{GeoBounds, GeoVertex};
use crate::error::{KshetraError, Result};

use super::boundary::Boundary;

/// Simple closed polygon over geodetic vertices.
///
/// Same contract as [`Boundary`], applied directly in degree space. Valid
/// only for small extents (a few hundred meters) where degree-space
/// distortion is negligible; this is a scope limit, not a generality.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeoPolygon {
    vertices: Vec<GeoVertex>,
    bounds: GeoBounds,
}

impl GeoPolygon {
    /// Construct from at least 3 vertices.
    pub fn new(vertices: Vec<GeoVertex>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(KshetraError::InvalidBoundary(vertices.len()));
        }
        let bounds = GeoBounds::from_vertices(&vertices);
        Ok(Self { vertices, bounds })
    }

    /// Polygon vertices in order.
    pub fn vertices(&self) -> &[GeoVertex] {
        &self.vertices
    }

    /// Min/max latitude and longitude.
    pub fn bounds(&self) -> GeoBounds {
        self.bounds
    }

    /// Arithmetic mean of the vertices.
    ///
    /// Not a geodesically correct centroid; acceptable at city-block
    /// scale, where it serves as the local projection origin.
    pub fn centroid(&self) -> GeoVertex {
        let n = self.vertices.len() as f64;
        let (lat, lon) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(la, lo), v| (la + v.lat, lo + v.lon));
        GeoVertex::new(lat / n, lon / n)
    }

    /// Point-in-polygon test in degree space (even-odd ray cast with a
    /// bounding-box gate, same tie-break rules as [`Boundary::contains`]).
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        if !self.bounds.contains(lat, lon) {
            return false;
        }
        // f64 throughout: f32 cannot resolve sub-meter offsets at
        // real-world longitudes.
        let n = self.vertices.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if (vi.lat > lat) != (vj.lat > lat) {
                let lon_cross =
                    (vj.lon - vi.lon) * (lat - vi.lat) / (vj.lat - vi.lat) + vi.lon;
                if lon < lon_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Project vertices to local meters about `origin`.
    pub fn to_local(&self, origin: GeoVertex) -> Boundary {
        Boundary::new_unchecked(
            self.vertices
                .iter()
                .map(|v| geo_to_local(*v, origin))
                .collect(),
        )
    }

    /// Polygon area in square meters, via local projection about the
    /// centroid and the shoelace formula.
    pub fn area_m2(&self) -> f32 {
        self.to_local(self.centroid()).area_m2()
    }
}
