//! Geofenced walking coverage: live geodetic fixes against a confirmed
//! boundary.

use crate::core::transform::geo_to_local;
use crate::core::GeoVertex;
use crate::geometry::GeoPolygon;
use crate::grid::VoxelGrid;
use crate::session::{CoverageStats, COMPLETION_THRESHOLD_PERCENT};

/// Result of processing one position fix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixOutcome {
    /// The fix fell inside the boundary.
    pub inside: bool,
    /// The fix discovered a previously unvisited cell.
    pub painted_new: bool,
    /// Coverage percentage after the fix, 0-100.
    pub coverage_percent: f32,
}

/// Drives coverage from a live geodetic position stream.
///
/// Containment gates painting entirely: a fix outside the boundary flips
/// the inside flag and is not painted. Inside fixes are converted to
/// local meters about the boundary centroid and painted.
///
/// The total-voxel denominator is computed once, at construction, from
/// the boundary's bounding box (each extent via haversine, divided by
/// voxel size, rounded up, multiplied). It is a rectangular upper bound:
/// coverage of an irregular polygon plateaus below 100% of this estimate
/// unless the walked area spills proportionally past the polygon's
/// footprint.
#[derive(Clone, Debug)]
pub struct GeofencedTracker {
    boundary: GeoPolygon,
    origin: GeoVertex,
    grid: VoxelGrid,
    total_voxel_estimate: usize,
    inside: bool,
    last_fix: Option<GeoVertex>,
    completed: bool,
}

impl GeofencedTracker {
    /// Create a tracker for a confirmed boundary.
    pub fn new(boundary: GeoPolygon, voxel_size: f32) -> Self {
        let origin = boundary.centroid();
        let bounds = boundary.bounds();
        let cols = (bounds.width_m() / voxel_size as f64).ceil().max(1.0) as usize;
        let rows = (bounds.height_m() / voxel_size as f64).ceil().max(1.0) as usize;
        let total_voxel_estimate = cols * rows;

        log::debug!(
            "geofenced tracker: bbox {:.1}m x {:.1}m, {} voxels at {}m",
            bounds.width_m(),
            bounds.height_m(),
            total_voxel_estimate,
            voxel_size
        );

        Self {
            boundary,
            origin,
            grid: VoxelGrid::new(voxel_size),
            total_voxel_estimate,
            inside: false,
            last_fix: None,
            completed: false,
        }
    }

    /// Process one geodetic fix.
    ///
    /// Non-finite coordinates are dropped with a warning; the previous
    /// containment state is retained.
    pub fn on_fix(&mut self, lat: f64, lon: f64) -> FixOutcome {
        let fix = GeoVertex::new(lat, lon);
        if !fix.is_finite() {
            log::warn!("discarding non-finite position fix ({}, {})", lat, lon);
            return FixOutcome {
                inside: self.inside,
                painted_new: false,
                coverage_percent: self.coverage_percent(),
            };
        }

        self.last_fix = Some(fix);
        self.inside = self.boundary.contains(lat, lon);
        if !self.inside {
            return FixOutcome {
                inside: false,
                painted_new: false,
                coverage_percent: self.coverage_percent(),
            };
        }

        let local = geo_to_local(fix, self.origin);
        let painted_new = self.grid.paint(local.x, local.y);
        let coverage_percent = self.coverage_percent();
        if coverage_percent >= COMPLETION_THRESHOLD_PERCENT {
            self.completed = true;
        }

        FixOutcome {
            inside: true,
            painted_new,
            coverage_percent,
        }
    }

    /// Record a position-stream error. Tracking continues with the last
    /// known position and containment state.
    pub fn on_error(&mut self, message: &str) {
        log::warn!("position stream error (tracking continues): {}", message);
    }

    /// Painted cells over the rectangular estimate, 0-100, clamped.
    pub fn coverage_percent(&self) -> f32 {
        (self.grid.voxel_count() as f32 / self.total_voxel_estimate as f32 * 100.0).min(100.0)
    }

    /// The last fix fell inside the boundary.
    pub fn is_inside_boundary(&self) -> bool {
        self.inside
    }

    /// Last fix received, finite only.
    pub fn last_fix(&self) -> Option<GeoVertex> {
        self.last_fix
    }

    /// Covered area in square meters.
    pub fn covered_area_m2(&self) -> f32 {
        self.grid.area_m2()
    }

    /// Number of painted cells.
    pub fn voxel_count(&self) -> usize {
        self.grid.voxel_count()
    }

    /// Rectangular bounding-box cell estimate (the percent denominator).
    pub fn total_voxel_estimate(&self) -> usize {
        self.total_voxel_estimate
    }

    /// Completion latch, one-way until [`reset`](Self::reset).
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// The boundary being walked.
    pub fn boundary(&self) -> &GeoPolygon {
        &self.boundary
    }

    /// Read-only view of the grid, for heatmap export.
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// Statistics snapshot in the common coverage format.
    ///
    /// Expected area is the rectangular estimate times cell area, matching
    /// the percent denominator.
    pub fn stats(&self) -> CoverageStats {
        let cell_area = self.grid.voxel_size() * self.grid.voxel_size();
        CoverageStats {
            covered_area_m2: self.grid.area_m2(),
            voxel_count: self.grid.voxel_count(),
            coverage_percent: Some(self.coverage_percent()),
            expected_area_m2: Some(self.total_voxel_estimate as f32 * cell_area),
            is_complete: self.completed,
        }
    }

    /// Clear painted cells and the completion latch; the boundary and
    /// estimate stay.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.inside = false;
        self.last_fix = None;
        self.completed = false;
    }
}
