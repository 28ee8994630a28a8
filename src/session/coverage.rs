//! Coverage session: one grid, at most one boundary, derived statistics.

use serde::{Deserialize, Serialize};

use crate::geometry::Boundary;
use crate::grid::VoxelGrid;

/// Coverage percentage at which a session is considered complete.
pub const COMPLETION_THRESHOLD_PERCENT: f32 = 98.0;

/// Result of recording one position sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintResult {
    /// The sample discovered a previously unvisited cell. Callers use
    /// this to decide whether a UI refresh is warranted.
    pub is_new: bool,
    /// Total covered area after the sample, in square meters.
    pub total_area_m2: f32,
}

/// Coverage statistics, freshly derived on every query.
///
/// Never a field-by-field mutated structure: staleness bugs are designed
/// out by recomputing from the grid and boundary each time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageStats {
    /// Measured (voxelized) area in square meters.
    pub covered_area_m2: f32,
    /// Number of distinct visited cells.
    pub voxel_count: usize,
    /// Covered / expected, 0-100, clamped; `None` without a boundary.
    pub coverage_percent: Option<f32>,
    /// Boundary polygon area in square meters; `None` without a boundary.
    pub expected_area_m2: Option<f32>,
    /// Completion latch state (see [`CoverageSession`]).
    pub is_complete: bool,
}

/// One scanning attempt's coverage state.
///
/// Completion is one-way per session: once coverage reaches
/// [`COMPLETION_THRESHOLD_PERCENT`] the session stays complete even if a
/// later boundary change drops the percentage. Only [`reset`]
/// re-enters the incomplete state.
///
/// [`reset`]: CoverageSession::reset
#[derive(Clone, Debug)]
pub struct CoverageSession {
    grid: VoxelGrid,
    boundary: Option<Boundary>,
    expected_area_m2: Option<f32>,
    completed: bool,
}

impl CoverageSession {
    /// Create a session with an empty grid and no boundary.
    pub fn new(voxel_size: f32) -> Self {
        Self {
            grid: VoxelGrid::new(voxel_size),
            boundary: None,
            expected_area_m2: None,
            completed: false,
        }
    }

    /// Replace the boundary wholesale and recompute the expected area.
    pub fn set_boundary(&mut self, boundary: Boundary) {
        self.expected_area_m2 = Some(boundary.area_m2());
        self.boundary = Some(boundary);
        self.refresh_completion();
    }

    /// Remove the boundary; coverage percentage becomes `None`.
    pub fn clear_boundary(&mut self) {
        self.boundary = None;
        self.expected_area_m2 = None;
    }

    /// Current boundary, if set.
    pub fn boundary(&self) -> Option<&Boundary> {
        self.boundary.as_ref()
    }

    /// Read-only view of the grid (heatmap export, stats).
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// Record a position sample in local meters.
    ///
    /// Non-finite samples are discarded with a warning; the grid never
    /// sees them.
    pub fn paint(&mut self, x: f32, y: f32) -> PaintResult {
        if !x.is_finite() || !y.is_finite() {
            log::warn!("discarding non-finite position sample ({}, {})", x, y);
            return PaintResult {
                is_new: false,
                total_area_m2: self.grid.area_m2(),
            };
        }
        let is_new = self.grid.paint(x, y);
        if is_new {
            self.refresh_completion();
        }
        PaintResult {
            is_new,
            total_area_m2: self.grid.area_m2(),
        }
    }

    /// Recompute statistics from the current grid and boundary.
    pub fn stats(&self) -> CoverageStats {
        CoverageStats {
            covered_area_m2: self.grid.area_m2(),
            voxel_count: self.grid.voxel_count(),
            coverage_percent: self.coverage_percent(),
            expected_area_m2: self.expected_area_m2,
            is_complete: self.completed,
        }
    }

    /// Clear grid, boundary, and the completion latch.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.boundary = None;
        self.expected_area_m2 = None;
        self.completed = false;
    }

    fn coverage_percent(&self) -> Option<f32> {
        match self.expected_area_m2 {
            Some(expected) if expected > 0.0 => {
                Some((self.grid.area_m2() / expected * 100.0).min(100.0))
            }
            _ => None,
        }
    }

    fn refresh_completion(&mut self) {
        if let Some(percent) = self.coverage_percent() {
            if percent >= COMPLETION_THRESHOLD_PERCENT {
                self.completed = true;
            }
        }
    }
}
