//! Voxel-grid coverage accumulator.
//!
//! Despite the name, the grid is strictly 2-D: cells are fixed-size
//! squares on the ground plane. Quantizing position samples into a set of
//! visited cells sidesteps polygon self-intersection and overlap-area
//! edge cases entirely, at the cost of a worst-case error of one voxel
//! perimeter. Voxel size is chosen far below the measurement tolerance.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::VoxelCoord;

/// One visited cell, exported for heatmap/minimap rendering.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoxelCell {
    /// Cell index.
    pub coord: VoxelCoord,
    /// Cell center, east offset in meters.
    pub world_x: f32,
    /// Cell center, north offset in meters.
    pub world_y: f32,
}

/// Deduplicating coverage accumulator.
///
/// The visited set is the sole source of truth for "area covered". Cells
/// are only ever added, never removed, except by a whole-grid
/// [`reset`](VoxelGrid::reset).
#[derive(Clone, Debug)]
pub struct VoxelGrid {
    voxel_size: f32,
    visited: HashSet<VoxelCoord>,
}

impl VoxelGrid {
    /// Create a grid with the given cell side length in meters.
    pub fn new(voxel_size: f32) -> Self {
        debug_assert!(voxel_size > 0.0, "voxel size must be positive");
        Self {
            voxel_size,
            visited: HashSet::new(),
        }
    }

    /// Cell side length in meters.
    #[inline]
    pub fn voxel_size(&self) -> f32 {
        self.voxel_size
    }

    /// Record a position sample.
    ///
    /// Returns true exactly when the sample's cell was not already
    /// visited, i.e. the first discovery of new area. Painting an already
    /// visited cell is a no-op, so duplicate or reordered samples never
    /// change the measurement.
    ///
    /// Any finite input is accepted; callers reject NaN/infinite samples
    /// before they reach the grid.
    #[inline]
    pub fn paint(&mut self, x: f32, y: f32) -> bool {
        self.visited
            .insert(VoxelCoord::from_world(x, y, self.voxel_size))
    }

    /// Covered area: visited cell count times cell area.
    #[inline]
    pub fn area_m2(&self) -> f32 {
        self.visited.len() as f32 * self.voxel_size * self.voxel_size
    }

    /// Number of visited cells.
    #[inline]
    pub fn voxel_count(&self) -> usize {
        self.visited.len()
    }

    /// Visited cell indices, in no particular order.
    pub fn coords(&self) -> impl Iterator<Item = &VoxelCoord> {
        self.visited.iter()
    }

    /// Visited cells with their world-space centers, for rendering.
    pub fn cells(&self) -> Vec<VoxelCell> {
        self.visited
            .iter()
            .map(|c| {
                let (world_x, world_y) = c.world_center(self.voxel_size);
                VoxelCell {
                    coord: *c,
                    world_x,
                    world_y,
                }
            })
            .collect()
    }

    /// Clear all visited cells. The grid stays ready for reuse.
    pub fn reset(&mut self) {
        self.visited.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_returns_true_then_false() {
        let mut grid = VoxelGrid::new(0.1);
        assert!(grid.paint(0.0, 0.0));
        assert!(!grid.paint(0.0, 0.0));
        assert!(!grid.paint(0.05, 0.05)); // same cell
    }

    #[test]
    fn test_area_scenario() {
        let mut grid = VoxelGrid::new(0.1);
        assert!(grid.paint(0.0, 0.0));
        assert!((grid.area_m2() - 0.01).abs() < 1e-6);

        assert!(!grid.paint(0.05, 0.05));
        assert!((grid.area_m2() - 0.01).abs() < 1e-6);

        assert!(grid.paint(0.15, 0.0));
        assert!((grid.area_m2() - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_area_is_order_independent() {
        let samples = [(0.0, 0.0), (1.0, 1.0), (0.5, 0.5), (1.0, 1.0), (0.0, 0.0)];

        let mut forward = VoxelGrid::new(0.25);
        for (x, y) in samples {
            forward.paint(x, y);
        }
        let mut reverse = VoxelGrid::new(0.25);
        for &(x, y) in samples.iter().rev() {
            reverse.paint(x, y);
        }

        assert_eq!(forward.voxel_count(), reverse.voxel_count());
        assert_eq!(forward.area_m2(), reverse.area_m2());
    }

    #[test]
    fn test_negative_coordinates() {
        let mut grid = VoxelGrid::new(0.5);
        assert!(grid.paint(-0.1, -0.1));
        assert!(!grid.paint(-0.4, -0.4)); // same cell (-1, -1)
        assert!(grid.paint(0.1, 0.1)); // cell (0, 0)
        assert_eq!(grid.voxel_count(), 2);
    }

    #[test]
    fn test_cells_export() {
        let mut grid = VoxelGrid::new(1.0);
        grid.paint(2.3, 4.7);
        let cells = grid.cells();
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].coord, VoxelCoord::new(2, 4));
        assert!((cells[0].world_x - 2.5).abs() < 1e-6);
        assert!((cells[0].world_y - 4.5).abs() < 1e-6);
    }

    #[test]
    fn test_reset() {
        let mut grid = VoxelGrid::new(0.1);
        grid.paint(0.0, 0.0);
        grid.paint(1.0, 1.0);
        grid.reset();
        assert_eq!(grid.voxel_count(), 0);
        assert_eq!(grid.area_m2(), 0.0);
        // Usable after reset
        assert!(grid.paint(0.0, 0.0));
    }
}
