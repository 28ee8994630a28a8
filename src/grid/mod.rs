//! Coverage accumulation grid.

pub mod voxel_grid;

pub use voxel_grid::{VoxelCell, VoxelGrid};
