//! KshetraScan - Spatial coverage and sensing engine for ground-area
//! measurement.
//!
//! A user measures an impervious ground area by physically moving a
//! camera-equipped device over it. This crate turns the resulting noisy
//! position streams into a deduplicated, bounded-error area measurement
//! in real time, tracking whether the user stays inside a target plot.
//!
//! # Architecture
//!
//! The crate is organized into layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                    engine/                          │  ← Session orchestration
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │           threads/, state/                          │  ← Sampling loops, shared state
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │         session/, sensors/, tracking/               │  ← Coverage sessions, sensing paths
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │              geometry/, grid/                       │  ← Polygons, voxel accumulator
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Points, bounds, transforms
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Coordinate frames
//!
//! - **Local meters**: flat metric frame per session, x east, y north
//!   (away from the viewer in screen terms).
//! - **Screen pixels**: viewport coordinates, y down; the local origin
//!   maps to the bottom-center at 1 cm per pixel.
//! - **Geodetic degrees**: WGS-84 lat/lon, converted to local meters by
//!   a flat-Earth approximation valid for plots up to a few hundred
//!   meters across.
//!
//! # Quick start
//!
//! ```rust
//! use kshetra_scan::geometry::Boundary;
//! use kshetra_scan::session::CoverageSession;
//! use kshetra_scan::core::Point;
//!
//! let mut session = CoverageSession::new(0.1);
//! session.set_boundary(
//!     Boundary::from_rectangle(Point::new(0.0, 10.0), Point::new(10.0, 0.0)),
//! );
//!
//! let result = session.paint(0.5, 0.5);
//! assert!(result.is_new);
//!
//! let stats = session.stats();
//! assert_eq!(stats.voxel_count, 1);
//! assert!(stats.coverage_percent.is_some());
//! ```

// ============================================================================
// Layer 1: Core foundation (no internal deps)
// ============================================================================
pub mod core;

// ============================================================================
// Layer 2: Geometry and accumulation (depends on core)
// ============================================================================
pub mod geometry;
pub mod grid;

// ============================================================================
// Layer 3: Sessions, sensing, tracking (depends on core, geometry, grid)
// ============================================================================
pub mod sensors;
pub mod session;
pub mod tracking;

// ============================================================================
// Layer 4: Threads and shared state (depends on all lower layers)
// ============================================================================
pub mod state;
pub mod threads;

// ============================================================================
// Layer 5: Orchestration
// ============================================================================
pub mod engine;

// ============================================================================
// Crate-wide infrastructure
// ============================================================================
pub mod config;
pub mod error;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

pub use config::EngineConfig;
pub use self::core::{Bounds, GeoBounds, GeoVertex, Point, VoxelCoord};
pub use engine::ScanController;
pub use error::{KshetraError, Result};
pub use geometry::{Boundary, GeoPolygon};
pub use grid::{VoxelCell, VoxelGrid};
pub use sensors::{
    DepthFrame, DepthPoint, DepthSensingPort, DepthSensingService, DepthSource, LidarLink,
    SensingMode, SensorCapabilities,
};
pub use session::{CoverageSession, CoverageStats, PaintResult, COMPLETION_THRESHOLD_PERCENT};
pub use state::{SharedScanState, SharedScanStateHandle};
pub use threads::PositionUpdate;
pub use tracking::{FixOutcome, GeofencedTracker};
