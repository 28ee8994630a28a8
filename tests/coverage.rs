//! Coverage integration tests: grid + boundary + session + sensing
//! working together.

mod common;

use kshetra_scan::sensors::{SimulatedLidarConfig, SimulatedLidarLink};
use kshetra_scan::{
    Boundary, CoverageSession, DepthSensingService, Point, SensingMode, VoxelGrid,
    COMPLETION_THRESHOLD_PERCENT,
};

// ============================================================================
// Grid + boundary scenarios
// ============================================================================

#[test]
fn test_scan_to_completion() {
    // 4m x 4m plot at 0.1m cells
    let mut session = CoverageSession::new(0.1);
    session.set_boundary(
        Boundary::new(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ])
        .unwrap(),
    );

    // Walk every cell center
    for p in common::serpentine(4.0, 4.0, 0.1) {
        session.paint(p.x, p.y);
    }

    let stats = session.stats();
    assert_eq!(stats.voxel_count, 1600);
    assert!((stats.covered_area_m2 - 16.0).abs() < 0.05);
    assert_eq!(stats.coverage_percent, Some(100.0));
    assert!(stats.is_complete);
}

#[test]
fn test_partial_scan_incomplete() {
    let mut session = CoverageSession::new(0.1);
    session.set_boundary(Boundary::from_rectangle(
        Point::new(0.0, 4.0),
        Point::new(4.0, 0.0),
    ));

    // Cover only the lower half
    for p in common::serpentine(4.0, 2.0, 0.1) {
        session.paint(p.x, p.y);
    }

    let stats = session.stats();
    let percent = stats.coverage_percent.unwrap();
    assert!((percent - 50.0).abs() < 1.0, "percent = {}", percent);
    assert!(percent < COMPLETION_THRESHOLD_PERCENT);
    assert!(!stats.is_complete);
}

#[test]
fn test_revisiting_adds_nothing() {
    let mut grid = VoxelGrid::new(0.25);
    for p in common::serpentine(2.0, 2.0, 0.25) {
        grid.paint(p.x, p.y);
    }
    let area = grid.area_m2();
    let count = grid.voxel_count();

    // Walk the same plot again, jittered within cells
    for p in common::serpentine(2.0, 2.0, 0.25) {
        grid.paint(p.x + 0.05, p.y - 0.05);
    }
    assert_eq!(grid.voxel_count(), count);
    assert_eq!(grid.area_m2(), area);
}

// ============================================================================
// Depth sensing end to end
// ============================================================================

#[test]
fn test_lidar_scan_accumulates_area() {
    let mut service = DepthSensingService::initialize(Box::new(SimulatedLidarLink::new(
        SimulatedLidarConfig {
            seed: 1,
            ..SimulatedLidarConfig::default()
        },
    )));
    assert_eq!(service.mode(), SensingMode::Lidar);

    let mut session = CoverageSession::new(0.05);

    // Sweep the device along a 2m line; frames fill in around it
    let mut total_new = 0;
    for i in 0..20 {
        service.update_position(i as f32 * 0.1, 0.0);
        total_new += service.integrate_frame(&mut session, 0.5);
    }

    assert!(total_new > 100, "painted {} cells", total_new);
    let stats = session.stats();
    assert_eq!(stats.voxel_count, total_new);
    // Disc of radius 0.5 swept over 2m: on the order of 2-3 m2
    assert!(stats.covered_area_m2 > 0.5 && stats.covered_area_m2 < 5.0);
}

#[test]
fn test_fallback_single_point_per_update() {
    let mut service = DepthSensingService::initialize(Box::new(SimulatedLidarLink::absent()));
    assert_eq!(service.mode(), SensingMode::VisualSlam);
    assert!(service.accuracy_label().contains("\u{b1}4%"));

    let mut session = CoverageSession::new(0.1);
    for i in 0..10 {
        // Cell centers, clear of the quantization boundaries
        service.update_position((i as f32 + 0.5) * 0.1, 0.05);
        service.integrate_frame(&mut session, 0.5);
    }
    // 10 updates at 0.1m spacing in 0.1m cells: 10 distinct cells
    assert_eq!(session.stats().voxel_count, 10);
}

#[test]
fn test_session_reset_between_attempts() {
    let mut session = CoverageSession::new(1.0);
    session.set_boundary(Boundary::from_rectangle(
        Point::new(0.0, 2.0),
        Point::new(2.0, 0.0),
    ));
    for p in common::serpentine(2.0, 2.0, 1.0) {
        session.paint(p.x, p.y);
    }
    assert!(session.stats().is_complete);

    session.reset();
    let stats = session.stats();
    assert_eq!(stats.voxel_count, 0);
    assert_eq!(stats.coverage_percent, None);
    assert!(!stats.is_complete);

    // A fresh attempt starts clean
    session.set_boundary(Boundary::from_rectangle(
        Point::new(0.0, 2.0),
        Point::new(2.0, 0.0),
    ));
    session.paint(0.5, 0.5);
    assert_eq!(session.stats().coverage_percent, Some(25.0));
}
