//! Walking-mode integration tests: geodetic stream → containment gate →
//! coverage percentage.

mod common;

use kshetra_scan::core::transform::METERS_PER_DEGREE;
use kshetra_scan::{EngineConfig, GeofencedTracker, PositionUpdate, ScanController};

/// Degrees of latitude per meter at any latitude.
const LAT_PER_M: f64 = 1.0 / METERS_PER_DEGREE;

#[test]
fn test_estimate_for_10x10_plot() {
    // Side slightly under 10m so the haversine extents stay below the
    // ceil boundary
    let boundary = common::geo_square(37.0, -122.0, 9.9);
    let tracker = GeofencedTracker::new(boundary, 1.0);
    assert_eq!(tracker.total_voxel_estimate(), 100);
}

#[test]
fn test_half_walked_plot_is_50_percent() {
    let boundary = common::geo_square(37.0, -122.0, 9.9);
    let mut tracker = GeofencedTracker::new(boundary, 1.0);

    // Walk a 1m lattice over the southern half: 10 columns x 5 rows
    let lon_per_m = 1.0 / (METERS_PER_DEGREE * 37.0f64.to_radians().cos());
    let mut painted = 0;
    for row in 0..5 {
        for col in 0..10 {
            let lat = 37.0 + (row as f64 - 4.5) * LAT_PER_M;
            let lon = -122.0 + (col as f64 - 4.5) * lon_per_m;
            let out = tracker.on_fix(lat, lon);
            assert!(out.inside, "fix ({}, {}) left the boundary", row, col);
            if out.painted_new {
                painted += 1;
            }
        }
    }

    assert_eq!(painted, 50);
    assert!((tracker.coverage_percent() - 50.0).abs() < 1e-4);
    assert!(!tracker.is_complete());
}

#[test]
fn test_outside_fixes_gate_painting() {
    let boundary = common::geo_square(37.0, -122.0, 9.9);
    let mut tracker = GeofencedTracker::new(boundary, 1.0);

    // Inside, then a wander outside, then back in
    assert!(tracker.on_fix(37.0, -122.0).inside);
    assert!(tracker.is_inside_boundary());

    let out = tracker.on_fix(37.0 + 20.0 * LAT_PER_M, -122.0);
    assert!(!out.inside);
    assert!(!out.painted_new);
    assert!(!tracker.is_inside_boundary());
    assert_eq!(tracker.voxel_count(), 1); // the outside fix painted nothing

    assert!(tracker.on_fix(37.0, -122.0).inside);
    assert!(tracker.is_inside_boundary());
}

#[test]
fn test_stream_errors_do_not_reset_progress() {
    let boundary = common::geo_square(37.0, -122.0, 9.9);
    let mut tracker = GeofencedTracker::new(boundary, 1.0);

    tracker.on_fix(37.0, -122.0);
    let percent = tracker.coverage_percent();

    tracker.on_error("timeout acquiring position");
    tracker.on_error("permission revoked");

    assert_eq!(tracker.coverage_percent(), percent);
    assert!(tracker.is_inside_boundary());
    assert!(tracker.last_fix().is_some());
}

#[test]
fn test_controller_walking_round_trip() {
    let mut controller = ScanController::new();
    controller.start_walking(&EngineConfig::default(), common::geo_square(37.0, -122.0, 9.9));

    let tx = controller.fix_sender().expect("sender while running");
    // One fix inside, one error, one fix outside
    tx.send(PositionUpdate::Fix {
        lat: 37.0,
        lon: -122.0,
    })
    .unwrap();
    tx.send(PositionUpdate::Error("signal lost".into())).unwrap();
    tx.send(PositionUpdate::Fix {
        lat: 37.0 + 20.0 * LAT_PER_M,
        lon: -122.0,
    })
    .unwrap();

    std::thread::sleep(std::time::Duration::from_millis(200));
    controller.stop();

    let state = controller.state();
    let st = state.read().unwrap();
    assert_eq!(st.stats.voxel_count, 1);
    assert!(!st.is_inside_boundary); // last fix was outside
    assert!(!st.running);

    // Stopping again is a no-op
    controller.stop();
}
