//! Test utilities for coverage scenarios.

#![allow(dead_code)]

use kshetra_scan::core::transform::METERS_PER_DEGREE;
use kshetra_scan::{GeoPolygon, GeoVertex, Point};

/// Square geodetic boundary of the given side length in meters,
/// centered at (lat, lon).
pub fn geo_square(lat: f64, lon: f64, side_m: f64) -> GeoPolygon {
    let dlat = side_m / 2.0 / METERS_PER_DEGREE;
    let dlon = side_m / 2.0 / (METERS_PER_DEGREE * lat.to_radians().cos());
    GeoPolygon::new(vec![
        GeoVertex::new(lat - dlat, lon - dlon),
        GeoVertex::new(lat - dlat, lon + dlon),
        GeoVertex::new(lat + dlat, lon + dlon),
        GeoVertex::new(lat + dlat, lon - dlon),
    ])
    .expect("square has 4 vertices")
}

/// Serpentine walk over a rectangle in local meters: covers every
/// `step`-spaced lattice point row by row.
pub fn serpentine(width: f32, height: f32, step: f32) -> Vec<Point> {
    // round, not truncate: 4.0 / 0.1 is 39.9999... in f32
    let cols = (width / step).round() as usize;
    let rows = (height / step).round() as usize;
    let mut path = Vec::with_capacity(cols * rows);
    for r in 0..rows {
        let y = (r as f32 + 0.5) * step;
        for c in 0..cols {
            let c = if r % 2 == 0 { c } else { cols - 1 - c };
            path.push(Point::new((c as f32 + 0.5) * step, y));
        }
    }
    path
}
