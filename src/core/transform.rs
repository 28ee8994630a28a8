//! Coordinate transforms between screen, local-meter, and geodetic space.
//!
//! All functions are pure and stateless.
//!
//! The geodetic conversions use an equirectangular (flat-Earth)
//! approximation about an arbitrary origin: valid for boundaries spanning
//! at most a few hundred meters, which is the working envelope of this
//! engine. Larger extents need a proper geodesic projection.

use super::point::{GeoVertex, Point};

/// Screen scale: 1 screen pixel = 1 cm of ground.
pub const SCREEN_METERS_PER_PIXEL: f32 = 0.01;

/// Meters per degree of latitude (and of longitude at the equator).
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Screen pixels to local meters.
///
/// The local origin (0, 0) maps to the bottom-center of the viewport.
/// Screen y grows downward, world y grows away from the viewer.
#[inline]
pub fn screen_to_local(sx: f32, sy: f32, viewport_w: f32, viewport_h: f32) -> Point {
    Point::new(
        (sx - viewport_w * 0.5) * SCREEN_METERS_PER_PIXEL,
        (viewport_h - sy) * SCREEN_METERS_PER_PIXEL,
    )
}

/// Local meters to screen pixels. Exact inverse of [`screen_to_local`]
/// up to floating-point rounding.
#[inline]
pub fn local_to_screen(p: Point, viewport_w: f32, viewport_h: f32) -> (f32, f32) {
    (
        p.x / SCREEN_METERS_PER_PIXEL + viewport_w * 0.5,
        viewport_h - p.y / SCREEN_METERS_PER_PIXEL,
    )
}

/// Geodetic degrees to local meters relative to `origin`.
///
/// North offset is Δlat scaled by [`METERS_PER_DEGREE`]; east offset is
/// Δlon scaled by the same factor times cos(origin latitude).
#[inline]
pub fn geo_to_local(v: GeoVertex, origin: GeoVertex) -> Point {
    let east = (v.lon - origin.lon) * METERS_PER_DEGREE * origin.lat.to_radians().cos();
    let north = (v.lat - origin.lat) * METERS_PER_DEGREE;
    Point::new(east as f32, north as f32)
}

/// Local meters back to geodetic degrees relative to `origin`.
///
/// Only approximately inverts [`geo_to_local`]; exact round-tripping is
/// not part of the contract.
#[inline]
pub fn local_to_geo(p: Point, origin: GeoVertex) -> GeoVertex {
    let lat = origin.lat + p.y as f64 / METERS_PER_DEGREE;
    let lon = origin.lon + p.x as f64 / (METERS_PER_DEGREE * origin.lat.to_radians().cos());
    GeoVertex::new(lat, lon)
}

/// Great-circle distance between two geodetic points in meters.
pub fn haversine_m(a: GeoVertex, b: GeoVertex) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat * 0.5).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon * 0.5).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}
