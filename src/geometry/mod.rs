//! Boundary polygons and containment tests.

pub mod boundary;
pub mod geo_polygon;

pub use boundary::Boundary;
pub use geo_polygon::GeoPolygon;
