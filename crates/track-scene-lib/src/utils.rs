//! Utility functions for geodesic measurements

use crate::Coordinate;
use geo::{BoundingRect, LineString, Rect};

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6371000.0;

/// Calculate the Haversine distance between two coordinates in meters
///
/// Elevation is ignored: this is the great-circle distance over the sphere.
#[inline]
pub fn haversine_distance(p1: &Coordinate, p2: &Coordinate) -> f64 {
    let lat1 = p1.latitude.to_radians();
    let lat2 = p2.latitude.to_radians();
    let delta_lat = (p2.latitude - p1.latitude).to_radians();
    let delta_lon = (p2.longitude - p1.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Longitude/latitude bounding box of a coordinate sequence, `None` when empty
pub fn extent(coordinates: &[Coordinate]) -> Option<Rect<f64>> {
    let line: LineString<f64> = coordinates.iter().map(|&c| geo::Coord::from(c)).collect();
    line.bounding_rect()
}

/// Center of a geographic rectangle as (longitude, latitude)
#[inline]
pub fn rect_center(rect: &Rect<f64>) -> (f64, f64) {
    let center = rect.center();
    (center.x, center.y)
}
