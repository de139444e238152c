use crate::core::coordinate::Coordinate;
use crate::core::distance::{haversine_distance, is_within_radius};
use crate::models::Candidate;

/// Stage 1: keep only candidates with a usable coordinate pair
///
/// Missing or unparseable coordinates are an expected data state, not an error.
#[inline]
pub fn geocoded(candidate: &Candidate) -> Option<Coordinate> {
    candidate.coordinate
}

/// Stage 2: distance from the origin, if the candidate falls inside the radius
#[inline]
pub fn distance_if_within(
    origin_lat: f64,
    origin_lon: f64,
    coordinate: &Coordinate,
    radius_km: f64,
) -> Option<f64> {
    let distance = haversine_distance(
        origin_lat,
        origin_lon,
        coordinate.latitude,
        coordinate.longitude,
    );

    // NaN never passes the comparison
    is_within_radius(distance, radius_km).then_some(distance)
}
