use crate::core::{
    coordinate::{Coordinate, CoordinateError},
    distance::round_km,
    filters::{distance_if_within, geocoded},
};
use crate::models::{Candidate, NearbyResult};

/// Radius used when the caller does not pass one
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// Result of a nearby search, with bookkeeping for logs and responses
#[derive(Debug, Clone, PartialEq)]
pub struct NearbySearch {
    pub places: Vec<NearbyResult>,
    pub total_candidates: usize,
    pub geocoded_candidates: usize,
}

/// Proximity matcher - ranks candidate places around a reference point
///
/// # Pipeline Stages
/// 1. Drop candidates without a usable coordinate
/// 2. Haversine distance + radius filter (inclusive)
/// 3. Stable sort, nearest first
/// 4. Map to results with display-rounded distance
#[derive(Debug, Clone, Copy)]
pub struct ProximityMatcher {
    default_radius_km: f64,
}

impl ProximityMatcher {
    pub fn new(default_radius_km: f64) -> Self {
        Self { default_radius_km }
    }

    pub fn default_radius_km(&self) -> f64 {
        self.default_radius_km
    }

    /// Find places within the default radius of the origin
    pub fn find_nearby(
        &self,
        origin_lat: f64,
        origin_lon: f64,
        candidates: impl IntoIterator<Item = Candidate>,
    ) -> Vec<NearbyResult> {
        self.find_nearby_within(origin_lat, origin_lon, candidates, self.default_radius_km)
    }

    /// Find places within `radius_km` of the origin
    ///
    /// An origin containing NaN yields an empty list rather than an error.
    pub fn find_nearby_within(
        &self,
        origin_lat: f64,
        origin_lon: f64,
        candidates: impl IntoIterator<Item = Candidate>,
        radius_km: f64,
    ) -> Vec<NearbyResult> {
        self.search(origin_lat, origin_lon, candidates, radius_km).places
    }

    /// Validated variant: the origin was checked by `Coordinate::try_new`
    pub fn find_nearby_from(
        &self,
        origin: Coordinate,
        candidates: impl IntoIterator<Item = Candidate>,
        radius_km: f64,
    ) -> Result<Vec<NearbyResult>, CoordinateError> {
        // Re-check in case the coordinate was built field by field
        let origin = Coordinate::try_new(origin.latitude, origin.longitude)?;
        Ok(self.find_nearby_within(origin.latitude, origin.longitude, candidates, radius_km))
    }

    /// Run the full pipeline and report how many candidates took part
    pub fn search(
        &self,
        origin_lat: f64,
        origin_lon: f64,
        candidates: impl IntoIterator<Item = Candidate>,
        radius_km: f64,
    ) -> NearbySearch {
        let mut total_candidates = 0;
        let mut geocoded_candidates = 0;

        let mut within: Vec<(f64, Candidate)> = candidates
            .into_iter()
            .inspect(|_| total_candidates += 1)
            // Stage 1: coordinate presence
            .filter_map(|candidate| geocoded(&candidate).map(|coordinate| (coordinate, candidate)))
            .inspect(|_| geocoded_candidates += 1)
            // Stage 2: distance + radius
            .filter_map(|(coordinate, candidate)| {
                distance_if_within(origin_lat, origin_lon, &coordinate, radius_km)
                    .map(|distance| (distance, candidate))
            })
            .collect();

        // Stage 3: slice::sort_by is stable, ties keep input order
        within.sort_by(|a, b| a.0.total_cmp(&b.0));

        // Stage 4: build results
        let places = within
            .into_iter()
            .map(|(distance, candidate)| {
                let place = candidate.place;
                NearbyResult {
                    id: place.id,
                    name: place.name,
                    description: place.description,
                    slug: place.slug,
                    distance: display_distance(distance, radius_km),
                    images: place.images,
                }
            })
            .collect();

        NearbySearch {
            places,
            total_candidates,
            geocoded_candidates,
        }
    }
}

impl Default for ProximityMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS_KM)
    }
}

/// Round to 2 decimals without ever reporting a value past the radius
#[inline]
fn display_distance(distance_km: f64, radius_km: f64) -> f64 {
    let rounded = round_km(distance_km);
    if rounded > radius_km {
        (distance_km * 100.0).floor() / 100.0
    } else {
        rounded
    }
}
