//! Nearby Places - proximity matching for the parks and hotels platform
//!
//! Ranks candidate parks, hotels and places around a reference point by
//! great-circle distance, and serves the results over a small JSON API.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    format_distance, haversine_distance, Coordinate, CoordinateError, NearbySearch,
    ProximityMatcher, DEFAULT_RADIUS_KM,
};
pub use crate::models::{Candidate, NearbyResponse, NearbyResult, Place, PlaceImage, PlaceKind};
