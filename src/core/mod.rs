// Core algorithm exports
pub mod coordinate;
pub mod distance;
pub mod filters;
pub mod format;
pub mod matcher;

pub use coordinate::{Coordinate, CoordinateError};
pub use distance::{haversine_distance, is_within_radius, round_km};
pub use filters::{distance_if_within, geocoded};
pub use format::format_distance;
pub use matcher::{NearbySearch, ProximityMatcher, DEFAULT_RADIUS_KM};
