// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Candidate, NearbyResult, Place, PlaceImage, PlaceKind, ReferencePlace};
pub use requests::{FindNearbyRequest, NearbyQuery};
pub use responses::{CacheInvalidationResponse, ErrorResponse, HealthResponse, NearbyResponse};
