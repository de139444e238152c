use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Place, PlaceKind};

/// Request to rank caller-supplied candidates around a point
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindNearbyRequest {
    /// Range-checked by the handler through `Coordinate::try_new`
    pub latitude: f64,
    pub longitude: f64,
    #[serde(alias = "radius_km", rename = "radiusKm", default)]
    pub radius_km: Option<f64>,
    #[validate(length(max = 5000))]
    #[serde(default)]
    pub candidates: Vec<Place>,
}

/// Query string for the stored-place nearby lookup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NearbyQuery {
    #[serde(alias = "radius_km", rename = "radiusKm", default)]
    pub radius_km: Option<f64>,
    /// Kind of places to look for, defaults to the reference's kind
    #[serde(default)]
    pub target: Option<PlaceKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_validation() {
        let ok: FindNearbyRequest = serde_json::from_str(
            r#"{"latitude": 28.6, "longitude": 77.2, "radiusKm": 5, "candidates": []}"#,
        )
        .unwrap();
        assert!(ok.validate().is_ok());
        assert_eq!(ok.radius_km, Some(5.0));

        let bare: FindNearbyRequest =
            serde_json::from_str(r#"{"latitude": 95.0, "longitude": 77.2}"#).unwrap();
        assert!(bare.candidates.is_empty());
        assert_eq!(bare.radius_km, None);

        let too_many = FindNearbyRequest {
            candidates: vec![
                Place {
                    id: 1,
                    name: "Lodge".to_string(),
                    description: String::new(),
                    slug: "lodge".to_string(),
                    latitude: None,
                    longitude: None,
                    images: None,
                };
                5001
            ],
            ..ok
        };
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn test_query_accepts_snake_case_alias() {
        let query: NearbyQuery = serde_json::from_str(r#"{"radius_km": 2.5, "target": "hotel"}"#).unwrap();
        assert_eq!(query.radius_km, Some(2.5));
        assert_eq!(query.target, Some(PlaceKind::Hotel));
    }
}
