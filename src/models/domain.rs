use serde::{Deserialize, Serialize};
use crate::core::coordinate::Coordinate;

/// Image attached to a place, carried through untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceImage {
    #[serde(default)]
    pub id: Option<i64>,
    pub url: String,
    #[serde(rename = "altText", default)]
    pub alt_text: Option<String>,
}

/// Place record as stored by the platform
///
/// Coordinates are nullable text columns, so they arrive as optional strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub slug: String,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<PlaceImage>>,
}

/// A place with its coordinate parsed once, ready for distance computation
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub place: Place,
    pub coordinate: Option<Coordinate>,
}

impl Candidate {
    /// Helper to check whether the candidate can take part in proximity matching
    pub fn is_geocoded(&self) -> bool {
        self.coordinate.is_some()
    }
}

impl From<Place> for Candidate {
    fn from(place: Place) -> Self {
        let coordinate = match Coordinate::parse(
            place.latitude.as_deref(),
            place.longitude.as_deref(),
        ) {
            Ok(coordinate) => Some(coordinate),
            Err(e) => {
                tracing::trace!("Place {} ({}) has no usable coordinate: {}", place.id, place.slug, e);
                None
            }
        };

        Self { place, coordinate }
    }
}

/// Place found near a reference point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyResult {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub slug: String,
    /// Kilometers, rounded to 2 decimals
    pub distance: f64,
    pub images: Option<Vec<PlaceImage>>,
}

/// Kinds of geocoded records on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceKind {
    Park,
    Hotel,
    Place,
}

impl PlaceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceKind::Park => "park",
            PlaceKind::Hotel => "hotel",
            PlaceKind::Place => "place",
        }
    }

    /// Table holding records of this kind
    pub fn table(&self) -> &'static str {
        match self {
            PlaceKind::Park => "parks",
            PlaceKind::Hotel => "hotels",
            PlaceKind::Place => "places",
        }
    }

    /// Image table and its foreign key column
    pub fn images_table(&self) -> (&'static str, &'static str) {
        match self {
            PlaceKind::Park => ("park_images", "park_id"),
            PlaceKind::Hotel => ("hotel_images", "hotel_id"),
            PlaceKind::Place => ("place_images", "place_id"),
        }
    }

    /// Whether records of this kind belong to a park
    pub fn is_grouped_by_park(&self) -> bool {
        !matches!(self, PlaceKind::Park)
    }
}

impl std::fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference place resolved from storage
#[derive(Debug, Clone, PartialEq)]
pub struct ReferencePlace {
    pub id: i64,
    pub kind: PlaceKind,
    /// Park the place belongs to (a park's own id for parks)
    pub group_id: Option<i64>,
    pub coordinate: Option<Coordinate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(latitude: Option<&str>, longitude: Option<&str>) -> Place {
        Place {
            id: 7,
            name: "Tiger Trail Lodge".to_string(),
            description: "Lodge at the park gate".to_string(),
            slug: "tiger-trail-lodge".to_string(),
            latitude: latitude.map(str::to_string),
            longitude: longitude.map(str::to_string),
            images: None,
        }
    }

    #[test]
    fn test_candidate_parses_coordinate_once() {
        let candidate = Candidate::from(place(Some("29.53"), Some("78.77")));
        assert!(candidate.is_geocoded());
        assert_eq!(
            candidate.coordinate,
            Some(Coordinate { latitude: 29.53, longitude: 78.77 })
        );
    }

    #[test]
    fn test_candidate_without_coordinate() {
        assert!(!Candidate::from(place(None, Some("78.77"))).is_geocoded());
        assert!(!Candidate::from(place(Some("north"), Some("78.77"))).is_geocoded());
    }

    #[test]
    fn test_place_deserializes_with_missing_optionals() {
        let json = r#"{"id": 3, "name": "Dhikala", "slug": "dhikala", "latitude": null}"#;
        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.description, "");
        assert_eq!(place.latitude, None);
        assert_eq!(place.longitude, None);
        assert_eq!(place.images, None);
    }

    #[test]
    fn test_place_kind_serde() {
        let kind: PlaceKind = serde_json::from_str("\"hotel\"").unwrap();
        assert_eq!(kind, PlaceKind::Hotel);
        assert_eq!(kind.table(), "hotels");
        assert!(!PlaceKind::Park.is_grouped_by_park());
    }
}
