use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a coordinate pair cannot be used
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("{0} is missing")]
    Missing(&'static str),

    #[error("{field} is not a number: {value:?}")]
    Unparseable { field: &'static str, value: String },

    #[error("{0} is not a finite number")]
    NonFinite(&'static str),

    #[error("{field} {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// A point on the globe in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Build a validated coordinate (finite, latitude in [-90, 90], longitude in [-180, 180])
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        check_range("latitude", latitude, 90.0)?;
        check_range("longitude", longitude, 180.0)?;

        Ok(Self { latitude, longitude })
    }

    /// Parse the nullable text columns a place record carries.
    ///
    /// Only finiteness is checked here; stored candidates are not range-validated.
    pub fn parse(latitude: Option<&str>, longitude: Option<&str>) -> Result<Self, CoordinateError> {
        let latitude = parse_degrees("latitude", latitude)?;
        let longitude = parse_degrees("longitude", longitude)?;

        Ok(Self { latitude, longitude })
    }

    /// Great-circle distance to another coordinate in kilometers
    #[inline]
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        super::distance::haversine_distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

fn check_range(field: &'static str, value: f64, limit: f64) -> Result<(), CoordinateError> {
    if !value.is_finite() {
        return Err(CoordinateError::NonFinite(field));
    }
    if value < -limit || value > limit {
        return Err(CoordinateError::OutOfRange {
            field,
            value,
            min: -limit,
            max: limit,
        });
    }
    Ok(())
}

fn parse_degrees(field: &'static str, raw: Option<&str>) -> Result<f64, CoordinateError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());
    let raw = raw.ok_or(CoordinateError::Missing(field))?;

    let value: f64 = raw.parse().map_err(|_| CoordinateError::Unparseable {
        field,
        value: raw.to_string(),
    })?;

    // "NaN" and "inf" parse successfully but are never usable
    if !value.is_finite() {
        return Err(CoordinateError::NonFinite(field));
    }

    Ok(value)
}
