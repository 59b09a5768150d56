use serde::{Deserialize, Serialize};

use crate::error::{invalid_coordinate_error, Error};

/// A point on the globe in degrees. Only constructible through
/// [`Coordinates::new`], so every value is finite and in range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates")]
pub struct Coordinates {
    lat: f64,
    lon: f64,
}

#[derive(Deserialize)]
struct RawCoordinates {
    lat: f64,
    lon: f64,
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = Error;

    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        Coordinates::new(raw.lat, raw.lon)
    }
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Result<Self, Error> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(invalid_coordinate_error());
        }

        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(invalid_coordinate_error());
        }

        Ok(Self { lat, lon })
    }

    /// Builds a coordinate from the optional halves an upstream payload
    /// carries. Anything short of two valid values is treated as absent.
    pub fn from_parts(lat: Option<f64>, lon: Option<f64>) -> Option<Self> {
        match (lat, lon) {
            (Some(lat), Some(lon)) => match Self::new(lat, lon) {
                Ok(coordinates) => Some(coordinates),
                Err(_) => {
                    tracing::warn!(lat, lon, "dropping out-of-range coordinates");
                    None
                }
            },
            (None, None) => None,
            (lat, lon) => {
                tracing::warn!(?lat, ?lon, "dropping partial coordinates");
                None
            }
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

#[test]
fn rejects_out_of_range_values() {
    assert!(Coordinates::new(90.0, 180.0).is_ok());
    assert!(Coordinates::new(-90.0, -180.0).is_ok());
    assert!(Coordinates::new(90.5, 0.0).is_err());
    assert!(Coordinates::new(0.0, -180.1).is_err());
    assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    assert!(Coordinates::new(0.0, f64::INFINITY).is_err());
}

#[test]
fn partial_parts_are_absent() {
    assert_eq!(Coordinates::from_parts(Some(13.0827), None), None);
    assert_eq!(Coordinates::from_parts(None, Some(80.2707)), None);
    assert_eq!(Coordinates::from_parts(Some(120.0), Some(80.2707)), None);
    assert_eq!(Coordinates::from_parts(None, None), None);

    let chennai = Coordinates::from_parts(Some(13.0827), Some(80.2707)).unwrap();
    assert_eq!(chennai.lat(), 13.0827);
    assert_eq!(chennai.lon(), 80.2707);
}

#[test]
fn zero_is_a_real_coordinate() {
    assert!(Coordinates::from_parts(Some(0.0), Some(0.0)).is_some());
}

#[test]
fn deserialization_validates() {
    let ok: Coordinates = serde_json::from_str(r#"{"lat": 11.0168, "lon": 76.9558}"#).unwrap();
    assert_eq!(ok, Coordinates::new(11.0168, 76.9558).unwrap());

    let bad = serde_json::from_str::<Coordinates>(r#"{"lat": 91.0, "lon": 0.0}"#);
    assert!(bad.is_err());

    let json = serde_json::to_value(ok).unwrap();
    assert_eq!(json, serde_json::json!({"lat": 11.0168, "lon": 76.9558}));
}
