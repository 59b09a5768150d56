use serde::Serialize;

use crate::entities::{Coordinates, Place};
use crate::geo;

/// A place annotated with its distance from the search origin.
///
/// The distance is present only when both the origin and the place carry
/// coordinates. There is no way to build one with a distance from outside,
/// so a missing coordinate can never show up as a number.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceResult {
    place: Place,
    distance_km: Option<u32>,
}

impl DistanceResult {
    pub fn new(place: Place, origin: Option<&Coordinates>) -> Self {
        let distance_km = match (origin, place.coordinates.as_ref()) {
            (Some(origin), Some(target)) => Some(geo::distance_km(origin, target)),
            _ => None,
        };

        Self { place, distance_km }
    }

    pub fn place(&self) -> &Place {
        &self.place
    }

    pub fn distance_km(&self) -> Option<u32> {
        self.distance_km
    }
}

#[test]
fn distance_requires_both_coordinates() {
    let origin = Coordinates::new(13.0827, 80.2707).unwrap();
    let located = Place::new("1", "Coimbatore", "", Coordinates::new(11.0168, 76.9558).ok());
    let unlocated = Place::new("2", "Ooty", "", None);

    assert_eq!(DistanceResult::new(located.clone(), Some(&origin)).distance_km(), Some(427));
    assert_eq!(DistanceResult::new(located, None).distance_km(), None);
    assert_eq!(DistanceResult::new(unlocated.clone(), Some(&origin)).distance_km(), None);
    assert_eq!(DistanceResult::new(unlocated, None).distance_km(), None);
}

#[test]
fn same_point_is_zero_not_unknown() {
    let origin = Coordinates::new(10.0, 77.0).unwrap();
    let here = Place::new("1", "Here", "", Some(origin));

    assert_eq!(DistanceResult::new(here, Some(&origin)).distance_km(), Some(0));
}
