//! Great-circle distances on a spherical Earth.

use crate::entities::Coordinates;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers, unrounded.
pub fn great_circle_km(from: &Coordinates, to: &Coordinates) -> f64 {
    let d_lat = (to.lat() - from.lat()).to_radians();
    let d_lon = (to.lon() - from.lon()).to_radians();

    // rounding can push `a` a hair past 1 for antipodal points
    let a = ((d_lat / 2.0).sin().powi(2)
        + from.lat().to_radians().cos() * to.lat().to_radians().cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Haversine distance rounded to the nearest whole kilometer.
pub fn distance_km(from: &Coordinates, to: &Coordinates) -> u32 {
    great_circle_km(from, to).round() as u32
}

#[cfg(test)]
fn samples() -> Vec<Coordinates> {
    [
        (13.0827, 80.2707),
        (11.0168, 76.9558),
        (9.9252, 78.1198),
        (8.0883, 77.5385),
        (0.0, 0.0),
        (0.0, 180.0),
        (90.0, 0.0),
        (-90.0, 45.0),
        (51.5074, -0.1278),
        (-33.8688, 151.2093),
        (40.7128, -74.006),
        (0.000001, -179.999999),
    ]
    .iter()
    .map(|&(lat, lon)| Coordinates::new(lat, lon).unwrap())
    .collect()
}

#[test]
fn distance_to_self_is_zero() {
    for c in samples() {
        assert_eq!(distance_km(&c, &c), 0);
        assert_eq!(great_circle_km(&c, &c), 0.0);
    }
}

#[test]
fn distance_is_symmetric_and_bounded() {
    let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;

    for a in samples() {
        for b in samples() {
            assert_eq!(distance_km(&a, &b), distance_km(&b, &a));

            let km = great_circle_km(&a, &b);
            assert!(km.is_finite());
            assert!(km >= 0.0);
            assert!(km <= half_circumference + 1e-6);
        }
    }
}

#[test]
fn chennai_to_coimbatore() {
    let chennai = Coordinates::new(13.0827, 80.2707).unwrap();
    let coimbatore = Coordinates::new(11.0168, 76.9558).unwrap();

    assert_eq!(distance_km(&chennai, &coimbatore), 427);
}

#[test]
fn chennai_to_madurai_and_kanyakumari() {
    let chennai = Coordinates::new(13.0827, 80.2707).unwrap();
    let madurai = Coordinates::new(9.9252, 78.1198).unwrap();
    let kanyakumari = Coordinates::new(8.0883, 77.5385).unwrap();

    assert_eq!(distance_km(&chennai, &madurai), 422);
    assert_eq!(distance_km(&chennai, &kanyakumari), 631);
}

#[test]
fn antipodal_points_are_half_the_circumference() {
    let a = Coordinates::new(0.0, 0.0).unwrap();
    let b = Coordinates::new(0.0, 180.0).unwrap();
    assert_eq!(distance_km(&a, &b), 20015);

    let north = Coordinates::new(90.0, 0.0).unwrap();
    let south = Coordinates::new(-90.0, 0.0).unwrap();
    assert_eq!(distance_km(&north, &south), 20015);
}

#[test]
fn longitude_wraps_across_the_antimeridian() {
    let east = Coordinates::new(0.0, 179.5).unwrap();
    let west = Coordinates::new(0.0, -179.5).unwrap();

    // one degree of longitude on the equator
    assert_eq!(distance_km(&east, &west), 111);
}
