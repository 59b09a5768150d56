use crate::entities::{Coordinates, DistanceResult, Place};

/// Pairs every place with its distance from `origin`, keeping the input
/// order. Places are never dropped.
pub fn annotate(origin: Option<&Coordinates>, places: Vec<Place>) -> Vec<DistanceResult> {
    places
        .into_iter()
        .map(|place| DistanceResult::new(place, origin))
        .collect()
}

/// Closest first. Unknown distances go last and keep their relative order.
pub fn sort_nearest(results: &mut [DistanceResult]) {
    results.sort_by_key(|result| match result.distance_km() {
        Some(km) => (0, km),
        None => (1, 0),
    });
}

#[cfg(test)]
fn fixture() -> Vec<Place> {
    vec![
        Place::new("kk", "Kanyakumari", "", Coordinates::new(8.0883, 77.5385).ok()),
        Place::new("ooty", "Ooty", "", None),
        Place::new("cbe", "Coimbatore", "", Coordinates::new(11.0168, 76.9558).ok()),
        Place::new("kodai", "Kodaikanal", "", None),
        Place::new("mdu", "Madurai", "", Coordinates::new(9.9252, 78.1198).ok()),
    ]
}

#[test]
fn annotate_keeps_every_place_in_order() {
    let chennai = Coordinates::new(13.0827, 80.2707).unwrap();
    let results = annotate(Some(&chennai), fixture());

    let ids: Vec<&str> = results.iter().map(|r| r.place().id.as_str()).collect();
    assert_eq!(ids, vec!["kk", "ooty", "cbe", "kodai", "mdu"]);

    let distances: Vec<Option<u32>> = results.iter().map(|r| r.distance_km()).collect();
    assert_eq!(distances, vec![Some(631), None, Some(427), None, Some(422)]);
}

#[test]
fn no_distance_without_origin() {
    let results = annotate(None, fixture());

    assert_eq!(results.len(), 5);
    assert!(results.iter().all(|r| r.distance_km().is_none()));
}

#[test]
fn no_distance_without_place_coordinates() {
    let chennai = Coordinates::new(13.0827, 80.2707).unwrap();

    for result in annotate(Some(&chennai), fixture()) {
        assert_eq!(
            result.distance_km().is_some(),
            result.place().coordinates.is_some()
        );
    }
}

#[test]
fn nearest_first_unknown_last() {
    let chennai = Coordinates::new(13.0827, 80.2707).unwrap();
    let mut results = annotate(Some(&chennai), fixture());
    sort_nearest(&mut results);

    let ids: Vec<&str> = results.iter().map(|r| r.place().id.as_str()).collect();
    assert_eq!(ids, vec!["mdu", "cbe", "kk", "ooty", "kodai"]);
}

#[test]
fn sort_is_stable_for_ties() {
    let origin = Coordinates::new(0.0, 0.0).unwrap();
    let places = vec![
        Place::new("east", "", "", Coordinates::new(0.0, 1.0).ok()),
        Place::new("west", "", "", Coordinates::new(0.0, -1.0).ok()),
        Place::new("north", "", "", Coordinates::new(1.0, 0.0).ok()),
    ];

    let mut results = annotate(Some(&origin), places);
    sort_nearest(&mut results);

    let ids: Vec<&str> = results.iter().map(|r| r.place().id.as_str()).collect();
    assert_eq!(ids, vec!["east", "west", "north"]);
}
