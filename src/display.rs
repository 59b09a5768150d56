//! User-facing strings for place-search results.

use crate::entities::{DistanceResult, Language};

pub fn distance_text(language: Language, distance_km: u32, origin: &str) -> String {
    match language {
        Language::En => format!("Approx. {} km from {}", distance_km, origin),
        Language::Ta => format!("{} இலிருந்து சுமார் {} கி.மீ", origin, distance_km),
    }
}

pub fn unknown_distance_text(language: Language) -> String {
    match language {
        Language::En => "Distance unknown".into(),
        Language::Ta => "தூரம் தெரியவில்லை".into(),
    }
}

pub fn result_text(language: Language, result: &DistanceResult, origin: &str) -> String {
    match result.distance_km() {
        Some(km) => distance_text(language, km, origin),
        None => unknown_distance_text(language),
    }
}

pub fn missing_origin_warning(language: Language, origin: &str) -> String {
    match language {
        Language::En => format!(
            "Coordinates for {} not found. Showing places without distance.",
            origin
        ),
        Language::Ta => format!(
            "{}-க்கான வரைபடக் குறியீடுகள் கிடைக்கவில்லை. தூரம் இல்லாமல் இடங்களைக் காட்டுகிறது.",
            origin
        ),
    }
}

#[test]
fn labels_by_language() {
    assert_eq!(
        distance_text(Language::En, 427, "Chennai"),
        "Approx. 427 km from Chennai"
    );
    assert_eq!(
        distance_text(Language::Ta, 427, "சென்னை"),
        "சென்னை இலிருந்து சுமார் 427 கி.மீ"
    );
    assert_eq!(
        missing_origin_warning(Language::En, "Atlantis"),
        "Coordinates for Atlantis not found. Showing places without distance."
    );
}

#[test]
fn unknown_distance_is_never_zero() {
    use crate::entities::Place;

    let result = DistanceResult::new(Place::new("1", "Ooty", "", None), None);

    assert_eq!(result_text(Language::En, &result, "Chennai"), "Distance unknown");
    assert!(!result_text(Language::Ta, &result, "Chennai").contains('0'));
}
