use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, DistanceResult, Language};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultOrder {
    /// Keep the order the place-search service returned.
    #[default]
    Upstream,
    /// Closest first; places without a distance go last.
    Nearest,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceQuery {
    pub state: String,
    pub district: String,
    pub start_location: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub order: ResultOrder,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceResult {
    #[serde(flatten)]
    pub result: DistanceResult,
    pub distance_text: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSearchResults {
    pub start_location: String,
    pub start_coords: Option<Coordinates>,
    pub places: Vec<PlaceResult>,
    pub warning: Option<String>,
}

#[test]
fn query_accepts_the_form_payload() {
    let query: PlaceQuery = serde_json::from_str(
        r#"{"state": "Tamil Nadu", "district": "Madurai", "startLocation": "Chennai", "language": "ta"}"#,
    )
    .unwrap();

    assert_eq!(query.start_location, "Chennai");
    assert_eq!(query.language, Language::Ta);
    assert_eq!(query.order, ResultOrder::Upstream);
}
