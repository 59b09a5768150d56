use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    entities::{Coordinates, Language, Place, PlaceQuery},
    error::{upstream_error, Error},
};

use super::{check_status, http_client};

/// What the place-search service knows about a query: candidate places and,
/// if it could geocode the start location, the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceSearch {
    pub places: Vec<Place>,
    pub start_coords: Option<Coordinates>,
}

#[derive(Clone, Debug)]
pub struct PlaceSearchClient {
    http: reqwest::Client,
    api_base: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Request<'a> {
    state: &'a str,
    district: &'a str,
    start_location: &'a str,
    language: Language,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Response {
    places: Option<Vec<WirePlace>>,
    start_coords: Option<WireCoordinates>,
}

#[derive(Deserialize)]
struct WirePlace {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    lat: Option<f64>,
    lon: Option<f64>,
}

#[derive(Deserialize)]
struct WireCoordinates {
    lat: Option<f64>,
    lon: Option<f64>,
}

impl WirePlace {
    fn into_place(self, index: usize) -> Place {
        let id = match self.id {
            Value::String(id) => id,
            Value::Null => index.to_string(),
            id => id.to_string(),
        };

        Place::new(id, self.name, self.description, Coordinates::from_parts(self.lat, self.lon))
    }
}

impl PlaceSearchClient {
    pub fn new(api_base: impl Into<String>, timeout: Duration) -> Result<Self, Error> {
        Ok(Self {
            http: http_client(timeout)?,
            api_base: api_base.into(),
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn find_places(&self, query: &PlaceQuery) -> Result<PlaceSearch, Error> {
        let url = format!("{}/api/find-places", self.api_base);

        let res = self
            .http
            .post(url)
            .json(&Request {
                state: &query.state,
                district: &query.district,
                start_location: &query.start_location,
                language: query.language,
            })
            .send()
            .await?;

        check_status(&res)?;

        let data: Response = res.json().await?;

        let places: Vec<Place> = data
            .places
            .ok_or_else(upstream_error)?
            .into_iter()
            .enumerate()
            .map(|(index, place)| place.into_place(index))
            .collect();

        let start_coords = data
            .start_coords
            .and_then(|c| Coordinates::from_parts(c.lat, c.lon));

        tracing::info!(
            places = places.len(),
            origin_resolved = start_coords.is_some(),
            "place search finished"
        );

        Ok(PlaceSearch {
            places,
            start_coords,
        })
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::time::Duration;

    use super::*;
    use crate::entities::ResultOrder;
    use crate::external::spawn_upstream;

    fn query() -> PlaceQuery {
        PlaceQuery {
            state: "Tamil Nadu".into(),
            district: "Madurai".into(),
            start_location: "Chennai".into(),
            language: Language::Ta,
            order: ResultOrder::Upstream,
        }
    }

    fn client(base: String) -> PlaceSearchClient {
        PlaceSearchClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn forwards_the_query_and_parses_places() {
        let app = Router::new().route(
            "/api/find-places",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(
                    body,
                    json!({
                        "state": "Tamil Nadu",
                        "district": "Madurai",
                        "startLocation": "Chennai",
                        "language": "ta",
                    })
                );

                Json(json!({
                    "places": [
                        {"id": "meenakshi", "name": "Meenakshi Temple", "description": "Temple", "lat": 9.9195, "lon": 78.1193},
                        {"id": 7, "name": "Gandhi Museum", "description": "Museum", "lat": 9.9307},
                        {"name": "Alagar Kovil", "description": "Temple", "lat": null, "lon": null},
                    ],
                    "startCoords": {"lat": 13.0827, "lon": 80.2707},
                }))
            }),
        );

        let search = client(spawn_upstream(app)).find_places(&query()).await.unwrap();

        assert_eq!(search.start_coords, Coordinates::new(13.0827, 80.2707).ok());
        assert_eq!(search.places.len(), 3);

        assert_eq!(search.places[0].id, "meenakshi");
        assert_eq!(search.places[0].coordinates, Coordinates::new(9.9195, 78.1193).ok());

        assert_eq!(search.places[1].id, "7");
        assert_eq!(search.places[1].coordinates, None);

        assert_eq!(search.places[2].id, "2");
        assert_eq!(search.places[2].name, "Alagar Kovil");
        assert_eq!(search.places[2].coordinates, None);
    }

    #[tokio::test]
    async fn unresolved_or_partial_origin_is_absent() {
        let app = Router::new().route(
            "/api/find-places",
            post(|| async {
                Json(json!({
                    "places": [{"id": "1", "name": "A", "description": "", "lat": 9.0, "lon": 78.0}],
                    "startCoords": {"lat": 13.0827},
                }))
            }),
        );

        let search = client(spawn_upstream(app)).find_places(&query()).await.unwrap();
        assert_eq!(search.start_coords, None);
        assert_eq!(search.places.len(), 1);

        let app = Router::new().route(
            "/api/find-places",
            post(|| async { Json(json!({"places": [], "startCoords": null})) }),
        );

        let search = client(spawn_upstream(app)).find_places(&query()).await.unwrap();
        assert_eq!(search.start_coords, None);
        assert!(search.places.is_empty());
    }

    #[tokio::test]
    async fn maps_upstream_failures() {
        let app = Router::new()
            .route("/api/find-places", post(|| async { StatusCode::UNPROCESSABLE_ENTITY }));
        let err = client(spawn_upstream(app)).find_places(&query()).await.unwrap_err();
        assert_eq!(err.code, 101);

        let app = Router::new()
            .route("/api/find-places", post(|| async { StatusCode::BAD_GATEWAY }));
        let err = client(spawn_upstream(app)).find_places(&query()).await.unwrap_err();
        assert_eq!(err.code, 4);

        let app = Router::new()
            .route("/api/find-places", post(|| async { Json(json!({"startCoords": null})) }));
        let err = client(spawn_upstream(app)).find_places(&query()).await.unwrap_err();
        assert_eq!(err.code, 4);

        let app = Router::new().route("/api/find-places", post(|| async { "not json" }));
        let err = client(spawn_upstream(app)).find_places(&query()).await.unwrap_err();
        assert_eq!(err.code, 3);
    }

    #[tokio::test]
    async fn unreachable_upstream_is_a_request_error() {
        let err = client("http://127.0.0.1:1".into())
            .find_places(&query())
            .await
            .unwrap_err();

        assert_eq!(err.code, 3);
    }
}
