use std::time::Duration;

use serde::Deserialize;

use crate::{
    entities::{Itinerary, TripRequest},
    error::{upstream_error, Error},
};

use super::{check_status, http_client};

#[derive(Clone, Debug)]
pub struct TripPlannerClient {
    http: reqwest::Client,
    api_base: String,
}

#[derive(Deserialize)]
struct Response {
    itinerary: Option<String>,
}

impl TripPlannerClient {
    pub fn new(api_base: impl Into<String>, timeout: Duration) -> Result<Self, Error> {
        Ok(Self {
            http: http_client(timeout)?,
            api_base: api_base.into(),
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn plan_trip(&self, request: &TripRequest) -> Result<Itinerary, Error> {
        let url = format!("{}/api/plan-trip", self.api_base);

        let res = self.http.post(url).json(request).send().await?;

        check_status(&res)?;

        let data: Response = res.json().await?;

        let content = data
            .itinerary
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(upstream_error)?;

        Ok(Itinerary::new(content, request.language))
    }
}

#[cfg(test)]
fn request() -> TripRequest {
    TripRequest {
        interests: "temples, filter coffee".into(),
        location: "Madurai".into(),
        days: 3,
        budget: 15000,
        language: crate::entities::Language::En,
    }
}

#[tokio::test]
async fn returns_the_itinerary() {
    use axum::{routing::post, Json, Router};
    use serde_json::{json, Value};

    let app = Router::new().route(
        "/api/plan-trip",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["location"], "Madurai");
            assert_eq!(body["days"], 3);
            assert_eq!(body["budget"], 15000);
            assert_eq!(body["language"], "en");

            Json(json!({"itinerary": "<h3>Day 1</h3><p>Meenakshi Temple</p>"}))
        }),
    );

    let base = super::spawn_upstream(app);
    let planner = TripPlannerClient::new(base, Duration::from_secs(5)).unwrap();

    let itinerary = planner.plan_trip(&request()).await.unwrap();
    assert_eq!(itinerary.content, "<h3>Day 1</h3><p>Meenakshi Temple</p>");
    assert_eq!(itinerary.language, crate::entities::Language::En);
}

#[tokio::test]
async fn empty_itinerary_is_an_upstream_error() {
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::json;

    let app = Router::new().route(
        "/api/plan-trip",
        post(|| async { Json(json!({"itinerary": "  "})) }),
    );
    let planner = TripPlannerClient::new(super::spawn_upstream(app), Duration::from_secs(5)).unwrap();
    assert_eq!(planner.plan_trip(&request()).await.unwrap_err().code, 4);

    let app = Router::new().route("/api/plan-trip", post(|| async { StatusCode::SERVICE_UNAVAILABLE }));
    let planner = TripPlannerClient::new(super::spawn_upstream(app), Duration::from_secs(5)).unwrap();
    assert_eq!(planner.plan_trip(&request()).await.unwrap_err().code, 4);

    let app = Router::new().route("/api/plan-trip", post(|| async { StatusCode::BAD_REQUEST }));
    let planner = TripPlannerClient::new(super::spawn_upstream(app), Duration::from_secs(5)).unwrap();
    assert_eq!(planner.plan_trip(&request()).await.unwrap_err().code, 101);
}
