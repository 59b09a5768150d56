mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::{DynAPI, API};
use crate::error::{unexpected_error, Error};
use crate::server::handlers::{places, regions, trips};

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/api/regions", get(regions::list))
        .route("/api/find-places", post(places::find))
        .route("/api/distance", post(places::distance))
        .route("/api/plan-trip", post(trips::plan))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let api = Arc::new(api) as DynAPI;

    let app = router(api);

    let server = axum::Server::try_bind(&addr).map_err(|err| {
        tracing::error!("failed to bind {}: {}", addr, err);
        unexpected_error()
    })?;

    tracing::info!("listening on {}", addr);

    server
        .serve(app.into_make_service())
        .await
        .map_err(|err| {
            tracing::error!("server error: {}", err);
            unexpected_error()
        })
}


#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use serde_json::{json, Value};

    use super::*;
    use crate::external::spawn_upstream;
    use crate::server::stub::StubAPI;

    fn base() -> String {
        spawn_upstream(router(Arc::new(StubAPI) as DynAPI))
    }

    async fn post(base: &str, path: &str, body: Value) -> (StatusCode, Value) {
        let res = reqwest::Client::new()
            .post(format!("{}{}", base, path))
            .json(&body)
            .send()
            .await
            .unwrap();

        let status = res.status();
        (status, res.json().await.unwrap())
    }

    #[tokio::test]
    async fn every_route_is_wired() {
        let base = base();

        let res = reqwest::get(format!("{}/api/regions", base)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let regions: Value = res.json().await.unwrap();
        assert_eq!(regions[0]["state"], "Tamil Nadu");
        assert_eq!(regions[1]["districts"][1], "Kochi");

        let (status, body) = post(
            &base,
            "/api/find-places",
            json!({"state": "Kerala", "district": "Kochi", "startLocation": "Chennai"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["startLocation"], "Chennai");
        assert_eq!(body["places"], json!([]));

        let (status, body) = post(
            &base,
            "/api/distance",
            json!({"from": {"lat": 0.0, "lon": 0.0}, "to": {"lat": 0.0, "lon": 180.0}}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["distance_km"], 20015);

        let (status, body) = post(
            &base,
            "/api/plan-trip",
            json!({"interests": "tea", "location": "Munnar", "days": "2", "budget": "4000.75"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["content"], "2 days in Munnar");
        assert_eq!(body["language"], "en");
    }

    #[tokio::test]
    async fn malformed_bodies_use_the_error_shape() {
        let base = base();

        let (status, body) = post(
            &base,
            "/api/distance",
            json!({"from": {"lat": 0.0, "lon": 0.0}, "to": {"lat": 91.0, "lon": 0.0}}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 102);
        assert_eq!(body["error"], "coordinate out of range");

        let (status, body) = post(
            &base,
            "/api/plan-trip",
            json!({"interests": "tea", "location": "Munnar", "days": "", "budget": 4000}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 101);

        let (status, body) = post(&base, "/api/find-places", json!({"state": "Kerala"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 101);

        let (status, body) = post(
            &base,
            "/api/plan-trip",
            json!({"interests": "ruins", "location": "Atlantis", "days": 1, "budget": 1}),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], 4);
        assert_eq!(body["error"], "Internal Server Error");
    }
}
