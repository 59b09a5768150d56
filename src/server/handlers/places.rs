use axum::extract::{rejection::JsonRejection, Extension, Json};
use serde::{Deserialize, Serialize};

use crate::{
    api::DynAPI,
    entities::{Coordinates, PlaceQuery, PlaceSearchResults},
    error::Error,
};

#[derive(Serialize, Deserialize)]
pub struct DistanceParams {
    from: Coordinates,
    to: Coordinates,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResponse {
    distance_km: u32,
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    payload: Result<Json<PlaceQuery>, JsonRejection>,
) -> Result<Json<PlaceSearchResults>, Error> {
    let Json(query) = payload?;
    let results = api.find_places(query).await?;

    Ok(results.into())
}

pub async fn distance(
    Extension(api): Extension<DynAPI>,
    payload: Result<Json<DistanceParams>, JsonRejection>,
) -> Result<Json<DistanceResponse>, Error> {
    let Json(params) = payload?;
    let distance_km = api.measure(params.from, params.to);

    Ok(DistanceResponse { distance_km }.into())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::entities::{Language, ResultOrder};
    use crate::server::stub::StubAPI;

    fn api() -> DynAPI {
        Arc::new(StubAPI) as DynAPI
    }

    #[tokio::test]
    async fn distance_between_posted_coordinates() {
        let params: DistanceParams = serde_json::from_str(
            r#"{"from": {"lat": 0.0, "lon": 0.0}, "to": {"lat": 0.0, "lon": 180.0}}"#,
        )
        .unwrap();

        let Json(res) = distance(Extension(api()), Ok(Json(params))).await.unwrap();
        assert_eq!(res.distance_km, 20015);
    }

    #[test]
    fn out_of_range_coordinates_are_rejected_on_parse() {
        let params = serde_json::from_str::<DistanceParams>(
            r#"{"from": {"lat": 0.0, "lon": 0.0}, "to": {"lat": 0.0, "lon": 181.0}}"#,
        );

        assert!(params.is_err());
    }

    #[tokio::test]
    async fn find_propagates_errors() {
        let query = PlaceQuery {
            state: "Kerala".into(),
            district: "Kochi".into(),
            start_location: "".into(),
            language: Language::En,
            order: ResultOrder::Upstream,
        };

        let err = find(Extension(api()), Ok(Json(query))).await.unwrap_err();
        assert_eq!(err.code, 101);
    }
}
