use axum::extract::{rejection::JsonRejection, Extension, Json};

use crate::{
    api::DynAPI,
    entities::{Itinerary, TripRequest},
    error::Error,
};

pub async fn plan(
    Extension(api): Extension<DynAPI>,
    payload: Result<Json<TripRequest>, JsonRejection>,
) -> Result<Json<Itinerary>, Error> {
    let Json(request) = payload?;
    let itinerary = api.plan_trip(request).await?;

    Ok(itinerary.into())
}

#[tokio::test]
async fn plans_and_reports_upstream_failures() {
    use crate::entities::Language;
    use crate::server::stub::StubAPI;
    use axum::response::IntoResponse;
    use std::sync::Arc;

    let api = Arc::new(StubAPI) as DynAPI;

    let request = TripRequest {
        interests: "beaches".into(),
        location: "Kanyakumari".into(),
        days: 2,
        budget: 8000,
        language: Language::Ta,
    };

    let Json(itinerary) = plan(Extension(api.clone()), Ok(Json(request.clone())))
        .await
        .unwrap();
    assert_eq!(itinerary.content, "2 days in Kanyakumari");
    assert_eq!(itinerary.language, Language::Ta);

    let lost = TripRequest {
        location: "Atlantis".into(),
        ..request
    };

    let err = plan(Extension(api), Ok(Json(lost))).await.unwrap_err();
    assert_eq!(
        err.into_response().status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}
