use super::Engine;

use async_trait::async_trait;

use crate::{
    api::PlaceFinderAPI,
    display,
    entities::{
        regions, validate_region, Coordinates, PlaceQuery, PlaceResult, PlaceSearchResults,
        Region, ResultOrder,
    },
    error::{invalid_input_error, Error},
    external::PlaceSearch,
    geo, ranking,
};

#[async_trait]
impl PlaceFinderAPI for Engine {
    fn list_regions(&self) -> Vec<Region> {
        regions().to_vec()
    }

    #[tracing::instrument(skip(self))]
    async fn find_places(&self, query: PlaceQuery) -> Result<PlaceSearchResults, Error> {
        let query = PlaceQuery {
            state: query.state.trim().into(),
            district: query.district.trim().into(),
            start_location: query.start_location.trim().into(),
            ..query
        };

        if query.start_location.is_empty() {
            return Err(invalid_input_error());
        }

        validate_region(&query.state, &query.district)?;

        let PlaceSearch {
            places,
            start_coords,
        } = self.places.find_places(&query).await?;

        let mut results = ranking::annotate(start_coords.as_ref(), places);

        if query.order == ResultOrder::Nearest {
            ranking::sort_nearest(&mut results);
        }

        let language = query.language;
        let origin = query.start_location;

        let warning = if start_coords.is_none() && !results.is_empty() {
            tracing::warn!(%origin, "origin not resolved, distances unavailable");
            Some(display::missing_origin_warning(language, &origin))
        } else {
            None
        };

        let places = results
            .into_iter()
            .map(|result| PlaceResult {
                distance_text: display::result_text(language, &result, &origin),
                result,
            })
            .collect();

        Ok(PlaceSearchResults {
            start_location: origin,
            start_coords,
            places,
            warning,
        })
    }

    fn measure(&self, from: Coordinates, to: Coordinates) -> u32 {
        geo::distance_km(&from, &to)
    }
}

#[cfg(test)]
mod tests {
    use axum::{routing::post, Json, Router};
    use serde_json::{json, Value};

    use super::*;
    use crate::engine::test_engine;
    use crate::entities::Language;
    use crate::external::spawn_upstream;

    fn upstream(resolve_origin: bool) -> Router {
        Router::new().route(
            "/api/find-places",
            post(move |Json(body): Json<Value>| async move {
                assert_eq!(body["startLocation"], "Chennai");

                let start_coords = if resolve_origin {
                    json!({"lat": 13.0827, "lon": 80.2707})
                } else {
                    Value::Null
                };

                Json(json!({
                    "places": [
                        {"id": "kk", "name": "Kanyakumari", "description": "", "lat": 8.0883, "lon": 77.5385},
                        {"id": "ooty", "name": "Ooty", "description": ""},
                        {"id": "mdu", "name": "Madurai", "description": "", "lat": 9.9252, "lon": 78.1198},
                    ],
                    "startCoords": start_coords,
                }))
            }),
        )
    }

    fn query(order: ResultOrder) -> PlaceQuery {
        PlaceQuery {
            state: " Tamil Nadu ".into(),
            district: "Madurai".into(),
            start_location: "  Chennai ".into(),
            language: Language::En,
            order,
        }
    }

    #[tokio::test]
    async fn annotates_in_upstream_order() {
        let engine = test_engine(&spawn_upstream(upstream(true)));

        let results = engine.find_places(query(ResultOrder::Upstream)).await.unwrap();

        assert_eq!(results.start_location, "Chennai");
        assert!(results.start_coords.is_some());
        assert_eq!(results.warning, None);

        let rows: Vec<(&str, Option<u32>, &str)> = results
            .places
            .iter()
            .map(|p| {
                (
                    p.result.place().id.as_str(),
                    p.result.distance_km(),
                    p.distance_text.as_str(),
                )
            })
            .collect();

        assert_eq!(
            rows,
            vec![
                ("kk", Some(631), "Approx. 631 km from Chennai"),
                ("ooty", None, "Distance unknown"),
                ("mdu", Some(422), "Approx. 422 km from Chennai"),
            ]
        );
    }

    #[tokio::test]
    async fn nearest_order_puts_unknown_last() {
        let engine = test_engine(&spawn_upstream(upstream(true)));

        let results = engine.find_places(query(ResultOrder::Nearest)).await.unwrap();

        let ids: Vec<&str> = results
            .places
            .iter()
            .map(|p| p.result.place().id.as_str())
            .collect();
        assert_eq!(ids, vec!["mdu", "kk", "ooty"]);
    }

    #[tokio::test]
    async fn unresolved_origin_warns_and_claims_no_distance() {
        let engine = test_engine(&spawn_upstream(upstream(false)));

        let results = engine.find_places(query(ResultOrder::Nearest)).await.unwrap();

        assert_eq!(results.places.len(), 3);
        assert!(results.places.iter().all(|p| p.result.distance_km().is_none()));
        assert_eq!(
            results.warning.as_deref(),
            Some("Coordinates for Chennai not found. Showing places without distance.")
        );

        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["startCoords"], Value::Null);
        assert_eq!(json["places"][0]["distanceKm"], Value::Null);
        assert_eq!(json["places"][0]["distanceText"], "Distance unknown");
    }

    #[tokio::test]
    async fn rejects_bad_queries_before_calling_upstream() {
        // nothing listens here, so any upstream call would fail with code 3
        let engine = test_engine("http://127.0.0.1:1");

        let mut blank = query(ResultOrder::Upstream);
        blank.start_location = "   ".into();
        assert_eq!(engine.find_places(blank).await.unwrap_err().code, 101);

        let mut mismatched = query(ResultOrder::Upstream);
        mismatched.district = "Munnar".into();
        assert_eq!(engine.find_places(mismatched).await.unwrap_err().code, 103);
    }

    #[test]
    fn measure_and_regions() {
        let engine = test_engine("http://127.0.0.1:1");
        let chennai = Coordinates::new(13.0827, 80.2707).unwrap();
        let coimbatore = Coordinates::new(11.0168, 76.9558).unwrap();

        assert_eq!(engine.measure(chennai, coimbatore), 427);
        assert_eq!(engine.measure(chennai, chennai), 0);
        assert_eq!(engine.list_regions().len(), 2);
    }
}
