use super::Engine;

use async_trait::async_trait;

use crate::{
    api::TripPlannerAPI,
    entities::{Itinerary, TripRequest},
    error::Error,
};

#[async_trait]
impl TripPlannerAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn plan_trip(&self, request: TripRequest) -> Result<Itinerary, Error> {
        let request = request.validated()?;

        let itinerary = self.planner.plan_trip(&request).await?;

        tracing::info!(token = %itinerary.token, "itinerary generated");

        Ok(itinerary)
    }
}

#[test]
fn invalid_requests_never_reach_the_planner() {
    use crate::engine::test_engine;
    use crate::entities::Language;
    use tokio_test::block_on;

    let engine = test_engine("http://127.0.0.1:1");

    let request = TripRequest {
        interests: "".into(),
        location: "Madurai".into(),
        days: 2,
        budget: 5000,
        language: Language::En,
    };

    let err = block_on(engine.plan_trip(request)).unwrap_err();
    assert_eq!(err.code, 101);
}
