mod place_finder_api;
mod trip_planner_api;

use crate::{
    api::API,
    config::Config,
    error::Error,
    external::{PlaceSearchClient, TripPlannerClient},
};

#[derive(Clone, Debug)]
pub struct Engine {
    places: PlaceSearchClient,
    planner: TripPlannerClient,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(config: &Config) -> Result<Self, Error> {
        tracing::info!(
            place_search = %config.place_search_api_base,
            trip_planner = %config.trip_planner_api_base,
            "configuring upstream services"
        );

        Ok(Self {
            places: PlaceSearchClient::new(
                config.place_search_api_base.clone(),
                config.upstream_timeout,
            )?,
            planner: TripPlannerClient::new(
                config.trip_planner_api_base.clone(),
                config.upstream_timeout,
            )?,
        })
    }
}

impl API for Engine {}

#[cfg(test)]
pub(crate) fn test_engine(base: &str) -> Engine {
    let config = Config {
        bind_addr: std::net::SocketAddr::from(([127, 0, 0, 1], 0)),
        place_search_api_base: base.into(),
        trip_planner_api_base: base.into(),
        upstream_timeout: std::time::Duration::from_secs(5),
    };

    Engine::new(&config).unwrap()
}
