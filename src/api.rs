use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{
    Coordinates, Itinerary, PlaceQuery, PlaceSearchResults, Region, TripRequest,
};
use crate::error::Error;

#[async_trait]
pub trait PlaceFinderAPI {
    fn list_regions(&self) -> Vec<Region>;
    async fn find_places(&self, query: PlaceQuery) -> Result<PlaceSearchResults, Error>;
    fn measure(&self, from: Coordinates, to: Coordinates) -> u32;
}

#[async_trait]
pub trait TripPlannerAPI {
    async fn plan_trip(&self, request: TripRequest) -> Result<Itinerary, Error>;
}

pub trait API: PlaceFinderAPI + TripPlannerAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
