mod coordinates;
mod distance;
mod language;
mod place;
mod region;
mod search;
mod trip;

pub use coordinates::Coordinates;
pub use distance::DistanceResult;
pub use language::Language;
pub use place::Place;
pub use region::{districts, regions, validate as validate_region, Region};
pub use search::{PlaceQuery, PlaceResult, PlaceSearchResults, ResultOrder};
pub use trip::{Itinerary, TripRequest};
