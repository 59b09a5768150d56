pub mod places;
pub mod regions;
pub mod trips;
