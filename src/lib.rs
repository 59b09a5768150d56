pub mod api;
pub mod config;
pub mod display;
pub mod engine;
pub mod entities;
pub mod error;
pub mod external;
pub mod geo;
pub mod ranking;
pub mod server;
