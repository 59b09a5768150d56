use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{config_error, Error};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Base URL of the place-search service, e.g. `http://localhost:5000`.
    pub place_search_api_base: String,
    /// Base URL of the trip-planning service.
    pub trip_planner_api_base: String,
    pub upstream_timeout: Duration,
}

impl Config {
    #[tracing::instrument(name = "Config::from_env")]
    pub fn from_env() -> Result<Self, Error> {
        let bind_addr = env::var("YATRA_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_addr.parse::<SocketAddr>().map_err(|_| {
            tracing::error!("YATRA_BIND_ADDR is not a socket address: {}", bind_addr);
            config_error()
        })?;

        let upstream_timeout = match env::var("UPSTREAM_TIMEOUT_SECS") {
            Ok(secs) => secs.trim().parse::<u64>().map_err(|_| {
                tracing::error!("UPSTREAM_TIMEOUT_SECS is not a number: {}", secs);
                config_error()
            })?,
            Err(_) => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        Ok(Self {
            bind_addr,
            place_search_api_base: trim_base(env::var("PLACE_SEARCH_API_BASE")?),
            trip_planner_api_base: trim_base(env::var("TRIP_PLANNER_API_BASE")?),
            upstream_timeout: Duration::from_secs(upstream_timeout),
        })
    }
}

fn trim_base(base: String) -> String {
    base.trim().trim_end_matches('/').to_string()
}

// the only test touching the process environment
#[test]
fn from_env_reads_and_defaults() {
    env::remove_var("YATRA_BIND_ADDR");
    env::remove_var("UPSTREAM_TIMEOUT_SECS");
    env::remove_var("PLACE_SEARCH_API_BASE");
    env::remove_var("TRIP_PLANNER_API_BASE");

    assert_eq!(Config::from_env().unwrap_err().code, 1);

    env::set_var("PLACE_SEARCH_API_BASE", "http://localhost:5000/");
    env::set_var("TRIP_PLANNER_API_BASE", " http://localhost:5001 ");

    let config = Config::from_env().unwrap();
    assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
    assert_eq!(config.place_search_api_base, "http://localhost:5000");
    assert_eq!(config.trip_planner_api_base, "http://localhost:5001");
    assert_eq!(config.upstream_timeout, Duration::from_secs(30));

    env::set_var("UPSTREAM_TIMEOUT_SECS", "soon");
    assert_eq!(Config::from_env().unwrap_err().code, 6);

    env::set_var("UPSTREAM_TIMEOUT_SECS", "5");
    env::set_var("YATRA_BIND_ADDR", "0.0.0.0:8080");
    let config = Config::from_env().unwrap();
    assert_eq!(config.upstream_timeout, Duration::from_secs(5));
    assert_eq!(config.bind_addr.port(), 8080);

    env::remove_var("UPSTREAM_TIMEOUT_SECS");
    env::remove_var("YATRA_BIND_ADDR");
}
