pub mod place_search;
pub mod trip_planner;

use std::time::Duration;

use crate::error::{invalid_input_error, upstream_error, Error};

pub use place_search::{PlaceSearch, PlaceSearchClient};
pub use trip_planner::TripPlannerClient;

fn http_client(timeout: Duration) -> Result<reqwest::Client, Error> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

fn check_status(res: &reqwest::Response) -> Result<(), Error> {
    let status_code = res.status().as_u16();

    if (400..500).contains(&status_code) {
        tracing::warn!(status_code, "upstream rejected request");
        return Err(invalid_input_error());
    } else if status_code != 200 {
        tracing::warn!(status_code, "upstream failed");
        return Err(upstream_error());
    }

    Ok(())
}

/// Serves `app` on an ephemeral local port and returns its base URL.
#[cfg(test)]
pub(crate) fn spawn_upstream(app: axum::Router) -> String {
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], 0));
    let server = axum::Server::bind(&addr).serve(app.into_make_service());
    let base = format!("http://{}", server.local_addr());

    tokio::spawn(server);

    base
}
