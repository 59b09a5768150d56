use axum::extract::{Extension, Json};

use crate::api::DynAPI;
use crate::entities::Region;

pub async fn list(Extension(api): Extension<DynAPI>) -> Json<Vec<Region>> {
    api.list_regions().into()
}

#[test]
fn lists_the_catalogue() {
    use crate::server::stub::StubAPI;
    use std::sync::Arc;
    use tokio_test::block_on;

    let api = Arc::new(StubAPI) as DynAPI;
    let Json(regions) = block_on(list(Extension(api)));

    let states: Vec<&str> = regions.iter().map(|r| r.state).collect();
    assert_eq!(states, vec!["Tamil Nadu", "Kerala"]);
}
