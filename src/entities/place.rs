use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

/// A candidate destination as returned by the place-search service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub description: String,
    pub coordinates: Option<Coordinates>,
}

impl Place {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        coordinates: Option<Coordinates>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            coordinates,
        }
    }
}
