// crates/traveldb-core/src/api.rs

//! JSON views over search results.
//!
//! These flat projections are what crosses serialization boundaries (WASM,
//! CLI JSON output) instead of the backend-generic model types.

use crate::search::Hit;
use crate::traits::TravelBackend;
use serde::Serialize;

/// A flat, serializable projection of one destination card.
#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub category: &'static str,
    pub name: String,
    pub description: String,
    pub image_url: String,
    /// Parent country name for city entries; `None` for beaches and temples.
    pub country: Option<String>,
}

impl CardView {
    pub fn from_hit<B: TravelBackend>(hit: &Hit<'_, B>) -> Self {
        CardView {
            category: hit.category.as_str(),
            name: B::str_to_string(&hit.place.name),
            description: B::str_to_string(&hit.place.description),
            image_url: B::str_to_string(&hit.place.image_url),
            country: hit.country.map(|c| B::str_to_string(&c.name)),
        }
    }
}
