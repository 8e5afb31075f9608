// crates/traveldb-core/src/raw.rs

use serde::Deserialize;

/// Raw destination entry as it comes from JSON:
/// {
///   "id": 1,
///   "name": "Bora Bora, French Polynesia",
///   "imageUrl": "enter_your_image_for_bora_bora.jpg",
///   "description": "An island known for its stunning lagoons..."
/// }
#[derive(Debug, Deserialize)]
pub struct PlaceRaw {
    /// Present in the source file but carries no uniqueness guarantee;
    /// dropped during normalization.
    pub id: Option<i64>,
    pub name: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(default)]
    pub description: String,
}

/// Raw country structure from JSON. Countries only group cities; they have
/// no card of their own.
#[derive(Debug, Deserialize)]
pub struct CountryRaw {
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub cities: Vec<PlaceRaw>,
}

/// Raw top-level dataset, mirroring `travel_recommendation_api.json`.
#[derive(Debug, Deserialize)]
pub struct TravelDataRaw {
    #[serde(default)]
    pub beaches: Vec<PlaceRaw>,
    #[serde(default)]
    pub temples: Vec<PlaceRaw>,
    #[serde(default)]
    pub countries: Vec<CountryRaw>,
}
