// crates/traveldb-core/src/model.rs

use crate::raw::TravelDataRaw;
use crate::traits::{NameMatch, TravelBackend};
use serde::{Deserialize, Serialize};

/// Default backend: plain `String`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultBackend;

impl TravelBackend for DefaultBackend {
    type Str = String;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }
}

/// A single destination entry (beach, temple, or city).
///
/// Entries carry no stable identifier beyond their name, and the dataset
/// enforces no uniqueness on names.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Place<B: TravelBackend> {
    pub name: B::Str,
    pub description: B::Str,
    pub image_url: B::Str,
}

/// A country entry, grouping its city destinations.
///
/// Countries themselves are never rendered as cards; searching the countries
/// category yields the flattened city list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Country<B: TravelBackend> {
    pub name: B::Str,
    pub cities: Vec<Place<B>>,
}

/// Top-level dataset structure.
///
/// **Structure:** `TravelDb` -> three named collections, with countries
/// nesting one level of cities. Collection order is dataset order and is
/// preserved through every query.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TravelDb<B: TravelBackend> {
    pub beaches: Vec<Place<B>>,
    pub temples: Vec<Place<B>>,
    pub countries: Vec<Country<B>>,
}

/// Convenient alias for the default backend.
pub type DefaultTravelDb = TravelDb<DefaultBackend>;
/// Alias used in demos.
pub type StandardBackend = DefaultBackend;

/// Convert raw JSON data into a `TravelDb` using the given backend.
pub fn build_travel_db<B: TravelBackend>(raw: TravelDataRaw) -> TravelDb<B> {
    fn place<B: TravelBackend>(p: crate::raw::PlaceRaw) -> Place<B> {
        Place {
            name: B::str_from(&p.name),
            description: B::str_from(&p.description),
            image_url: B::str_from(&p.image_url),
        }
    }

    TravelDb {
        beaches: raw.beaches.into_iter().map(place::<B>).collect(),
        temples: raw.temples.into_iter().map(place::<B>).collect(),
        countries: raw
            .countries
            .into_iter()
            .map(|c| Country {
                name: B::str_from(&c.name),
                cities: c.cities.into_iter().map(place::<B>).collect(),
            })
            .collect(),
    }
}

impl<B: TravelBackend> TravelDb<B> {
    /// All countries in the dataset.
    pub fn countries(&self) -> &[Country<B>] {
        &self.countries
    }

    /// Find a country by name, case- and accent-insensitive.
    pub fn find_country_by_name(&self, name: &str) -> Option<&Country<B>> {
        self.countries.iter().find(|c| c.is_named(name))
    }
}

impl<B: TravelBackend> Place<B> {
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn description(&self) -> &str {
        self.description.as_ref()
    }

    pub fn image_url(&self) -> &str {
        self.image_url.as_ref()
    }
}

impl<B: TravelBackend> Country<B> {
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn cities(&self) -> &[Place<B>] {
        &self.cities
    }
}

impl<B: TravelBackend> NameMatch for Place<B> {
    fn name_str(&self) -> &str {
        self.name.as_ref()
    }
}

impl<B: TravelBackend> NameMatch for Country<B> {
    fn name_str(&self) -> &str {
        self.name.as_ref()
    }
}
