// crates/traveldb-core/src/search.rs

use crate::common::DbStats;
use crate::model::{Country, Place, TravelDb};
use crate::query::{Category, Keyword};
use crate::text::fold_key;
use crate::traits::{CitiesIter, PlaceContext, TravelBackend, TravelSearch};

/// A single search hit: the matched entry, the category it came from, and
/// the parent country for city entries.
#[derive(Debug)]
pub struct Hit<'a, B: TravelBackend> {
    pub category: Category,
    pub place: &'a Place<B>,
    pub country: Option<&'a Country<B>>,
}

/// An ordered result set together with the label the renderer displays.
///
/// For category searches the label is the capitalized category name; for
/// free-text searches it is the keyword as typed (trimmed). Hits keep
/// dataset order.
#[derive(Debug)]
pub struct Recommendation<'a, B: TravelBackend> {
    pub label: String,
    pub hits: Vec<Hit<'a, B>>,
}

impl<'a, B: TravelBackend> Recommendation<'a, B> {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }
}

impl<B: TravelBackend> TravelSearch<B> for TravelDb<B> {
    fn stats(&self) -> DbStats {
        DbStats {
            beaches: self.beaches.len(),
            temples: self.temples.len(),
            countries: self.countries.len(),
            cities: self.countries.iter().map(|c| c.cities.len()).sum(),
        }
    }

    fn beaches(&self) -> &[Place<B>] {
        &self.beaches
    }

    fn temples(&self) -> &[Place<B>] {
        &self.temples
    }

    fn cities<'a>(&'a self) -> CitiesIter<'a, B> {
        Box::new(
            self.countries
                .iter()
                .flat_map(|c| c.cities.iter().map(move |city| (city, c))),
        )
    }

    fn category_entries<'a>(&'a self, category: Category) -> Vec<PlaceContext<'a, B>> {
        match category {
            Category::Beaches => self.beaches.iter().map(|p| (p, None)).collect(),
            Category::Temples => self.temples.iter().map(|p| (p, None)).collect(),
            // Countries have no card of their own; flatten to their cities.
            Category::Countries => self.cities().map(|(city, c)| (city, Some(c))).collect(),
        }
    }

    fn find_by_substring<'a>(&'a self, substr: &str) -> Vec<PlaceContext<'a, B>> {
        self.scan_substring(substr)
            .into_iter()
            .map(|hit| (hit.place, hit.country))
            .collect()
    }

    fn recommend<'a>(&'a self, raw_keyword: &str) -> Recommendation<'a, B> {
        match Keyword::normalize(raw_keyword) {
            Keyword::Category(category) => {
                let hits = self
                    .category_entries(category)
                    .into_iter()
                    .map(|(place, country)| Hit {
                        category,
                        place,
                        country,
                    })
                    .collect();
                Recommendation {
                    label: category.label().to_string(),
                    hits,
                }
            }
            Keyword::Free(keyword) => Recommendation {
                hits: self.scan_substring(&keyword),
                label: keyword,
            },
        }
    }
}

impl<B: TravelBackend> TravelDb<B> {
    /// Linear scan of all three collections, matching folded name or
    /// description. Dataset order: beaches, temples, then cities per country.
    fn scan_substring<'a>(&'a self, substr: &str) -> Vec<Hit<'a, B>> {
        let q = fold_key(substr.trim());
        let mut out = Vec::new();
        if q.is_empty() {
            return out;
        }

        let matches = |p: &Place<B>| {
            fold_key(p.name.as_ref()).contains(&q) || fold_key(p.description.as_ref()).contains(&q)
        };

        for beach in &self.beaches {
            if matches(beach) {
                out.push(Hit {
                    category: Category::Beaches,
                    place: beach,
                    country: None,
                });
            }
        }
        for temple in &self.temples {
            if matches(temple) {
                out.push(Hit {
                    category: Category::Temples,
                    place: temple,
                    country: None,
                });
            }
        }
        for country in &self.countries {
            for city in &country.cities {
                if matches(city) {
                    out.push(Hit {
                        category: Category::Countries,
                        place: city,
                        country: Some(country),
                    });
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DefaultBackend, DefaultTravelDb};

    fn place(name: &str, description: &str) -> Place<DefaultBackend> {
        Place {
            name: name.to_string(),
            description: description.to_string(),
            image_url: format!("{}.jpg", name.to_lowercase().replace(' ', "_")),
        }
    }

    fn sample_db() -> DefaultTravelDb {
        TravelDb {
            beaches: vec![
                place("Bora Bora, French Polynesia", "An island with stunning lagoons"),
                place("Copacabana Beach, Brazil", "A famous beach in Rio de Janeiro"),
            ],
            temples: vec![
                place("Angkor Wat, Cambodia", "A temple complex and historic site"),
                place("Taj Mahal, India", "An iconic mausoleum in Agra"),
            ],
            countries: vec![
                Country {
                    name: "Australia".to_string(),
                    cities: vec![
                        place("Sydney, Australia", "A city known for its opera house"),
                        place("Melbourne, Australia", "A cultural hub with laneways"),
                    ],
                },
                Country {
                    name: "Japan".to_string(),
                    cities: vec![place("Tokyo, Japan", "A bustling city blending tradition")],
                },
            ],
        }
    }

    #[test]
    fn stats_count_all_collections() {
        let stats = sample_db().stats();
        assert_eq!(stats.beaches, 2);
        assert_eq!(stats.temples, 2);
        assert_eq!(stats.countries, 2);
        assert_eq!(stats.cities, 3);
    }

    #[test]
    fn category_keyword_returns_full_collection_unfiltered() {
        let db = sample_db();
        let rec = db.recommend("temples");
        assert_eq!(rec.label, "Temples");
        assert_eq!(rec.len(), 2);
        assert_eq!(rec.hits[0].place.name(), "Angkor Wat, Cambodia");
        assert_eq!(rec.hits[1].place.name(), "Taj Mahal, India");
    }

    #[test]
    fn keyword_variants_all_select_beaches() {
        let db = sample_db();
        for raw in ["Beach ", "beaches", "BEACH"] {
            let rec = db.recommend(raw);
            assert_eq!(rec.label, "Beaches", "raw = {raw:?}");
            assert_eq!(rec.len(), 2);
        }
    }

    #[test]
    fn countries_keyword_flattens_cities_in_dataset_order() {
        let db = sample_db();
        let rec = db.recommend("countries");
        assert_eq!(rec.label, "Countries");
        let names: Vec<_> = rec.hits.iter().map(|h| h.place.name()).collect();
        assert_eq!(
            names,
            ["Sydney, Australia", "Melbourne, Australia", "Tokyo, Japan"]
        );
        assert_eq!(rec.hits[0].country.unwrap().name(), "Australia");
    }

    #[test]
    fn free_text_matches_name_and_description_across_categories() {
        let db = sample_db();
        // "australia" appears in two city names; "beach" in names/descriptions
        let rec = db.recommend("AUSTRALIA");
        assert_eq!(rec.label, "AUSTRALIA");
        assert_eq!(rec.len(), 2);

        let hits = db.find_by_substring("opera");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0.name(), "Sydney, Australia");
    }

    #[test]
    fn free_text_is_accent_insensitive() {
        let db = sample_db();
        let hits = db.find_by_substring("Bóra");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0.name(), "Bora Bora, French Polynesia");
    }

    #[test]
    fn unknown_keyword_yields_empty_result_not_error() {
        let db = sample_db();
        let rec = db.recommend("zanzibar");
        assert_eq!(rec.label, "zanzibar");
        assert!(rec.is_empty());
    }

    #[test]
    fn empty_query_matches_nothing() {
        let db = sample_db();
        assert!(db.find_by_substring("").is_empty());
        assert!(db.find_by_substring("   ").is_empty());
    }

    #[test]
    fn free_text_hits_are_tagged_with_their_category() {
        let db = sample_db();
        let rec = db.recommend("Taj");
        assert_eq!(rec.len(), 1);
        assert_eq!(rec.hits[0].category, Category::Temples);
        assert!(rec.hits[0].country.is_none());

        let rec = db.recommend("Tokyo");
        assert_eq!(rec.hits[0].category, Category::Countries);
        assert_eq!(rec.hits[0].country.unwrap().name(), "Japan");
    }
}
