//! End-to-end checks against a dataset in the exact wire shape of
//! `travel_recommendation_api.json`.

use traveldb_core::prelude::*;

const FIXTURE: &str = r#"{
  "countries": [
    {
      "id": 1,
      "name": "Australia",
      "cities": [
        {
          "id": 1,
          "name": "Sydney, Australia",
          "imageUrl": "images/sydney.jpg",
          "description": "A vibrant city known for its iconic landmarks like the Sydney Opera House and Sydney Harbour Bridge."
        },
        {
          "id": 2,
          "name": "Melbourne, Australia",
          "imageUrl": "images/melbourne.jpg",
          "description": "A cultural hub famous for its art, food, and diverse neighborhoods."
        }
      ]
    },
    {
      "id": 2,
      "name": "Japan",
      "cities": [
        {
          "id": 1,
          "name": "Tokyo, Japan",
          "imageUrl": "images/tokyo.jpg",
          "description": "A bustling metropolis blending tradition and modernity, famous for its cherry blossoms and rich culture."
        },
        {
          "id": 2,
          "name": "Kyoto, Japan",
          "imageUrl": "images/kyoto.jpg",
          "description": "An ancient city known for its classical Buddhist temples, gardens, and traditional tea houses."
        }
      ]
    }
  ],
  "temples": [
    {
      "id": 1,
      "name": "Angkor Wat, Cambodia",
      "imageUrl": "images/angkor.jpg",
      "description": "A UNESCO World Heritage site and the largest religious monument in the world."
    },
    {
      "id": 2,
      "name": "Taj Mahal, India",
      "imageUrl": "images/taj.jpg",
      "description": "An iconic symbol of love and a masterpiece of Mughal architecture."
    }
  ],
  "beaches": [
    {
      "id": 1,
      "name": "Bora Bora, French Polynesia",
      "imageUrl": "images/bora.jpg",
      "description": "An island known for its stunning turquoise waters and luxurious overwater bungalows."
    },
    {
      "id": 2,
      "name": "Copacabana Beach, Brazil",
      "imageUrl": "images/copacabana.jpg",
      "description": "A famous beach in Rio de Janeiro, Brazil, with a lively atmosphere."
    }
  ]
}"#;

fn load_fixture() -> DefaultTravelDb {
    TravelDb::from_json_str(FIXTURE).expect("fixture parses")
}

#[test]
fn fixture_parses_into_expected_counts() {
    let db = load_fixture();
    let stats = db.stats();
    assert_eq!(stats.beaches, 2);
    assert_eq!(stats.temples, 2);
    assert_eq!(stats.countries, 2);
    assert_eq!(stats.cities, 4);
}

#[test]
fn temples_keyword_returns_exactly_the_temple_list() {
    let db = load_fixture();
    let rec = db.recommend("temples");
    assert_eq!(rec.label, "Temples");
    let names: Vec<_> = rec.hits.iter().map(|h| h.place.name()).collect();
    assert_eq!(names, ["Angkor Wat, Cambodia", "Taj Mahal, India"]);
}

#[test]
fn countries_keyword_returns_flattened_city_list() {
    let db = load_fixture();
    let rec = db.recommend("Country");
    assert_eq!(rec.label, "Countries");
    let names: Vec<_> = rec.hits.iter().map(|h| h.place.name()).collect();
    assert_eq!(
        names,
        [
            "Sydney, Australia",
            "Melbourne, Australia",
            "Tokyo, Japan",
            "Kyoto, Japan"
        ]
    );
    assert!(rec.hits.iter().all(|h| h.country.is_some()));
}

#[test]
fn free_text_search_spans_all_categories() {
    let db = load_fixture();
    // "famous" appears in a city description and a beach description
    let rec = db.recommend("famous");
    let names: Vec<_> = rec.hits.iter().map(|h| h.place.name()).collect();
    assert_eq!(
        names,
        [
            "Copacabana Beach, Brazil",
            "Melbourne, Australia",
            "Tokyo, Japan"
        ]
    );
}

#[test]
fn free_text_search_is_case_insensitive() {
    let db = load_fixture();
    let upper = db.recommend("KYOTO");
    let lower = db.recommend("kyoto");
    assert_eq!(upper.len(), 1);
    assert_eq!(upper.len(), lower.len());
    assert_eq!(upper.hits[0].place.name(), "Kyoto, Japan");
    assert_eq!(upper.label, "KYOTO");
}

#[test]
fn no_match_produces_empty_recommendation() {
    let db = load_fixture();
    let rec = db.recommend("atlantis");
    assert!(rec.is_empty());
    assert_eq!(rec.label, "atlantis");
}

#[test]
fn card_views_serialize_for_the_renderer() {
    let db = load_fixture();
    let rec = db.recommend("beaches");
    let cards: Vec<CardView> = rec.hits.iter().map(CardView::from_hit).collect();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].category, "beaches");
    assert_eq!(cards[0].name, "Bora Bora, French Polynesia");
    assert_eq!(cards[0].image_url, "images/bora.jpg");
    assert!(cards[0].country.is_none());

    let rec = db.recommend("Sydney");
    let card = CardView::from_hit(&rec.hits[0]);
    assert_eq!(card.country.as_deref(), Some("Australia"));
}
