//! Free-text search example for traveldb-rs
//!
//! Shows how unmapped keywords fall back to substring matching over names
//! and descriptions, across all three categories.

use traveldb_rs::prelude::*;

const DATASET: &str = r#"{
  "beaches": [
    { "id": 1, "name": "Bora Bora, French Polynesia", "imageUrl": "images/bora.jpg",
      "description": "An island known for its stunning turquoise waters." }
  ],
  "temples": [
    { "id": 1, "name": "Taj Mahal, India", "imageUrl": "images/taj.jpg",
      "description": "An iconic symbol of love in Agra, India." }
  ],
  "countries": [
    { "id": 1, "name": "Australia", "cities": [
      { "id": 1, "name": "Sydney, Australia", "imageUrl": "images/sydney.jpg",
        "description": "A vibrant city known for the Sydney Opera House." }
    ]},
    { "id": 2, "name": "Japan", "cities": [
      { "id": 1, "name": "Kyoto, Japan", "imageUrl": "images/kyoto.jpg",
        "description": "An ancient city known for its classical Buddhist temples." }
    ]}
  ]
}"#;

fn main() -> Result<()> {
    let db = TravelDb::<StandardBackend>::from_json_str(DATASET)?;

    // Substring hits can come from names...
    for query in ["sydney", "INDIA", "known for"] {
        let rec = db.recommend(query);
        println!("\"{query}\" → {} hit(s)", rec.len());
        for hit in &rec.hits {
            println!("  [{}] {}", hit.category, hit.place.name());
        }
    }

    // ...and matching is accent-insensitive.
    let rec = db.recommend("Kyōto");
    println!("\"Kyōto\" → {} hit(s)", rec.len());

    // A keyword matching nothing is an empty result, not an error.
    let rec = db.recommend("atlantis");
    assert!(rec.is_empty());
    println!("\"atlantis\" → no recommendations (try beaches, temples, or countries)");

    Ok(())
}
