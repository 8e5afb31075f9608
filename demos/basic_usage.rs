//! Basic usage example for traveldb-rs
//!
//! This example demonstrates how to:
//! - Parse a travel-recommendation dataset
//! - List the three categories
//! - Run category keyword searches

use traveldb_rs::prelude::*;

const DATASET: &str = r#"{
  "beaches": [
    { "id": 1, "name": "Bora Bora, French Polynesia", "imageUrl": "images/bora.jpg",
      "description": "An island known for its stunning turquoise waters." },
    { "id": 2, "name": "Copacabana Beach, Brazil", "imageUrl": "images/copacabana.jpg",
      "description": "A famous beach in Rio de Janeiro with a lively atmosphere." }
  ],
  "temples": [
    { "id": 1, "name": "Angkor Wat, Cambodia", "imageUrl": "images/angkor.jpg",
      "description": "The largest religious monument in the world." }
  ],
  "countries": [
    { "id": 1, "name": "Japan", "cities": [
      { "id": 1, "name": "Tokyo, Japan", "imageUrl": "images/tokyo.jpg",
        "description": "A bustling metropolis blending tradition and modernity." },
      { "id": 2, "name": "Kyoto, Japan", "imageUrl": "images/kyoto.jpg",
        "description": "An ancient city known for its classical Buddhist temples." }
    ]}
  ]
}"#;

fn main() -> Result<()> {
    println!("=== TravelDB-RS Basic Usage Example ===\n");

    // Parse the dataset
    println!("Parsing travel dataset...");
    let db = TravelDb::<StandardBackend>::from_json_str(DATASET)?;
    println!("✓ Dataset parsed successfully\n");

    // Example 1: Statistics
    println!("--- Example 1: Dataset statistics ---");
    let stats = db.stats();
    println!("Beaches: {}", stats.beaches);
    println!("Temples: {}", stats.temples);
    println!("Countries: {}", stats.countries);
    println!("Cities: {}", stats.cities);
    println!();

    // Example 2: List a category via its keyword
    println!("--- Example 2: Category keyword search ---");
    let rec = db.recommend("beach");
    println!("Recommendations for \"{}\": {}", rec.label, rec.len());
    for hit in &rec.hits {
        println!("- {}", hit.place.name());
    }
    println!();

    // Example 3: Countries flatten to their cities
    println!("--- Example 3: Countries keyword flattens cities ---");
    let rec = db.recommend("countries");
    for hit in &rec.hits {
        let country = hit.country.map(Country::name).unwrap_or("-");
        println!("- {} (in {})", hit.place.name(), country);
    }
    println!();

    // Example 4: Find a country by name
    println!("--- Example 4: Find country by name ---");
    if let Some(country) = db.find_country_by_name("japan") {
        println!("Found: {} with {} cities", country.name(), country.cities().len());
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
