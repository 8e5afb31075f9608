//! Error handling example for traveldb-rs
//!
//! This example demonstrates proper error handling and edge cases.

use traveldb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== TravelDB-RS Error Handling Example ===\n");

    // Example 1: Handling a missing dataset file
    println!("--- Example 1: Loading a dataset that does not exist ---");
    match TravelDb::<StandardBackend>::load_from_path("no_such_dataset.json") {
        Ok(db) => println!("✓ Dataset loaded: {} beaches", db.beaches().len()),
        Err(TravelError::NotFound(msg)) => println!("✗ Not found (expected): {msg}"),
        Err(e) => println!("✗ Failed to load dataset: {e}"),
    }
    println!();

    // Example 2: Handling malformed JSON
    println!("--- Example 2: Malformed dataset ---");
    match TravelDb::<StandardBackend>::from_json_str("{ \"beaches\": 42 }") {
        Ok(_) => println!("✓ Parsed (unexpected)"),
        Err(e) => println!("✗ Parse failed (expected): {e}"),
    }
    println!();

    // Example 3: Queries never fail, they just come back empty
    println!("--- Example 3: Empty results are not errors ---");
    let db = TravelDb::<StandardBackend>::from_json_str("{}")?;
    for query in ["beaches", "anything else", ""] {
        let rec = db.recommend(query);
        println!("  {:?} → {} hit(s)", query, rec.len());
    }

    Ok(())
}
