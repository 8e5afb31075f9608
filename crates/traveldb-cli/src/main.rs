//! traveldb-cli — Command-line interface for traveldb-core
//!
//! This binary provides a simple way to inspect a travel-recommendation
//! dataset from your terminal. It supports printing basic statistics,
//! listing the three categories, and running the same keyword search the
//! browser widget uses.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ traveldb-cli stats
//!
//! - List a whole category
//!   $ traveldb-cli beaches
//!   $ traveldb-cli countries
//!
//! - Search by keyword (category names normalize, anything else is substring)
//!   $ traveldb-cli search temple
//!   $ traveldb-cli search sydney
//!
//! Data source
//! -----------
//!
//! By default, the CLI loads `travel_recommendation_api.json` from the
//! `traveldb-core` data directory. Use `--input <path>` to point to a custom
//! dataset file (`.json`, or `.json.gz` with the `compact` feature), or
//! `--url <url>` with the `fetch` feature to download it.

mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use traveldb_core::prelude::*;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let db = load_dataset(&args)?;

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Dataset statistics:");
            println!("  Beaches: {}", stats.beaches);
            println!("  Temples: {}", stats.temples);
            println!("  Countries: {}", stats.countries);
            println!("  Cities: {}", stats.cities);
        }

        Commands::Beaches => print_places(db.beaches()),

        Commands::Temples => print_places(db.temples()),

        Commands::Countries => {
            for country in db.countries() {
                println!("{}:", country.name());
                for city in country.cities() {
                    println!("  - {}", city.name());
                }
            }
        }

        Commands::Search { query } => {
            let rec = db.recommend(&query);
            if args.json {
                let cards: Vec<CardView> = rec.hits.iter().map(CardView::from_hit).collect();
                println!("{}", serde_json::to_string_pretty(&cards)?);
            } else if rec.is_empty() {
                eprintln!("No recommendations found for: {query}");
                eprintln!("Try searching for: beaches, temples, or countries");
            } else {
                println!("Recommendations for \"{}\":", rec.label);
                for hit in &rec.hits {
                    match hit.country {
                        Some(country) => {
                            println!("- {} — {}", hit.place.name(), country.name())
                        }
                        None => println!("- {}", hit.place.name()),
                    }
                }
            }
        }
    }

    Ok(())
}

fn load_dataset(args: &CliArgs) -> anyhow::Result<DefaultTravelDb> {
    #[cfg(feature = "fetch")]
    if let Some(url) = &args.url {
        return Ok(TravelDb::load_from_url(url)?);
    }

    let input_path = args.input.clone().unwrap_or_else(|| {
        let dir = TravelDb::<StandardBackend>::default_data_dir();
        let filename = TravelDb::<StandardBackend>::default_dataset_filename();
        dir.join(filename).to_string_lossy().to_string()
    });

    Ok(TravelDb::load_from_path(&input_path)?)
}

fn print_places<B: TravelBackend>(places: &[Place<B>]) {
    for place in places {
        println!("{} — {}", place.name(), place.description());
    }
}
