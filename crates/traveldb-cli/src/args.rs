use clap::{Parser, Subcommand};

/// CLI arguments for traveldb-cli
#[derive(Debug, Parser)]
#[command(
    name = "traveldb",
    version,
    about = "CLI for querying and inspecting the traveldb-core travel-recommendation database"
)]
pub struct CliArgs {
    /// Path to the input JSON file (default: travel_recommendation_api.json)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Download the dataset from a URL instead of reading a file
    #[cfg(feature = "fetch")]
    #[arg(short = 'u', long = "url", global = true)]
    pub url: Option<String>,

    /// Print results as JSON card views instead of plain text
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset contents
    Stats,

    /// List all beach destinations
    Beaches,

    /// List all temple destinations
    Temples,

    /// List all city destinations, grouped under their country
    Countries,

    /// Search destinations by keyword (category name or free text)
    Search {
        /// Category keyword (beach/temple/country) or free-text substring
        query: String,
    },
}
