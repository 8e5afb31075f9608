// crates/traveldb-core/src/loader.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates JSON
//! parsing to serde. There is deliberately no cache layer: the dataset
//! lifecycle is "read fresh on every search", so every call re-reads the
//! source.

use crate::error::{Result, TravelError};
use crate::model::{build_travel_db, DefaultBackend, TravelDb};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

impl TravelDb<DefaultBackend> {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "travel_recommendation_api.json"
    }

    /// Load the dataset from the default location
    /// (`data/travel_recommendation_api.json` next to the crate).
    #[cfg(feature = "json")]
    pub fn load() -> Result<Self> {
        let dir = Self::default_data_dir();
        Self::load_from_path(dir.join(Self::default_dataset_filename()))
    }

    /// Load the dataset from a `.json` file, or a `.json.gz` file when the
    /// `compact` feature is enabled.
    #[cfg(feature = "json")]
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_stream(path)?;
        Self::load_from_reader(reader)
    }

    /// Parse the dataset out of any reader producing the raw JSON document.
    #[cfg(feature = "json")]
    pub fn load_from_reader(reader: impl Read) -> Result<Self> {
        let raw: crate::raw::TravelDataRaw = serde_json::from_reader(reader)?;
        Ok(build_travel_db(raw))
    }

    /// Parse the dataset from an in-memory JSON string. Used by embedded
    /// datasets and the WASM bindings.
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: crate::raw::TravelDataRaw = serde_json::from_str(json)?;
        Ok(build_travel_db(raw))
    }

    /// Download and parse the dataset from a URL (blocking).
    #[cfg(feature = "fetch")]
    pub fn load_from_url(url: &str) -> Result<Self> {
        let response = reqwest::blocking::get(url)
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| TravelError::Fetch(e.to_string()))?;
        let body = response
            .text()
            .map_err(|e| TravelError::Fetch(e.to_string()))?;
        Self::from_json_str(&body)
    }
}

// -----------------------------------------------------------------------
// INTERNAL TRANSPORT HELPER (DRY)
// -----------------------------------------------------------------------

/// Opens a file, buffers it, and optionally wraps it in a Gzip decoder.
/// Returns a generic Reader so the caller doesn't care about the compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        TravelError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    if path.extension().is_some_and(|ext| ext == "gz") {
        use flate2::read::GzDecoder;
        return Ok(Box::new(GzDecoder::new(reader)));
    }

    Ok(Box::new(reader))
}
