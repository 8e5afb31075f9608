// crates/traveldb-core/src/error.rs

use thiserror::Error;

/// Errors produced while loading or parsing the travel dataset.
///
/// The library distinguishes failure causes for programmatic callers, but
/// every variant means the same thing to an end user: the dataset is not
/// available for this search. Front ends collapse them into a single
/// "data unavailable" state.
#[derive(Debug, Error)]
pub enum TravelError {
    /// The dataset file does not exist at the given path.
    #[error("{0}")]
    NotFound(String),

    /// Underlying I/O failure while reading the dataset.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset bytes are not valid JSON of the expected shape.
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport failure while fetching the dataset.
    #[cfg(feature = "fetch")]
    #[error("fetch error: {0}")]
    Fetch(String),
}

/// Convenient result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TravelError>;
