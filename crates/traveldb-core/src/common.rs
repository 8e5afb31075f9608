// crates/traveldb-core/src/common.rs

use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the dataset.
///
/// Returned by [`crate::TravelSearch::stats`], these counts reflect the
/// materialized in-memory dataset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DbStats {
    pub beaches: usize,
    pub temples: usize,
    pub countries: usize,
    pub cities: usize,
}
