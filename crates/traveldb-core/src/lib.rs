// crates/traveldb-core/src/lib.rs

pub mod api; // JSON views
pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod query;
pub mod raw;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DbStats;
pub use crate::error::{Result, TravelError};
pub use crate::model::{
    Country, DefaultBackend, DefaultTravelDb, Place, StandardBackend, TravelDb,
};
pub use crate::query::{Category, Keyword};
pub use crate::search::{Hit, Recommendation};
pub use crate::traits::{NameMatch, TravelBackend, TravelSearch};

/// Everything most callers need: the database type, its backend, and the
/// search trait that unlocks the query methods.
pub mod prelude {
    pub use crate::api::CardView;
    pub use crate::common::DbStats;
    pub use crate::error::{Result, TravelError};
    pub use crate::model::{
        Country, DefaultBackend, DefaultTravelDb, Place, StandardBackend, TravelDb,
    };
    pub use crate::query::{Category, Keyword};
    pub use crate::search::{Hit, Recommendation};
    pub use crate::traits::{NameMatch, TravelBackend, TravelSearch};
}
