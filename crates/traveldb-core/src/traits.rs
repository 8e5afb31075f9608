// crates/traveldb-core/src/traits.rs

use crate::common::DbStats;
use crate::model::{Country, Place};
use crate::query::Category;
use crate::search::Recommendation;
use crate::text::fold_key;
use serde::{Deserialize, Serialize};

/// Backend abstraction: this controls how strings are stored.
///
/// This abstraction allows the crate to swap how textual data is stored
/// internally (for example to use more compact types) without changing the
/// public API of accessors that return `&str` views.
pub trait TravelBackend: Clone + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;

    fn str_from(s: &str) -> Self::Str;

    /// Convert backend string to owned Rust string (required for WASM views).
    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.as_ref().to_string()
    }
}

/// Name-based matching helpers for types that expose a canonical display name.
///
/// This trait centralizes Unicode-aware, accent-insensitive and
/// case-insensitive comparisons based on [`fold_key`]. Implementors provide a
/// `&str` view of their canonical name via [`NameMatch::name_str`], and get
/// convenient helpers:
/// - [`NameMatch::is_named`] — equality on folded form
/// - [`NameMatch::name_contains`] — substring match on folded form
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Accent-insensitive and case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Accent-insensitive + case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

/// A grouping of a Place with its parent Country, when it has one.
/// Beaches and temples are top-level and carry no country context.
pub type PlaceContext<'a, B> = (&'a Place<B>, Option<&'a Country<B>>);

/// An iterator that yields cities with their parent country.
/// Box<dyn ...> keeps the concrete flat-map type out of the signature.
pub type CitiesIter<'a, B> = Box<dyn Iterator<Item = (&'a Place<B>, &'a Country<B>)> + 'a>;

/// The Logic Trait.
/// Defines the search operations available on the dataset.
pub trait TravelSearch<B: TravelBackend> {
    fn stats(&self) -> DbStats;

    /// Returns a slice of all beach entries, in dataset order.
    fn beaches(&self) -> &[Place<B>];

    /// Returns a slice of all temple entries, in dataset order.
    fn temples(&self) -> &[Place<B>];

    /// Returns an iterator over every city together with its parent country,
    /// flattened from the nested country lists in dataset order.
    fn cities<'a>(&'a self) -> CitiesIter<'a, B>;

    /// Returns the full collection for one category. The countries category
    /// is flattened to its city list.
    fn category_entries<'a>(&'a self, category: Category) -> Vec<PlaceContext<'a, B>>;

    /// Every entry across all three categories whose name or description
    /// contains `substr` after folding with [`fold_key`]: matching is
    /// case-insensitive and accent-insensitive (`"Kyōto"` finds
    /// `"Kyoto, Japan"`). An empty or whitespace-only query matches nothing.
    fn find_by_substring<'a>(&'a self, substr: &str) -> Vec<PlaceContext<'a, B>>;

    /// The full matcher: canonical category keywords select a whole
    /// collection, anything else falls back to substring filtering.
    fn recommend<'a>(&'a self, raw_keyword: &str) -> Recommendation<'a, B>;
}
