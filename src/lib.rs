//! traveldb-rs — workspace facade crate.
//!
//! Re-exports `traveldb-core` so the demos under `demos/` can use a single
//! import path. For real integrations depend on `traveldb-core` (native) or
//! `traveldb-wasm` (browser) directly.

pub use traveldb_core::*;

/// Same prelude as `traveldb_core::prelude`.
pub mod prelude {
    pub use traveldb_core::prelude::*;
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn facade_prelude_reaches_the_core_api() {
        let db = TravelDb::<StandardBackend>::from_json_str("{}").unwrap();
        assert!(db.recommend("beaches").is_empty());
        assert_eq!(db.stats().countries, 0);
    }
}
