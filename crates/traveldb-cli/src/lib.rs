//! traveldb-cli
//! ============
//!
//! Command-line interface for the `traveldb-core` travel-recommendation
//! database.
//!
//! This crate primarily provides a binary (`traveldb-cli`). We include a
//! small library target so that docs.rs renders a documentation page and
//! shows this overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! ```text
//! traveldb-cli --help
//! traveldb-cli stats
//! traveldb-cli search beach
//! traveldb-cli search sydney --json
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! [`traveldb-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
