//! Evaluation report domain: schema, loading, filtering, configuration.
//!
//! Reports are produced upstream by the evaluation pipeline; this crate only
//! consumes the JSON documents it writes. The modules here own everything
//! that happens before rendering: parsing and validating documents at the
//! load boundary, deriving display names, ordering, and live search.

/// Persisted application settings (reports directory).
pub mod config;
/// Live search over the loaded report list.
pub mod filter;
/// Startup-time enumeration and parsing of the report collection.
pub mod loader;
/// Typed schema for evaluation documents.
pub mod model;
