//! Catalog client for the TMDB v3 HTTP contract.
//!
//! Turns typed query intents (trending, search, discover-by-filter,
//! detail-by-id) into HTTP calls and normalizes the responses. List fetches
//! degrade to an empty result on failure; single-entity lookups surface a
//! typed [`CatalogError`].

mod client;
mod error;
mod params;
mod types;

pub use client::{CatalogClient, CatalogClientBuilder};
pub use error::CatalogError;
pub use params::RegionalFilter;
