//! Wire envelopes the catalog wraps its payloads in.

use std::collections::HashMap;

use cinescout_models::{CastMember, Genre, PersonCredit, Video, WatchProvider};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct Paged<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreditsResponse {
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PersonCreditsResponse {
    #[serde(default)]
    pub cast: Vec<PersonCredit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideosResponse {
    #[serde(default)]
    pub results: Vec<Video>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenreList {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// `/movie/{id}/watch/providers` keys offerings by region code.
#[derive(Debug, Deserialize)]
pub(crate) struct ProvidersResponse {
    #[serde(default)]
    pub results: HashMap<String, RegionOfferings>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegionOfferings {
    /// Subscription-included tier. Rent/buy tiers are ignored.
    #[serde(default)]
    pub flatrate: Option<Vec<WatchProvider>>,
}
