use serde::{Deserialize, Serialize};

/// Ephemeral description of a discovery query: which genres the user likes,
/// how picky they are about ratings, and an optional release window. Pure
/// input to the catalog's discover operation, never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PreferenceFilter {
    pub favorite_genres: Vec<u64>,
    pub min_rating: Option<f64>,
    pub year_range: Option<YearRange>,
    pub language: Option<String>,
    /// Overrides the default rating-descending ordering when set.
    pub sort_by: Option<String>,
}

/// Inclusive release-year window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}
