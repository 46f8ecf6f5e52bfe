use serde::{Deserialize, Serialize};

/// A video attached to a movie (trailer, teaser, clip, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Video {
    pub id: String,
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Video {
    /// Only trailers and teasers are worth surfacing to a viewer.
    pub fn is_promotional(&self) -> bool {
        self.kind == "Trailer" || self.kind == "Teaser"
    }
}
