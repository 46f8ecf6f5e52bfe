//! Translation of typed query intents into discover query parameters.

use cinescout_models::PreferenceFilter;

pub(crate) const DEFAULT_SORT: &str = "vote_average.desc";
pub(crate) const MIN_VOTE_COUNT: u32 = 100;

/// Fixed discovery filter for a regional movie shelf.
#[derive(Debug, Clone)]
pub struct RegionalFilter {
    pub region: String,
    /// Original-language codes, sent pipe-joined.
    pub languages: Vec<String>,
    pub min_vote_count: u32,
}

impl Default for RegionalFilter {
    fn default() -> Self {
        Self {
            region: "IN".to_string(),
            languages: ["hi", "te", "ta", "ml", "kn"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            min_vote_count: MIN_VOTE_COUNT,
        }
    }
}

pub(crate) fn regional_params(filter: &RegionalFilter) -> Vec<(String, String)> {
    vec![
        ("region".into(), filter.region.clone()),
        ("with_original_language".into(), filter.languages.join("|")),
        ("sort_by".into(), "popularity.desc".into()),
        ("vote_count.gte".into(), filter.min_vote_count.to_string()),
    ]
}

/// Maps a preference filter onto discover parameters. An empty genre list
/// omits `with_genres` entirely rather than sending an empty value.
pub(crate) fn discover_params(filter: &PreferenceFilter) -> Vec<(String, String)> {
    let sort = filter.sort_by.as_deref().unwrap_or(DEFAULT_SORT);
    let mut params = vec![
        ("sort_by".into(), sort.to_string()),
        ("vote_count.gte".into(), MIN_VOTE_COUNT.to_string()),
    ];

    if let Some(min_rating) = filter.min_rating {
        params.push(("vote_average.gte".into(), min_rating.to_string()));
    }

    if !filter.favorite_genres.is_empty() {
        let genres = filter
            .favorite_genres
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        params.push(("with_genres".into(), genres));
    }

    if let Some(range) = filter.year_range {
        params.push((
            "primary_release_date.gte".into(),
            format!("{}-01-01", range.min),
        ));
        params.push((
            "primary_release_date.lte".into(),
            format!("{}-12-31", range.max),
        ));
    }

    if let Some(ref language) = filter.language {
        params.push(("with_original_language".into(), language.clone()));
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinescout_models::YearRange;

    fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn discover_maps_rating_and_genres() {
        let filter = PreferenceFilter {
            favorite_genres: vec![28, 12],
            min_rating: Some(8.0),
            ..Default::default()
        };

        let params = discover_params(&filter);
        assert_eq!(param(&params, "vote_average.gte"), Some("8"));
        assert_eq!(param(&params, "with_genres"), Some("28,12"));
        assert_eq!(param(&params, "sort_by"), Some("vote_average.desc"));
        assert_eq!(param(&params, "vote_count.gte"), Some("100"));
    }

    #[test]
    fn discover_omits_with_genres_when_no_genres_chosen() {
        let filter = PreferenceFilter {
            min_rating: Some(7.5),
            ..Default::default()
        };

        let params = discover_params(&filter);
        assert_eq!(param(&params, "with_genres"), None);
    }

    #[test]
    fn discover_expands_year_range_to_full_dates() {
        let filter = PreferenceFilter {
            year_range: Some(YearRange {
                min: 1990,
                max: 1999,
            }),
            ..Default::default()
        };

        let params = discover_params(&filter);
        assert_eq!(param(&params, "primary_release_date.gte"), Some("1990-01-01"));
        assert_eq!(param(&params, "primary_release_date.lte"), Some("1999-12-31"));
    }

    #[test]
    fn discover_honors_sort_override_and_language() {
        let filter = PreferenceFilter {
            language: Some("ko".to_string()),
            sort_by: Some("popularity.desc".to_string()),
            ..Default::default()
        };

        let params = discover_params(&filter);
        assert_eq!(param(&params, "sort_by"), Some("popularity.desc"));
        assert_eq!(param(&params, "with_original_language"), Some("ko"));
    }

    #[test]
    fn regional_defaults_match_the_home_shelf() {
        let params = regional_params(&RegionalFilter::default());
        assert_eq!(param(&params, "region"), Some("IN"));
        assert_eq!(param(&params, "with_original_language"), Some("hi|te|ta|ml|kn"));
        assert_eq!(param(&params, "sort_by"), Some("popularity.desc"));
        assert_eq!(param(&params, "vote_count.gte"), Some("100"));
    }
}
