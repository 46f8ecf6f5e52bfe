use cinescout_models::{PreferenceFilter, YearRange};
use color_eyre::Result;

use crate::output::Output;
use crate::render;

pub async fn run_suggest(
    genres: Vec<u64>,
    min_rating: Option<f64>,
    year_from: Option<i32>,
    year_to: Option<i32>,
    language: Option<String>,
    sort_by: Option<String>,
    output: &Output,
) -> Result<()> {
    let config = super::load_config()?;
    let client = super::catalog_client(&config)?;

    // clap enforces that year_from and year_to come together
    let year_range = year_from
        .zip(year_to)
        .map(|(min, max)| YearRange { min, max });

    let filter = PreferenceFilter {
        favorite_genres: genres,
        min_rating,
        year_range,
        language,
        sort_by,
    };

    let movies = client.discover(&filter).await;
    render::movie_list(output, "Suggestions for you", &movies)
}

/// Prints the catalog's genre table so users can pick ids for `--genre`.
pub async fn run_genres(output: &Output) -> Result<()> {
    let config = super::load_config()?;
    let client = super::catalog_client(&config)?;

    let genres = client.genres().await;
    render::genre_list(output, &genres)
}
