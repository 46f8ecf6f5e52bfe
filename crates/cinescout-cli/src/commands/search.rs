use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::output::Output;
use crate::render;

pub async fn run_search(query: &str, output: &Output) -> Result<()> {
    // The client would refuse a blank query anyway; reject it here with a
    // proper message instead of printing an empty result table.
    if query.trim().is_empty() {
        return Err(eyre!("search query cannot be empty"));
    }

    let config = super::load_config()?;
    let client = super::catalog_client(&config)?;

    let movies = client.search(query).await;
    let heading = format!("Results for '{}'", query.trim());
    render::movie_list(output, &heading, &movies)
}
