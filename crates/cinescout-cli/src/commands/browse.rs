use color_eyre::Result;

use crate::output::Output;
use crate::render;

pub async fn run_trending(output: &Output) -> Result<()> {
    let config = super::load_config()?;
    let client = super::catalog_client(&config)?;

    let movies = client.trending().await;
    render::movie_list(output, "Trending this week", &movies)
}

pub async fn run_regional(output: &Output) -> Result<()> {
    let config = super::load_config()?;
    let client = super::catalog_client(&config)?;
    let filter = super::regional_filter(&config);

    let movies = client.regional(&filter).await;
    let heading = format!("Popular in {}", config.regional.region);
    render::movie_list(output, &heading, &movies)
}
