use cinescout_models::{image_url, CastMember, Genre, ImageSize, MovieRecord, Video, WatchProvider};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::Table;
use owo_colors::OwoColorize;

use crate::output::Output;

/// Renders a movie list as a table in human mode, raw JSON otherwise.
pub fn movie_list(output: &Output, heading: &str, movies: &[MovieRecord]) -> color_eyre::Result<()> {
    if !output.is_human() {
        output.json(&serde_json::to_value(movies)?);
        return Ok(());
    }

    if movies.is_empty() {
        output.warn("No results (the catalog may be unreachable)");
        return Ok(());
    }

    output.info(heading.bold().to_string());
    output.info(movie_table(movies).to_string());
    Ok(())
}

pub fn movie_table(movies: &[MovieRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["ID", "Title", "Year", "Rating"]);
    for movie in movies {
        table.add_row(vec![
            movie.id.to_string(),
            movie.title.clone(),
            movie
                .release_year()
                .map(|y| y.to_string())
                .unwrap_or_else(|| "-".to_string()),
            format!("{:.1}", movie.vote_average),
        ]);
    }
    table
}

/// Renders the genre id/name table in human mode, raw JSON otherwise.
pub fn genre_list(output: &Output, genres: &[Genre]) -> color_eyre::Result<()> {
    if !output.is_human() {
        output.json(&serde_json::to_value(genres)?);
        return Ok(());
    }

    if genres.is_empty() {
        output.warn("No genres (the catalog may be unreachable)");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["ID", "Genre"]);
    for genre in genres {
        table.add_row(vec![genre.id.to_string(), genre.name.clone()]);
    }
    output.info("Genres".bold().to_string());
    output.info(table.to_string());
    Ok(())
}

pub fn cast_table(cast: &[CastMember]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Name", "Character"]);
    for member in cast {
        table.add_row(vec![
            member.name.clone(),
            member.character.clone().unwrap_or_default(),
        ]);
    }
    table
}

pub fn print_movie_header(output: &Output, movie: &MovieRecord) {
    let year = movie
        .release_year()
        .map(|y| format!(" ({y})"))
        .unwrap_or_default();
    output.info(format!("{}{}", movie.title.bold(), year));
    output.info(format!("{} {:.1}/10", "★".yellow(), movie.vote_average));

    if let Some(runtime) = movie.runtime {
        output.info(format!("Runtime: {runtime} min"));
    }
    if let Some(genres) = &movie.genres {
        let names: Vec<&str> = genres.iter().map(|g| g.name.as_str()).collect();
        output.info(format!("Genres: {}", names.join(", ")));
    }
    if !movie.overview.is_empty() {
        output.info("");
        output.info(&movie.overview);
    }
    output.info("");
    output.info(format!(
        "Poster: {}",
        image_url(movie.poster_path.as_deref(), ImageSize::W500)
    ));
}

pub fn print_videos(output: &Output, videos: &[Video]) {
    if videos.is_empty() {
        return;
    }
    output.info("Trailers & teasers:".bold().to_string());
    for video in videos {
        output.info(format!(
            "  {} - https://www.youtube.com/watch?v={}",
            video.name, video.key
        ));
    }
}

pub fn print_providers(output: &Output, providers: &[WatchProvider]) {
    if providers.is_empty() {
        output.info("Not streaming on any configured region's services.");
        return;
    }
    let names: Vec<&str> = providers.iter().map(|p| p.provider_name.as_str()).collect();
    output.info(format!("{} {}", "Streaming on:".bold(), names.join(", ")));
}
