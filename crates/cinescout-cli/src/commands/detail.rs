use cinescout_models::{image_url, ImageSize};
use color_eyre::Result;
use owo_colors::OwoColorize;

use crate::output::{Output, OutputFormat};
use crate::render;

/// Full movie page. The detail lookup propagates catalog errors (there is
/// no safe empty substitute for the one movie the user asked for); the
/// surrounding lists degrade to empty on their own.
pub async fn run_movie(id: u64, output: &Output) -> Result<()> {
    let config = super::load_config()?;
    let client = super::catalog_client(&config)?;

    let movie = client.movie(id).await?;

    // Independent fetches, issued concurrently.
    let (credits, videos, providers, similar, recommendations) = futures::join!(
        client.credits(id),
        client.videos(id),
        client.providers(id),
        client.similar(id),
        client.recommendations(id),
    );

    if output.format() != OutputFormat::Human {
        output.json(&serde_json::json!({
            "movie": movie,
            "cast": credits,
            "videos": videos,
            "providers": providers,
            "similar": similar,
            "recommendations": recommendations,
        }));
        return Ok(());
    }

    render::print_movie_header(output, &movie);
    output.info("");
    render::print_providers(output, &providers);
    render::print_videos(output, &videos);

    if !credits.is_empty() {
        output.info("Cast:".bold().to_string());
        output.info(render::cast_table(&credits).to_string());
    }
    if !similar.is_empty() {
        output.info("Similar movies:".bold().to_string());
        output.info(render::movie_table(&similar).to_string());
    }
    if !recommendations.is_empty() {
        output.info("You might also like:".bold().to_string());
        output.info(render::movie_table(&recommendations).to_string());
    }

    Ok(())
}

pub async fn run_person(id: u64, output: &Output) -> Result<()> {
    let config = super::load_config()?;
    let client = super::catalog_client(&config)?;

    let (person, credits) = futures::join!(client.person(id), client.person_credits(id));
    let person = person?;

    if output.format() != OutputFormat::Human {
        output.json(&serde_json::json!({
            "person": person,
            "credits": credits,
        }));
        return Ok(());
    }

    output.info(person.name.bold().to_string());
    if let Some(department) = &person.known_for_department {
        output.info(format!("Known for: {department}"));
    }
    if let Some(birthday) = &person.birthday {
        let place = person
            .place_of_birth
            .as_deref()
            .map(|p| format!(", {p}"))
            .unwrap_or_default();
        output.info(format!("Born: {birthday}{place}"));
    }
    if !person.biography.is_empty() {
        output.info("");
        output.info(&person.biography);
    }
    output.info("");
    output.info(format!(
        "Photo: {}",
        image_url(person.profile_path.as_deref(), ImageSize::W500)
    ));

    if !credits.is_empty() {
        output.info("Best known for:".bold().to_string());
        let mut table = comfy_table::Table::new();
        table.load_preset(comfy_table::presets::UTF8_FULL_CONDENSED);
        table.set_header(vec!["ID", "Title", "Character", "Rating"]);
        for credit in &credits {
            table.add_row(vec![
                credit.id.to_string(),
                credit.title.clone(),
                credit.character.clone().unwrap_or_default(),
                format!("{:.1}", credit.vote_average),
            ]);
        }
        output.info(table.to_string());
    }

    Ok(())
}
