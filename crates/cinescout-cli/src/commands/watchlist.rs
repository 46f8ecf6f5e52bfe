use color_eyre::Result;

use crate::output::Output;
use crate::render;

pub fn run_list(output: &Output) -> Result<()> {
    let store = super::open_watchlist()?;
    let movies = store.load();

    if output.is_human() && movies.is_empty() {
        output.info("Your watchlist is empty. Save movies with `cinescout watchlist add <ID>`.");
        return Ok(());
    }

    let heading = format!("Watchlist ({} saved)", movies.len());
    render::movie_list(output, &heading, &movies)
}

/// Resolves the movie against the catalog first so the stored record carries
/// full detail fields; the lookup error propagates when the id is unknown.
/// An already-saved id is answered locally without touching the network.
pub async fn run_add(id: u64, output: &Output) -> Result<()> {
    let store = super::open_watchlist()?;
    if store.contains(id) {
        output.warn(format!("Movie {id} is already on your watchlist"));
        return Ok(());
    }

    let config = super::load_config()?;
    let client = super::catalog_client(&config)?;

    let movie = client.movie(id).await?;
    let title = movie.title.clone();

    if store.add(movie)? {
        output.success(format!("Added '{}' to your watchlist", title));
    } else {
        output.warn(format!("'{}' is already on your watchlist", title));
    }
    Ok(())
}

pub fn run_remove(id: u64, output: &Output) -> Result<()> {
    let store = super::open_watchlist()?;

    if store.remove(id)? {
        output.success(format!("Removed movie {id} from your watchlist"));
    } else {
        output.warn(format!("Movie {id} was not on your watchlist"));
    }
    Ok(())
}
