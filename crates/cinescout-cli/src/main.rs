use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use commands::{browse, config, detail, search, suggest, watchlist};

mod commands;
mod logging;
mod output;
mod render;

#[derive(Parser)]
#[command(name = "cinescout")]
#[command(about = "CineScout - discover movies and keep a local watchlist")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Write logs to this file (rotated daily) instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show this week's trending movies
    #[command(long_about = "Show this week's trending movies. When the trending endpoint is unavailable the all-time popular list is shown instead.")]
    Trending,

    /// Show the regional discovery shelf
    #[command(long_about = "Show regional movies according to the configured region, original languages, and vote-count threshold.")]
    Regional,

    /// Search the catalog by title
    Search {
        /// Free-text query; a blank query is rejected locally
        query: String,
    },

    /// Show a movie page: details, cast, trailers, providers, related titles
    Movie {
        /// Catalog movie id
        id: u64,
    },

    /// Show an actor page with their most popular credits
    Person {
        /// Catalog person id
        id: u64,
    },

    /// Suggest movies matching your preferences
    #[command(long_about = "Suggest movies by delegating genre/rating/year filters to the catalog's discovery endpoint, rating-descending by default.")]
    Suggest {
        /// Genre id to include (repeatable)
        #[arg(long = "genre", value_name = "GENRE_ID")]
        genres: Vec<u64>,

        /// Minimum average rating (0-10)
        #[arg(long)]
        min_rating: Option<f64>,

        /// Earliest release year (inclusive)
        #[arg(long, requires = "year_to")]
        year_from: Option<i32>,

        /// Latest release year (inclusive)
        #[arg(long, requires = "year_from")]
        year_to: Option<i32>,

        /// Original-language code (e.g. 'ko')
        #[arg(long)]
        language: Option<String>,

        /// Override the default vote_average.desc ordering
        #[arg(long, value_name = "SORT")]
        sort_by: Option<String>,
    },

    /// List the catalog's genres; their ids feed `suggest --genre`
    Genres,

    /// Manage the locally persisted watchlist
    Watchlist {
        #[command(subcommand)]
        cmd: WatchlistCommands,
    },

    /// View or edit configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum WatchlistCommands {
    /// List saved movies in the order they were added
    List,
    /// Look up a movie by id and save it
    Add { id: u64 },
    /// Remove a saved movie by id
    Remove { id: u64 },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration (masks the API key)
    Show,
    /// Set the TMDB API key (prompts when not given)
    SetKey {
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet, cli.log_file)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Trending => browse::run_trending(&output).await,
        Commands::Regional => browse::run_regional(&output).await,
        Commands::Search { query } => search::run_search(&query, &output).await,
        Commands::Movie { id } => detail::run_movie(id, &output).await,
        Commands::Person { id } => detail::run_person(id, &output).await,
        Commands::Suggest {
            genres,
            min_rating,
            year_from,
            year_to,
            language,
            sort_by,
        } => {
            suggest::run_suggest(
                genres, min_rating, year_from, year_to, language, sort_by, &output,
            )
            .await
        }
        Commands::Genres => suggest::run_genres(&output).await,
        Commands::Watchlist { cmd } => match cmd {
            WatchlistCommands::List => watchlist::run_list(&output),
            WatchlistCommands::Add { id } => watchlist::run_add(id, &output).await,
            WatchlistCommands::Remove { id } => watchlist::run_remove(id, &output),
        },
        Commands::Config { cmd } => match cmd {
            ConfigCommands::Show => config::run_show(&output),
            ConfigCommands::SetKey { key } => config::run_set_key(key, &output),
        },
    }
}
