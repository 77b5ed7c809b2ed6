//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `lookup`: title resolution, single facets, summaries and cast
//! - `config`: showing and initialising the config file

mod config;
mod lookup;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::lookup::TitleService;

pub use config::cmd_config;
pub use lookup::{CastArgs, cmd_cast, cmd_get, cmd_resolve, cmd_show};

/// Title Scout CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the one in the OS config directory
    #[arg(long, global = true, env = "TITLE_SCOUT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the base URL pages are fetched from
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a query to its canonical title id
    Resolve {
        /// Title id (tt...) or free-text search
        query: String,
    },
    /// Print one facet of a title
    Get {
        /// Title id (tt...) or free-text search
        query: String,
        /// Facet to print
        #[arg(value_enum)]
        facet: FacetArg,
        /// Join list facets into a sentence ("A, B and C")
        #[arg(long)]
        prose: bool,
        /// Include profile ids for people facets
        #[arg(long)]
        ids: bool,
        /// Print the runtime in seconds
        #[arg(long)]
        seconds: bool,
    },
    /// Print every facet from the title page
    Show {
        /// Title id (tt...) or free-text search
        query: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the cast from the full credits page
    Cast {
        /// Title id (tt...) or free-text search
        query: String,
        /// Maximum number of entries (default from config, 15)
        #[arg(short, long)]
        limit: Option<usize>,
        /// Include uncredited roles
        #[arg(long)]
        uncredited: bool,
        /// Ignore the limit and print the whole cast
        #[arg(long)]
        all: bool,
        /// Include actor profile ids
        #[arg(long)]
        ids: bool,
        /// Actor pages fetched at once (default from config, 1)
        #[arg(long)]
        concurrency: Option<usize>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the effective configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Facets available to `get`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FacetArg {
    Title,
    Year,
    Directors,
    Creators,
    Actors,
    Countries,
    Languages,
    Companies,
    Akas,
    FilmingLocations,
    Genres,
    Type,
    Runtime,
    ReleaseDate,
    Description,
    ContentRating,
    Rating,
    Poster,
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => crate::config::load_from(path)?,
        None => crate::config::load(),
    };

    if let Commands::Config { init } = &cli.command {
        return cmd_config(&config, cli.config.as_deref(), *init);
    }

    let base_url = cli
        .base_url
        .as_deref()
        .unwrap_or(&config.source.base_url);
    let service = TitleService::connect(base_url, &config.source.user_agent)?;
    let rt = Runtime::new()?;

    match &cli.command {
        Commands::Resolve { query } => cmd_resolve(&rt, &service, query),
        Commands::Get {
            query,
            facet,
            prose,
            ids,
            seconds,
        } => cmd_get(&rt, &service, query, *facet, *prose, *ids, *seconds),
        Commands::Show { query, json } => cmd_show(&rt, &service, query, *json),
        Commands::Cast {
            query,
            limit,
            uncredited,
            all,
            ids,
            concurrency,
            json,
        } => {
            let mut options = config.cast.options();
            if let Some(limit) = limit {
                options.limit = *limit;
            }
            if let Some(concurrency) = concurrency {
                options.concurrency = (*concurrency).max(1);
            }
            options.include_uncredited |= *uncredited;
            options.all = *all;
            options.with_ids = *ids;
            cmd_cast(&rt, &service, query, CastArgs { options, json: *json })
        }
        Commands::Config { .. } => Ok(()),
    }
}
