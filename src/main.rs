//! Title Scout - look up film and TV metadata from title pages.
//!
//! Resolves a free-text query or canonical title id, fetches the title's
//! pages and extracts facets such as runtime, release date, credits and cast.

pub mod cli;
pub mod config;
pub mod error;
pub mod lookup;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr so stdout only carries results
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("title_scout=info".parse()?))
        .init();

    cli::run_command(&args)
}
