//! Command-line interface for title-scout.
//!
//! This module provides CLI commands for resolving titles and printing
//! their metadata facets.

mod commands;

pub use commands::{Cli, Commands, FacetArg, run_command};
