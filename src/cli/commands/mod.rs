//! Command implementations for the `dfq` CLI
//!
//! Each command lives in its own module:
//! - [`parse`] - Summaries of parsed DFQ files
//! - [`rewrite`] - Canonical re-serialization of a DFQ file
//! - [`keys`] - Listing of the K-key registry
//! - [`catalog`] - Listing of catalogs and their fields

pub mod catalog;
pub mod keys;
pub mod parse;
pub mod rewrite;
pub mod shared;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::args::{Args, Commands};
use crate::cli::input::resolve_config;

/// Main command runner
///
/// Validates the arguments, resolves the configuration, sets up logging and
/// dispatches to the subcommand.
pub fn run(args: Args) -> Result<()> {
    args.validate()?;
    let config = resolve_config(&args).context("Failed to load configuration")?;
    shared::setup_logging(&config, args.quiet)?;

    let command = args.command.context("No command given")?;
    debug!("Running {:?}", command);

    match command {
        Commands::Parse(parse_args) => parse::run_parse(&parse_args, &config)
            .with_context(|| format!("Failed to parse {}", parse_args.path.display())),
        Commands::Rewrite(rewrite_args) => rewrite::run_rewrite(&rewrite_args, &config)
            .with_context(|| format!("Failed to rewrite {}", rewrite_args.path.display())),
        Commands::Keys(keys_args) => Ok(keys::run_keys(&keys_args)?),
        Commands::Catalog(catalog_args) => catalog::run_catalog(&catalog_args)
            .context("Failed to list catalog"),
    }
}
