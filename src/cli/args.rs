//! Command-line argument definitions for the `dfq` tool
//!
//! This module defines the CLI interface using the clap derive API. Flags that
//! affect parsing and logging are global and may be given before or after the
//! subcommand.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::app::models::Level;
use crate::config::is_valid_kkey;
use crate::{Error, Result};

/// CLI arguments for the AQDEF / DFQ tool
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dfq",
    version,
    about = "Inspect, validate and rewrite Q-DAS AQDEF (DFQ) quality data files",
    long_about = "Reads DFQ files into the AQDEF object model, reports what they contain and \
                  writes them back as canonical DFQ. Also lists the known K-keys and catalog fields."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file (TOML format)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Encoding of input files, e.g. utf-8 or windows-1250
    #[arg(short = 'e', long = "encoding", value_name = "LABEL", global = true)]
    pub encoding: Option<String>,

    /// Do not log unknown K-keys and unconvertible values
    #[arg(long = "suppress-invalid-key-logging", global = true)]
    pub suppress_invalid_key_logging: bool,

    /// Do not log unknown or unconvertible values of this K-key (repeatable)
    #[arg(long = "suppress-key", value_name = "KXXXX", global = true)]
    pub suppress_keys: Vec<String>,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose", global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse DFQ files and print a summary of their content
    Parse(ParseArgs),
    /// Parse a DFQ file and write it back as canonical DFQ
    Rewrite(RewriteArgs),
    /// List the K-keys known to the registry
    Keys(KeysArgs),
    /// List catalogs or the fields of one catalog
    Catalog(CatalogArgs),
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// DFQ file, or a directory searched recursively for .dfq/.dfd/.dfx files
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Output format of the summary
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the rewrite command
#[derive(Debug, Clone, Parser)]
pub struct RewriteArgs {
    /// DFQ file to rewrite
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Output file; standard output when omitted
    #[arg(short = 'o', long = "output", value_name = "OUT")]
    pub output: Option<PathBuf>,
}

/// Arguments for the keys command
#[derive(Debug, Clone, Parser)]
pub struct KeysArgs {
    /// Only list keys of this level
    #[arg(long = "level", value_enum, default_value = "all")]
    pub level: LevelFilter,

    /// Output format of the listing
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the catalog command
#[derive(Debug, Clone, Parser)]
pub struct CatalogArgs {
    /// Catalog whose fields should be listed, e.g. machine or purchase-order
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Output format of the listing
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// K-key levels selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LevelFilter {
    All,
    Part,
    Characteristic,
    Value,
    Group,
    Hierarchy,
}

impl LevelFilter {
    /// The level to keep, `None` for all levels
    pub fn level(self) -> Option<Level> {
        match self {
            LevelFilter::All => None,
            LevelFilter::Part => Some(Level::Part),
            LevelFilter::Characteristic => Some(Level::Characteristic),
            LevelFilter::Value => Some(Level::Value),
            LevelFilter::Group => Some(Level::Group),
            LevelFilter::Hierarchy => Some(Level::Hierarchy),
        }
    }
}

impl Args {
    /// Validate flags that clap can't check on its own
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        for key in &self.suppress_keys {
            if !is_valid_kkey(key) {
                return Err(Error::configuration(format!(
                    "Invalid K-key for --suppress-key: {}",
                    key
                )));
            }
        }

        Ok(())
    }

    /// Determine the log level from the verbosity flags
    ///
    /// `None` means no flag was given and the configured level applies.
    pub fn get_log_level(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}
