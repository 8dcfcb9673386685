//! Input resolution for CLI commands
//!
//! This module merges the configuration file with command-line flags and finds
//! the DFQ files a command should read.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::cli::args::Args;
use crate::config::Config;
use crate::constants::DFQ_FILE_EXTENSIONS;
use crate::{DfqParser, Error, Result};

/// Configuration from the optional TOML file with command-line flags applied
pub fn resolve_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config_file {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };

    if let Some(encoding) = &args.encoding {
        config = config.with_encoding(encoding.clone());
    }
    if args.suppress_invalid_key_logging {
        config = config.with_suppressed_logging();
    }
    if !args.suppress_keys.is_empty() {
        config = config.with_suppressed_logging_for(args.suppress_keys.iter().cloned());
    }
    if let Some(level) = args.get_log_level() {
        config = config.with_logging_level(level);
    }

    config.validate()?;
    Ok(config)
}

/// Parser configured from `config`
pub fn parser_for(config: &Config) -> DfqParser {
    DfqParser::with_options(config.parser.clone())
}

/// Whether the path has one of the DFQ file extensions
pub fn is_dfq_file(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            DFQ_FILE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(extension))
        })
}

/// The file itself, or all DFQ files below a directory in path order
pub fn collect_dfq_files(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        return Err(Error::io(
            format!("Input path does not exist: {}", path.display()),
            std::io::Error::new(std::io::ErrorKind::NotFound, "Path not found"),
        ));
    }

    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && is_dfq_file(path))
        .collect();
    files.sort();

    debug!("Found {} DFQ files below {}", files.len(), path.display());
    Ok(files)
}
