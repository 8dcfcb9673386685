//! Keys command implementation
//!
//! Lists the K-keys of the registry with their database column, data type and
//! converter.

use colored::*;
use serde::Serialize;

use super::shared::{print_json, truncate};
use crate::cli::args::{KeysArgs, OutputFormat};
use crate::{KKey, KKeyRepository, Result};

/// One row of the key listing
#[derive(Debug, Clone, Serialize)]
pub struct KeyRow {
    pub key: String,
    pub level: &'static str,
    pub column: String,
    pub data_type: String,
    pub length: Option<u32>,
    pub converter: &'static str,
    pub save_to_db: bool,
}

impl KeyRow {
    fn of(key: &KKey) -> Option<Self> {
        let metadata = key.metadata()?;
        Some(Self {
            key: key.key().to_string(),
            level: key.level().name(),
            column: metadata.column_name().to_string(),
            data_type: metadata.data_type().to_string(),
            length: metadata.length(),
            converter: metadata.converter().name(),
            save_to_db: metadata.is_save_to_db(),
        })
    }
}

/// Sorted rows of the registry keys selected by the level filter
pub fn key_rows(args: &KeysArgs) -> Vec<KeyRow> {
    let repository = KKeyRepository::instance();
    let mut keys = match args.level.level() {
        Some(level) => repository.keys_of_level(level),
        None => repository.all_keys(),
    };
    keys.sort();
    keys.iter().filter_map(KeyRow::of).collect()
}

/// Run the keys command
pub fn run_keys(args: &KeysArgs) -> Result<()> {
    let rows = key_rows(args);

    match args.format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Text => {
            println!(
                "{}",
                format!(
                    "{:<6} {:<16} {:<12} {:<10} {:>6}  {}",
                    "Key", "Level", "Column", "Type", "Length", "Converter"
                )
                .bold()
            );
            for row in &rows {
                println!(
                    "{:<6} {:<16} {:<12} {:<10} {:>6}  {}",
                    row.key.cyan(),
                    row.level,
                    truncate(&row.column, 12),
                    row.data_type,
                    row.length.map(|length| length.to_string()).unwrap_or_default(),
                    row.converter
                );
            }
            println!();
            println!("{} keys", rows.len());
            Ok(())
        }
    }
}
