//! Parse command implementation
//!
//! Reads one DFQ file, or every DFQ file below a directory, and prints what the
//! files contain together with the parsing statistics.

use std::path::{Path, PathBuf};

use colored::*;
use serde::Serialize;
use tracing::{info, warn};

use super::shared::{print_json, truncate};
use crate::app::services::object_model::AqdefObjectModel;
use crate::cli::args::{OutputFormat, ParseArgs};
use crate::cli::input::{collect_dfq_files, parser_for};
use crate::config::Config;
use crate::{Error, ParseStats, Result};

/// Content summary of one parsed DFQ file
#[derive(Debug, Clone, Serialize)]
pub struct FileSummary {
    pub path: PathBuf,
    pub parts: Vec<PartSummary>,
    pub characteristic_count: usize,
    pub value_count: usize,
    pub group_count: usize,
    pub hierarchy_definitions: usize,
    pub hierarchy_bindings: usize,
    pub stats: ParseStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct PartSummary {
    pub index: u32,
    /// K1001
    pub number: Option<String>,
    /// K1002
    pub description: Option<String>,
    pub characteristics: usize,
    pub values: usize,
}

impl FileSummary {
    pub fn of(path: &Path, model: &AqdefObjectModel, stats: ParseStats) -> Self {
        let parts = model
            .parts()
            .map(|part| {
                let characteristics: Vec<_> = model.characteristics(part.index()).collect();
                PartSummary {
                    index: part.index().index(),
                    number: part.get("K1001").map(|value| value.to_string()),
                    description: part.get("K1002").map(|value| value.to_string()),
                    characteristics: characteristics.len(),
                    values: characteristics
                        .iter()
                        .map(|characteristic| model.values(characteristic.index()).count())
                        .sum(),
                }
            })
            .collect();

        let hierarchy = model.hierarchy();
        Self {
            path: path.to_path_buf(),
            parts,
            characteristic_count: model.characteristic_count(),
            value_count: model.value_count(),
            group_count: model.group_count(),
            hierarchy_definitions: hierarchy.node_definition_count(),
            hierarchy_bindings: hierarchy.node_binding_count(),
            stats,
        }
    }
}

/// Run the parse command
pub fn run_parse(args: &ParseArgs, config: &Config) -> Result<()> {
    let files = collect_dfq_files(&args.path)?;
    if files.is_empty() {
        return Err(Error::invalid_argument(format!(
            "No DFQ files found in {}",
            args.path.display()
        )));
    }
    info!("Parsing {} DFQ files", files.len());

    let parser = parser_for(config);
    let mut summaries = Vec::with_capacity(files.len());
    for file in &files {
        let result = parser.parse_file(file, &config.input.encoding)?;
        if !result.stats.is_clean() {
            warn!(
                "{}: {} fields and {} lines were dropped",
                file.display(),
                result.stats.dropped_fields(),
                result.stats.discarded_lines
            );
        }
        summaries.push(FileSummary::of(file, &result.model, result.stats));
    }

    match args.format {
        OutputFormat::Json => print_json(&summaries),
        OutputFormat::Text => {
            for summary in &summaries {
                print_summary(summary);
            }
            Ok(())
        }
    }
}

fn print_summary(summary: &FileSummary) {
    println!("{}", summary.path.display().to_string().bold());
    println!(
        "  {} parts, {} characteristics, {} values, {} groups",
        summary.parts.len().to_string().cyan(),
        summary.characteristic_count.to_string().cyan(),
        summary.value_count.to_string().cyan(),
        summary.group_count.to_string().cyan()
    );
    if summary.hierarchy_definitions > 0 || summary.hierarchy_bindings > 0 {
        println!(
            "  Hierarchy: {} node definitions, {} bindings",
            summary.hierarchy_definitions, summary.hierarchy_bindings
        );
    }

    for part in &summary.parts {
        println!(
            "  Part {:<4} {:<20} {:<30} {:>5} chars {:>7} values",
            part.index,
            truncate(part.number.as_deref().unwrap_or("-"), 20),
            truncate(part.description.as_deref().unwrap_or("-"), 30),
            part.characteristics,
            part.values
        );
    }

    let stats = &summary.stats;
    let status = if stats.is_clean() {
        "clean".green()
    } else {
        "with warnings".yellow()
    };
    println!(
        "  Lines: {} read, {} K-key, {} binary, {} ignored, {} discarded ({})",
        stats.lines_read,
        stats.kkey_lines,
        stats.binary_lines,
        stats.ignored_lines,
        stats.discarded_lines,
        status
    );
    if stats.dropped_fields() > 0 {
        println!(
            "  Dropped: {} unknown K-keys, {} conversion failures",
            stats.unknown_kkeys.to_string().yellow(),
            stats.conversion_failures.to_string().yellow()
        );
    }
    println!();
}
