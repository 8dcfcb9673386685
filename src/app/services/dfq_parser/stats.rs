//! Parsing statistics and result structures for DFQ processing

use serde::{Deserialize, Serialize};

use crate::app::services::object_model::AqdefObjectModel;

/// Parsed model together with statistics about the parse
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Normalized object model
    pub model: AqdefObjectModel,

    /// Line and field statistics
    pub stats: ParseStats,
}

/// Counters collected while parsing a DFQ document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Physical lines read, including empty ones
    pub lines_read: usize,

    /// Lines parsed as K-key records
    pub kkey_lines: usize,

    /// Lines parsed as binary measured values
    pub binary_lines: usize,

    /// Header, count and proprietary records skipped on purpose
    pub ignored_lines: usize,

    /// Lines that were neither K-key nor binary records
    pub discarded_lines: usize,

    /// Fields dropped because their K-key has no metadata
    pub unknown_kkeys: usize,

    /// Fields dropped because their value could not be converted
    pub conversion_failures: usize,

    /// Warnings that were logged during the parse
    pub warnings: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fields that did not make it into the model
    pub fn dropped_fields(&self) -> usize {
        self.unknown_kkeys + self.conversion_failures
    }

    /// Whether every line and field made it into the model
    pub fn is_clean(&self) -> bool {
        self.discarded_lines == 0 && self.dropped_fields() == 0
    }
}
