//! DFQ parser for AQDEF quality data files
//!
//! This module turns DFQ text into an [`AqdefObjectModel`]. Lines are trimmed and
//! classified: keyed records start with `K`, binary lines carry measured values
//! separated by control characters, anything else is discarded with a warning.
//!
//! ## Architecture
//!
//! - [`parser`] - Line classification, decoding and parse orchestration
//! - [`kkey_line`] - Keyed record grammar and routing by K-key level
//! - [`binary_line`] - Binary measured-value packets
//! - [`context`] - Per-parse state and the value row counter
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use aqdef::{CharacteristicIndex, DfqParser};
//!
//! # fn example() -> aqdef::Result<()> {
//! let result = DfqParser::new().parse_with_stats("K1001/1 P1\nK2001/1 C1\nK0001/1 1.5\n")?;
//!
//! assert_eq!(result.stats.kkey_lines, 3);
//! assert_eq!(result.model.values(CharacteristicIndex::new(1, 1)).count(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! [`AqdefObjectModel`]: crate::app::services::object_model::AqdefObjectModel

pub mod binary_line;
pub mod context;
pub mod kkey_line;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use context::ValueIndexCounter;
pub use parser::DfqParser;
pub use stats::{ParseResult, ParseStats};
