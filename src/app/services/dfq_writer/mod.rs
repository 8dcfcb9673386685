//! DFQ writer for AQDEF object models
//!
//! Writes a normalized [`AqdefObjectModel`] as canonical DFQ: one CRLF terminated
//! record per K-key value, in index order, with values formatted by the K-key's
//! converter.
//!
//! ## Architecture
//!
//! - [`writer`] - Record ordering, value formatting and output
//!
//! [`AqdefObjectModel`]: crate::app::services::object_model::AqdefObjectModel

pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use writer::DfqWriter;
