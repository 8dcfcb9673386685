//! Test utilities for DFQ writer testing

use crate::app::services::object_model::AqdefObjectModel;
use crate::app::services::dfq_writer::DfqWriter;

// Test modules
mod writer_tests;

/// Write the model and split the output into records
pub fn records(model: &mut AqdefObjectModel) -> Vec<String> {
    let output = DfqWriter::new().write_to_string(model).unwrap();
    assert!(output.ends_with("\r\n"));
    output
        .split("\r\n")
        .filter(|record| !record.is_empty())
        .map(str::to_string)
        .collect()
}
