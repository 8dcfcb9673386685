//! Test utilities for hierarchy testing

use crate::app::models::KKey;
use crate::app::services::hierarchy::AqdefHierarchy;

// Test modules
mod builder_tests;
mod hierarchy_tests;

/// Hierarchy filled from `(key, index, value)` records in the given order
pub fn hierarchy_of(records: &[(&str, u32, u32)]) -> AqdefHierarchy {
    let mut hierarchy = AqdefHierarchy::new();
    for (key, index, value) in records {
        hierarchy.put_entry(&KKey::of(key), *index, *value).unwrap();
    }
    hierarchy
}

/// Textual form of all entries: definitions first, then bindings
pub fn dump(hierarchy: &AqdefHierarchy) -> Vec<String> {
    hierarchy
        .node_definitions()
        .chain(hierarchy.node_bindings())
        .map(|entry| entry.to_string())
        .collect()
}
