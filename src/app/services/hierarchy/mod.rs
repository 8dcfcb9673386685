//! Characteristic hierarchy
//!
//! The hierarchy is a tree over the characteristics and groups of a part, kept next
//! to the object model. DFQ encodes it in one of two ways:
//!
//! - full: node definitions (K5111 part, K5112 characteristic, K5113 group) and
//!   bindings (K5103 node under node, K5102 leaf characteristic under node)
//! - simple: K2030/K2031 on characteristic records, naming the node a characteristic
//!   defines or the node it is bound under
//!
//! A single model never mixes both. The simple form is normalized into the full one.
//!
//! ## Architecture
//!
//! - [`entry`] - Hierarchy records and the distinguished K-keys
//! - [`hierarchy`] - Storage, insertion rules, parent/child queries and removal
//! - [`normalize`] - Simple to full encoding conversion
//! - [`builder`] - Construction from id-based parent links

pub mod builder;
pub mod entry;
pub mod hierarchy;
pub mod normalize;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use builder::AqdefHierarchyBuilder;
pub use entry::{HierarchyEntry, HierarchyIndex};
pub use hierarchy::AqdefHierarchy;
