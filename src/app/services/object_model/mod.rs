//! AQDEF object model
//!
//! Parts own characteristics and groups, characteristics own measured values. Each
//! level is an ordered map keyed by its index so traversals, and therefore the DFQ
//! writer, are deterministic. The characteristic hierarchy is kept as a sidecar and
//! catalog records in a separate map.
//!
//! ## Architecture
//!
//! - [`model`] - Storage, insertion, lookups and removal
//! - [`traversal`] - Iteration, filtering and search
//! - [`normalize`] - Expansion of index 0 entries and hierarchy normalization
//! - [`view`] - Value sets and combined part/characteristic/value views
//! - [`builder`] - Cursor based model construction

pub mod builder;
pub mod model;
pub mod normalize;
pub mod traversal;
pub mod view;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use builder::AqdefObjectModelBuilder;
pub use model::AqdefObjectModel;
pub use view::{CharacteristicView, ValueSet, ValueView};
