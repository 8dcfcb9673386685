//! Catalog field table
//!
//! Catalog K-keys (K4xxx) describe fields of the AQDEF catalogs (suppliers,
//! operators, machines, gages, ...). Their metadata is kept apart from the main
//! K-key registry; [`KKey::metadata`](crate::KKey::metadata) consults this table
//! for every catalog level key.
//!
//! ## Architecture
//!
//! - [`kind`] - Catalog kinds and field roles
//! - [`field_table`] - Static field definitions
//! - [`field`] - Field type with per-catalog and per-key lookups

pub mod field;
pub mod field_table;
pub mod kind;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use field::CatalogField;
pub use field_table::CatalogFieldDefinition;
pub use kind::{Catalog, CatalogFieldType};
