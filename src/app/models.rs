//! Data models for AQDEF processing
//!
//! This module contains the core data structures shared by the parser, the writer and
//! the object model: K-keys with their levels and metadata, typed values, indexes and
//! the per-index entry containers.

pub mod entries;
pub mod index;
pub mod kkey;
pub mod metadata;
pub mod value;

// Re-export main types
pub use entries::{
    CatalogRecordEntries, CharacteristicEntries, Entries, EntryIndex, GroupEntries, PartEntries,
    ValueEntries,
};
pub use index::{CatalogRecordIndex, CharacteristicIndex, GroupIndex, NodeIndex, PartIndex, ValueIndex};
pub use kkey::{KKey, Level};
pub use metadata::{KKeyMetadata, KKeyMetadataBuilder};
pub use value::{DataType, KKeyValue};
