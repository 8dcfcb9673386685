//! K-key registry service
//!
//! This module provides the process-wide repository of K-key metadata for part
//! (K1xxx), characteristic (K2xxx), value (K0xxx), structure (K5xxx) and control
//! chart (K8xxx) keys. Catalog keys (K4xxx) live in the catalog field table instead.
//!
//! ## Architecture
//!
//! - [`definition`] - Const-constructible rows of the static tables
//! - [`default_keys`] - Default table generated from the Q-DAS reference database
//! - [`corrected_keys`] - Corrections and missing keys applied over the defaults
//! - [`provider`] - Extension point for externally contributed K-keys
//! - [`query`] - Sorted per-level key views
//!
//! Tables are applied in order (defaults, corrections, then each provider); a later
//! definition of a key replaces an earlier one.

pub mod corrected_keys;
pub mod default_keys;
pub mod definition;
pub mod provider;
pub mod query;

#[cfg(test)]
pub mod tests;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::app::models::{KKey, KKeyMetadata};

// Re-export main types
pub use definition::KeyDefinition;
pub use provider::{KKeyProvider, StaticKKeyProvider};

static INSTANCE: Lazy<KKeyRepository> = Lazy::new(|| KKeyRepository::with_providers(Vec::new()));

/// Immutable repository of K-key metadata
///
/// Safe for concurrent reads; there is no mutation API after construction.
#[derive(Debug, Clone)]
pub struct KKeyRepository {
    /// Metadata indexed by K-key in K-key order
    pub(crate) keys: BTreeMap<KKey, KKeyMetadata>,
}

impl KKeyRepository {
    /// The process-wide repository with the built-in tables only
    pub fn instance() -> &'static KKeyRepository {
        &INSTANCE
    }

    /// Build a repository from the built-in tables followed by `providers`
    pub fn with_providers(providers: Vec<Box<dyn KKeyProvider>>) -> Self {
        let mut keys = BTreeMap::new();

        let defaults = StaticKKeyProvider::new("default", default_keys::DEFAULT_KEYS);
        let corrections = StaticKKeyProvider::new("corrections", corrected_keys::CORRECTED_KEYS);

        let built_in: [&dyn KKeyProvider; 2] = [&defaults, &corrections];
        for provider in built_in
            .into_iter()
            .chain(providers.iter().map(|provider| provider.as_ref()))
        {
            let contributed = provider.create_kkeys_with_metadata();
            debug!(
                "K-key provider '{}' contributed {} keys",
                provider.name(),
                contributed.len()
            );
            keys.extend(contributed);
        }

        Self { keys }
    }

    /// Metadata of the given K-key, or `None` if the key is unknown
    pub fn metadata_for(&self, key: &KKey) -> Option<&KKeyMetadata> {
        self.keys.get(key)
    }

    /// Check if the K-key has metadata
    pub fn contains(&self, key: &KKey) -> bool {
        self.keys.contains_key(key)
    }

    /// Get the total number of K-keys in the repository
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }
}
