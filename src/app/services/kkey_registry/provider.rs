//! Providers contributing K-keys to the registry

use super::definition::KeyDefinition;
use crate::app::models::{KKey, KKeyMetadata};

/// Source of K-key metadata
///
/// Implement this to add custom K-keys or to override the metadata of predefined
/// ones, then pass the provider to
/// [`KKeyRepository::with_providers`](super::KKeyRepository::with_providers).
pub trait KKeyProvider: Send + Sync {
    /// K-keys with metadata, applied in iteration order
    fn create_kkeys_with_metadata(&self) -> Vec<(KKey, KKeyMetadata)>;

    /// Name used in diagnostics
    fn name(&self) -> &str {
        "external"
    }
}

/// Provider backed by a static table
#[derive(Debug, Clone, Copy)]
pub struct StaticKKeyProvider {
    name: &'static str,
    definitions: &'static [KeyDefinition],
}

impl StaticKKeyProvider {
    pub fn new(name: &'static str, definitions: &'static [KeyDefinition]) -> Self {
        Self { name, definitions }
    }
}

impl KKeyProvider for StaticKKeyProvider {
    fn create_kkeys_with_metadata(&self) -> Vec<(KKey, KKeyMetadata)> {
        self.definitions
            .iter()
            .map(|definition| (KKey::of(definition.key), definition.to_metadata()))
            .collect()
    }

    fn name(&self) -> &str {
        self.name
    }
}
