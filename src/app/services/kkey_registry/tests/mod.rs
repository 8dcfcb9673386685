//! Test utilities for K-key registry testing

use crate::app::models::{DataType, KKey, KKeyMetadata};
use crate::app::services::kkey_registry::KKeyProvider;

mod registry_tests;

/// Provider contributing a fixed list of keys
pub struct FixedProvider(pub Vec<(&'static str, &'static str, DataType)>);

impl KKeyProvider for FixedProvider {
    fn create_kkeys_with_metadata(&self) -> Vec<(KKey, KKeyMetadata)> {
        self.0
            .iter()
            .map(|(key, column, data_type)| (KKey::of(key), KKeyMetadata::of(*column, *data_type)))
            .collect()
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
