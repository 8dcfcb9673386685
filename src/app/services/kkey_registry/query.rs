//! Sorted views over the registry

use super::KKeyRepository;
use crate::app::models::{KKey, Level};

impl KKeyRepository {
    /// All K-keys in K-key order
    pub fn all_keys(&self) -> Vec<KKey> {
        self.keys.keys().cloned().collect()
    }

    /// Sorted K-keys of the part level
    pub fn part_keys(&self) -> Vec<KKey> {
        self.keys_of_level(Level::Part)
    }

    /// Sorted K-keys of the characteristic level
    pub fn characteristic_keys(&self) -> Vec<KKey> {
        self.keys_of_level(Level::Characteristic)
    }

    /// Sorted K-keys of the value level
    pub fn value_keys(&self) -> Vec<KKey> {
        self.keys_of_level(Level::Value)
    }

    /// Sorted K-keys of any level
    pub fn keys_of_level(&self, level: Level) -> Vec<KKey> {
        self.keys
            .keys()
            .filter(|key| key.level() == level)
            .cloned()
            .collect()
    }
}
