//! K-key identifiers
//!
//! A K-key (also called "key field") addresses a single typed field of the AQDEF
//! structure, e.g. `K1001` (part number) or `K0001` (measured value). The prefix
//! of the key determines which level of the structure it belongs to.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::{Arc, Weak};

use dashmap::DashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::metadata::KKeyMetadata;
use crate::app::services::catalog::CatalogField;
use crate::app::services::kkey_registry::KKeyRepository;
use crate::constants::{KKEY_CACHE_PURGE_THRESHOLD, SORT_REWRITES};
use crate::{Error, Result};

// =============================================================================
// Level
// =============================================================================

/// Level of the AQDEF structure a K-key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Level {
    Part,
    Characteristic,
    Value,
    CustomPart,
    CustomCharacteristic,
    CustomValue,
    Group,
    Hierarchy,
    SimpleHierarchy,
    Catalog,
    CustomCatalog,
    Unknown,
}

impl Level {
    /// Derive the level from the textual K-key
    pub fn of(key: &str) -> Self {
        if key.eq_ignore_ascii_case("K2030") || key.eq_ignore_ascii_case("K2031") {
            Level::SimpleHierarchy
        } else if key.starts_with("K1") {
            Level::Part
        } else if key.starts_with("K2") || key.starts_with("K8") {
            // K8xxx are control chart properties of a characteristic
            Level::Characteristic
        } else if key.starts_with("K0") {
            Level::Value
        } else if key.starts_with("K4") {
            Level::Catalog
        } else if key.starts_with("K50") {
            Level::Group
        } else if key.starts_with("K51") {
            Level::Hierarchy
        } else if key.starts_with("KX0") {
            Level::CustomValue
        } else if key.starts_with("KX1") {
            Level::CustomPart
        } else if key.starts_with("KX2") {
            Level::CustomCharacteristic
        } else if key.starts_with("KX4") {
            Level::CustomCatalog
        } else {
            Level::Unknown
        }
    }

    /// Whether the level is one of the custom (`KX…`) levels
    pub fn is_custom(self) -> bool {
        matches!(
            self,
            Level::CustomPart | Level::CustomCharacteristic | Level::CustomValue | Level::CustomCatalog
        )
    }

    /// Lowercase name used in diagnostics and CLI output
    pub fn name(self) -> &'static str {
        match self {
            Level::Part => "part",
            Level::Characteristic => "characteristic",
            Level::Value => "value",
            Level::CustomPart => "custom part",
            Level::CustomCharacteristic => "custom characteristic",
            Level::CustomValue => "custom value",
            Level::Group => "group",
            Level::Hierarchy => "hierarchy",
            Level::SimpleHierarchy => "simple hierarchy",
            Level::Catalog => "catalog",
            Level::CustomCatalog => "custom catalog",
            Level::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// KKey
// =============================================================================

#[derive(Debug)]
struct KKeyInner {
    key: Box<str>,
    level: Level,
}

/// Interned K-key
///
/// Instances are obtained through [`KKey::of`]. Requests for the same string share
/// one allocation while any instance is alive, but identity is not guaranteed:
/// equality and hashing are always on the key string.
///
/// Ordering is lexicographic on the key with `K0020` and `K0021` sorted as if they
/// were `K0001.20` and `K0001.21`, so the attribute value keys follow `K0001`.
#[derive(Clone)]
pub struct KKey(Arc<KKeyInner>);

static CACHE: Lazy<DashMap<Box<str>, Weak<KKeyInner>>> = Lazy::new(DashMap::new);

impl KKey {
    /// Get the (possibly shared) instance for the given key
    pub fn of(key: &str) -> Self {
        if let Some(existing) = CACHE.get(key).and_then(|weak| weak.upgrade()) {
            return KKey(existing);
        }

        let inner = Arc::new(KKeyInner {
            key: key.into(),
            level: Level::of(key),
        });

        // another thread may have won the race; keep whichever instance is alive
        let mut slot = CACHE.entry(key.into()).or_insert_with(Weak::new);
        if let Some(existing) = slot.upgrade() {
            return KKey(existing);
        }
        *slot = Arc::downgrade(&inner);
        drop(slot);

        if CACHE.len() > KKEY_CACHE_PURGE_THRESHOLD {
            CACHE.retain(|_, weak| weak.strong_count() > 0);
        }

        KKey(inner)
    }

    /// The textual K-key, e.g. `K1001`
    pub fn key(&self) -> &str {
        &self.0.key
    }

    /// Level of the AQDEF structure this K-key belongs to
    pub fn level(&self) -> Level {
        self.0.level
    }

    /// Metadata of this K-key
    ///
    /// Catalog keys (`K4xxx`) are resolved from the catalog field table, all other
    /// keys from the process-wide [`KKeyRepository`].
    pub fn metadata(&self) -> Option<&'static KKeyMetadata> {
        if self.level() == Level::Catalog {
            CatalogField::metadata_for(self)
        } else {
            KKeyRepository::instance().metadata_for(self)
        }
    }

    pub fn is_part_level(&self) -> bool {
        self.level() == Level::Part
    }

    pub fn is_custom_part_level(&self) -> bool {
        self.level() == Level::CustomPart
    }

    pub fn is_characteristic_level(&self) -> bool {
        self.level() == Level::Characteristic
    }

    pub fn is_custom_characteristic_level(&self) -> bool {
        self.level() == Level::CustomCharacteristic
    }

    pub fn is_value_level(&self) -> bool {
        self.level() == Level::Value
    }

    pub fn is_custom_value_level(&self) -> bool {
        self.level() == Level::CustomValue
    }

    pub fn is_group_level(&self) -> bool {
        self.level() == Level::Group
    }

    pub fn is_hierarchy_level(&self) -> bool {
        self.level() == Level::Hierarchy
    }

    pub fn is_simple_hierarchy_level(&self) -> bool {
        self.level() == Level::SimpleHierarchy
    }

    pub fn is_catalog_level(&self) -> bool {
        self.level() == Level::Catalog
    }

    pub fn is_custom_catalog_level(&self) -> bool {
        self.level() == Level::CustomCatalog
    }

    pub fn is_custom(&self) -> bool {
        self.level().is_custom()
    }

    /// Custom K-keys are kept in the model but never written to DFQ
    pub fn should_be_written_to_dfq(&self) -> bool {
        !self.is_custom()
    }

    /// Key used for ordering
    fn sort_key(&self) -> Cow<'_, str> {
        for (key, rewrite) in SORT_REWRITES {
            if self.key() == *key {
                return Cow::Borrowed(rewrite);
            }
        }
        Cow::Borrowed(self.key())
    }
}

impl PartialEq for KKey {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.key == other.0.key
    }
}

impl Eq for KKey {}

impl Hash for KKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.key.hash(state);
    }
}

impl PartialOrd for KKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.key().cmp(other.key()))
    }
}

impl fmt::Debug for KKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KKey({})", self.key())
    }
}

impl fmt::Display for KKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl From<&str> for KKey {
    fn from(key: &str) -> Self {
        KKey::of(key)
    }
}

impl FromStr for KKey {
    type Err = Error;

    /// Parse a K-key, rejecting text that cannot be a K-key at all
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.len() < 2 || !trimmed.starts_with('K') || trimmed.contains(char::is_whitespace) {
            return Err(Error::invalid_argument(format!(
                "'{}' is not a valid K-key",
                s
            )));
        }
        Ok(KKey::of(trimmed))
    }
}

impl Serialize for KKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for KKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_derivation() {
        assert_eq!(KKey::of("K1001").level(), Level::Part);
        assert_eq!(KKey::of("K2001").level(), Level::Characteristic);
        assert_eq!(KKey::of("K8500").level(), Level::Characteristic);
        assert_eq!(KKey::of("K2030").level(), Level::SimpleHierarchy);
        assert_eq!(KKey::of("K2031").level(), Level::SimpleHierarchy);
        assert_eq!(KKey::of("K0001").level(), Level::Value);
        assert_eq!(KKey::of("K4022").level(), Level::Catalog);
        assert_eq!(KKey::of("K4020_ID").level(), Level::Catalog);
        assert_eq!(KKey::of("K5001").level(), Level::Group);
        assert_eq!(KKey::of("K5111").level(), Level::Hierarchy);
        assert_eq!(KKey::of("KX001").level(), Level::CustomValue);
        assert_eq!(KKey::of("KX101").level(), Level::CustomPart);
        assert_eq!(KKey::of("KX201").level(), Level::CustomCharacteristic);
        assert_eq!(KKey::of("KX401").level(), Level::CustomCatalog);
        assert_eq!(KKey::of("K3001").level(), Level::Unknown);
        assert_eq!(KKey::of("K5201").level(), Level::Unknown);
    }

    #[test]
    fn test_interning_shares_instances() {
        let first = KKey::of("K1002");
        let second = KKey::of("K1002");
        assert!(Arc::ptr_eq(&first.0, &second.0));
        assert_eq!(first, second);
    }

    #[test]
    fn test_equality_is_by_string() {
        let interned = KKey::of("K2002");
        let detached = KKey(Arc::new(KKeyInner {
            key: "K2002".into(),
            level: Level::Characteristic,
        }));
        assert_eq!(interned, detached);
    }

    #[test]
    fn test_sort_rewrites_attribute_keys() {
        let mut keys: Vec<KKey> = ["K0002", "K0021", "K0001", "K0020", "K0004"]
            .iter()
            .map(|k| KKey::of(k))
            .collect();
        keys.sort();
        let sorted: Vec<&str> = keys.iter().map(|k| k.key()).collect();
        assert_eq!(sorted, vec!["K0001", "K0020", "K0021", "K0002", "K0004"]);
    }

    #[test]
    fn test_custom_keys_are_not_written() {
        assert!(!KKey::of("KX101").should_be_written_to_dfq());
        assert!(KKey::of("K1001").should_be_written_to_dfq());
    }

    #[test]
    fn test_from_str_validation() {
        assert!("K1001".parse::<KKey>().is_ok());
        assert!("1001".parse::<KKey>().is_err());
        assert!("K 1".parse::<KKey>().is_err());
    }

    #[test]
    fn test_metadata_lookup_by_level() {
        let part = KKey::of("K1001").metadata().unwrap();
        assert_eq!(part.column_name(), "TETEILNR");

        let catalog = KKey::of("K4022").metadata().unwrap();
        assert_eq!(catalog.column_name(), "LINR");

        assert!(KKey::of("K3999").metadata().is_none());
    }
}
