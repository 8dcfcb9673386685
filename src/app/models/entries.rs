//! Containers of K-key values stored under one index
//!
//! Every container is tagged with the index it is stored under and only accepts
//! K-keys of the level matching that index type.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt::Debug;

use serde::Serialize;

use super::index::{CatalogRecordIndex, CharacteristicIndex, GroupIndex, PartIndex, ValueIndex};
use super::kkey::{KKey, Level};
use super::value::KKeyValue;
use crate::{Error, Result};

/// Index type that tags an [`Entries`] container
pub trait EntryIndex: Copy + Ord + Debug {
    /// Human readable kind used in error messages
    const KIND: &'static str;

    /// Whether K-keys of `level` may be stored under this index type
    fn accepts(level: Level) -> bool;
}

impl EntryIndex for PartIndex {
    const KIND: &'static str = "part";

    fn accepts(level: Level) -> bool {
        matches!(level, Level::Part | Level::CustomPart)
    }
}

impl EntryIndex for CharacteristicIndex {
    const KIND: &'static str = "characteristic";

    fn accepts(level: Level) -> bool {
        matches!(level, Level::Characteristic | Level::CustomCharacteristic)
    }
}

impl EntryIndex for GroupIndex {
    const KIND: &'static str = "group";

    fn accepts(level: Level) -> bool {
        level == Level::Group
    }
}

impl EntryIndex for ValueIndex {
    const KIND: &'static str = "value";

    fn accepts(level: Level) -> bool {
        matches!(level, Level::Value | Level::CustomValue)
    }
}

impl EntryIndex for CatalogRecordIndex {
    const KIND: &'static str = "catalog record";

    fn accepts(level: Level) -> bool {
        matches!(level, Level::Catalog | Level::CustomCatalog)
    }
}

/// K-key values of a single part, characteristic, group, value or catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entries<I> {
    index: I,
    values: BTreeMap<KKey, KKeyValue>,
}

pub type PartEntries = Entries<PartIndex>;
pub type CharacteristicEntries = Entries<CharacteristicIndex>;
pub type GroupEntries = Entries<GroupIndex>;
pub type ValueEntries = Entries<ValueIndex>;
pub type CatalogRecordEntries = Entries<CatalogRecordIndex>;

impl<I: EntryIndex> Entries<I> {
    pub fn new(index: I) -> Self {
        Self {
            index,
            values: BTreeMap::new(),
        }
    }

    pub fn index(&self) -> I {
        self.index
    }

    /// Store a value, replacing any previous value of the key
    pub fn put(&mut self, key: KKey, value: KKeyValue) -> Result<()> {
        check_level::<I>(&key)?;
        self.values.insert(key, value);
        Ok(())
    }

    /// Store a value only when the key has no value yet
    pub fn put_if_absent(&mut self, key: KKey, value: KKeyValue) -> Result<()> {
        check_level::<I>(&key)?;
        self.values.entry(key).or_insert(value);
        Ok(())
    }

    /// Copy all values of `other` into this container
    ///
    /// With `overwrite` set, values of `other` replace existing ones; otherwise only
    /// missing keys are filled in.
    pub fn put_all(&mut self, other: &Entries<I>, overwrite: bool) {
        for (key, value) in &other.values {
            if overwrite {
                self.values.insert(key.clone(), value.clone());
            } else {
                self.values
                    .entry(key.clone())
                    .or_insert_with(|| value.clone());
            }
        }
    }

    /// Copy of this container tagged with another index
    pub fn with_index(&self, index: I) -> Self {
        Self {
            index,
            values: self.values.clone(),
        }
    }

    pub fn get_value(&self, key: &KKey) -> Option<&KKeyValue> {
        self.values.get(key)
    }

    /// Value of the K-key given by its textual form
    pub fn get(&self, key: &str) -> Option<&KKeyValue> {
        self.values.get(&KKey::of(key))
    }

    pub fn contains_key(&self, key: &KKey) -> bool {
        self.values.contains_key(key)
    }

    pub fn remove(&mut self, key: &KKey) -> Option<KKeyValue> {
        self.values.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &KKey> {
        self.values.keys()
    }

    /// Entries in ascending K-key order
    pub fn iter(&self) -> btree_map::Iter<'_, KKey, KKeyValue> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<'a, I> IntoIterator for &'a Entries<I> {
    type Item = (&'a KKey, &'a KKeyValue);
    type IntoIter = btree_map::Iter<'a, KKey, KKeyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

fn check_level<I: EntryIndex>(key: &KKey) -> Result<()> {
    if I::accepts(key.level()) {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!(
            "K-key {} of level {} can't be stored in {} entries",
            key,
            key.level(),
            I::KIND
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_check_on_put() {
        let mut part = PartEntries::new(PartIndex(1));
        assert!(part.put(KKey::of("K1001"), "P1".into()).is_ok());
        assert!(part.put(KKey::of("KX101"), "custom".into()).is_ok());

        let error = part.put(KKey::of("K2001"), "C1".into()).unwrap_err();
        assert!(matches!(error, Error::InvalidArgument { .. }));
        assert_eq!(part.len(), 2);
    }

    #[test]
    fn test_put_all_respects_overwrite_flag() {
        let mut target = CharacteristicEntries::new(CharacteristicIndex::new(1, 1));
        target.put(KKey::of("K2001"), "kept".into()).unwrap();

        let mut source = CharacteristicEntries::new(CharacteristicIndex::new(0, 0));
        source.put(KKey::of("K2001"), "other".into()).unwrap();
        source.put(KKey::of("K2002"), "added".into()).unwrap();

        target.put_all(&source, false);
        assert_eq!(target.get("K2001"), Some(&KKeyValue::from("kept")));
        assert_eq!(target.get("K2002"), Some(&KKeyValue::from("added")));

        target.put_all(&source, true);
        assert_eq!(target.get("K2001"), Some(&KKeyValue::from("other")));
    }

    #[test]
    fn test_with_index_keeps_values() {
        let mut value = ValueEntries::new(ValueIndex::new(0, 0, 1));
        value.put(KKey::of("K0001"), 3.into()).unwrap();

        let copy = value.with_index(ValueIndex::new(1, 2, 1));
        assert_eq!(copy.index(), ValueIndex::new(1, 2, 1));
        assert_eq!(copy.get("K0001"), Some(&KKeyValue::Integer(3)));
    }
}
