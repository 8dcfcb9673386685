//! Object model storage and direct access

use std::collections::BTreeMap;

use crate::app::models::{
    CatalogRecordEntries, CatalogRecordIndex, CharacteristicEntries, CharacteristicIndex,
    GroupEntries, GroupIndex, KKey, KKeyValue, PartEntries, PartIndex, ValueEntries, ValueIndex,
};
use crate::app::services::hierarchy::AqdefHierarchy;
use crate::Result;

pub(crate) type CharacteristicsOfPart = BTreeMap<CharacteristicIndex, CharacteristicEntries>;
pub(crate) type GroupsOfPart = BTreeMap<GroupIndex, GroupEntries>;
pub(crate) type ValuesOfCharacteristic = BTreeMap<ValueIndex, ValueEntries>;
pub(crate) type ValuesOfPart = BTreeMap<CharacteristicIndex, ValuesOfCharacteristic>;

/// In-memory form of an AQDEF document
///
/// Parts, characteristics, groups and values live in nested ordered maps keyed by
/// their indexes, so every traversal runs in index order. The hierarchy is kept as a
/// sidecar and catalog records in a map of their own.
///
/// Equality compares parts, characteristics, groups, values and the hierarchy.
#[derive(Debug, Clone, Default)]
pub struct AqdefObjectModel {
    pub(crate) parts: BTreeMap<PartIndex, PartEntries>,
    pub(crate) characteristics: BTreeMap<PartIndex, CharacteristicsOfPart>,
    pub(crate) groups: BTreeMap<PartIndex, GroupsOfPart>,
    pub(crate) values: BTreeMap<PartIndex, ValuesOfPart>,
    pub(crate) catalog_records: BTreeMap<CatalogRecordIndex, CatalogRecordEntries>,
    pub(crate) hierarchy: AqdefHierarchy,
}

impl PartialEq for AqdefObjectModel {
    fn eq(&self, other: &Self) -> bool {
        self.parts == other.parts
            && self.characteristics == other.characteristics
            && self.groups == other.groups
            && self.values == other.values
            && self.hierarchy == other.hierarchy
    }
}

impl Eq for AqdefObjectModel {}

impl AqdefObjectModel {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Add a part without values unless it already exists
    pub fn put_part(&mut self, index: PartIndex) {
        self.parts
            .entry(index)
            .or_insert_with(|| PartEntries::new(index));
    }

    /// Store a part value; an absent value is ignored
    pub fn put_part_entry(
        &mut self,
        key: &KKey,
        index: PartIndex,
        value: impl Into<Option<KKeyValue>>,
    ) -> Result<()> {
        let Some(value) = value.into() else {
            return Ok(());
        };
        self.parts
            .entry(index)
            .or_insert_with(|| PartEntries::new(index))
            .put(key.clone(), value)
    }

    /// Merge part entries, overwriting existing values
    pub fn put_part_entries(&mut self, entries: &PartEntries) {
        self.parts
            .entry(entries.index())
            .or_insert_with(|| PartEntries::new(entries.index()))
            .put_all(entries, true);
    }

    /// Store a characteristic value; an absent value is ignored
    pub fn put_characteristic_entry(
        &mut self,
        key: &KKey,
        index: CharacteristicIndex,
        value: impl Into<Option<KKeyValue>>,
    ) -> Result<()> {
        let Some(value) = value.into() else {
            return Ok(());
        };
        self.characteristic_entries_mut(index).put(key.clone(), value)
    }

    /// Merge characteristic entries, overwriting existing values
    pub fn put_characteristic_entries(&mut self, entries: &CharacteristicEntries) {
        self.characteristic_entries_mut(entries.index())
            .put_all(entries, true);
    }

    pub(crate) fn characteristic_entries_mut(
        &mut self,
        index: CharacteristicIndex,
    ) -> &mut CharacteristicEntries {
        self.characteristics
            .entry(index.part)
            .or_default()
            .entry(index)
            .or_insert_with(|| CharacteristicEntries::new(index))
    }

    /// Store a group value; an absent value is ignored
    pub fn put_group_entry(
        &mut self,
        key: &KKey,
        index: GroupIndex,
        value: impl Into<Option<KKeyValue>>,
    ) -> Result<()> {
        let Some(value) = value.into() else {
            return Ok(());
        };
        self.groups
            .entry(index.part)
            .or_default()
            .entry(index)
            .or_insert_with(|| GroupEntries::new(index))
            .put(key.clone(), value)
    }

    /// Store a measured value field; an absent value is ignored
    pub fn put_value_entry(
        &mut self,
        key: &KKey,
        index: ValueIndex,
        value: impl Into<Option<KKeyValue>>,
    ) -> Result<()> {
        let Some(value) = value.into() else {
            return Ok(());
        };
        self.value_entries_mut(index).put(key.clone(), value)
    }

    /// Merge value entries, overwriting existing values
    pub fn put_value_entries(&mut self, entries: &ValueEntries) {
        self.value_entries_mut(entries.index()).put_all(entries, true);
    }

    fn value_entries_mut(&mut self, index: ValueIndex) -> &mut ValueEntries {
        self.values
            .entry(index.part_index())
            .or_default()
            .entry(index.characteristic)
            .or_default()
            .entry(index)
            .or_insert_with(|| ValueEntries::new(index))
    }

    /// Store a catalog record field; an absent value is ignored
    pub fn put_catalog_record_entry(
        &mut self,
        key: &KKey,
        index: CatalogRecordIndex,
        value: impl Into<Option<KKeyValue>>,
    ) -> Result<()> {
        let Some(value) = value.into() else {
            return Ok(());
        };
        self.catalog_records
            .entry(index)
            .or_insert_with(|| CatalogRecordEntries::new(index))
            .put(key.clone(), value)
    }

    /// Forward a hierarchy record (K51xx, K2030 or K2031) to the hierarchy
    pub fn put_hierarchy_entry(&mut self, key: &KKey, index: u32, value: u32) -> Result<()> {
        self.hierarchy.put_entry(key, index, value)
    }

    // =========================================================================
    // Access
    // =========================================================================

    pub fn part_indexes(&self) -> Vec<PartIndex> {
        self.parts.keys().copied().collect()
    }

    pub fn part_entries(&self, index: PartIndex) -> Option<&PartEntries> {
        self.parts.get(&index)
    }

    pub fn parts(&self) -> impl Iterator<Item = &PartEntries> {
        self.parts.values()
    }

    pub fn characteristic_indexes(&self, part: PartIndex) -> Vec<CharacteristicIndex> {
        self.characteristics
            .get(&part)
            .map(|characteristics| characteristics.keys().copied().collect())
            .unwrap_or_default()
    }

    pub fn characteristic_entries(
        &self,
        index: CharacteristicIndex,
    ) -> Option<&CharacteristicEntries> {
        self.characteristics.get(&index.part)?.get(&index)
    }

    pub fn characteristics(&self, part: PartIndex) -> impl Iterator<Item = &CharacteristicEntries> {
        self.characteristics
            .get(&part)
            .into_iter()
            .flat_map(|characteristics| characteristics.values())
    }

    pub fn group_indexes(&self, part: PartIndex) -> Vec<GroupIndex> {
        self.groups
            .get(&part)
            .map(|groups| groups.keys().copied().collect())
            .unwrap_or_default()
    }

    pub fn group_entries(&self, index: GroupIndex) -> Option<&GroupEntries> {
        self.groups.get(&index.part)?.get(&index)
    }

    pub fn groups(&self, part: PartIndex) -> impl Iterator<Item = &GroupEntries> {
        self.groups
            .get(&part)
            .into_iter()
            .flat_map(|groups| groups.values())
    }

    pub fn value_indexes(&self, characteristic: CharacteristicIndex) -> Vec<ValueIndex> {
        self.values_of(characteristic)
            .map(|values| values.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Indexes of all values of all parts
    pub fn all_value_indexes(&self) -> Vec<ValueIndex> {
        self.values
            .values()
            .flat_map(|of_part| of_part.values())
            .flat_map(|of_characteristic| of_characteristic.keys().copied())
            .collect()
    }

    pub fn value_entries(&self, index: ValueIndex) -> Option<&ValueEntries> {
        self.values_of(index.characteristic)?.get(&index)
    }

    /// Values of one characteristic in value index order
    pub fn values(&self, characteristic: CharacteristicIndex) -> impl Iterator<Item = &ValueEntries> {
        self.values_of(characteristic)
            .into_iter()
            .flat_map(|values| values.values())
    }

    /// Values of all parts in index order
    pub fn all_values(&self) -> impl Iterator<Item = &ValueEntries> {
        self.values
            .values()
            .flat_map(|of_part| of_part.values())
            .flat_map(|of_characteristic| of_characteristic.values())
    }

    pub(crate) fn values_of(
        &self,
        characteristic: CharacteristicIndex,
    ) -> Option<&ValuesOfCharacteristic> {
        self.values.get(&characteristic.part)?.get(&characteristic)
    }

    pub fn catalog_record_indexes(&self) -> Vec<CatalogRecordIndex> {
        self.catalog_records.keys().copied().collect()
    }

    pub fn catalog_record_entries(&self, index: CatalogRecordIndex) -> Option<&CatalogRecordEntries> {
        self.catalog_records.get(&index)
    }

    pub fn catalog_records(&self) -> impl Iterator<Item = &CatalogRecordEntries> {
        self.catalog_records.values()
    }

    pub fn contains_part(&self, index: PartIndex) -> bool {
        self.parts.contains_key(&index)
    }

    pub fn contains_characteristic(&self, index: CharacteristicIndex) -> bool {
        self.characteristic_entries(index).is_some()
    }

    pub fn contains_value(&self, index: ValueIndex) -> bool {
        self.value_entries(index).is_some()
    }

    pub fn hierarchy(&self) -> &AqdefHierarchy {
        &self.hierarchy
    }

    pub fn set_hierarchy(&mut self, hierarchy: AqdefHierarchy) {
        self.hierarchy = hierarchy;
    }

    /// Number of characteristics of all parts
    pub fn characteristic_count(&self) -> usize {
        let mut count = 0;
        self.for_each_characteristic(|_, _| count += 1);
        count
    }

    /// Number of value rows of all characteristics
    pub fn value_count(&self) -> usize {
        let mut count = 0;
        self.for_each_value(|_, _, _| count += 1);
        count
    }

    pub fn group_count(&self) -> usize {
        let mut count = 0;
        self.for_each_group(|_, _| count += 1);
        count
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
            && self.characteristics.is_empty()
            && self.groups.is_empty()
            && self.values.is_empty()
            && self.catalog_records.is_empty()
            && self.hierarchy.is_empty()
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Remove a part with its characteristics, groups, values and hierarchy nodes
    pub fn remove_part(&mut self, index: PartIndex) -> Option<PartEntries> {
        self.characteristics.remove(&index);
        self.groups.remove(&index);
        self.values.remove(&index);
        self.hierarchy.remove_hierarchy_for_part(index);
        self.parts.remove(&index)
    }

    /// Remove a characteristic with its values and hierarchy node
    pub fn remove_characteristic(
        &mut self,
        index: CharacteristicIndex,
    ) -> Option<CharacteristicEntries> {
        self.remove_values_of(index);
        self.hierarchy.remove_hierarchy_for_characteristic(index);
        self.remove_characteristic_entries(index)
    }

    /// Remove a group with its hierarchy node
    pub fn remove_group(&mut self, index: GroupIndex) -> Option<GroupEntries> {
        self.hierarchy.remove_hierarchy_for_group(index);

        let groups = self.groups.get_mut(&index.part)?;
        let removed = groups.remove(&index);
        if groups.is_empty() {
            self.groups.remove(&index.part);
        }
        removed
    }

    pub(crate) fn remove_characteristic_entries(
        &mut self,
        index: CharacteristicIndex,
    ) -> Option<CharacteristicEntries> {
        let characteristics = self.characteristics.get_mut(&index.part)?;
        let removed = characteristics.remove(&index);
        if characteristics.is_empty() {
            self.characteristics.remove(&index.part);
        }
        removed
    }

    pub(crate) fn remove_values_of(&mut self, index: CharacteristicIndex) -> Vec<ValueEntries> {
        let Some(values_of_part) = self.values.get_mut(&index.part) else {
            return Vec::new();
        };
        let removed = values_of_part.remove(&index);
        if values_of_part.is_empty() {
            self.values.remove(&index.part);
        }
        removed
            .map(|values| values.into_values().collect())
            .unwrap_or_default()
    }
}
