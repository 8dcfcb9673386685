//! Iteration, filtering and search over the object model
//!
//! Traversals start from the part map: characteristics, groups and values of a part
//! index that has no part entries are not visited. Normalization creates part
//! entries for every part that owns data, so a normalized model is fully covered.

use std::collections::BTreeSet;

use super::model::AqdefObjectModel;
use super::view::ValueSet;
use crate::app::models::{
    CharacteristicEntries, CharacteristicIndex, GroupEntries, KKey, KKeyValue, Level, PartEntries,
    PartIndex, ValueEntries,
};
use crate::{Error, Result};

impl AqdefObjectModel {
    // =========================================================================
    // Iteration
    // =========================================================================

    pub fn for_each_part<F>(&self, mut action: F)
    where
        F: FnMut(&PartEntries),
    {
        self.parts.values().for_each(|part| action(part));
    }

    pub fn for_each_characteristic<F>(&self, mut action: F)
    where
        F: FnMut(&PartEntries, &CharacteristicEntries),
    {
        for part in self.parts.values() {
            for characteristic in self.characteristics(part.index()) {
                action(part, characteristic);
            }
        }
    }

    /// Visit the characteristics of a single part
    pub fn for_each_characteristic_of<F>(&self, part: PartIndex, action: F)
    where
        F: FnMut(&CharacteristicEntries),
    {
        self.characteristics(part).for_each(action);
    }

    pub fn for_each_group<F>(&self, mut action: F)
    where
        F: FnMut(&PartEntries, &GroupEntries),
    {
        for part in self.parts.values() {
            for group in self.groups(part.index()) {
                action(part, group);
            }
        }
    }

    /// Visit the groups of a single part
    pub fn for_each_group_of<F>(&self, part: PartIndex, action: F)
    where
        F: FnMut(&GroupEntries),
    {
        self.groups(part).for_each(action);
    }

    pub fn for_each_value<F>(&self, mut action: F)
    where
        F: FnMut(&PartEntries, &CharacteristicEntries, &ValueEntries),
    {
        for part in self.parts.values() {
            for characteristic in self.characteristics(part.index()) {
                for value in self.values(characteristic.index()) {
                    action(part, characteristic, value);
                }
            }
        }
    }

    /// Visit the values of all characteristics of a single part
    pub fn for_each_value_of_part<F>(&self, part: PartIndex, mut action: F)
    where
        F: FnMut(&CharacteristicEntries, &ValueEntries),
    {
        for characteristic in self.characteristics(part) {
            for value in self.values(characteristic.index()) {
                action(characteristic, value);
            }
        }
    }

    /// Visit the values of a single characteristic
    pub fn for_each_value_of_characteristic<F>(&self, characteristic: CharacteristicIndex, action: F)
    where
        F: FnMut(&ValueEntries),
    {
        self.values(characteristic).for_each(action);
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Keep the parts matching `predicate`
    ///
    /// A removed part takes its characteristics, groups and values with it.
    pub fn filter_parts<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&PartEntries) -> bool,
    {
        let removed: Vec<PartIndex> = self
            .parts
            .values()
            .filter(|part| !predicate(part))
            .map(PartEntries::index)
            .collect();

        for part in removed {
            self.parts.remove(&part);
            self.characteristics.remove(&part);
            self.groups.remove(&part);
            self.values.remove(&part);
        }
    }

    /// Keep the characteristics matching `predicate`
    ///
    /// A removed characteristic takes its values with it.
    pub fn filter_characteristics<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&PartEntries, &CharacteristicEntries) -> bool,
    {
        let mut removed = Vec::new();
        for part in self.parts.values() {
            for characteristic in self.characteristics(part.index()) {
                if !predicate(part, characteristic) {
                    removed.push(characteristic.index());
                }
            }
        }

        for characteristic in removed {
            self.remove_characteristic_entries(characteristic);
            self.remove_values_of(characteristic);
        }
    }

    /// Keep the characteristics of one part matching `predicate`
    pub fn filter_characteristics_of<P>(&mut self, part: PartIndex, mut predicate: P)
    where
        P: FnMut(&CharacteristicEntries) -> bool,
    {
        let removed: Vec<CharacteristicIndex> = self
            .characteristics(part)
            .filter(|characteristic| !predicate(characteristic))
            .map(CharacteristicEntries::index)
            .collect();

        for characteristic in removed {
            self.remove_characteristic_entries(characteristic);
            self.remove_values_of(characteristic);
        }
    }

    pub fn filter_groups<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&PartEntries, &GroupEntries) -> bool,
    {
        for part in self.parts.values() {
            if let Some(groups) = self.groups.get_mut(&part.index()) {
                groups.retain(|_, group| predicate(part, group));
            }
        }
        self.groups.retain(|_, groups| !groups.is_empty());
    }

    /// Keep the groups of one part matching `predicate`
    pub fn filter_groups_of<P>(&mut self, part: PartIndex, mut predicate: P)
    where
        P: FnMut(&GroupEntries) -> bool,
    {
        if let Some(groups) = self.groups.get_mut(&part) {
            groups.retain(|_, group| predicate(group));
            if groups.is_empty() {
                self.groups.remove(&part);
            }
        }
    }

    pub fn filter_values<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&PartEntries, &CharacteristicEntries, &ValueEntries) -> bool,
    {
        for part in self.parts.values() {
            let Some(characteristics) = self.characteristics.get(&part.index()) else {
                continue;
            };
            let Some(values_of_part) = self.values.get_mut(&part.index()) else {
                continue;
            };
            for characteristic in characteristics.values() {
                if let Some(values) = values_of_part.get_mut(&characteristic.index()) {
                    values.retain(|_, value| predicate(part, characteristic, value));
                }
            }
        }
    }

    /// Keep the values of one part matching `predicate`
    pub fn filter_values_of_part<P>(&mut self, part: PartIndex, mut predicate: P)
    where
        P: FnMut(&CharacteristicEntries, &ValueEntries) -> bool,
    {
        let Some(characteristics) = self.characteristics.get(&part) else {
            return;
        };
        let Some(values_of_part) = self.values.get_mut(&part) else {
            return;
        };
        for characteristic in characteristics.values() {
            if let Some(values) = values_of_part.get_mut(&characteristic.index()) {
                values.retain(|_, value| predicate(characteristic, value));
            }
        }
    }

    /// Keep the values of one characteristic matching `predicate`
    pub fn filter_values_of_characteristic<P>(
        &mut self,
        characteristic: CharacteristicIndex,
        mut predicate: P,
    ) where
        P: FnMut(&ValueEntries) -> bool,
    {
        if let Some(values) = self
            .values
            .get_mut(&characteristic.part)
            .and_then(|values_of_part| values_of_part.get_mut(&characteristic))
        {
            values.retain(|_, value| predicate(value));
        }
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Part owning the first characteristic (in index order) with the given number
    pub fn find_part_index_for_characteristic(&self, characteristic: u32) -> Option<PartIndex> {
        self.characteristics
            .values()
            .flat_map(|characteristics| characteristics.keys())
            .find(|index| index.index == characteristic)
            .map(|index| index.part)
    }

    /// Characteristics of a part matching `predicate`
    pub fn find_characteristic_indexes_for_part<P>(
        &self,
        part: PartIndex,
        mut predicate: P,
    ) -> BTreeSet<CharacteristicIndex>
    where
        P: FnMut(&CharacteristicEntries) -> bool,
    {
        self.characteristics(part)
            .filter(|characteristic| predicate(characteristic))
            .map(CharacteristicEntries::index)
            .collect()
    }

    /// Some value of `key` stored at the key's level
    ///
    /// Which occurrence is returned is unspecified. Fails for keys outside of the
    /// part, characteristic, group and value levels.
    pub fn get_any_value_of(&self, key: &KKey) -> Result<Option<&KKeyValue>> {
        let value = match key.level() {
            Level::Part | Level::CustomPart => {
                self.parts.values().find_map(|part| part.get_value(key))
            }
            Level::Characteristic | Level::CustomCharacteristic => self
                .characteristics
                .values()
                .flat_map(|characteristics| characteristics.values())
                .find_map(|characteristic| characteristic.get_value(key)),
            Level::Group => self
                .groups
                .values()
                .flat_map(|groups| groups.values())
                .find_map(|group| group.get_value(key)),
            Level::Value | Level::CustomValue => {
                self.all_values().find_map(|value| value.get_value(key))
            }
            _ => {
                return Err(Error::invalid_argument(format!(
                    "Invalid K-key {}. Value can be obtained only for part / characteristic / group / value keys.",
                    key
                )));
            }
        };
        Ok(value)
    }

    /// Values of a part transposed into rows
    ///
    /// The k-th set holds the k-th value of every characteristic that has at least
    /// k values.
    pub fn get_value_sets(&self, part: PartIndex) -> Vec<ValueSet<'_>> {
        let mut value_sets: Vec<ValueSet<'_>> = Vec::new();

        let Some(values_of_part) = self.values.get(&part) else {
            return value_sets;
        };

        for (characteristic, values) in values_of_part {
            for (position, value) in values.values().enumerate() {
                if position >= value_sets.len() {
                    value_sets.push(ValueSet::default());
                }
                value_sets[position].add_value_of_characteristic(*characteristic, value);
            }
        }

        value_sets
    }
}
