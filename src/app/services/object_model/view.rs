//! Read-only views combining entries of several levels

use std::collections::BTreeMap;

use tracing::warn;

use super::model::AqdefObjectModel;
use crate::app::models::{
    CharacteristicEntries, CharacteristicIndex, KKey, KKeyValue, Level, PartEntries, ValueEntries,
    ValueIndex,
};

/// One row of measured values: the k-th value of each characteristic of a part
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueSet<'a> {
    values_of_characteristics: BTreeMap<CharacteristicIndex, &'a ValueEntries>,
}

impl<'a> ValueSet<'a> {
    pub(crate) fn add_value_of_characteristic(
        &mut self,
        characteristic: CharacteristicIndex,
        values: &'a ValueEntries,
    ) {
        self.values_of_characteristics.insert(characteristic, values);
    }

    pub fn characteristic_indexes(&self) -> Vec<CharacteristicIndex> {
        self.values_of_characteristics.keys().copied().collect()
    }

    pub fn values_of_characteristic(&self, characteristic: CharacteristicIndex) -> Option<&'a ValueEntries> {
        self.values_of_characteristics.get(&characteristic).copied()
    }

    pub fn values(&self) -> impl Iterator<Item = &'a ValueEntries> + '_ {
        self.values_of_characteristics.values().copied()
    }

    pub fn len(&self) -> usize {
        self.values_of_characteristics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values_of_characteristics.is_empty()
    }
}

/// Part and characteristic entries looked up as one
#[derive(Debug, Clone, Copy)]
pub struct CharacteristicView<'a> {
    part: &'a PartEntries,
    characteristic: &'a CharacteristicEntries,
}

impl<'a> CharacteristicView<'a> {
    pub fn new(part: &'a PartEntries, characteristic: &'a CharacteristicEntries) -> Self {
        Self {
            part,
            characteristic,
        }
    }

    pub fn part(&self) -> &'a PartEntries {
        self.part
    }

    pub fn characteristic(&self) -> &'a CharacteristicEntries {
        self.characteristic
    }

    /// Value of a part or characteristic level key; other levels yield `None`
    pub fn get_value(&self, key: &KKey) -> Option<&'a KKeyValue> {
        match key.level() {
            Level::Part | Level::CustomPart => self.part.get_value(key),
            Level::Characteristic | Level::CustomCharacteristic => {
                self.characteristic.get_value(key)
            }
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a KKeyValue> {
        self.get_value(&KKey::of(key))
    }
}

/// Part, characteristic and value entries looked up as one
#[derive(Debug, Clone, Copy)]
pub struct ValueView<'a> {
    part: &'a PartEntries,
    characteristic: &'a CharacteristicEntries,
    value: &'a ValueEntries,
}

impl<'a> ValueView<'a> {
    pub fn new(
        part: &'a PartEntries,
        characteristic: &'a CharacteristicEntries,
        value: &'a ValueEntries,
    ) -> Self {
        Self {
            part,
            characteristic,
            value,
        }
    }

    pub fn part(&self) -> &'a PartEntries {
        self.part
    }

    pub fn characteristic(&self) -> &'a CharacteristicEntries {
        self.characteristic
    }

    pub fn value(&self) -> &'a ValueEntries {
        self.value
    }

    /// Value of a part, characteristic or value level key
    pub fn get_value(&self, key: &KKey) -> Option<&'a KKeyValue> {
        match key.level() {
            Level::Part | Level::CustomPart => self.part.get_value(key),
            Level::Characteristic | Level::CustomCharacteristic => {
                self.characteristic.get_value(key)
            }
            Level::Value | Level::CustomValue => self.value.get_value(key),
            level => {
                warn!("K-key {} of {} level is not available in a value view", key, level);
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a KKeyValue> {
        self.get_value(&KKey::of(key))
    }
}

impl AqdefObjectModel {
    /// View of a characteristic together with its part
    pub fn characteristic_view(&self, index: CharacteristicIndex) -> Option<CharacteristicView<'_>> {
        Some(CharacteristicView::new(
            self.part_entries(index.part)?,
            self.characteristic_entries(index)?,
        ))
    }

    /// View of a value row together with its characteristic and part
    pub fn value_view(&self, index: ValueIndex) -> Option<ValueView<'_>> {
        Some(ValueView::new(
            self.part_entries(index.part_index())?,
            self.characteristic_entries(index.characteristic)?,
            self.value_entries(index)?,
        ))
    }
}
