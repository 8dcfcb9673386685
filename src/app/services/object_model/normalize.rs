//! Expansion of "applies to all" entries and hierarchy normalization
//!
//! DFQ allows entries with index 0 that apply to every part, characteristic or
//! value. Normalization copies them onto every concrete target, never replacing a
//! value the target already has, and drops the index 0 buckets. It is idempotent.

use std::collections::BTreeMap;

use tracing::debug;

use super::model::AqdefObjectModel;
use crate::app::models::{
    CharacteristicEntries, CharacteristicIndex, GroupEntries, GroupIndex, PartEntries, PartIndex,
    ValueEntries,
};
use crate::Result;

const ALL_PARTS: PartIndex = PartIndex(0);

/// Value packs keyed by the value row they apply to
type ValuePacks = BTreeMap<u32, Vec<ValueEntries>>;

impl AqdefObjectModel {
    /// Normalize the model in place
    ///
    /// - parts owning only characteristics, groups or values get (empty) part entries
    /// - part entries with index 0 become part 1 when there is no other part, otherwise
    ///   they fill in every part
    /// - characteristic entries with index `0/0` fill in every characteristic, those
    ///   with index `p/0` every characteristic of part `p`
    /// - the k-th value row with characteristic index 0 fills in the k-th value of
    ///   every characteristic in scope
    /// - group entries with index `0/0` fill in every group
    /// - the hierarchy is normalized
    pub fn normalize(&mut self) -> Result<()> {
        self.materialize_parts();
        self.normalize_parts();
        self.normalize_characteristics_and_values();
        self.normalize_groups();

        let hierarchy = self.hierarchy.normalize(self)?;
        self.hierarchy = hierarchy;

        debug!(
            "Normalized model: {} parts, {} characteristics, {} values",
            self.parts.len(),
            self.characteristic_count(),
            self.value_count()
        );
        Ok(())
    }

    fn materialize_parts(&mut self) {
        let owners: Vec<PartIndex> = self
            .characteristics
            .keys()
            .chain(self.groups.keys())
            .chain(self.values.keys())
            .copied()
            .filter(|part| !part.applies_to_all_parts())
            .collect();

        for part in owners {
            self.parts
                .entry(part)
                .or_insert_with(|| PartEntries::new(part));
        }
    }

    fn normalize_parts(&mut self) {
        let Some(for_all_parts) = self.parts.remove(&ALL_PARTS) else {
            return;
        };
        if for_all_parts.is_empty() {
            return;
        }

        if self.parts.is_empty() {
            let first = PartIndex(1);
            self.parts.insert(first, for_all_parts.with_index(first));
        } else {
            for part in self.parts.values_mut() {
                part.put_all(&for_all_parts, false);
            }
        }
    }

    fn normalize_characteristics_and_values(&mut self) {
        let everywhere = CharacteristicIndex::of(ALL_PARTS, 0);
        let for_all_characteristics = self.remove_characteristic_entries(everywhere);
        let for_all_values = group_by_row(self.remove_values_of(everywhere));

        let part_indexes = self.part_indexes();
        for part in part_indexes {
            let of_part = CharacteristicIndex::of(part, 0);
            let for_part_characteristics = self.remove_characteristic_entries(of_part);
            let for_part_values = group_by_row(self.remove_values_of(of_part));

            if let Some(characteristics) = self.characteristics.get_mut(&part) {
                for characteristic in characteristics.values_mut() {
                    fill_characteristic(characteristic, for_part_characteristics.as_ref());
                    fill_characteristic(characteristic, for_all_characteristics.as_ref());
                }
            }

            if let Some(values_of_part) = self.values.get_mut(&part) {
                for values in values_of_part.values_mut() {
                    for value in values.values_mut() {
                        fill_value(value, &for_part_values);
                        fill_value(value, &for_all_values);
                    }
                }
            }
        }
    }

    fn normalize_groups(&mut self) {
        let everywhere = GroupIndex::of(ALL_PARTS, 0);
        let Some(for_all_groups) = self
            .groups
            .get_mut(&ALL_PARTS)
            .and_then(|groups| groups.remove(&everywhere))
        else {
            return;
        };
        if self.groups.get(&ALL_PARTS).is_some_and(|groups| groups.is_empty()) {
            self.groups.remove(&ALL_PARTS);
        }

        for groups in self.groups.values_mut() {
            for group in groups.values_mut() {
                fill_group(group, &for_all_groups);
            }
        }
    }
}

fn group_by_row(values: Vec<ValueEntries>) -> ValuePacks {
    let mut packs = ValuePacks::new();
    for value in values {
        packs.entry(value.index().index).or_default().push(value);
    }
    packs
}

fn fill_characteristic(
    characteristic: &mut CharacteristicEntries,
    defaults: Option<&CharacteristicEntries>,
) {
    if let Some(defaults) = defaults {
        characteristic.put_all(defaults, false);
    }
}

fn fill_value(value: &mut ValueEntries, packs: &ValuePacks) {
    if let Some(packs) = packs.get(&value.index().index) {
        for pack in packs {
            value.put_all(pack, false);
        }
    }
}

fn fill_group(group: &mut GroupEntries, defaults: &GroupEntries) {
    group.put_all(defaults, false);
}
