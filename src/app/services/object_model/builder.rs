//! Cursor based construction of an object model

use super::model::AqdefObjectModel;
use crate::app::models::{
    CatalogRecordIndex, CharacteristicIndex, GroupIndex, KKey, KKeyValue, PartIndex, ValueIndex,
};
use crate::app::services::hierarchy::AqdefHierarchyBuilder;
use crate::Result;

/// Builds an [`AqdefObjectModel`] by moving cursors over parts, characteristics,
/// groups, values and catalog records
///
/// All cursors start at 1. Moving to the next characteristic resets the value
/// cursor. Hierarchy nodes are numbered in creation order and attached to the
/// current part, characteristic or group.
///
/// ```rust
/// use aqdef::{AqdefObjectModelBuilder, CharacteristicIndex, KKeyValue};
///
/// # fn example() -> aqdef::Result<()> {
/// let mut builder = AqdefObjectModelBuilder::new();
/// builder.create_part_entry("K1001", KKeyValue::from("P1"))?;
/// builder.create_characteristic_entry("K2001", KKeyValue::from("C1"))?;
/// builder.create_value_entry("K0001", KKeyValue::from(1))?;
///
/// let model = builder.build();
/// assert!(model.contains_characteristic(CharacteristicIndex::new(1, 1)));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AqdefObjectModelBuilder {
    model: AqdefObjectModel,
    hierarchy_builder: AqdefHierarchyBuilder,
    part_index: u32,
    characteristic_index: u32,
    value_index: u32,
    group_index: u32,
    catalog_record_index: u32,
    hierarchy_node_index: u32,
}

impl Default for AqdefObjectModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AqdefObjectModelBuilder {
    pub fn new() -> Self {
        Self {
            model: AqdefObjectModel::new(),
            hierarchy_builder: AqdefHierarchyBuilder::new(),
            part_index: 1,
            characteristic_index: 1,
            value_index: 1,
            group_index: 1,
            catalog_record_index: 1,
            hierarchy_node_index: 1,
        }
    }

    /// Finish the model, resolving the collected hierarchy nodes
    pub fn build(self) -> AqdefObjectModel {
        let mut model = self.model;
        model.set_hierarchy(self.hierarchy_builder.build());
        model
    }

    pub fn create_part_entry(
        &mut self,
        key: impl Into<KKey>,
        value: impl Into<Option<KKeyValue>>,
    ) -> Result<()> {
        let index = self.current_part_index();
        self.model.put_part_entry(&key.into(), index, value)
    }

    /// Set a part value on one part, or on every existing part when `part` is 0
    pub fn replace_part_entry(
        &mut self,
        key: impl Into<KKey>,
        part: u32,
        value: impl Into<Option<KKeyValue>>,
    ) -> Result<()> {
        let key = key.into();
        let value = value.into();
        let parts = if part == 0 {
            self.model.part_indexes()
        } else {
            vec![PartIndex(part)]
        };

        for part in parts {
            self.model.put_part_entry(&key, part, value.clone())?;
        }
        Ok(())
    }

    pub fn create_characteristic_entry(
        &mut self,
        key: impl Into<KKey>,
        value: impl Into<Option<KKeyValue>>,
    ) -> Result<()> {
        let index = self.current_characteristic_index();
        self.model.put_characteristic_entry(&key.into(), index, value)
    }

    /// Set a characteristic value on the addressed characteristics
    ///
    /// A `part` of 0 addresses every existing part, a `characteristic` of 0 every
    /// existing characteristic of the addressed parts.
    pub fn replace_characteristic_entry(
        &mut self,
        key: impl Into<KKey>,
        part: u32,
        characteristic: u32,
        value: impl Into<Option<KKeyValue>>,
    ) -> Result<()> {
        let key = key.into();
        let value = value.into();
        let parts = if part == 0 {
            self.model.part_indexes()
        } else {
            vec![PartIndex(part)]
        };

        for part in parts {
            let characteristics = if characteristic == 0 {
                self.model.characteristic_indexes(part)
            } else {
                vec![CharacteristicIndex::of(part, characteristic)]
            };
            for characteristic in characteristics {
                self.model
                    .put_characteristic_entry(&key, characteristic, value.clone())?;
            }
        }
        Ok(())
    }

    pub fn create_group_entry(
        &mut self,
        key: impl Into<KKey>,
        value: impl Into<Option<KKeyValue>>,
    ) -> Result<()> {
        let index = self.current_group_index();
        self.model.put_group_entry(&key.into(), index, value)
    }

    pub fn create_value_entry(
        &mut self,
        key: impl Into<KKey>,
        value: impl Into<Option<KKeyValue>>,
    ) -> Result<()> {
        let index = self.current_value_index();
        self.model.put_value_entry(&key.into(), index, value)
    }

    pub fn create_catalog_record_entry(
        &mut self,
        key: impl Into<KKey>,
        value: impl Into<Option<KKeyValue>>,
    ) -> Result<()> {
        let index = CatalogRecordIndex(self.catalog_record_index);
        self.model.put_catalog_record_entry(&key.into(), index, value)
    }

    pub fn create_hierarchy_node_of_part(&mut self) {
        let node = self.next_hierarchy_node_index();
        self.hierarchy_builder
            .create_hierarchy_node_of_part(node, self.part_index);
    }

    /// Node of the current characteristic; `parent_id` names the parent
    /// characteristic or group by its id, `None` or 0 binds it to the part
    pub fn create_hierarchy_node_of_characteristic(&mut self, id: u32, parent_id: Option<u32>) {
        let node = self.next_hierarchy_node_index();
        self.hierarchy_builder.create_hierarchy_node_of_characteristic(
            node,
            self.part_index,
            self.characteristic_index,
            id,
            parent_id,
        );
    }

    /// Node of the current group; see [`Self::create_hierarchy_node_of_characteristic`]
    pub fn create_hierarchy_node_of_group(&mut self, id: u32, parent_id: Option<u32>) {
        let node = self.next_hierarchy_node_index();
        self.hierarchy_builder.create_hierarchy_node_of_group(
            node,
            self.part_index,
            self.group_index,
            id,
            parent_id,
        );
    }

    pub fn next_part(&mut self) {
        self.part_index += 1;
    }

    pub fn next_characteristic(&mut self) {
        self.characteristic_index += 1;
        self.value_index = 1;
    }

    pub fn next_value(&mut self) {
        self.value_index += 1;
    }

    pub fn next_group(&mut self) {
        self.group_index += 1;
    }

    pub fn next_catalog_record(&mut self) {
        self.catalog_record_index += 1;
    }

    fn next_hierarchy_node_index(&mut self) -> u32 {
        let node = self.hierarchy_node_index;
        self.hierarchy_node_index += 1;
        node
    }

    fn current_part_index(&self) -> PartIndex {
        PartIndex(self.part_index)
    }

    fn current_characteristic_index(&self) -> CharacteristicIndex {
        CharacteristicIndex::of(self.current_part_index(), self.characteristic_index)
    }

    fn current_group_index(&self) -> GroupIndex {
        GroupIndex::of(self.current_part_index(), self.group_index)
    }

    fn current_value_index(&self) -> ValueIndex {
        ValueIndex::of(self.current_characteristic_index(), self.value_index)
    }
}
