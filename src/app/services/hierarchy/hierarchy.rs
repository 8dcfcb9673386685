//! Hierarchy storage, insertion and queries

use std::collections::BTreeMap;

use tracing::debug;

use super::entry::{HierarchyEntry, HierarchyIndex, is_binding, is_node_definition};
use crate::app::models::{CharacteristicIndex, GroupIndex, KKey, NodeIndex, PartIndex};
use crate::constants::hierarchy_keys;
use crate::{Error, Result};

const MIXED_HIERARCHY_MESSAGE: &str =
    "Combination of hierarchy (K51xx) and simple hierarchy (K2030/2031) is not supported.";

/// Tree relation over the characteristics and groups of a part
///
/// Holds node definitions keyed by node index and the bindings of each parent node.
/// Entries arrive either in the full encoding (K51xx) or in the simple encoding
/// (K2030/K2031 on characteristics); mixing both is rejected. Equality compares the
/// definitions and bindings only.
#[derive(Debug, Clone, Default)]
pub struct AqdefHierarchy {
    pub(crate) node_definitions: BTreeMap<NodeIndex, HierarchyEntry>,
    pub(crate) node_bindings: BTreeMap<NodeIndex, Vec<HierarchyEntry>>,
    pub(crate) contains_hierarchy_information: bool,
    pub(crate) contains_simple_hierarchy_information: bool,
}

impl PartialEq for AqdefHierarchy {
    fn eq(&self, other: &Self) -> bool {
        self.node_definitions == other.node_definitions && self.node_bindings == other.node_bindings
    }
}

impl Eq for AqdefHierarchy {}

impl AqdefHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a hierarchy record read from DFQ
    ///
    /// `index` is the index written after the K-key: a node index for K51xx keys and
    /// a characteristic index for K2030/K2031.
    pub fn put_entry(&mut self, key: &KKey, index: u32, value: u32) -> Result<()> {
        if key.is_simple_hierarchy_level() {
            return self.put_simple_hierarchy_entry(key, index, value);
        }

        if !is_node_definition(key) && !is_binding(key) {
            return Err(Error::invalid_argument(format!(
                "Unknown hierarchy entry. Key: {} Value: {}",
                key, value
            )));
        }

        self.put_hierarchy_entry(HierarchyEntry::new(key.clone(), NodeIndex(index), value)?)
    }

    /// Store a node definition or binding of the full encoding
    pub fn put_hierarchy_entry(&mut self, entry: HierarchyEntry) -> Result<()> {
        if entry.key().is_simple_hierarchy_level() {
            return Err(Error::invalid_argument(
                "Direct insertion of simple hierarchy entry is not supported.",
            ));
        }
        if self.contains_simple_hierarchy_information {
            return Err(Error::invalid_structure(MIXED_HIERARCHY_MESSAGE));
        }

        self.put_entry_internal(entry)?;
        self.contains_hierarchy_information = true;
        Ok(())
    }

    fn put_simple_hierarchy_entry(&mut self, key: &KKey, index: u32, value: u32) -> Result<()> {
        // value 0 carries no information
        if value == 0 {
            return Ok(());
        }
        if self.contains_hierarchy_information {
            return Err(Error::invalid_structure(MIXED_HIERARCHY_MESSAGE));
        }

        let entry = match key.key() {
            hierarchy_keys::SIMPLE_PARENT => {
                HierarchyEntry::known(hierarchy_keys::CHARACTERISTIC_NODE, NodeIndex(value), index)
            }
            hierarchy_keys::SIMPLE_CHILD => {
                HierarchyEntry::known(hierarchy_keys::CHARACTERISTIC_BINDING, NodeIndex(value), index)
            }
            _ => {
                return Err(Error::invalid_argument(format!(
                    "Unknown simple hierarchy entry. Key: {} Value: {}",
                    key, value
                )));
            }
        };

        self.put_entry_internal(entry)?;
        self.contains_simple_hierarchy_information = true;
        Ok(())
    }

    fn put_entry_internal(&mut self, entry: HierarchyEntry) -> Result<()> {
        if entry.is_node_definition() {
            self.node_definitions.insert(entry.index(), entry);
        } else if entry.is_binding() {
            self.node_bindings
                .entry(entry.index())
                .or_default()
                .push(entry);
        } else {
            return Err(Error::invalid_argument(format!(
                "Unknown hierarchy entry. Key: {} Value: {}",
                entry.key(),
                entry.value()
            )));
        }
        Ok(())
    }

    /// Whether entries of the full (K51xx) encoding were stored
    pub fn contains_hierarchy_information(&self) -> bool {
        self.contains_hierarchy_information
    }

    /// Whether entries of the simple (K2030/K2031) encoding were stored
    pub fn contains_simple_hierarchy_information(&self) -> bool {
        self.contains_simple_hierarchy_information
    }

    pub fn is_empty(&self) -> bool {
        self.node_definitions.is_empty() && self.node_bindings.is_empty()
    }

    /// Node definitions in node index order
    pub fn node_definitions(&self) -> impl Iterator<Item = &HierarchyEntry> {
        self.node_definitions.values()
    }

    /// Bindings in parent node order
    pub fn node_bindings(&self) -> impl Iterator<Item = &HierarchyEntry> {
        self.node_bindings.values().flatten()
    }

    pub fn for_each_node_definition<F: FnMut(&HierarchyEntry)>(&self, action: F) {
        self.node_definitions().for_each(action);
    }

    pub fn for_each_node_binding<F: FnMut(&HierarchyEntry)>(&self, action: F) {
        self.node_bindings().for_each(action);
    }

    pub fn node_definition_count(&self) -> usize {
        self.node_definitions.len()
    }

    pub fn node_binding_count(&self) -> usize {
        self.node_bindings.values().map(Vec::len).sum()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Whether the characteristic is a node with at least one binding below it
    pub fn has_children(&self, characteristic: CharacteristicIndex) -> bool {
        self.node_index_of_characteristic(characteristic)
            .and_then(|node| self.node_bindings.get(&node))
            .is_some_and(|children| !children.is_empty())
    }

    /// Parent characteristic or group of a characteristic
    pub fn parent_index_of_characteristic(
        &self,
        characteristic: CharacteristicIndex,
    ) -> Option<HierarchyIndex> {
        if let Some(parent) = self.parent_node_index_of_characteristic(characteristic) {
            // directly bound leaf
            return self.characteristic_or_group_index_of_node(parent, characteristic.part);
        }

        let node = self.node_index_of_characteristic(characteristic)?;
        let parent = self.parent_node_index_of_node(node)?;
        self.characteristic_or_group_index_of_node(parent, characteristic.part)
    }

    /// Parent characteristic or group of a group
    pub fn parent_index_of_group(&self, group: GroupIndex) -> Option<HierarchyIndex> {
        let node = self.node_index_of_group(group)?;
        let parent = self.parent_node_index_of_node(node)?;
        self.characteristic_or_group_index_of_node(parent, group.part)
    }

    /// Children of a characteristic: characteristics first, then groups, each in index order
    pub fn child_indexes_of_characteristic(
        &self,
        characteristic: CharacteristicIndex,
    ) -> Vec<HierarchyIndex> {
        self.node_index_of_characteristic(characteristic)
            .map(|node| self.child_indexes_of_node(node, characteristic.part))
            .unwrap_or_default()
    }

    /// Children of a group: characteristics first, then groups, each in index order
    pub fn child_indexes_of_group(&self, group: GroupIndex) -> Vec<HierarchyIndex> {
        self.node_index_of_group(group)
            .map(|node| self.child_indexes_of_node(node, group.part))
            .unwrap_or_default()
    }

    fn child_indexes_of_node(&self, node: NodeIndex, part: PartIndex) -> Vec<HierarchyIndex> {
        let mut children: Vec<HierarchyIndex> = self
            .node_bindings
            .get(&node)
            .into_iter()
            .flatten()
            .filter_map(|binding| {
                if binding.is_characteristic_binding() {
                    Some(HierarchyIndex::Characteristic(CharacteristicIndex::of(
                        part,
                        binding.value(),
                    )))
                } else {
                    self.characteristic_or_group_index_of_node(NodeIndex(binding.value()), part)
                }
            })
            .collect();

        // Characteristic sorts before Group
        children.sort();
        children.dedup();
        children
    }

    pub(crate) fn characteristic_or_group_index_of_node(
        &self,
        node: NodeIndex,
        part: PartIndex,
    ) -> Option<HierarchyIndex> {
        let definition = self.node_definitions.get(&node)?;
        if definition.is_characteristic_node() {
            Some(HierarchyIndex::Characteristic(CharacteristicIndex::of(
                part,
                definition.value(),
            )))
        } else if definition.is_group_node() {
            Some(HierarchyIndex::Group(GroupIndex::of(part, definition.value())))
        } else {
            None
        }
    }

    /// Parent node of a node (source of a K5103 binding pointing at it)
    pub(crate) fn parent_node_index_of_node(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.node_bindings()
            .find(|binding| binding.is_node_binding() && binding.value() == node.0)
            .map(HierarchyEntry::index)
    }

    /// Parent node of a leaf characteristic (source of a K5102 binding)
    pub(crate) fn parent_node_index_of_characteristic(
        &self,
        characteristic: CharacteristicIndex,
    ) -> Option<NodeIndex> {
        self.node_bindings()
            .find(|binding| {
                binding.is_characteristic_binding() && binding.value() == characteristic.index
            })
            .map(HierarchyEntry::index)
    }

    pub(crate) fn node_index_of_characteristic(
        &self,
        characteristic: CharacteristicIndex,
    ) -> Option<NodeIndex> {
        self.node_definitions
            .values()
            .find(|entry| entry.is_characteristic_node() && entry.value() == characteristic.index)
            .map(HierarchyEntry::index)
    }

    pub(crate) fn node_index_of_group(&self, group: GroupIndex) -> Option<NodeIndex> {
        self.node_definitions
            .values()
            .find(|entry| entry.is_group_node() && entry.value() == group.index)
            .map(HierarchyEntry::index)
    }

    pub(crate) fn node_index_of_part(&self, part: PartIndex) -> Option<NodeIndex> {
        self.node_definitions
            .values()
            .find(|entry| entry.is_part_node() && entry.value() == part.0)
            .map(HierarchyEntry::index)
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Remove the node of the part together with everything bound below it
    pub fn remove_hierarchy_for_part(&mut self, part: PartIndex) {
        if let Some(node) = self.node_index_of_part(part) {
            self.remove_node_binding_to(node);
            self.remove_node_recursive(node);
        }
    }

    /// Remove the characteristic from the hierarchy
    ///
    /// Removes its node (with everything bound below it) and the binding that attaches
    /// it to its parent.
    pub fn remove_hierarchy_for_characteristic(&mut self, characteristic: CharacteristicIndex) {
        if let Some(node) = self.node_index_of_characteristic(characteristic) {
            self.remove_node_binding_to(node);
            self.remove_node_recursive(node);
        }
        self.remove_bindings(|binding| {
            binding.is_characteristic_binding() && binding.value() == characteristic.index
        });
    }

    /// Remove the group node together with everything bound below it
    pub fn remove_hierarchy_for_group(&mut self, group: GroupIndex) {
        if let Some(node) = self.node_index_of_group(group) {
            self.remove_node_binding_to(node);
            self.remove_node_recursive(node);
        }
    }

    fn remove_node_recursive(&mut self, node: NodeIndex) {
        self.node_definitions.remove(&node);

        let Some(bindings) = self.node_bindings.remove(&node) else {
            return;
        };

        for binding in bindings {
            if !binding.is_node_binding() {
                continue;
            }
            let child = NodeIndex(binding.value());
            let walk_into = self
                .node_definitions
                .get(&child)
                .is_some_and(|definition| definition.is_characteristic_node() || definition.is_group_node());
            if walk_into {
                self.remove_node_recursive(child);
            } else {
                debug!("Hierarchy removal stopped at node {} of unknown kind", child);
            }
        }
    }

    fn remove_node_binding_to(&mut self, node: NodeIndex) {
        self.remove_bindings(|binding| binding.is_node_binding() && binding.value() == node.0);
    }

    fn remove_bindings<P: Fn(&HierarchyEntry) -> bool>(&mut self, predicate: P) {
        for bindings in self.node_bindings.values_mut() {
            bindings.retain(|binding| !predicate(binding));
        }
        self.node_bindings.retain(|_, bindings| !bindings.is_empty());
    }
}
