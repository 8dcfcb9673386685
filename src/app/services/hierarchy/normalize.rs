//! Conversion of the simple hierarchy encoding into the full one
//!
//! A hierarchy read from K2030/K2031 records has characteristic nodes and bindings
//! but no part node, and characteristics outside of any grouping are not bound at
//! all. Normalization rebuilds it per part: a fresh part node is the root, every
//! characteristic node is re-emitted under a new node index, root characteristic
//! nodes and orphan characteristics are bound to the part node.

use std::collections::HashMap;
use std::ptr;

use tracing::debug;

use super::entry::HierarchyEntry;
use super::hierarchy::AqdefHierarchy;
use crate::app::models::NodeIndex;
use crate::app::services::object_model::AqdefObjectModel;
use crate::constants::hierarchy_keys;
use crate::{Error, Result};

impl AqdefHierarchy {
    /// Return the normalized form of this hierarchy
    ///
    /// `model` must be the model owning this hierarchy. A hierarchy in the full
    /// encoding (or an empty one) is returned unchanged.
    pub fn normalize(&self, model: &AqdefObjectModel) -> Result<AqdefHierarchy> {
        if !ptr::eq(self, model.hierarchy()) {
            return Err(Error::invalid_argument(
                "The provided AQDEF model does not contain this hierarchy.",
            ));
        }

        if !self.contains_simple_hierarchy_information {
            return Ok(self.clone());
        }

        self.normalize_simple_hierarchy(model)
    }

    fn normalize_simple_hierarchy(&self, model: &AqdefObjectModel) -> Result<AqdefHierarchy> {
        for definition in self.node_definitions() {
            if definition.is_part_node() {
                return Err(Error::invalid_structure(
                    "Hierarchy was created from a simple characteristics grouping. \
                     It should not contain any part node element, but it does.",
                ));
            }
            if definition.is_group_node() {
                return Err(Error::invalid_structure(
                    "Hierarchy was created from a simple characteristics grouping. \
                     It should not contain any logical group node element, but it does.",
                ));
            }
        }

        let mut normalized = AqdefHierarchy::new();
        let mut node_counter = 0u32;
        let mut next_node = || {
            node_counter += 1;
            NodeIndex(node_counter)
        };

        for part in model.part_indexes() {
            let part_node = next_node();
            normalized.put_hierarchy_entry(HierarchyEntry::known(
                hierarchy_keys::PART_NODE,
                part_node,
                part.0,
            ))?;

            let mut remapped: HashMap<NodeIndex, NodeIndex> = HashMap::new();
            for definition in self.node_definitions() {
                let node = next_node();
                normalized.put_hierarchy_entry(HierarchyEntry::known(
                    hierarchy_keys::CHARACTERISTIC_NODE,
                    node,
                    definition.value(),
                ))?;
                remapped.insert(definition.index(), node);
            }

            for definition in self.node_definitions() {
                if self.parent_node_index_of_node(definition.index()).is_some() {
                    continue;
                }
                let node = remap(&remapped, definition.index())?;
                normalized.put_hierarchy_entry(HierarchyEntry::known(
                    hierarchy_keys::NODE_BINDING,
                    part_node,
                    node.0,
                ))?;
            }

            for binding in self.node_bindings() {
                let source = remap(&remapped, binding.index())?;
                let target = if binding.is_node_binding() {
                    remap(&remapped, NodeIndex(binding.value()))?.0
                } else {
                    binding.value()
                };
                normalized.put_hierarchy_entry(HierarchyEntry::new(
                    binding.key().clone(),
                    source,
                    target,
                )?)?;
            }

            for characteristic in model.characteristic_indexes(part) {
                if self.node_index_of_characteristic(characteristic).is_some()
                    || self
                        .parent_node_index_of_characteristic(characteristic)
                        .is_some()
                {
                    continue;
                }
                normalized.put_hierarchy_entry(HierarchyEntry::known(
                    hierarchy_keys::CHARACTERISTIC_BINDING,
                    part_node,
                    characteristic.index,
                ))?;
            }
        }

        debug!(
            "Normalized simple hierarchy: {} node definitions, {} bindings",
            normalized.node_definition_count(),
            normalized.node_binding_count()
        );

        Ok(normalized)
    }
}

fn remap(remapped: &HashMap<NodeIndex, NodeIndex>, node: NodeIndex) -> Result<NodeIndex> {
    remapped.get(&node).copied().ok_or_else(|| {
        Error::invalid_structure(format!(
            "Simple hierarchy refers to node {} that is not defined by any K2030 record",
            node
        ))
    })
}
