//! Builder translating id-based parent links into hierarchy nodes and bindings

use std::collections::HashMap;

use tracing::warn;

use super::entry::HierarchyEntry;
use super::hierarchy::AqdefHierarchy;
use crate::app::models::NodeIndex;
use crate::constants::hierarchy_keys;
use crate::{Error, Result};

/// Characteristic (or group) id scoped to a part; `id == None` is the part itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ParentRef {
    part: u32,
    id: Option<u32>,
}

#[derive(Debug, Clone, Copy)]
enum Node {
    Part { node: u32, part: u32 },
    Characteristic { node: u32, characteristic: u32 },
    Group { node: u32, group: u32 },
}

impl Node {
    fn to_entry(self) -> HierarchyEntry {
        match self {
            Node::Part { node, part } => {
                HierarchyEntry::known(hierarchy_keys::PART_NODE, NodeIndex(node), part)
            }
            Node::Characteristic {
                node,
                characteristic,
            } => HierarchyEntry::known(
                hierarchy_keys::CHARACTERISTIC_NODE,
                NodeIndex(node),
                characteristic,
            ),
            Node::Group { node, group } => {
                HierarchyEntry::known(hierarchy_keys::GROUP_NODE, NodeIndex(node), group)
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum BindingKind {
    Characteristic { characteristic: u32 },
    Group,
}

#[derive(Debug, Clone, Copy)]
struct BindingToParent {
    node: u32,
    parent: ParentRef,
    kind: BindingKind,
}

/// Collects nodes with the id of their parent and resolves them into a hierarchy
///
/// Characteristics and groups are identified by ids that are unique within their part;
/// a parent id of `None` (or `0`) binds the node directly to the part node.
#[derive(Debug, Default)]
pub struct AqdefHierarchyBuilder {
    contains_hierarchy: bool,
    nodes: Vec<Node>,
    bindings: Vec<BindingToParent>,
    part_nodes: HashMap<u32, u32>,
    id_nodes: HashMap<ParentRef, u32>,
}

impl AqdefHierarchyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_hierarchy_node_of_part(&mut self, node: u32, part: u32) {
        self.nodes.push(Node::Part { node, part });
        self.part_nodes.insert(part, node);
    }

    pub fn create_hierarchy_node_of_characteristic(
        &mut self,
        node: u32,
        part: u32,
        characteristic: u32,
        characteristic_id: u32,
        parent_id: Option<u32>,
    ) {
        let parent_id = parent_id.filter(|id| *id != 0);

        self.nodes.push(Node::Characteristic {
            node,
            characteristic,
        });
        self.id_nodes.insert(
            ParentRef {
                part,
                id: Some(characteristic_id),
            },
            node,
        );
        self.bindings.push(BindingToParent {
            node,
            parent: ParentRef {
                part,
                id: parent_id,
            },
            kind: BindingKind::Characteristic { characteristic },
        });

        if parent_id.is_some() {
            self.contains_hierarchy = true;
        }
    }

    pub fn create_hierarchy_node_of_group(
        &mut self,
        node: u32,
        part: u32,
        group: u32,
        characteristic_id: u32,
        parent_id: Option<u32>,
    ) {
        let parent_id = parent_id.filter(|id| *id != 0);

        self.nodes.push(Node::Group { node, group });
        self.id_nodes.insert(
            ParentRef {
                part,
                id: Some(characteristic_id),
            },
            node,
        );
        self.bindings.push(BindingToParent {
            node,
            parent: ParentRef {
                part,
                id: parent_id,
            },
            kind: BindingKind::Group,
        });

        self.contains_hierarchy = true;
    }

    /// Resolve the collected nodes
    ///
    /// Produces an empty hierarchy when no parent link or group was declared. A link
    /// to an unknown part or characteristic logs a warning and produces an empty
    /// hierarchy as well.
    pub fn build(&self) -> AqdefHierarchy {
        if !self.contains_hierarchy {
            return AqdefHierarchy::new();
        }

        match self.try_build() {
            Ok(hierarchy) => hierarchy,
            Err(e) => {
                warn!("AQDEF hierarchy was not created. Reason: {}", e);
                AqdefHierarchy::new()
            }
        }
    }

    fn try_build(&self) -> Result<AqdefHierarchy> {
        let mut hierarchy = AqdefHierarchy::new();

        for node in &self.nodes {
            hierarchy.put_hierarchy_entry(node.to_entry())?;
        }

        for binding in &self.bindings {
            let parent_node = self.parent_node_of(binding.parent)?;

            let entry = match binding.kind {
                BindingKind::Characteristic { characteristic } if !self.has_children(binding.node) => {
                    HierarchyEntry::known(
                        hierarchy_keys::CHARACTERISTIC_BINDING,
                        NodeIndex(parent_node),
                        characteristic,
                    )
                }
                _ => HierarchyEntry::known(
                    hierarchy_keys::NODE_BINDING,
                    NodeIndex(parent_node),
                    binding.node,
                ),
            };
            hierarchy.put_hierarchy_entry(entry)?;
        }

        Ok(hierarchy)
    }

    fn parent_node_of(&self, parent: ParentRef) -> Result<u32> {
        match parent.id {
            None => self.part_nodes.get(&parent.part).copied().ok_or_else(|| {
                Error::invalid_structure(format!(
                    "Part with index ({}) was not found in given data.",
                    parent.part
                ))
            }),
            Some(id) => self.id_nodes.get(&parent).copied().ok_or_else(|| {
                Error::invalid_structure(format!(
                    "Characteristic with part index {} and characteristic id {} was not found in given data.",
                    parent.part, id
                ))
            }),
        }
    }

    /// Whether some other node names the node's characteristic id as its parent
    fn has_children(&self, node: u32) -> bool {
        let Some(owner) = self
            .id_nodes
            .iter()
            .find_map(|(id, n)| (*n == node).then_some(*id))
        else {
            return false;
        };

        self.bindings.iter().any(|binding| binding.parent == owner)
    }
}
