//! Hierarchy entries and the K-keys with a fixed hierarchy meaning

use std::fmt;

use serde::Serialize;

use crate::app::models::{CharacteristicIndex, GroupIndex, KKey, NodeIndex};
use crate::constants::hierarchy_keys;
use crate::{Error, Result};

/// One hierarchy record: a node definition or a binding
///
/// For node definitions (K5111/K5112/K5113) `value` is the part, characteristic or
/// group index the node stands for. For bindings `index` is the parent node and
/// `value` the child node (K5103) or the child characteristic (K5102).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HierarchyEntry {
    key: KKey,
    index: NodeIndex,
    value: u32,
}

impl HierarchyEntry {
    /// Create an entry; the key must be a hierarchy (K51xx) key
    pub fn new(key: KKey, index: NodeIndex, value: u32) -> Result<Self> {
        if !key.is_hierarchy_level() {
            return Err(Error::invalid_argument(format!(
                "K-Key of hierarchy type expected, but found: {}",
                key
            )));
        }
        Ok(Self { key, index, value })
    }

    /// Entry for one of the well-known hierarchy keys
    pub(crate) fn known(key: &str, index: NodeIndex, value: u32) -> Self {
        Self {
            key: KKey::of(key),
            index,
            value,
        }
    }

    pub fn key(&self) -> &KKey {
        &self.key
    }

    pub fn index(&self) -> NodeIndex {
        self.index
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_part_node(&self) -> bool {
        self.key.key() == hierarchy_keys::PART_NODE
    }

    pub fn is_characteristic_node(&self) -> bool {
        self.key.key() == hierarchy_keys::CHARACTERISTIC_NODE
    }

    pub fn is_group_node(&self) -> bool {
        self.key.key() == hierarchy_keys::GROUP_NODE
    }

    pub fn is_node_definition(&self) -> bool {
        is_node_definition(&self.key)
    }

    pub fn is_node_binding(&self) -> bool {
        self.key.key() == hierarchy_keys::NODE_BINDING
    }

    pub fn is_characteristic_binding(&self) -> bool {
        self.key.key() == hierarchy_keys::CHARACTERISTIC_BINDING
    }

    pub fn is_binding(&self) -> bool {
        is_binding(&self.key)
    }
}

impl fmt::Display for HierarchyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {}", self.key, self.index, self.value)
    }
}

pub(crate) fn is_node_definition(key: &KKey) -> bool {
    matches!(
        key.key(),
        hierarchy_keys::PART_NODE | hierarchy_keys::CHARACTERISTIC_NODE | hierarchy_keys::GROUP_NODE
    )
}

pub(crate) fn is_binding(key: &KKey) -> bool {
    matches!(
        key.key(),
        hierarchy_keys::NODE_BINDING | hierarchy_keys::CHARACTERISTIC_BINDING
    )
}

/// Characteristic or group taking part in the hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum HierarchyIndex {
    Characteristic(CharacteristicIndex),
    Group(GroupIndex),
}

impl HierarchyIndex {
    pub fn as_characteristic(self) -> Option<CharacteristicIndex> {
        match self {
            HierarchyIndex::Characteristic(index) => Some(index),
            HierarchyIndex::Group(_) => None,
        }
    }

    pub fn as_group(self) -> Option<GroupIndex> {
        match self {
            HierarchyIndex::Group(index) => Some(index),
            HierarchyIndex::Characteristic(_) => None,
        }
    }
}
