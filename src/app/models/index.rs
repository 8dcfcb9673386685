//! Indexes addressing entries of the object model
//!
//! Index `0` is the "applies to all" sentinel: a part entry with index 0 applies to
//! every part, a characteristic with index 0 to every characteristic of its part.
//! Composite indexes order lexicographically over their components.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartIndex(pub u32);

impl PartIndex {
    pub fn of(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> u32 {
        self.0
    }

    /// Whether this is the "applies to all parts" sentinel
    pub fn applies_to_all_parts(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for PartIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of a hierarchy node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub fn of(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of a catalog record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CatalogRecordIndex(pub u32);

impl CatalogRecordIndex {
    pub fn of(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CatalogRecordIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of a characteristic within a part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CharacteristicIndex {
    pub part: PartIndex,
    pub index: u32,
}

impl CharacteristicIndex {
    pub fn of(part: PartIndex, index: u32) -> Self {
        Self { part, index }
    }

    /// Shorthand for `CharacteristicIndex::of(PartIndex(part), index)`
    pub fn new(part: u32, index: u32) -> Self {
        Self::of(PartIndex(part), index)
    }

    pub fn part_index(self) -> PartIndex {
        self.part
    }

    pub fn index(self) -> u32 {
        self.index
    }

    /// Whether this is the "applies to all characteristics of the part" sentinel
    pub fn applies_to_all_characteristics(self) -> bool {
        self.index == 0
    }
}

impl fmt::Display for CharacteristicIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.part, self.index)
    }
}

/// Index of a group within a part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupIndex {
    pub part: PartIndex,
    pub index: u32,
}

impl GroupIndex {
    pub fn of(part: PartIndex, index: u32) -> Self {
        Self { part, index }
    }

    pub fn new(part: u32, index: u32) -> Self {
        Self::of(PartIndex(part), index)
    }

    pub fn part_index(self) -> PartIndex {
        self.part
    }

    pub fn index(self) -> u32 {
        self.index
    }
}

impl fmt::Display for GroupIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.part, self.index)
    }
}

/// Index of a measured value (row) of a characteristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ValueIndex {
    pub characteristic: CharacteristicIndex,
    pub index: u32,
}

impl ValueIndex {
    pub fn of(characteristic: CharacteristicIndex, index: u32) -> Self {
        Self {
            characteristic,
            index,
        }
    }

    pub fn new(part: u32, characteristic: u32, index: u32) -> Self {
        Self::of(CharacteristicIndex::new(part, characteristic), index)
    }

    pub fn part_index(self) -> PartIndex {
        self.characteristic.part
    }

    pub fn characteristic_index(self) -> CharacteristicIndex {
        self.characteristic
    }

    pub fn index(self) -> u32 {
        self.index
    }

    /// Whether the value applies to all values of every characteristic of the part
    pub fn applies_to_all_values(self) -> bool {
        self.characteristic.applies_to_all_characteristics()
    }
}

impl fmt::Display for ValueIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.characteristic, self.index)
    }
}
