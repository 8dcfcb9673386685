//! Catalog kinds

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// AQDEF catalog
///
/// EVENT, CAUSE and MEASURE share one physical table; their records are told apart
/// by id ranges outside of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Catalog {
    Supplier,
    Customer,
    Employee,
    Operator,
    Machine,
    Tool,
    Manufacturer,
    Material,
    Unit,
    Drawing,
    Product,
    PurchaseOrder,
    Event,
    Cause,
    Measure,
    OrdinalClass,
    Contractor,
    Gage,
    ProcessParameter,
    K0061,
    K0062,
    K0063,
}

impl Catalog {
    pub const ALL: [Catalog; 22] = [
        Catalog::Supplier,
        Catalog::Customer,
        Catalog::Employee,
        Catalog::Operator,
        Catalog::Machine,
        Catalog::Tool,
        Catalog::Manufacturer,
        Catalog::Material,
        Catalog::Unit,
        Catalog::Drawing,
        Catalog::Product,
        Catalog::PurchaseOrder,
        Catalog::Event,
        Catalog::Cause,
        Catalog::Measure,
        Catalog::OrdinalClass,
        Catalog::Contractor,
        Catalog::Gage,
        Catalog::ProcessParameter,
        Catalog::K0061,
        Catalog::K0062,
        Catalog::K0063,
    ];

    /// Name of the Q-DAS database table holding the catalog
    pub fn table_name(self) -> &'static str {
        match self {
            Catalog::Supplier => "LIEFERAN",
            Catalog::Customer => "KUNDE",
            Catalog::Employee => "MITARB",
            Catalog::Operator => "PRUEFER",
            Catalog::Machine => "MASCHINE",
            Catalog::Tool => "NEST",
            Catalog::Manufacturer => "HERSTELL",
            Catalog::Material => "WERKSTOF",
            Catalog::Unit => "EINHEIT",
            Catalog::Drawing => "ZEICHN",
            Catalog::Product => "ERZEUGNIS",
            Catalog::PurchaseOrder => "PAUFTRAG",
            Catalog::Event | Catalog::Cause | Catalog::Measure => "EREIGTXT",
            Catalog::OrdinalClass => "ORDKLASS",
            Catalog::Contractor => "AUFTRGEB",
            Catalog::Gage => "PRUEFMIT",
            Catalog::ProcessParameter => "PROZPARAMTXT",
            Catalog::K0061 => "KAT_4270",
            Catalog::K0062 => "KAT_4280",
            Catalog::K0063 => "KAT_4290",
        }
    }

    /// Upper snake case name, e.g. `PURCHASE_ORDER`
    pub fn name(self) -> &'static str {
        match self {
            Catalog::Supplier => "SUPPLIER",
            Catalog::Customer => "CUSTOMER",
            Catalog::Employee => "EMPLOYEE",
            Catalog::Operator => "OPERATOR",
            Catalog::Machine => "MACHINE",
            Catalog::Tool => "TOOL",
            Catalog::Manufacturer => "MANUFACTURER",
            Catalog::Material => "MATERIAL",
            Catalog::Unit => "UNIT",
            Catalog::Drawing => "DRAWING",
            Catalog::Product => "PRODUCT",
            Catalog::PurchaseOrder => "PURCHASE_ORDER",
            Catalog::Event => "EVENT",
            Catalog::Cause => "CAUSE",
            Catalog::Measure => "MEASURE",
            Catalog::OrdinalClass => "ORDINAL_CLASS",
            Catalog::Contractor => "CONTRACTOR",
            Catalog::Gage => "GAGE",
            Catalog::ProcessParameter => "PROCESS_PARAMETER",
            Catalog::K0061 => "K0061",
            Catalog::K0062 => "K0062",
            Catalog::K0063 => "K0063",
        }
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Catalog {
    type Err = Error;

    /// Case-insensitive; `-` is accepted in place of `_`
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Catalog::ALL
            .iter()
            .copied()
            .find(|catalog| catalog.name() == normalized)
            .ok_or_else(|| Error::invalid_argument(format!("Unknown catalog: {}", s)))
    }
}

/// Role of a field within its catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CatalogFieldType {
    /// Surrogate key of the catalog record
    Id,
    /// Actual data of the catalog record
    Data,
    /// Whether the record is active or soft deleted
    State,
}

impl fmt::Display for CatalogFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CatalogFieldType::Id => "ID",
            CatalogFieldType::Data => "DATA",
            CatalogFieldType::State => "STATE",
        })
    }
}
