//! Static catalog field table

use super::kind::{Catalog, CatalogFieldType};
use crate::app::models::DataType;

/// One row of the catalog field table
#[derive(Debug, Clone, Copy)]
pub struct CatalogFieldDefinition {
    pub catalog: Catalog,
    pub key: &'static str,
    pub column_name: &'static str,
    pub data_type: DataType,
    pub length: Option<u32>,
    pub field_type: CatalogFieldType,
}

impl CatalogFieldDefinition {
    pub const fn new(
        catalog: Catalog,
        key: &'static str,
        column_name: &'static str,
        data_type: DataType,
    ) -> Self {
        Self {
            catalog,
            key,
            column_name,
            data_type,
            length: None,
            field_type: CatalogFieldType::Data,
        }
    }

    pub const fn length(self, length: u32) -> Self {
        Self {
            length: Some(length),
            ..self
        }
    }

    pub const fn id(self) -> Self {
        Self {
            field_type: CatalogFieldType::Id,
            ..self
        }
    }

    pub const fn state(self) -> Self {
        Self {
            field_type: CatalogFieldType::State,
            ..self
        }
    }
}

pub const CATALOG_FIELDS: &[CatalogFieldDefinition] = &[
    CatalogFieldDefinition::new(Catalog::Supplier, "K4020_ID", "LILFDNR", DataType::Integer).id(),
    CatalogFieldDefinition::new(Catalog::Supplier, "K4022", "LINR", DataType::String).length(20),
    CatalogFieldDefinition::new(Catalog::Supplier, "K4023", "LINAME1", DataType::String).length(80),
    CatalogFieldDefinition::new(Catalog::Supplier, "K4024", "LINAME2", DataType::String).length(80),
    CatalogFieldDefinition::new(Catalog::Supplier, "K4025", "LIWERKSSCHL", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Supplier, "K4026", "LIWERK", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Supplier, "K4027", "LISTRASSE", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Supplier, "K4028", "LIORT", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Supplier, "K4029", "LILAND", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Supplier, "K4521", "LISTATE", DataType::Integer).state(),
    CatalogFieldDefinition::new(Catalog::Supplier, "K4522", "LIMEMO", DataType::String).length(255),
    CatalogFieldDefinition::new(Catalog::Customer, "K4000_ID", "KULFDNR", DataType::Integer).id(),
    CatalogFieldDefinition::new(Catalog::Customer, "K4002", "KUNR", DataType::String).length(20),
    CatalogFieldDefinition::new(Catalog::Customer, "K4003", "KUNAME1", DataType::String).length(80),
    CatalogFieldDefinition::new(Catalog::Customer, "K4004", "KUNAME2", DataType::String).length(80),
    CatalogFieldDefinition::new(Catalog::Customer, "K4005", "KUWERKSSCHL", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Customer, "K4006", "KUWERK", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Customer, "K4007", "KUSTRASSE", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Customer, "K4008", "KUORT", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Customer, "K4009", "KULAND", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Customer, "K4501", "KUSTATE", DataType::Integer).state(),
    CatalogFieldDefinition::new(Catalog::Customer, "K4502", "KUMEMO", DataType::String).length(255),
    CatalogFieldDefinition::new(Catalog::Employee, "K4120_ID", "MIMITARB", DataType::Integer).id(),
    CatalogFieldDefinition::new(Catalog::Employee, "K4122", "MINAME1", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Employee, "K4123", "MINAME2", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Employee, "K4124", "MIABT", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Employee, "K4125", "MITELEFON", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Employee, "K4126", "MIFAX", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Employee, "K4127", "MIEMAIL", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Employee, "K4128", "MIPOS", DataType::String).length(30),
    CatalogFieldDefinition::new(Catalog::Employee, "K4129", "MIANREDE", DataType::String).length(15),
    CatalogFieldDefinition::new(Catalog::Employee, "K4621", "MISTATE", DataType::Integer).state(),
    CatalogFieldDefinition::new(Catalog::Employee, "K4622", "MIBEMERK", DataType::String).length(200),
    CatalogFieldDefinition::new(Catalog::Operator, "K4090_ID", "PRPRUEFER", DataType::Integer).id(),
    CatalogFieldDefinition::new(Catalog::Operator, "K4092", "PRNAME", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Operator, "K4093", "PRVORNAME", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Operator, "K4094", "PRABT", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Operator, "K4095", "PRTELEFON", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Operator, "K4096", "PRFAX", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Operator, "K4097", "PREMAIL", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Operator, "K4098", "PRPOS", DataType::String).length(30),
    CatalogFieldDefinition::new(Catalog::Operator, "K4099", "PRANREDE", DataType::String).length(15),
    CatalogFieldDefinition::new(Catalog::Operator, "K4591", "PRSTATE", DataType::Integer).state(),
    CatalogFieldDefinition::new(Catalog::Operator, "K4592", "PRBEMERK", DataType::String).length(200),
    CatalogFieldDefinition::new(Catalog::Machine, "K4060_ID", "MAMASCHINE", DataType::Integer).id(),
    CatalogFieldDefinition::new(Catalog::Machine, "K4062", "MANR", DataType::String).length(40),
    CatalogFieldDefinition::new(Catalog::Machine, "K4063", "MABEZ", DataType::String).length(100),
    CatalogFieldDefinition::new(Catalog::Machine, "K4064", "MABEREICH", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Machine, "K4065", "MAABT", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Machine, "K4066", "MAOPNR", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Machine, "K4067", "MAEXTREFNR", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Machine, "K4561", "MASTATE", DataType::Integer).state(),
    CatalogFieldDefinition::new(Catalog::Machine, "K4562", "MABESCH", DataType::String).length(200),
    CatalogFieldDefinition::new(Catalog::Tool, "K4250_ID", "NENEST", DataType::Integer).id(),
    CatalogFieldDefinition::new(Catalog::Tool, "K4252", "NEBESCH", DataType::String).length(80),
    CatalogFieldDefinition::new(Catalog::Tool, "K4253", "SMART_NENR", DataType::String).length(100),
    CatalogFieldDefinition::new(Catalog::Tool, "K4751", "NESTATE", DataType::Integer).state(),
    CatalogFieldDefinition::new(Catalog::Tool, "K4752", "NEBEMERK", DataType::String).length(200),
    CatalogFieldDefinition::new(Catalog::Manufacturer, "K4010_ID", "HELFDNR", DataType::Integer).id(),
    CatalogFieldDefinition::new(Catalog::Manufacturer, "K4012", "HENR", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Manufacturer, "K4013", "HENAME1", DataType::String).length(80),
    CatalogFieldDefinition::new(Catalog::Manufacturer, "K4014", "HENAME2", DataType::String).length(80),
    CatalogFieldDefinition::new(Catalog::Manufacturer, "K4015", "HEWERKSSCHL", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Manufacturer, "K4016", "HEWERK", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Manufacturer, "K4017", "HESTRASSE", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Manufacturer, "K4018", "HEORT", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Manufacturer, "K4019", "HELAND", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Manufacturer, "K4512", "HEMEMO", DataType::String),
    CatalogFieldDefinition::new(Catalog::Manufacturer, "K4511", "HESTATE", DataType::Integer).state(),
    CatalogFieldDefinition::new(Catalog::Material, "K4040_ID", "WSLFDNR", DataType::Integer).id(),
    CatalogFieldDefinition::new(Catalog::Material, "K4042", "WSNR", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Material, "K4043", "WSBEZEICH", DataType::String).length(100),
    CatalogFieldDefinition::new(Catalog::Material, "K4541", "WSSTATE", DataType::Integer).state(),
    CatalogFieldDefinition::new(Catalog::Material, "K4542", "WSBEMERK", DataType::String).length(200),
    CatalogFieldDefinition::new(Catalog::Unit, "K4080_ID", "EIEINHEIT", DataType::Integer).id(),
    CatalogFieldDefinition::new(Catalog::Unit, "K4082", "EIEINHTEXT", DataType::String).length(100),
    CatalogFieldDefinition::new(Catalog::Unit, "K4581", "EISTATE", DataType::Integer).state(),
    CatalogFieldDefinition::new(Catalog::Unit, "K4582", "EIBEMERK", DataType::String).length(200),
    CatalogFieldDefinition::new(Catalog::Drawing, "K4050_ID", "ZNTEIL", DataType::Integer).id(),
    CatalogFieldDefinition::new(Catalog::Drawing, "K4052", "ZNZNR", DataType::String).length(40),
    CatalogFieldDefinition::new(Catalog::Drawing, "K4053", "ZNZNRINDEX", DataType::String).length(100),
    CatalogFieldDefinition::new(Catalog::Drawing, "K4551", "ZNSTATE", DataType::Integer).state(),
    CatalogFieldDefinition::new(Catalog::Drawing, "K4552", "ZNBEMERK", DataType::String).length(200),
    CatalogFieldDefinition::new(Catalog::Product, "K4110_ID", "EZERZEUGNIS", DataType::Integer).id(),
    CatalogFieldDefinition::new(Catalog::Product, "K4112", "EZNUMMER", DataType::String).length(20),
    CatalogFieldDefinition::new(Catalog::Product, "K4113", "EZBEZ", DataType::String).length(80),
    CatalogFieldDefinition::new(Catalog::Product, "K4114", "EZKUNDE", DataType::Integer),
    CatalogFieldDefinition::new(Catalog::Product, "K4611", "EZSTATE", DataType::Integer).state(),
    CatalogFieldDefinition::new(Catalog::Product, "K4612", "EZBEMERK", DataType::String).length(200),
    CatalogFieldDefinition::new(Catalog::PurchaseOrder, "K4030_ID", "PAAUFTRAG", DataType::Integer).id(),
    CatalogFieldDefinition::new(Catalog::PurchaseOrder, "K4032", "PAAUFTRAGNR", DataType::String).length(40),
    CatalogFieldDefinition::new(Catalog::PurchaseOrder, "K4033", "PABEZEICH", DataType::String).length(100),
    CatalogFieldDefinition::new(Catalog::PurchaseOrder, "K4531", "PASTATE", DataType::Integer).state(),
    CatalogFieldDefinition::new(Catalog::PurchaseOrder, "K4532", "PABEMERK", DataType::String).length(200),
    CatalogFieldDefinition::new(Catalog::OrdinalClass, "K4230_ID", "OKKEY", DataType::Integer).id(),
    CatalogFieldDefinition::new(Catalog::OrdinalClass, "K4232", "OKNR", DataType::String).length(40),
    CatalogFieldDefinition::new(Catalog::OrdinalClass, "K4233", "OKBEZ", DataType::String).length(100),
    CatalogFieldDefinition::new(Catalog::OrdinalClass, "K4234", "OKKURZBEZ", DataType::String).length(20),
    CatalogFieldDefinition::new(Catalog::OrdinalClass, "K4235", "OKBEWERT", DataType::Integer),
    CatalogFieldDefinition::new(Catalog::OrdinalClass, "K4236", "OKSTATE", DataType::Integer).state(),
    CatalogFieldDefinition::new(Catalog::OrdinalClass, "K4731", "OKRANG", DataType::Integer),
    CatalogFieldDefinition::new(Catalog::OrdinalClass, "K4732", "OKBEMERK", DataType::String).length(200),
    CatalogFieldDefinition::new(Catalog::Contractor, "K4100_ID", "AULFDNR", DataType::Integer).id(),
    CatalogFieldDefinition::new(Catalog::Contractor, "K4102", "AUNR", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Contractor, "K4103", "AUNAME1", DataType::String).length(100),
    CatalogFieldDefinition::new(Catalog::Contractor, "K4601", "AUGSTATE", DataType::Integer).state(),
    CatalogFieldDefinition::new(Catalog::Contractor, "K4602", "AUMEMO", DataType::String),
    CatalogFieldDefinition::new(Catalog::Gage, "K4070", "PMPRUEFMIT", DataType::Integer).id(),
    CatalogFieldDefinition::new(Catalog::Gage, "K4072", "PMNR", DataType::String).length(40),
    CatalogFieldDefinition::new(Catalog::Gage, "K4073", "PMBEZ", DataType::String).length(80),
    CatalogFieldDefinition::new(Catalog::Gage, "K4074", "SMART_PGBEZ", DataType::String).length(80),
    CatalogFieldDefinition::new(Catalog::Gage, "K4075", "PMLETZTDAT", DataType::Date),
    CatalogFieldDefinition::new(Catalog::Gage, "K4076", "PMNAECHDAT", DataType::Date),
    CatalogFieldDefinition::new(Catalog::Gage, "K4077", "PMIPADDR", DataType::String).length(30),
    CatalogFieldDefinition::new(Catalog::Gage, "K4078", "PMEINSORT", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Gage, "K4079", "PMCOMP", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::Gage, "K4571", "PMSTATE", DataType::Integer).state(),
    CatalogFieldDefinition::new(Catalog::Gage, "K4572", "PM_BESCH", DataType::String).length(200),
    CatalogFieldDefinition::new(Catalog::Gage, "K4575", "PMQVERS", DataType::String).length(30),
    CatalogFieldDefinition::new(Catalog::Gage, "K4576", "PMSOFTW", DataType::String).length(50),
    CatalogFieldDefinition::new(Catalog::ProcessParameter, "K4240_ID", "PPNR", DataType::Integer).id(),
    CatalogFieldDefinition::new(Catalog::ProcessParameter, "K4242", "PPNRTEXT", DataType::String).length(40),
    CatalogFieldDefinition::new(Catalog::ProcessParameter, "K4244", "PPKURZTEXT", DataType::String).length(20),
    CatalogFieldDefinition::new(Catalog::ProcessParameter, "K4243", "PPLANGTEXT", DataType::String).length(100),
    CatalogFieldDefinition::new(Catalog::ProcessParameter, "K4741", "PPSTATE", DataType::Integer).state(),
    CatalogFieldDefinition::new(Catalog::ProcessParameter, "K4742", "PPBEMERK", DataType::String).length(200),
    CatalogFieldDefinition::new(Catalog::K0061, "K4270_ID", "KATKEY", DataType::Integer).id(),
    CatalogFieldDefinition::new(Catalog::K0061, "K4272", "NR", DataType::String).length(20),
    CatalogFieldDefinition::new(Catalog::K0061, "K4273", "BEZ", DataType::String).length(100),
    CatalogFieldDefinition::new(Catalog::K0061, "K4771", "STATE", DataType::Integer).state(),
    CatalogFieldDefinition::new(Catalog::K0061, "K4772", "BEMERK", DataType::String).length(200),
    CatalogFieldDefinition::new(Catalog::K0062, "K4280_ID", "KATKEY", DataType::Integer).id(),
    CatalogFieldDefinition::new(Catalog::K0062, "K4282", "NR", DataType::String).length(20),
    CatalogFieldDefinition::new(Catalog::K0062, "K4283", "BEZ", DataType::String).length(100),
    CatalogFieldDefinition::new(Catalog::K0062, "K4781", "STATE", DataType::Integer).state(),
    CatalogFieldDefinition::new(Catalog::K0062, "K4782", "BEMERK", DataType::String).length(200),
    CatalogFieldDefinition::new(Catalog::K0063, "K4290", "KATKEY", DataType::Integer).id(),
    CatalogFieldDefinition::new(Catalog::K0063, "K4292", "NR", DataType::String).length(20),
    CatalogFieldDefinition::new(Catalog::K0063, "K4293", "BEZ", DataType::String).length(100),
    CatalogFieldDefinition::new(Catalog::K0063, "K4791", "STATE", DataType::Integer).state(),
    CatalogFieldDefinition::new(Catalog::K0063, "K4792", "BEMERK", DataType::String).length(200),
];
