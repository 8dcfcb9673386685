//! Static K-key table rows

use crate::app::models::{DataType, KKeyMetadata};
use crate::app::services::converters::{ConverterKind, converter_for};

/// One row of a static K-key table
#[derive(Debug, Clone, Copy)]
pub struct KeyDefinition {
    pub key: &'static str,
    pub column_name: &'static str,
    pub data_type: DataType,
    pub length: Option<u32>,
    pub save_to_db: bool,
    pub respects_decimal: bool,
    pub converter: Option<ConverterKind>,
}

impl KeyDefinition {
    pub const fn new(key: &'static str, column_name: &'static str, data_type: DataType) -> Self {
        Self {
            key,
            column_name,
            data_type,
            length: None,
            save_to_db: true,
            respects_decimal: false,
            converter: None,
        }
    }

    pub const fn length(self, length: u32) -> Self {
        Self {
            length: Some(length),
            ..self
        }
    }

    pub const fn not_saved(self) -> Self {
        Self {
            save_to_db: false,
            ..self
        }
    }

    pub const fn respects_decimal(self) -> Self {
        Self {
            respects_decimal: true,
            ..self
        }
    }

    pub const fn converter(self, converter: ConverterKind) -> Self {
        Self {
            converter: Some(converter),
            ..self
        }
    }

    pub fn to_metadata(&self) -> KKeyMetadata {
        let converter = match self.converter {
            Some(kind) => kind.converter(),
            None => converter_for(self.data_type),
        };
        KKeyMetadata::new(
            self.column_name,
            self.data_type,
            self.length,
            converter,
            self.save_to_db,
            self.respects_decimal,
        )
    }
}
