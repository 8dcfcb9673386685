//! K-key metadata

use std::fmt;
use std::sync::Arc;

use super::value::{DataType, KKeyValue};
use crate::app::services::converters::{KKeyValueConverter, converter_for};
use crate::{Error, Result};

/// Immutable description of a single K-key
///
/// Carries the Q-DAS database column the key maps to, the declared data type and the
/// converter used to move between the DFQ text form and [`KKeyValue`].
#[derive(Clone)]
pub struct KKeyMetadata {
    column_name: String,
    data_type: DataType,
    /// Maximum textual length as documented by AQDEF (not enforced)
    length: Option<u32>,
    converter: Arc<dyn KKeyValueConverter>,
    /// Some K-keys are never stored in the Q-DAS database or have no known column
    save_to_db: bool,
    /// Measured values and their limits follow the decimal settings of the characteristic
    respects_characteristic_decimal_settings: bool,
}

impl KKeyMetadata {
    /// Metadata with the default converter of `data_type`
    pub fn of(column_name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            column_name: column_name.into(),
            data_type,
            length: None,
            converter: converter_for(data_type),
            save_to_db: true,
            respects_characteristic_decimal_settings: false,
        }
    }

    /// Metadata with every attribute given explicitly
    pub fn new(
        column_name: impl Into<String>,
        data_type: DataType,
        length: Option<u32>,
        converter: Arc<dyn KKeyValueConverter>,
        save_to_db: bool,
        respects_characteristic_decimal_settings: bool,
    ) -> Self {
        Self {
            column_name: column_name.into(),
            data_type,
            length,
            converter,
            save_to_db,
            respects_characteristic_decimal_settings,
        }
    }

    pub fn builder() -> KKeyMetadataBuilder {
        KKeyMetadataBuilder::default()
    }

    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn length(&self) -> Option<u32> {
        self.length
    }

    pub fn converter(&self) -> &dyn KKeyValueConverter {
        self.converter.as_ref()
    }

    pub fn is_save_to_db(&self) -> bool {
        self.save_to_db
    }

    pub fn is_respects_characteristic_decimal_settings(&self) -> bool {
        self.respects_characteristic_decimal_settings
    }

    /// Convert DFQ text to a typed value using this key's converter
    pub fn parse(&self, text: &str) -> Result<Option<KKeyValue>> {
        self.converter.parse(text)
    }

    /// Convert a typed value to DFQ text using this key's converter
    pub fn format(&self, value: &KKeyValue) -> Result<Option<String>> {
        self.converter.format(value)
    }
}

impl PartialEq for KKeyMetadata {
    fn eq(&self, other: &Self) -> bool {
        self.column_name == other.column_name
            && self.data_type == other.data_type
            && self.length == other.length
            && self.save_to_db == other.save_to_db
            && self.respects_characteristic_decimal_settings
                == other.respects_characteristic_decimal_settings
            && self.converter.name() == other.converter.name()
    }
}

impl fmt::Debug for KKeyMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KKeyMetadata")
            .field("column_name", &self.column_name)
            .field("data_type", &self.data_type)
            .field("length", &self.length)
            .field("converter", &self.converter.name())
            .field("save_to_db", &self.save_to_db)
            .field(
                "respects_characteristic_decimal_settings",
                &self.respects_characteristic_decimal_settings,
            )
            .finish()
    }
}

/// Builder for [`KKeyMetadata`]
#[derive(Debug)]
pub struct KKeyMetadataBuilder {
    column_name: Option<String>,
    data_type: Option<DataType>,
    length: Option<u32>,
    converter: Option<Arc<dyn KKeyValueConverter>>,
    save_to_db: bool,
    respects_characteristic_decimal_settings: bool,
}

impl Default for KKeyMetadataBuilder {
    fn default() -> Self {
        Self {
            column_name: None,
            data_type: None,
            length: None,
            converter: None,
            save_to_db: true,
            respects_characteristic_decimal_settings: false,
        }
    }
}

impl KKeyMetadataBuilder {
    pub fn column_name(mut self, column_name: impl Into<String>) -> Self {
        self.column_name = Some(column_name.into());
        self
    }

    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    /// Set the data type together with a converter other than the type's default
    pub fn data_type_with_converter(
        mut self,
        data_type: DataType,
        converter: Arc<dyn KKeyValueConverter>,
    ) -> Self {
        self.data_type = Some(data_type);
        self.converter = Some(converter);
        self
    }

    pub fn length(mut self, length: Option<u32>) -> Self {
        self.length = length;
        self
    }

    pub fn save_to_db(mut self, save_to_db: bool) -> Self {
        self.save_to_db = save_to_db;
        self
    }

    pub fn respects_characteristic_decimal_settings(mut self, respects: bool) -> Self {
        self.respects_characteristic_decimal_settings = respects;
        self
    }

    pub fn build(self) -> Result<KKeyMetadata> {
        let column_name = self
            .column_name
            .ok_or_else(|| Error::invalid_argument("K-key metadata requires a column name"))?;
        let data_type = self
            .data_type
            .ok_or_else(|| Error::invalid_argument("K-key metadata requires a data type"))?;

        Ok(KKeyMetadata::new(
            column_name,
            data_type,
            self.length,
            self.converter.unwrap_or_else(|| converter_for(data_type)),
            self.save_to_db,
            self.respects_characteristic_decimal_settings,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_uses_defaults() {
        let metadata = KKeyMetadata::of("TETEILNR", DataType::String);
        assert_eq!(metadata.column_name(), "TETEILNR");
        assert_eq!(metadata.length(), None);
        assert!(metadata.is_save_to_db());
        assert!(!metadata.is_respects_characteristic_decimal_settings());
        assert_eq!(metadata.converter().name(), "string");
    }

    #[test]
    fn test_builder_requires_column_and_type() {
        assert!(KKeyMetadata::builder().data_type(DataType::Integer).build().is_err());
        assert!(KKeyMetadata::builder().column_name("X").build().is_err());

        let metadata = KKeyMetadata::builder()
            .column_name("MEUGW")
            .data_type(DataType::Decimal)
            .respects_characteristic_decimal_settings(true)
            .build()
            .unwrap();
        assert!(metadata.is_respects_characteristic_decimal_settings());
        assert_eq!(metadata.converter().name(), "decimal");
    }
}
