//! K-key value converters
//!
//! Converters move K-key values between their DFQ text form and [`KKeyValue`].
//! Every [`DataType`] has a default converter; a few K-keys with special DFQ
//! encodings use a dedicated one.
//!
//! ## Architecture
//!
//! - [`basic`] - String, integer, decimal, boolean and UUID converters
//! - [`date`] - Multi-pattern date/time converter
//! - [`custom`] - Converters for K0005 (event ids), K0006 (charge) and K0020 (subgroup size)
//!
//! Empty text always parses to `None`.

pub mod basic;
pub mod custom;
pub mod date;

#[cfg(test)]
pub mod tests;

use std::fmt::Debug;
use std::sync::Arc;

use crate::Result;
use crate::app::models::{DataType, KKeyValue};

// Re-export main types
pub use basic::{
    BooleanConverter, DecimalConverter, IntegerConverter, StringConverter, UuidConverter,
};
pub use custom::{ChargeConverter, EventIdsConverter, SubgroupSizeConverter};
pub use date::DateConverter;

/// Conversion between the DFQ text form of a K-key value and its typed form
pub trait KKeyValueConverter: Send + Sync + Debug {
    /// Parse DFQ text; `Ok(None)` means the text carries no value
    fn parse(&self, text: &str) -> Result<Option<KKeyValue>>;

    /// Format a typed value; `Ok(None)` means nothing should be written
    fn format(&self, value: &KKeyValue) -> Result<Option<String>>;

    /// Short name used in diagnostics
    fn name(&self) -> &'static str;
}

/// Converters that can be referenced from the static K-key tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConverterKind {
    EventIds,
    Charge,
    SubgroupSize,
    Boolean,
}

impl ConverterKind {
    pub fn converter(self) -> Arc<dyn KKeyValueConverter> {
        match self {
            ConverterKind::EventIds => Arc::new(EventIdsConverter),
            ConverterKind::Charge => Arc::new(ChargeConverter),
            ConverterKind::SubgroupSize => Arc::new(SubgroupSizeConverter),
            ConverterKind::Boolean => Arc::new(BooleanConverter),
        }
    }
}

/// Default converter of a data type
pub fn converter_for(data_type: DataType) -> Arc<dyn KKeyValueConverter> {
    match data_type {
        DataType::String => Arc::new(StringConverter),
        DataType::Integer => Arc::new(IntegerConverter),
        DataType::Decimal => Arc::new(DecimalConverter),
        DataType::Date => Arc::new(DateConverter),
        DataType::Boolean => Arc::new(BooleanConverter),
        DataType::Uuid => Arc::new(UuidConverter),
        // lists only occur with the K0005 encoding
        DataType::IntegerList => Arc::new(EventIdsConverter),
    }
}

/// Conversion error not yet tied to a K-key; callers attach it with [`crate::Error::for_kkey`]
pub(crate) fn conversion_error(value: impl Into<String>, message: impl Into<String>) -> crate::Error {
    crate::Error::value_conversion(String::new(), value, message)
}

/// Error for a value whose variant doesn't match the converter
pub(crate) fn unexpected_value(converter: &dyn KKeyValueConverter, value: &KKeyValue) -> crate::Error {
    conversion_error(
        value.to_string(),
        format!(
            "{} converter can't format a {} value",
            converter.name(),
            value.data_type()
        ),
    )
}
