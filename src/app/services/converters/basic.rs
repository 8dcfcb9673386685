//! Converters for the plain data types

use rust_decimal::Decimal;
use uuid::Uuid;

use super::{KKeyValueConverter, conversion_error, unexpected_value};
use crate::Result;
use crate::app::models::KKeyValue;

/// Text is taken as is
#[derive(Debug, Clone, Copy, Default)]
pub struct StringConverter;

impl KKeyValueConverter for StringConverter {
    fn parse(&self, text: &str) -> Result<Option<KKeyValue>> {
        if text.is_empty() {
            return Ok(None);
        }
        Ok(Some(KKeyValue::String(text.to_string())))
    }

    fn format(&self, value: &KKeyValue) -> Result<Option<String>> {
        match value {
            KKeyValue::String(text) => Ok(Some(text.clone())),
            other => Err(unexpected_value(self, other)),
        }
    }

    fn name(&self) -> &'static str {
        "string"
    }
}

/// Signed 32-bit decimal integer
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerConverter;

impl IntegerConverter {
    pub(crate) fn parse_integer(text: &str) -> Result<Option<i32>> {
        if text.is_empty() {
            return Ok(None);
        }
        text.parse::<i32>()
            .map(Some)
            .map_err(|e| conversion_error(text, format!("not an integer ({})", e)))
    }
}

impl KKeyValueConverter for IntegerConverter {
    fn parse(&self, text: &str) -> Result<Option<KKeyValue>> {
        Ok(Self::parse_integer(text)?.map(KKeyValue::Integer))
    }

    fn format(&self, value: &KKeyValue) -> Result<Option<String>> {
        match value {
            KKeyValue::Integer(number) => Ok(Some(number.to_string())),
            other => Err(unexpected_value(self, other)),
        }
    }

    fn name(&self) -> &'static str {
        "integer"
    }
}

/// Decimal number; a decimal comma is accepted
///
/// Numbers are held exactly with up to 28 significant digits. Longer input is a
/// conversion error rather than a rounded value. Output is always plain notation
/// with the scale of the parsed value.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalConverter;

impl KKeyValueConverter for DecimalConverter {
    fn parse(&self, text: &str) -> Result<Option<KKeyValue>> {
        if text.is_empty() {
            return Ok(None);
        }

        if text.contains('_') {
            return Err(conversion_error(text, "not a decimal number (digit separator)"));
        }

        let normalized = text.replace(',', ".");
        let decimal = match normalized.split_once(['e', 'E']) {
            Some((mantissa, _)) => Decimal::from_str_exact(mantissa)
                .and_then(|_| Decimal::from_scientific(&normalized)),
            None => Decimal::from_str_exact(&normalized),
        }
        .map_err(|e| conversion_error(text, format!("not an exact decimal number ({})", e)))?;

        Ok(Some(KKeyValue::Decimal(decimal)))
    }

    fn format(&self, value: &KKeyValue) -> Result<Option<String>> {
        match value {
            KKeyValue::Decimal(decimal) => Ok(Some(decimal.to_string())),
            other => Err(unexpected_value(self, other)),
        }
    }

    fn name(&self) -> &'static str {
        "decimal"
    }
}

/// Boolean encoded as the integer 1 or 0
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanConverter;

impl KKeyValueConverter for BooleanConverter {
    fn parse(&self, text: &str) -> Result<Option<KKeyValue>> {
        match IntegerConverter::parse_integer(text)? {
            None => Ok(None),
            Some(1) => Ok(Some(KKeyValue::Boolean(true))),
            Some(0) => Ok(Some(KKeyValue::Boolean(false))),
            Some(_) => Err(conversion_error(text, "boolean must be 1 or 0")),
        }
    }

    fn format(&self, value: &KKeyValue) -> Result<Option<String>> {
        match value {
            KKeyValue::Boolean(flag) => Ok(Some(if *flag { "1" } else { "0" }.to_string())),
            other => Err(unexpected_value(self, other)),
        }
    }

    fn name(&self) -> &'static str {
        "boolean"
    }
}

/// UUID in the standard hyphenated form
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidConverter;

impl KKeyValueConverter for UuidConverter {
    fn parse(&self, text: &str) -> Result<Option<KKeyValue>> {
        if text.is_empty() {
            return Ok(None);
        }
        Uuid::parse_str(text)
            .map(|uuid| Some(KKeyValue::Uuid(uuid)))
            .map_err(|e| conversion_error(text, format!("not a UUID ({})", e)))
    }

    fn format(&self, value: &KKeyValue) -> Result<Option<String>> {
        match value {
            KKeyValue::Uuid(uuid) => Ok(Some(uuid.hyphenated().to_string())),
            other => Err(unexpected_value(self, other)),
        }
    }

    fn name(&self) -> &'static str {
        "uuid"
    }
}
