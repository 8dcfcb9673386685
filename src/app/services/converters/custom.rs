//! Converters for K-keys with a special DFQ encoding

use super::basic::IntegerConverter;
use super::{KKeyValueConverter, conversion_error, unexpected_value};
use crate::Result;
use crate::app::models::KKeyValue;

/// K0005: comma separated list of event ids
#[derive(Debug, Clone, Copy, Default)]
pub struct EventIdsConverter;

impl KKeyValueConverter for EventIdsConverter {
    fn parse(&self, text: &str) -> Result<Option<KKeyValue>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let mut event_ids = Vec::new();
        for token in text.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let event_id = token.parse::<i32>().map_err(|_| {
                conversion_error(
                    text,
                    format!(
                        "event id is not a valid integer: {}; K0005 should contain integer event ids separated by ','",
                        token
                    ),
                )
            })?;
            event_ids.push(event_id);
        }

        Ok(Some(KKeyValue::IntegerList(event_ids)))
    }

    fn format(&self, value: &KKeyValue) -> Result<Option<String>> {
        match value {
            KKeyValue::IntegerList(ids) if ids.is_empty() => Ok(None),
            KKeyValue::IntegerList(ids) => {
                let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
                Ok(Some(ids.join(",")))
            }
            other => Err(unexpected_value(self, other)),
        }
    }

    fn name(&self) -> &'static str {
        "event ids"
    }
}

/// K0006: charge number written with a leading `#`
#[derive(Debug, Clone, Copy, Default)]
pub struct ChargeConverter;

impl KKeyValueConverter for ChargeConverter {
    fn parse(&self, text: &str) -> Result<Option<KKeyValue>> {
        if text.is_empty() {
            return Ok(None);
        }
        let charge = text.strip_prefix('#').unwrap_or(text);
        Ok(Some(KKeyValue::String(charge.to_string())))
    }

    fn format(&self, value: &KKeyValue) -> Result<Option<String>> {
        match value {
            KKeyValue::String(charge) => Ok(Some(format!("#{}", charge))),
            other => Err(unexpected_value(self, other)),
        }
    }

    fn name(&self) -> &'static str {
        "charge"
    }
}

/// K0020: subgroup size, scaled by 1000 in DFQ
#[derive(Debug, Clone, Copy, Default)]
pub struct SubgroupSizeConverter;

const SUBGROUP_SIZE_SCALE: i32 = 1000;

impl KKeyValueConverter for SubgroupSizeConverter {
    fn parse(&self, text: &str) -> Result<Option<KKeyValue>> {
        Ok(IntegerConverter::parse_integer(text)?
            .map(|size| KKeyValue::Integer(size / SUBGROUP_SIZE_SCALE)))
    }

    fn format(&self, value: &KKeyValue) -> Result<Option<String>> {
        match value {
            KKeyValue::Integer(size) => size
                .checked_mul(SUBGROUP_SIZE_SCALE)
                .map(|scaled| Some(scaled.to_string()))
                .ok_or_else(|| conversion_error(size.to_string(), "subgroup size is too large")),
            other => Err(unexpected_value(self, other)),
        }
    }

    fn name(&self) -> &'static str {
        "subgroup size"
    }
}
