//! Test utilities for DFQ parser testing

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::app::models::{CharacteristicIndex, KKeyValue, ValueIndex};
use crate::app::services::object_model::AqdefObjectModel;

mod kkey_line_tests;

/// Binary line fields of one characteristic
pub const DATA: char = '\u{14}';

/// Binary line characteristic separator
pub const NEXT: char = '\u{0F}';

pub fn decimal(text: &str) -> KKeyValue {
    KKeyValue::Decimal(Decimal::from_str(text).unwrap())
}

pub fn text(value: &str) -> KKeyValue {
    KKeyValue::String(value.to_string())
}

/// Value of `key` in the given value row
pub fn value_of<'a>(
    model: &'a AqdefObjectModel,
    key: &str,
    part: u32,
    characteristic: u32,
    row: u32,
) -> Option<&'a KKeyValue> {
    model
        .value_entries(ValueIndex::new(part, characteristic, row))
        .and_then(|entries| entries.get(key))
}

/// Value of `key` on the given characteristic
pub fn characteristic_value_of<'a>(
    model: &'a AqdefObjectModel,
    key: &str,
    part: u32,
    characteristic: u32,
) -> Option<&'a KKeyValue> {
    model
        .characteristic_entries(CharacteristicIndex::new(part, characteristic))
        .and_then(|entries| entries.get(key))
}
