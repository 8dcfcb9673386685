//! Binary measured-value records
//!
//! A binary line holds one packet per characteristic, in characteristic order,
//! separated by `0x0F`. The fields of a packet are separated by `0x14` and map
//! positionally to value K-keys. Variable and attributive characteristics use
//! different field layouts.

use super::context::ParserContext;
use super::kkey_line::missing_characteristic;
use crate::app::models::{CharacteristicIndex, KKey};
use crate::app::services::converters::{DecimalConverter, KKeyValueConverter};
use crate::app::services::object_model::AqdefObjectModel;
use crate::constants::binary_layout::{
    ATTRIBUTIVE, ATTRIBUTIVE_TYPES, CHARACTERISTIC_TYPE_KEY, IGNORED, VARIABLE, VARIABLE_MAX_FIELDS,
};
use crate::constants::{MEASURED_VALUES_CHARACTERISTIC_SEPARATOR, MEASURED_VALUES_DATA_SEPARATOR};
use crate::{Error, Result};

/// Whether the line holds binary measured values
///
/// Besides lines with separators, a line holding just a decimal number is a
/// binary line with a single field.
pub fn is_binary_line(line: &str) -> bool {
    if line.contains(MEASURED_VALUES_CHARACTERISTIC_SEPARATOR)
        || line.contains(MEASURED_VALUES_DATA_SEPARATOR)
    {
        return true;
    }

    matches!(DecimalConverter.parse(line), Ok(Some(_)))
}

/// Parse a binary line into the model
pub fn parse_binary_line(
    line: &str,
    model: &mut AqdefObjectModel,
    context: &mut ParserContext<'_>,
) -> Result<()> {
    let packets = without_trailing_empty(line.split(MEASURED_VALUES_CHARACTERISTIC_SEPARATOR));

    for (position, packet) in packets.into_iter().enumerate() {
        let characteristic_number = position as u32 + 1;
        let part = model
            .find_part_index_for_characteristic(characteristic_number)
            .ok_or_else(|| missing_characteristic(characteristic_number))?;
        let characteristic = CharacteristicIndex::of(part, characteristic_number);

        let fields = without_trailing_empty(packet.split(MEASURED_VALUES_DATA_SEPARATOR));
        let layout = field_layout(model, characteristic, fields.len());

        if fields.len() > layout.len() {
            return Err(Error::invalid_structure(format!(
                "Binary value of characteristic {} has {} fields but at most {} are expected",
                characteristic,
                fields.len(),
                layout.len()
            )));
        }

        for (field, key) in fields.iter().zip(layout) {
            if *key == IGNORED {
                continue;
            }

            let key = KKey::of(key);
            if let Some(value) = context.convert_value(&key, field) {
                let value_index = context.next_value_index(characteristic, &key);
                model.put_value_entry(&key, value_index, value)?;
            }
        }
    }

    Ok(())
}

/// Field layout of a characteristic, from its type or else from the field count
fn field_layout(
    model: &AqdefObjectModel,
    characteristic: CharacteristicIndex,
    field_count: usize,
) -> &'static [&'static str] {
    let characteristic_type = model
        .characteristic_entries(characteristic)
        .and_then(|entries| entries.get(CHARACTERISTIC_TYPE_KEY))
        .and_then(|value| value.as_integer());

    let attributive = match characteristic_type {
        Some(characteristic_type) => ATTRIBUTIVE_TYPES.contains(&characteristic_type),
        None => field_count > VARIABLE_MAX_FIELDS,
    };

    if attributive { ATTRIBUTIVE } else { VARIABLE }
}

/// Split pieces with trailing empty ones removed
fn without_trailing_empty<'a>(pieces: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut pieces: Vec<&str> = pieces.collect();
    while pieces.last().is_some_and(|piece| piece.is_empty()) {
        pieces.pop();
    }
    pieces
}
