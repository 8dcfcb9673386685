//! Keyed records: `K#### [/INDEX] VALUE`
//!
//! The first five characters are the K-key. An optional `/INDEX` follows; value
//! level keys may use `/CHARACTERISTIC/ROW` to address a value row explicitly.
//! Everything after the first space, trimmed, is the value.

use super::context::ParserContext;
use crate::app::models::{CharacteristicIndex, GroupIndex, KKey, KKeyValue, PartIndex, ValueIndex};
use crate::app::services::object_model::AqdefObjectModel;
use crate::constants::{IGNORED_KEYS, KKEY_LENGTH, PROPRIETARY_QDAS_KEYS};
use crate::{Error, Result};

/// Parsed pieces of a keyed record before it is routed by level
#[derive(Debug)]
struct KKeyRecord {
    key: KKey,
    value: Option<KKeyValue>,
    index: u32,
    value_index: Option<u32>,
}

/// Whether the line is a keyed record
pub fn is_kkey_line(line: &str) -> bool {
    line.starts_with('K')
}

/// Whether the keyed record carries informational or proprietary data only
pub fn should_ignore_kkey_line(line: &str) -> bool {
    if line.chars().count() < KKEY_LENGTH {
        return true;
    }

    let counts = IGNORED_KEYS.iter().any(|key| {
        line.strip_prefix(key)
            .is_some_and(|rest| rest.starts_with(' ') || rest.starts_with('/'))
    });

    counts || PROPRIETARY_QDAS_KEYS.iter().any(|key| line.starts_with(key))
}

/// Parse a keyed record into the model
///
/// The caller has already filtered ignored lines. Empty values drop the record,
/// except for value level keys, which still advance the value row counter, and
/// part level keys, which still switch to their part.
pub fn parse_kkey_line(
    line: &str,
    model: &mut AqdefObjectModel,
    context: &mut ParserContext<'_>,
) -> Result<()> {
    let key_end = line
        .char_indices()
        .nth(KKEY_LENGTH)
        .map_or(line.len(), |(position, _)| position);
    let key = KKey::of(&line[..key_end]);
    let rest = &line[key_end..];

    let index_end = rest.find(' ').unwrap_or(rest.len());
    let (index, value_index) = match rest[..index_end].strip_prefix('/') {
        Some(index_text) => parse_index(&key, index_text)?,
        None => (1, None),
    };

    let value_text = rest[index_end..].trim();
    let value = context.convert_value(&key, value_text);

    if value.is_none() && !key.is_value_level() && !key.is_part_level() {
        return Ok(());
    }

    let record = KKeyRecord {
        key,
        value,
        index,
        value_index,
    };

    if record.key.is_part_level() {
        handle_part_level(model, record, context)
    } else if record.key.is_characteristic_level() {
        handle_characteristic_level(model, record, context)
    } else if record.key.is_group_level() {
        handle_group_level(model, record, context)
    } else if record.key.is_value_level() {
        handle_value_level(model, record, context)
    } else if record.key.is_hierarchy_level() || record.key.is_simple_hierarchy_level() {
        handle_hierarchy_level(model, record)
    } else {
        context.warn_unknown_level(&record.key);
        Ok(())
    }
}

/// Split `INDEX` or `INDEX/ROW`
fn parse_index(key: &KKey, index_text: &str) -> Result<(u32, Option<u32>)> {
    if index_text.trim().is_empty() {
        return Ok((1, None));
    }

    let invalid = || Error::invalid_structure(format!("K-key index is invalid: {}", index_text));

    match index_text.split_once('/') {
        None => {
            let index = index_text.parse::<u32>().map_err(|_| invalid())?;
            Ok((index, None))
        }
        Some((index, value_index)) => {
            if !key.is_value_level() {
                return Err(Error::invalid_structure(format!(
                    "K-key index ({}) contains a value index but the K-key ({}) is not a value key.",
                    index_text, key
                )));
            }
            let index = index.parse::<u32>().map_err(|_| invalid())?;
            let value_index = value_index.parse::<u32>().map_err(|_| invalid())?;
            Ok((index, Some(value_index)))
        }
    }
}

fn handle_part_level(
    model: &mut AqdefObjectModel,
    record: KKeyRecord,
    context: &mut ParserContext<'_>,
) -> Result<()> {
    let part = PartIndex(record.index);
    match record.value {
        Some(value) => model.put_part_entry(&record.key, part, value)?,
        None if !part.applies_to_all_parts() => model.put_part(part),
        None => {}
    }
    context.set_current_part_index(part);
    Ok(())
}

fn handle_characteristic_level(
    model: &mut AqdefObjectModel,
    record: KKeyRecord,
    context: &mut ParserContext<'_>,
) -> Result<()> {
    let part = part_index_for_characteristic_or_group(&record, context);
    let characteristic = CharacteristicIndex::of(part, record.index);
    model.put_characteristic_entry(&record.key, characteristic, record.value)
}

fn handle_group_level(
    model: &mut AqdefObjectModel,
    record: KKeyRecord,
    context: &mut ParserContext<'_>,
) -> Result<()> {
    let part = part_index_for_characteristic_or_group(&record, context);
    let group = GroupIndex::of(part, record.index);
    model.put_group_entry(&record.key, group, record.value)
}

/// Index 0 addresses every part, anything else the current one
fn part_index_for_characteristic_or_group(
    record: &KKeyRecord,
    context: &ParserContext<'_>,
) -> PartIndex {
    if record.index == 0 {
        PartIndex(0)
    } else {
        context.current_part_index()
    }
}

fn handle_value_level(
    model: &mut AqdefObjectModel,
    record: KKeyRecord,
    context: &mut ParserContext<'_>,
) -> Result<()> {
    let part = if record.index == 0 {
        PartIndex(0)
    } else {
        model
            .find_part_index_for_characteristic(record.index)
            .ok_or_else(|| missing_characteristic(record.index))?
    };

    let characteristic = CharacteristicIndex::of(part, record.index);
    let value_index = match record.value_index {
        Some(row) => ValueIndex::of(characteristic, row),
        None => context.next_value_index(characteristic, &record.key),
    };

    model.put_value_entry(&record.key, value_index, record.value)
}

fn handle_hierarchy_level(model: &mut AqdefObjectModel, record: KKeyRecord) -> Result<()> {
    let value = record
        .value
        .as_ref()
        .and_then(KKeyValue::as_integer)
        .and_then(|value| u32::try_from(value).ok())
        .ok_or_else(|| {
            Error::invalid_structure(format!(
                "Hierarchy K-key {} requires a non-negative integer value",
                record.key
            ))
        })?;

    model.put_hierarchy_entry(&record.key, record.index, value)
}

pub(crate) fn missing_characteristic(index: u32) -> Error {
    Error::invalid_structure(format!(
        "Characteristic with index {} was not found. Can't parse value.",
        index
    ))
}
