//! Tests for DFQ writing

use std::str::FromStr;

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use tempfile::tempdir;

use super::super::DfqWriter;
use super::records;
use crate::app::models::{CharacteristicIndex, KKey, KKeyValue, PartEntries, PartIndex, ValueIndex};
use crate::app::services::converters::tests::local;
use crate::app::services::object_model::{AqdefObjectModel, AqdefObjectModelBuilder};
use crate::Error;

fn decimal(text: &str) -> KKeyValue {
    KKeyValue::Decimal(Decimal::from_str(text).unwrap())
}

#[test]
fn test_write_minimal_model() {
    let mut builder = AqdefObjectModelBuilder::new();
    builder.create_part_entry("K1001", KKeyValue::from("P1")).unwrap();
    builder.create_characteristic_entry("K2001", KKeyValue::from("C1")).unwrap();
    builder.create_value_entry("K0001", decimal("1.5")).unwrap();
    builder.next_value();
    builder.create_value_entry("K0001", decimal("2.5")).unwrap();
    let mut model = builder.build();

    assert_eq!(
        records(&mut model),
        vec!["K0100 1", "K1001/1 P1", "K2001/1 C1", "K0001/1 1.5", "K0001/1 2.5"]
    );
}

#[test]
fn test_write_order_of_levels() {
    let mut model = AqdefObjectModel::new();
    let key = |k: &str| KKey::of(k);
    model.put_part_entry(&key("K1001"), PartIndex(1), KKeyValue::from("P1")).unwrap();
    model.put_part_entry(&key("K1001"), PartIndex(2), KKeyValue::from("P2")).unwrap();
    model
        .put_characteristic_entry(&key("K2001"), CharacteristicIndex::new(2, 2), KKeyValue::from("C2"))
        .unwrap();
    model
        .put_characteristic_entry(&key("K2001"), CharacteristicIndex::new(1, 1), KKeyValue::from("C1"))
        .unwrap();
    model
        .put_group_entry(&key("K5001"), crate::GroupIndex::new(1, 1), KKeyValue::from("G1"))
        .unwrap();
    model
        .put_value_entry(&key("K0001"), ValueIndex::new(2, 2, 1), decimal("2.0"))
        .unwrap();
    model.put_hierarchy_entry(&key("K5111"), 1, 1).unwrap();
    model.put_hierarchy_entry(&key("K5112"), 2, 1).unwrap();
    model.put_hierarchy_entry(&key("K5103"), 1, 2).unwrap();

    assert_eq!(
        records(&mut model),
        vec![
            "K0100 2",
            "K1001/1 P1",
            "K2001/1 C1",
            "K5001/1 G1",
            "K1001/2 P2",
            "K2001/2 C2",
            "K0001/2 2.0",
            "K5111/1 1",
            "K5112/2 1",
            "K5103/1 2",
        ]
    );
}

#[test]
fn test_attribute_keys_follow_measured_value() {
    let mut model = AqdefObjectModel::new();
    let index = ValueIndex::new(1, 1, 1);
    model
        .put_characteristic_entry(&KKey::of("K2001"), CharacteristicIndex::new(1, 1), KKeyValue::from("C1"))
        .unwrap();
    model.put_value_entry(&KKey::of("K0002"), index, KKeyValue::Integer(0)).unwrap();
    model.put_value_entry(&KKey::of("K0021"), index, KKeyValue::Integer(3)).unwrap();
    model.put_value_entry(&KKey::of("K0020"), index, KKeyValue::Integer(5)).unwrap();
    model.put_value_entry(&KKey::of("K0001"), index, decimal("1")).unwrap();

    let records = records(&mut model);
    let value_records: Vec<&str> = records[2..].iter().map(String::as_str).collect();
    assert_eq!(
        value_records,
        vec!["K0001/1 1", "K0020/1 5000", "K0021/1 3", "K0002/1 0"]
    );
}

#[test]
fn test_part_without_values_is_introduced() {
    let mut model = AqdefObjectModel::new();
    model.put_part_entry(&KKey::of("K1001"), PartIndex(1), KKeyValue::from("P1")).unwrap();
    model
        .put_characteristic_entry(&KKey::of("K2001"), CharacteristicIndex::new(1, 1), KKeyValue::from("C1"))
        .unwrap();
    model
        .put_characteristic_entry(&KKey::of("K2001"), CharacteristicIndex::new(2, 2), KKeyValue::from("C2"))
        .unwrap();
    model.put_part_entries(&PartEntries::new(PartIndex(3)));

    assert_eq!(
        records(&mut model),
        vec!["K0100 2", "K1001/1 P1", "K2001/1 C1", "K1001/2", "K2001/2 C2", "K1001/3"]
    );
}

#[test]
fn test_first_part_without_values_needs_no_switch() {
    let mut model = AqdefObjectModel::new();
    model
        .put_characteristic_entry(&KKey::of("K2001"), CharacteristicIndex::new(1, 1), KKeyValue::from("C1"))
        .unwrap();

    assert_eq!(records(&mut model), vec!["K0100 1", "K2001/1 C1"]);
}

#[test]
fn test_values_are_formatted_by_converter() {
    let mut model = AqdefObjectModel::new();
    let index = ValueIndex::new(1, 1, 1);
    model
        .put_characteristic_entry(&KKey::of("K2001"), CharacteristicIndex::new(1, 1), KKeyValue::from("C1"))
        .unwrap();
    model
        .put_value_entry(&KKey::of("K0004"), index, KKeyValue::Date(local(2023, 7, 4, 12, 30, 0)))
        .unwrap();
    model
        .put_value_entry(&KKey::of("K0005"), index, KKeyValue::IntegerList(vec![100, 101]))
        .unwrap();
    model
        .put_value_entry(&KKey::of("K0006"), index, KKeyValue::from("B12"))
        .unwrap();

    let records = records(&mut model);
    assert!(records.contains(&"K0004/1 04.07.2023/12:30:00".to_string()));
    assert!(records.contains(&"K0005/1 100,101".to_string()));
    assert!(records.contains(&"K0006/1 #B12".to_string()));
}

#[test]
fn test_values_are_trimmed() {
    let mut model = AqdefObjectModel::new();
    model
        .put_part_entry(&KKey::of("K1002"), PartIndex(1), KKeyValue::from("  Shaft  "))
        .unwrap();

    assert_eq!(records(&mut model), vec!["K0100 0", "K1002/1 Shaft"]);
}

#[test]
fn test_custom_keys_are_not_written() {
    let mut model = AqdefObjectModel::new();
    model.put_part_entry(&KKey::of("K1001"), PartIndex(1), KKeyValue::from("P1")).unwrap();
    model.put_part_entry(&KKey::of("KX100"), PartIndex(1), KKeyValue::from("hidden")).unwrap();

    let records = records(&mut model);
    assert!(records.iter().all(|record| !record.starts_with("KX")));
    assert_eq!(records.len(), 2);
}

#[test]
fn test_writing_normalizes_first() {
    let mut model = AqdefObjectModel::new();
    model.put_part_entry(&KKey::of("K1001"), PartIndex(1), KKeyValue::from("P1")).unwrap();
    for characteristic in 1..=2 {
        model
            .put_characteristic_entry(
                &KKey::of("K2002"),
                CharacteristicIndex::new(1, characteristic),
                KKeyValue::from(format!("C{}", characteristic).as_str()),
            )
            .unwrap();
    }
    model
        .put_characteristic_entry(&KKey::of("K2001"), CharacteristicIndex::new(0, 0), KKeyValue::from("X"))
        .unwrap();

    assert_eq!(
        records(&mut model),
        vec!["K0100 2", "K1001/1 P1", "K2001/1 X", "K2002/1 C1", "K2001/2 X", "K2002/2 C2"]
    );
}

#[test]
fn test_mismatched_value_type_is_conversion_error() {
    let mut model = AqdefObjectModel::new();
    model
        .put_characteristic_entry(&KKey::of("K2001"), CharacteristicIndex::new(1, 1), KKeyValue::from("C1"))
        .unwrap();
    model
        .put_value_entry(&KKey::of("K0001"), ValueIndex::new(1, 1, 1), KKeyValue::from("not a number"))
        .unwrap();

    let error = DfqWriter::new().write_to_string(&mut model).unwrap_err();
    match error {
        Error::ValueConversion { key, value, .. } => {
            assert_eq!(key, "K0001");
            assert_eq!(value, "not a number");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_unknown_key_is_error() {
    let mut model = AqdefObjectModel::new();
    model.put_part_entry(&KKey::of("K1999"), PartIndex(1), KKeyValue::from("x")).unwrap();

    let error = DfqWriter::new().write_to_string(&mut model).unwrap_err();
    assert!(matches!(error, Error::UnknownKKey { ref key } if key == "K1999"));
}

#[test]
fn test_write_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.dfq");
    let mut model = AqdefObjectModel::new();
    model.put_part_entry(&KKey::of("K1001"), PartIndex(1), KKeyValue::from("P1")).unwrap();

    DfqWriter::new().write_file(&mut model, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "K0100 0\r\nK1001/1 P1\r\n");
}
