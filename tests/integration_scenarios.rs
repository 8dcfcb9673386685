//! End-to-end tests of DFQ parsing and writing
//!
//! Each test feeds a small DFQ document through the public parser and writer API
//! and checks the resulting object model and the canonical output.

use std::str::FromStr;

use aqdef::{CharacteristicIndex, DfqParser, DfqWriter, KKeyValue, PartIndex, ValueIndex};
use chrono::{Local, TimeZone};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

fn decimal(text: &str) -> KKeyValue {
    KKeyValue::Decimal(Decimal::from_str(text).unwrap())
}

fn local(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> KKeyValue {
    KKeyValue::Date(
        Local
            .with_ymd_and_hms(year, month, day, hour, minute, second)
            .earliest()
            .unwrap(),
    )
}

fn records(dfq: &str) -> Vec<&str> {
    dfq.split("\r\n").filter(|line| !line.is_empty()).collect()
}

/// Purpose: Parse the smallest useful document and write it back unchanged
#[test]
fn test_keyed_minimal_document() {
    let content = "K0100 1\nK1001/1 P1\nK2001/1 C1\nK0001/1 1.5\nK0001/1 2.5\n";
    let mut model = DfqParser::new().parse_str(content).unwrap();

    assert_eq!(model.part_indexes(), vec![PartIndex(1)]);
    assert_eq!(
        model.part_entries(PartIndex(1)).unwrap().get("K1001"),
        Some(&KKeyValue::from("P1"))
    );
    assert_eq!(
        model
            .characteristic_entries(CharacteristicIndex::new(1, 1))
            .unwrap()
            .get("K2001"),
        Some(&KKeyValue::from("C1"))
    );
    assert_eq!(
        model.value_entries(ValueIndex::new(1, 1, 1)).unwrap().get("K0001"),
        Some(&decimal("1.5"))
    );
    assert_eq!(
        model.value_entries(ValueIndex::new(1, 1, 2)).unwrap().get("K0001"),
        Some(&decimal("2.5"))
    );

    let dfq = DfqWriter::new().write_to_string(&mut model).unwrap();
    assert_eq!(
        records(&dfq),
        vec!["K0100 1", "K1001/1 P1", "K2001/1 C1", "K0001/1 1.5", "K0001/1 2.5"]
    );
}

#[test]
fn test_decimal_comma() {
    let mut model = DfqParser::new()
        .parse_str("K1001/1 P1\nK2001/1 C1\nK2100/1 3,14\n")
        .unwrap();

    assert_eq!(
        model
            .characteristic_entries(CharacteristicIndex::new(1, 1))
            .unwrap()
            .get("K2100"),
        Some(&decimal("3.14"))
    );

    let dfq = DfqWriter::new().write_to_string(&mut model).unwrap();
    assert!(records(&dfq).contains(&"K2100/1 3.14"));
}

/// Purpose: Dates in different layouts denote the same local instant
#[test]
fn test_date_layouts() {
    let mut model = DfqParser::new()
        .parse_str(
            "K1001/1 P1\nK2001/1 C1\n\
             K0004/1 04.07.2023/12:30:00\n\
             K0004/1 2023-07-04/12:30\n",
        )
        .unwrap();

    let expected = local(2023, 7, 4, 12, 30, 0);
    assert_eq!(
        model.value_entries(ValueIndex::new(1, 1, 1)).unwrap().get("K0004"),
        Some(&expected)
    );
    assert_eq!(
        model.value_entries(ValueIndex::new(1, 1, 2)).unwrap().get("K0004"),
        Some(&expected)
    );

    let dfq = DfqWriter::new().write_to_string(&mut model).unwrap();
    let dates: Vec<&str> = records(&dfq)
        .into_iter()
        .filter(|record| record.starts_with("K0004"))
        .collect();
    assert_eq!(
        dates,
        vec!["K0004/1 04.07.2023/12:30:00", "K0004/1 04.07.2023/12:30:00"]
    );
}

#[test]
fn test_offset_dates_with_and_without_seconds() {
    let model = DfqParser::new()
        .parse_str(
            "K1001/1 P1\nK2001/1 C1\n\
             K0004/1 2023-07-04T12:30+02:00\n\
             K0004/1 2023-07-04T12:30:00+02:00\n",
        )
        .unwrap();

    let first = model.value_entries(ValueIndex::new(1, 1, 1)).unwrap().get("K0004");
    let second = model.value_entries(ValueIndex::new(1, 1, 2)).unwrap().get("K0004");
    assert!(first.is_some());
    assert_eq!(first, second);
    assert_eq!(first.and_then(KKeyValue::as_date).unwrap().timestamp(), 1_688_466_600);
}

#[test]
fn test_binary_variable_line() {
    let content = format!(
        "K1001/1 P1\nK2001/1 C1\nK2001/2 C2\n1.23{d}4{d}04.07.2023/12:30:00{d}100,101{n}7.5{d}0\n",
        d = '\u{14}',
        n = '\u{0F}'
    );
    let model = DfqParser::new().parse_str(&content).unwrap();

    let first = model.value_entries(ValueIndex::new(1, 1, 1)).unwrap();
    assert_eq!(first.get("K0001"), Some(&decimal("1.23")));
    assert_eq!(first.get("K0002"), Some(&KKeyValue::Integer(4)));
    assert_eq!(first.get("K0004"), Some(&local(2023, 7, 4, 12, 30, 0)));
    assert_eq!(first.get("K0005"), Some(&KKeyValue::IntegerList(vec![100, 101])));

    let second = model.value_entries(ValueIndex::new(1, 2, 1)).unwrap();
    assert_eq!(second.get("K0001"), Some(&decimal("7.5")));
    assert_eq!(second.get("K0002"), Some(&KKeyValue::Integer(0)));
}

/// Purpose: K2030/K2031 records become part, characteristic and binding nodes
#[test]
fn test_simple_hierarchy_normalization() {
    let model = DfqParser::new()
        .parse_str(
            "K1001/1 P1\n\
             K2001/1 C1\n\
             K2030/1 10\n\
             K2001/2 C2\n\
             K2031/2 10\n",
        )
        .unwrap();

    let hierarchy = model.hierarchy();
    assert!(!hierarchy.contains_simple_hierarchy_information());

    let part_node = hierarchy
        .node_definitions()
        .find(|entry| entry.is_part_node() && entry.value() == 1)
        .map(|entry| entry.index())
        .unwrap();
    let characteristic_node = hierarchy
        .node_definitions()
        .find(|entry| entry.is_characteristic_node() && entry.value() == 1)
        .map(|entry| entry.index())
        .unwrap();

    assert!(hierarchy.node_bindings().any(|entry| entry.is_node_binding()
        && entry.index() == part_node
        && entry.value() == characteristic_node.index()));
    assert!(hierarchy.node_bindings().any(|entry| entry.is_characteristic_binding()
        && entry.index() == characteristic_node
        && entry.value() == 2));
    assert!(
        hierarchy
            .node_definitions()
            .chain(hierarchy.node_bindings())
            .all(|entry| !entry.key().is_simple_hierarchy_level())
    );
}

#[test]
fn test_apply_to_all_characteristics() {
    let model = DfqParser::new()
        .parse_str(
            "K1001/1 P1\n\
             K2001/0 X\n\
             K2002/1 A\n\
             K2002/2 B\n\
             K2001/3 Own\n\
             K2002/3 C\n",
        )
        .unwrap();

    assert_eq!(model.characteristic_count(), 3);
    let numbers: Vec<Option<&KKeyValue>> = model
        .characteristics(PartIndex(1))
        .map(|characteristic| characteristic.get("K2001"))
        .collect();
    assert_eq!(
        numbers,
        vec![
            Some(&KKeyValue::from("X")),
            Some(&KKeyValue::from("X")),
            Some(&KKeyValue::from("Own")),
        ]
    );
}

#[test]
fn test_multiple_parts() {
    let mut model = DfqParser::new()
        .parse_str(
            "K0100 3\n\
             K1001/1 P1\n\
             K2001/1 C1\n\
             K2001/2 C2\n\
             K1001/2 P2\n\
             K2001/3 C3\n\
             K0001/3 9.5\n\
             K0001/1 1.0\n",
        )
        .unwrap();

    assert_eq!(
        model.characteristic_indexes(PartIndex(2)),
        vec![CharacteristicIndex::new(2, 3)]
    );
    assert!(model.contains_value(ValueIndex::new(2, 3, 1)));
    assert!(model.contains_value(ValueIndex::new(1, 1, 1)));

    let dfq = DfqWriter::new().write_to_string(&mut model).unwrap();
    assert_eq!(
        records(&dfq),
        vec![
            "K0100 3",
            "K1001/1 P1",
            "K2001/1 C1",
            "K0001/1 1.0",
            "K2001/2 C2",
            "K1001/2 P2",
            "K2001/3 C3",
            "K0001/3 9.5",
        ]
    );
}
