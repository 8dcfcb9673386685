//! Tests for keyed record parsing

use pretty_assertions::assert_eq;

use super::super::DfqParser;
use super::super::kkey_line::should_ignore_kkey_line;
use super::{characteristic_value_of, decimal, text, value_of};
use crate::app::models::{CharacteristicIndex, GroupIndex, PartIndex};

#[test]
fn test_ignored_kkey_lines() {
    assert!(should_ignore_kkey_line("K0100 3"));
    assert!(should_ignore_kkey_line("K100 3"));
    assert!(should_ignore_kkey_line("K0101/1 2"));
    assert!(should_ignore_kkey_line("K2998/1 proprietary"));
    assert!(should_ignore_kkey_line("K50"));

    assert!(!should_ignore_kkey_line("K1001/1 P1"));
    assert!(!should_ignore_kkey_line("K1002 name"));
}

#[test]
fn test_part_characteristic_and_group_routing() {
    let model = DfqParser::new()
        .parse_str(
            "K1001/1 P1\n\
             K2001/1 C1\n\
             K1001/2 P2\n\
             K2001/2 C2\n\
             K5001/1 G1\n",
        )
        .unwrap();

    assert_eq!(characteristic_value_of(&model, "K2001", 1, 1), Some(&text("C1")));
    assert_eq!(characteristic_value_of(&model, "K2001", 2, 2), Some(&text("C2")));
    assert_eq!(
        model
            .group_entries(GroupIndex::new(2, 1))
            .and_then(|group| group.get("K5001")),
        Some(&text("G1"))
    );
}

#[test]
fn test_characteristic_before_part_goes_to_first_part() {
    let model = DfqParser::new().parse_str("K2001/1 C1\n").unwrap();

    assert!(model.contains_characteristic(CharacteristicIndex::new(1, 1)));
    assert!(model.contains_part(PartIndex(1)));
}

#[test]
fn test_missing_index_defaults_to_one() {
    let model = DfqParser::new().parse_str("K1001 P1\nK2001 C1\n").unwrap();

    assert_eq!(characteristic_value_of(&model, "K2001", 1, 1), Some(&text("C1")));
}

#[test]
fn test_value_is_trimmed_and_may_contain_spaces() {
    let model = DfqParser::new()
        .parse_str("K1001/1 P1\nK2002/1   Outer  diameter   \n")
        .unwrap();

    assert_eq!(
        characteristic_value_of(&model, "K2002", 1, 1),
        Some(&text("Outer  diameter"))
    );
}

#[test]
fn test_empty_value_drops_record() {
    let model = DfqParser::new().parse_str("K1001/1 P1\nK2001/1 C1\nK2002/1\n").unwrap();

    assert_eq!(characteristic_value_of(&model, "K2002", 1, 1), None);
}

#[test]
fn test_empty_part_record_switches_part() {
    let model = DfqParser::new()
        .parse_str("K1001/1 P1\nK2001/1 C1\nK1001/2\nK2001/2 C2\nK1001/3\n")
        .unwrap();

    assert_eq!(model.part_indexes(), vec![PartIndex(1), PartIndex(2), PartIndex(3)]);
    assert_eq!(characteristic_value_of(&model, "K2001", 2, 2), Some(&text("C2")));
    assert!(model.part_entries(PartIndex(2)).unwrap().is_empty());
}

#[test]
fn test_empty_value_still_advances_value_rows() {
    let model = DfqParser::new()
        .parse_str(
            "K2001/1 C1\n\
             K0001/1 1.0\n\
             K0002/1\n\
             K0001/1 2.0\n\
             K0002/1 5\n",
        )
        .unwrap();

    assert_eq!(value_of(&model, "K0001", 1, 1, 1), Some(&decimal("1.0")));
    assert_eq!(value_of(&model, "K0002", 1, 1, 1), None);
    assert_eq!(value_of(&model, "K0001", 1, 1, 2), Some(&decimal("2.0")));
    assert_eq!(value_of(&model, "K0002", 1, 1, 2).and_then(|v| v.as_integer()), Some(5));
}

#[test]
fn test_values_resolve_part_by_characteristic() {
    let model = DfqParser::new()
        .parse_str(
            "K1001/1 P1\n\
             K2001/1 C1\n\
             K1001/2 P2\n\
             K2001/2 C2\n\
             K0001/2 7.5\n\
             K0001/1 1.5\n",
        )
        .unwrap();

    assert_eq!(value_of(&model, "K0001", 2, 2, 1), Some(&decimal("7.5")));
    assert_eq!(value_of(&model, "K0001", 1, 1, 1), Some(&decimal("1.5")));
}

#[test]
fn test_explicit_value_row() {
    let model = DfqParser::new()
        .parse_str("K2001/1 C1\nK0001/1/4 4.0\nK0001/1/2 2.0\n")
        .unwrap();

    assert_eq!(value_of(&model, "K0001", 1, 1, 4), Some(&decimal("4.0")));
    assert_eq!(value_of(&model, "K0001", 1, 1, 2), Some(&decimal("2.0")));
    assert_eq!(value_of(&model, "K0001", 1, 1, 1), None);
}

#[test]
fn test_value_of_unknown_characteristic_is_structural_error() {
    let error = DfqParser::new()
        .parse_str("K2001/1 C1\nK0001/5 1.0\n")
        .unwrap_err();

    assert!(error.is_invalid_structure());
    assert_eq!(error.line(), Some(2));
    assert!(error.to_string().contains("Error at line: 2"));
}

#[test]
fn test_invalid_index_is_structural_error() {
    let error = DfqParser::new().parse_str("K1001/1 P1\nK2001/x C1\n").unwrap_err();

    assert!(error.is_invalid_structure());
    assert_eq!(error.line(), Some(2));
}

#[test]
fn test_value_index_on_non_value_key_is_structural_error() {
    let error = DfqParser::new().parse_str("K2001/1/2 C1\n").unwrap_err();

    assert!(error.is_invalid_structure());
    assert_eq!(error.line(), Some(1));
}

#[test]
fn test_unknown_kkey_is_dropped() {
    let result = DfqParser::new()
        .parse_with_stats("K1001/1 P1\nK1999/1 whatever\n")
        .unwrap();

    assert_eq!(result.stats.unknown_kkeys, 1);
    assert_eq!(result.model.part_entries(PartIndex(1)).map(|p| p.len()), Some(1));
}

#[test]
fn test_unconvertible_value_is_dropped() {
    let result = DfqParser::new()
        .parse_with_stats("K2001/1 C1\nK2004/1 variable\nK2100/1 3,14\n")
        .unwrap();

    assert_eq!(result.stats.conversion_failures, 1);
    assert_eq!(characteristic_value_of(&result.model, "K2004", 1, 1), None);
    assert_eq!(
        characteristic_value_of(&result.model, "K2100", 1, 1),
        Some(&decimal("3.14"))
    );
}

#[test]
fn test_hierarchy_records_are_forwarded() {
    let model = DfqParser::new()
        .parse_str(
            "K1001/1 P1\n\
             K2001/1 C1\n\
             K5111/1 1\n\
             K5112/2 1\n\
             K5103/1 2\n",
        )
        .unwrap();

    let hierarchy = model.hierarchy();
    assert!(hierarchy.contains_hierarchy_information());
    assert_eq!(hierarchy.node_definition_count(), 2);
    assert_eq!(hierarchy.node_binding_count(), 1);
}

#[test]
fn test_mixed_hierarchy_encodings_are_rejected() {
    let error = DfqParser::new()
        .parse_str(
            "K2001/1 C1\n\
             K2001/2 C2\n\
             K5111/1 1\n\
             K2031/2 10\n",
        )
        .unwrap_err();

    assert!(error.is_invalid_structure());
    assert_eq!(error.line(), Some(4));
}
