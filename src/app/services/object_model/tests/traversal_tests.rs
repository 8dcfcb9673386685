//! Tests for iteration, filtering and search

use super::{decimal, sample_model, text};
use crate::app::models::{CharacteristicIndex, KKey, KKeyValue, PartIndex, ValueIndex};

#[test]
fn test_for_each_visits_in_index_order() {
    let model = sample_model();

    let mut visited = Vec::new();
    model.for_each_characteristic(|part, characteristic| {
        visited.push((part.index(), characteristic.index()));
    });
    assert_eq!(
        visited,
        vec![
            (PartIndex(1), CharacteristicIndex::new(1, 1)),
            (PartIndex(1), CharacteristicIndex::new(1, 2)),
            (PartIndex(2), CharacteristicIndex::new(2, 3)),
        ]
    );

    let mut values = Vec::new();
    model.for_each_value(|_, _, value| values.push(value.index()));
    assert_eq!(values.first(), Some(&ValueIndex::new(1, 1, 1)));
    assert_eq!(values.last(), Some(&ValueIndex::new(2, 3, 2)));
    assert_eq!(values.len(), 6);
}

#[test]
fn test_scoped_iteration() {
    let model = sample_model();

    let mut count = 0;
    model.for_each_value_of_part(PartIndex(1), |_, _| count += 1);
    assert_eq!(count, 4);

    let mut rows = Vec::new();
    model.for_each_value_of_characteristic(CharacteristicIndex::new(2, 3), |value| {
        rows.push(value.index().index)
    });
    assert_eq!(rows, vec![1, 2]);
}

#[test]
fn test_filter_parts_cascades() {
    let mut model = sample_model();

    model.filter_parts(|part| part.get("K1001") == Some(&text("P1")));

    assert_eq!(model.part_indexes(), vec![PartIndex(1)]);
    assert_eq!(model.characteristic_count(), 2);
    assert!(model.values(CharacteristicIndex::new(2, 3)).next().is_none());
}

#[test]
fn test_filter_characteristics_cascades_to_values() {
    let mut model = sample_model();

    model.filter_characteristics(|_, characteristic| characteristic.index().index != 1);

    assert!(!model.contains_characteristic(CharacteristicIndex::new(1, 1)));
    assert!(!model.contains_value(ValueIndex::new(1, 1, 1)));
    assert_eq!(model.value_count(), 3);
}

#[test]
fn test_filter_values() {
    let mut model = sample_model();
    let threshold = decimal("1.2");

    model.filter_values(|_, _, value| value.get("K0001") != Some(&threshold));

    assert!(!model.contains_value(ValueIndex::new(1, 1, 2)));
    assert!(model.contains_value(ValueIndex::new(1, 1, 3)));
    assert_eq!(model.value_count(), 5);

    model.filter_values_of_characteristic(CharacteristicIndex::new(2, 3), |_| false);
    assert_eq!(model.value_count(), 3);
}

#[test]
fn test_find_part_index_for_characteristic() {
    let model = sample_model();

    assert_eq!(model.find_part_index_for_characteristic(3), Some(PartIndex(2)));
    assert_eq!(model.find_part_index_for_characteristic(2), Some(PartIndex(1)));
    assert_eq!(model.find_part_index_for_characteristic(7), None);
}

#[test]
fn test_find_characteristic_indexes_for_part() {
    let model = sample_model();

    let found = model.find_characteristic_indexes_for_part(PartIndex(1), |characteristic| {
        characteristic.get("K2001") == Some(&text("C2"))
    });

    assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![CharacteristicIndex::new(1, 2)]);
}

#[test]
fn test_get_any_value_of() {
    let model = sample_model();

    assert!(model.get_any_value_of(&KKey::of("K1001")).unwrap().is_some());
    assert!(model.get_any_value_of(&KKey::of("K0001")).unwrap().is_some());
    assert_eq!(model.get_any_value_of(&KKey::of("K1002")).unwrap(), None);
    assert!(model.get_any_value_of(&KKey::of("K4002")).is_err());
}

#[test]
fn test_value_sets_transpose_rows() {
    let model = sample_model();

    let sets = model.get_value_sets(PartIndex(1));

    assert_eq!(sets.len(), 3);
    assert_eq!(
        sets[0].characteristic_indexes(),
        vec![CharacteristicIndex::new(1, 1), CharacteristicIndex::new(1, 2)]
    );
    assert_eq!(sets[1].characteristic_indexes(), vec![CharacteristicIndex::new(1, 1)]);
    assert_eq!(
        sets[2]
            .values_of_characteristic(CharacteristicIndex::new(1, 1))
            .and_then(|value| value.get("K0001")),
        Some(&decimal("1.3"))
    );
    assert!(model.get_value_sets(PartIndex(9)).is_empty());
}

#[test]
fn test_any_value_for_custom_level() {
    let mut model = sample_model();
    model
        .put_part_entry(&KKey::of("KX100"), PartIndex(2), KKeyValue::from(5))
        .unwrap();

    assert_eq!(
        model.get_any_value_of(&KKey::of("KX100")).unwrap(),
        Some(&KKeyValue::Integer(5))
    );
}
