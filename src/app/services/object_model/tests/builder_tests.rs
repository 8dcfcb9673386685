//! Tests for the cursor based model builder

use super::super::AqdefObjectModelBuilder;
use super::text;
use crate::app::models::{
    CatalogRecordIndex, CharacteristicIndex, GroupIndex, KKeyValue, PartIndex, ValueIndex,
};
use crate::app::services::hierarchy::HierarchyIndex;

#[test]
fn test_cursors_address_entries() {
    let mut builder = AqdefObjectModelBuilder::new();
    builder.create_part_entry("K1001", text("P1")).unwrap();
    builder.create_characteristic_entry("K2001", text("C1")).unwrap();
    builder.create_value_entry("K0001", KKeyValue::from(1)).unwrap();
    builder.next_value();
    builder.create_value_entry("K0001", KKeyValue::from(2)).unwrap();
    builder.next_characteristic();
    builder.create_characteristic_entry("K2001", text("C2")).unwrap();
    builder.create_value_entry("K0001", KKeyValue::from(3)).unwrap();
    builder.create_group_entry("K5001", text("G1")).unwrap();
    builder.create_catalog_record_entry("K4002", text("Supplier")).unwrap();
    builder.next_part();
    builder.create_part_entry("K1001", text("P2")).unwrap();

    let model = builder.build();

    assert_eq!(model.part_indexes(), vec![PartIndex(1), PartIndex(2)]);
    assert!(model.contains_value(ValueIndex::new(1, 1, 2)));
    assert!(model.contains_value(ValueIndex::new(1, 2, 1)));
    assert!(model.group_entries(GroupIndex::new(1, 1)).is_some());
    assert!(model.catalog_record_entries(CatalogRecordIndex(1)).is_some());
    assert!(model.hierarchy().is_empty());
}

#[test]
fn test_absent_values_are_skipped() {
    let mut builder = AqdefObjectModelBuilder::new();
    builder.create_part_entry("K1001", None::<KKeyValue>).unwrap();

    assert!(builder.build().is_empty());
}

#[test]
fn test_replace_entries_fan_out() {
    let mut builder = AqdefObjectModelBuilder::new();
    builder.create_part_entry("K1001", text("P1")).unwrap();
    builder.create_characteristic_entry("K2001", text("C1")).unwrap();
    builder.next_characteristic();
    builder.create_characteristic_entry("K2001", text("C2")).unwrap();
    builder.next_part();
    builder.create_part_entry("K1001", text("P2")).unwrap();

    builder.replace_part_entry("K1002", 0, text("shared")).unwrap();
    builder.replace_characteristic_entry("K2002", 1, 0, text("all of part 1")).unwrap();
    builder.replace_characteristic_entry("K2003", 1, 2, text("only C2")).unwrap();

    let model = builder.build();

    for part in model.parts() {
        assert_eq!(part.get("K1002"), Some(&text("shared")));
    }
    let first = model.characteristic_entries(CharacteristicIndex::new(1, 1)).unwrap();
    let second = model.characteristic_entries(CharacteristicIndex::new(1, 2)).unwrap();
    assert_eq!(first.get("K2002"), Some(&text("all of part 1")));
    assert_eq!(second.get("K2002"), Some(&text("all of part 1")));
    assert_eq!(first.get("K2003"), None);
    assert_eq!(second.get("K2003"), Some(&text("only C2")));
}

#[test]
fn test_hierarchy_nodes_follow_cursors() {
    let mut builder = AqdefObjectModelBuilder::new();
    builder.create_part_entry("K1001", text("P1")).unwrap();
    builder.create_hierarchy_node_of_part();

    builder.create_characteristic_entry("K2001", text("parent")).unwrap();
    builder.create_hierarchy_node_of_characteristic(100, None);
    builder.next_characteristic();
    builder.create_characteristic_entry("K2001", text("child")).unwrap();
    builder.create_hierarchy_node_of_characteristic(200, Some(100));

    let model = builder.build();
    let hierarchy = model.hierarchy();

    assert_eq!(
        hierarchy.parent_index_of_characteristic(CharacteristicIndex::new(1, 2)),
        Some(HierarchyIndex::Characteristic(CharacteristicIndex::new(1, 1)))
    );
    assert!(hierarchy.has_children(CharacteristicIndex::new(1, 1)));
}
