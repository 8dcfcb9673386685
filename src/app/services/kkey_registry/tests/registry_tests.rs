//! Tests for the built-in K-key tables

use crate::app::models::{DataType, KKey};
use crate::app::services::kkey_registry::KKeyRepository;

fn metadata(key: &str) -> &'static crate::app::models::KKeyMetadata {
    KKeyRepository::instance()
        .metadata_for(&KKey::of(key))
        .unwrap_or_else(|| panic!("missing metadata for {}", key))
}

#[test]
fn test_default_keys_are_present() {
    let part = metadata("K1001");
    assert_eq!(part.column_name(), "TETEILNR");
    assert_eq!(part.data_type(), DataType::String);
    assert_eq!(part.length(), Some(30));

    assert_eq!(metadata("K2004").data_type(), DataType::Integer);
    assert_eq!(metadata("K0004").data_type(), DataType::Date);
    assert_eq!(metadata("K0097").data_type(), DataType::Uuid);
}

#[test]
fn test_corrections_override_defaults() {
    let value = metadata("K0001");
    assert_eq!(value.column_name(), "WVWERT");
    assert_eq!(value.data_type(), DataType::Decimal);
    assert!(value.is_respects_characteristic_decimal_settings());

    assert_eq!(metadata("K0011").data_type(), DataType::String);
    assert_eq!(metadata("K1017").data_type(), DataType::Boolean);
}

#[test]
fn test_special_converters() {
    assert_eq!(metadata("K0005").converter().name(), "event ids");
    assert_eq!(metadata("K0006").converter().name(), "charge");
    assert_eq!(metadata("K0020").converter().name(), "subgroup size");
    assert!(!metadata("K0020").is_save_to_db());
    assert!(!metadata("K0021").is_save_to_db());
}

#[test]
fn test_duplicate_default_row_keeps_last_definition() {
    assert_eq!(metadata("K2448").column_name(), "ME_2448");
}

#[test]
fn test_missing_and_user_field_keys() {
    assert_eq!(metadata("K2031").column_name(), "MEUPPERMERKMAL");
    assert_eq!(metadata("K5111").data_type(), DataType::Integer);
    assert_eq!(metadata("K1802").length(), Some(255));
    assert!(!metadata("K2891").is_save_to_db());
}

#[test]
fn test_unknown_key_has_no_metadata() {
    let registry = KKeyRepository::instance();
    assert!(registry.metadata_for(&KKey::of("K9999")).is_none());
    assert!(!registry.contains(&KKey::of("KX001")));
    assert!(registry.key_count() > 400);
}
