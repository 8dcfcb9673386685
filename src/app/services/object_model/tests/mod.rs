//! Test utilities for object model testing

use rust_decimal::Decimal;

use crate::app::models::{CharacteristicIndex, KKey, KKeyValue, PartIndex, ValueIndex};
use crate::app::services::object_model::AqdefObjectModel;

// Test modules
mod builder_tests;
mod traversal_tests;

pub fn decimal(text: &str) -> KKeyValue {
    KKeyValue::Decimal(text.parse::<Decimal>().unwrap())
}

pub fn text(value: &str) -> KKeyValue {
    KKeyValue::from(value)
}

/// Two parts; part 1 has characteristics 1 and 2, part 2 has characteristic 3.
/// Characteristic 1 has three values, characteristic 2 one, characteristic 3 two.
pub fn sample_model() -> AqdefObjectModel {
    let mut model = AqdefObjectModel::new();
    model.put_part_entry(&KKey::of("K1001"), PartIndex(1), text("P1")).unwrap();
    model.put_part_entry(&KKey::of("K1001"), PartIndex(2), text("P2")).unwrap();

    for (part, characteristic, name, values) in [
        (1, 1, "C1", vec!["1.1", "1.2", "1.3"]),
        (1, 2, "C2", vec!["2.1"]),
        (2, 3, "C3", vec!["3.1", "3.2"]),
    ] {
        let index = CharacteristicIndex::new(part, characteristic);
        model
            .put_characteristic_entry(&KKey::of("K2001"), index, text(name))
            .unwrap();
        for (row, value) in values.iter().enumerate() {
            model
                .put_value_entry(
                    &KKey::of("K0001"),
                    ValueIndex::of(index, row as u32 + 1),
                    decimal(value),
                )
                .unwrap();
        }
    }
    model
}
