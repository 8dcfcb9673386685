//! Typed K-key values

use std::fmt;

use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Value of a single K-key
///
/// Every variant corresponds to one [`DataType`]. Absence of a value is modelled with
/// `Option<KKeyValue>` at the API boundary, never with a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum KKeyValue {
    String(String),
    Integer(i32),
    Decimal(Decimal),
    Date(DateTime<Local>),
    Boolean(bool),
    Uuid(Uuid),
    IntegerList(Vec<i32>),
}

impl KKeyValue {
    pub fn data_type(&self) -> DataType {
        match self {
            KKeyValue::String(_) => DataType::String,
            KKeyValue::Integer(_) => DataType::Integer,
            KKeyValue::Decimal(_) => DataType::Decimal,
            KKeyValue::Date(_) => DataType::Date,
            KKeyValue::Boolean(_) => DataType::Boolean,
            KKeyValue::Uuid(_) => DataType::Uuid,
            KKeyValue::IntegerList(_) => DataType::IntegerList,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            KKeyValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            KKeyValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            KKeyValue::Decimal(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&DateTime<Local>> {
        match self {
            KKeyValue::Date(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            KKeyValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            KKeyValue::Uuid(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_integer_list(&self) -> Option<&[i32]> {
        match self {
            KKeyValue::IntegerList(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for KKeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KKeyValue::String(value) => f.write_str(value),
            KKeyValue::Integer(value) => write!(f, "{}", value),
            KKeyValue::Decimal(value) => write!(f, "{}", value),
            KKeyValue::Date(value) => write!(f, "{}", value.format("%Y-%m-%dT%H:%M:%S%:z")),
            KKeyValue::Boolean(value) => write!(f, "{}", value),
            KKeyValue::Uuid(value) => write!(f, "{}", value),
            KKeyValue::IntegerList(values) => {
                let joined: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", joined.join(", "))
            }
        }
    }
}

impl From<String> for KKeyValue {
    fn from(value: String) -> Self {
        KKeyValue::String(value)
    }
}

impl From<&str> for KKeyValue {
    fn from(value: &str) -> Self {
        KKeyValue::String(value.to_string())
    }
}

impl From<i32> for KKeyValue {
    fn from(value: i32) -> Self {
        KKeyValue::Integer(value)
    }
}

impl From<Decimal> for KKeyValue {
    fn from(value: Decimal) -> Self {
        KKeyValue::Decimal(value)
    }
}

impl From<DateTime<Local>> for KKeyValue {
    fn from(value: DateTime<Local>) -> Self {
        KKeyValue::Date(value)
    }
}

impl From<bool> for KKeyValue {
    fn from(value: bool) -> Self {
        KKeyValue::Boolean(value)
    }
}

impl From<Uuid> for KKeyValue {
    fn from(value: Uuid) -> Self {
        KKeyValue::Uuid(value)
    }
}

impl From<Vec<i32>> for KKeyValue {
    fn from(value: Vec<i32>) -> Self {
        KKeyValue::IntegerList(value)
    }
}

/// Declared type of a K-key's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    String,
    Integer,
    Decimal,
    Date,
    Boolean,
    Uuid,
    IntegerList,
}

impl DataType {
    pub fn name(self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Integer => "integer",
            DataType::Decimal => "decimal",
            DataType::Date => "date",
            DataType::Boolean => "boolean",
            DataType::Uuid => "uuid",
            DataType::IntegerList => "integer list",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_value_accessors() {
        let decimal = KKeyValue::from(Decimal::from_str("1.25").unwrap());
        assert_eq!(decimal.data_type(), DataType::Decimal);
        assert_eq!(decimal.as_decimal(), Some(Decimal::from_str("1.25").unwrap()));
        assert_eq!(decimal.as_integer(), None);

        let list = KKeyValue::from(vec![1, 2]);
        assert_eq!(list.as_integer_list(), Some(&[1, 2][..]));
        assert_eq!(list.to_string(), "[1, 2]");
    }

    #[test]
    fn test_value_json_shape() {
        let value = KKeyValue::Integer(7);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"type":"integer","value":7}"#);

        let back: KKeyValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
