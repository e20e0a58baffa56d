//! Dynamically typed setting values.
//!
//! A host environment hands keyword arguments over without static types. A
//! [`SettingValue`] carries such an argument until it is coerced into the
//! declared type of the field it targets. Coercion follows the host's integer
//! argument parsing: boolean fields take booleans or integers (non-zero is
//! true), the font size takes integers that fit in a C `int`, and string
//! fields take strings only.

use crate::errors::ArgumentError;
use crate::settings::{FieldKind, WebField};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

/// A keyword argument value as supplied by a host environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl SettingValue {
    /// Host-facing type name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            SettingValue::Bool(_) => "bool",
            SettingValue::Int(_) => "int",
            SettingValue::Str(_) => "str",
        }
    }

    pub(crate) fn into_bool(self, field: WebField) -> Result<bool, ArgumentError> {
        match self {
            SettingValue::Bool(b) => Ok(b),
            SettingValue::Int(i) => Ok(i != 0),
            other => Err(wrong_type(field, FieldKind::Bool, &other)),
        }
    }

    pub(crate) fn into_int(self, field: WebField) -> Result<i32, ArgumentError> {
        match self {
            SettingValue::Int(i) => {
                i32::try_from(i).map_err(|_| ArgumentError::OutOfRange { field, value: i.into() })
            }
            other => Err(wrong_type(field, FieldKind::Int, &other)),
        }
    }

    pub(crate) fn into_string(self, field: WebField) -> Result<String, ArgumentError> {
        match self {
            SettingValue::Str(s) => Ok(s),
            other => Err(wrong_type(field, FieldKind::Str, &other)),
        }
    }
}

fn wrong_type(field: WebField, expected: FieldKind, found: &SettingValue) -> ArgumentError {
    ArgumentError::WrongType {
        field,
        expected,
        found: found.type_name(),
    }
}

impl Display for SettingValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingValue::Bool(b) => write!(f, "{b}"),
            SettingValue::Int(i) => write!(f, "{i}"),
            SettingValue::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(b: bool) -> Self {
        SettingValue::Bool(b)
    }
}

impl From<i32> for SettingValue {
    fn from(i: i32) -> Self {
        SettingValue::Int(i.into())
    }
}

impl From<i64> for SettingValue {
    fn from(i: i64) -> Self {
        SettingValue::Int(i)
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        SettingValue::Str(s.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        SettingValue::Str(s)
    }
}

impl SettingValue {
    /// Converts a JSON value supplied for `field`. Integers beyond `i64` are
    /// out of range for every field; floats, `null`, arrays and objects are
    /// not setting values.
    pub fn from_json(field: WebField, value: serde_json::Value) -> Result<Self, ArgumentError> {
        use serde_json::Value;

        match value {
            Value::Bool(b) => Ok(SettingValue::Bool(b)),
            Value::String(s) => Ok(SettingValue::Str(s)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(SettingValue::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Err(ArgumentError::OutOfRange { field, value: u.into() })
                } else {
                    Err(ArgumentError::InvalidJson(format!("{field}: {n} is not an integer")))
                }
            }
            Value::Null => Err(ArgumentError::InvalidJson(format!("{field}: null is not a setting value"))),
            Value::Array(_) => Err(ArgumentError::InvalidJson(format!("{field}: arrays are not setting values"))),
            Value::Object(_) => Err(ArgumentError::InvalidJson(format!("{field}: objects are not setting values"))),
        }
    }
}

/// A JSON object read as its `(key, value)` pairs in document order.
///
/// Repeated keys are all kept, so the keyword layer sees every one of them.
#[derive(Debug, Default)]
pub(crate) struct KeywordPairs(pub(crate) Vec<(String, serde_json::Value)>);

impl<'de> Deserialize<'de> for KeywordPairs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = KeywordPairs;

            fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str("a JSON object of keyword arguments")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(pair) = map.next_entry::<String, serde_json::Value>()? {
                    pairs.push(pair);
                }
                Ok(KeywordPairs(pairs))
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}
