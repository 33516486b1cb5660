//! Typed field values produced by record accessors
#![allow(clippy::must_use_candidate)] // Accessors are clear at call sites without #[must_use].

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single field's value as read from one record
///
/// Every variant carries an `Option` so absence is tracked per kind:
/// absent text and temporal values render as empty columns, while an
/// absent value of any other kind is rejected during encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Text value
    Text(Option<String>),

    /// Integer value (64-bit)
    Integer(Option<i64>),

    /// Decimal/float value
    Decimal(Option<f64>),

    /// Boolean value
    Boolean(Option<bool>),

    /// Calendar date
    Date(Option<NaiveDate>),

    /// Date with time of day
    DateTime(Option<NaiveDateTime>),
}

/// The kind of a field value, independent of presence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    /// Text type
    Text,
    /// Integer type (64-bit)
    Integer,
    /// Decimal/float type
    Decimal,
    /// Boolean type
    Boolean,
    /// Date type
    Date,
    /// DateTime type
    DateTime,
}

impl FieldValue {
    /// Kind of this value, regardless of presence
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Text(_) => ValueKind::Text,
            FieldValue::Integer(_) => ValueKind::Integer,
            FieldValue::Decimal(_) => ValueKind::Decimal,
            FieldValue::Boolean(_) => ValueKind::Boolean,
            FieldValue::Date(_) => ValueKind::Date,
            FieldValue::DateTime(_) => ValueKind::DateTime,
        }
    }

    /// Whether the value is absent
    pub fn is_absent(&self) -> bool {
        match self {
            FieldValue::Text(v) => v.is_none(),
            FieldValue::Integer(v) => v.is_none(),
            FieldValue::Decimal(v) => v.is_none(),
            FieldValue::Boolean(v) => v.is_none(),
            FieldValue::Date(v) => v.is_none(),
            FieldValue::DateTime(v) => v.is_none(),
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Text => write!(f, "text"),
            ValueKind::Integer => write!(f, "integer"),
            ValueKind::Decimal => write!(f, "decimal"),
            ValueKind::Boolean => write!(f, "boolean"),
            ValueKind::Date => write!(f, "date"),
            ValueKind::DateTime => write!(f, "datetime"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(Some(value.to_string()))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(Some(value))
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Option<&str>> for FieldValue {
    fn from(value: Option<&str>) -> Self {
        FieldValue::Text(value.map(str::to_string))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(Some(value))
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(Some(i64::from(value)))
    }
}

impl From<Option<i64>> for FieldValue {
    fn from(value: Option<i64>) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Decimal(Some(value))
    }
}

impl From<Option<f64>> for FieldValue {
    fn from(value: Option<f64>) -> Self {
        FieldValue::Decimal(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(Some(value))
    }
}

impl From<Option<bool>> for FieldValue {
    fn from(value: Option<bool>) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(Some(value))
    }
}

impl From<Option<NaiveDate>> for FieldValue {
    fn from(value: Option<NaiveDate>) -> Self {
        FieldValue::Date(value)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(value: NaiveDateTime) -> Self {
        FieldValue::DateTime(Some(value))
    }
}

impl From<Option<NaiveDateTime>> for FieldValue {
    fn from(value: Option<NaiveDateTime>) -> Self {
        FieldValue::DateTime(value)
    }
}
