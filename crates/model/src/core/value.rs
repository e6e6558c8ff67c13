use bson::Bson;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single filter value as supplied by a caller or produced by the value
/// normalizer. `DateTime` only appears after normalization of a date-typed
/// attribute's value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ScalarValue {
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    DateTime(DateTime<Utc>),
    Null,
}

impl ScalarValue {
    /// Convert a loose JSON scalar. Objects and arrays are not scalars.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => Some(ScalarValue::Null),
            serde_json::Value::Bool(b) => Some(ScalarValue::Boolean(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(ScalarValue::Int(i))
                } else {
                    n.as_f64().map(ScalarValue::Float)
                }
            }
            serde_json::Value::String(s) => Some(ScalarValue::String(s.clone())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Stringified form used by the `sneq` operator. Mirrors a plain string
    /// cast, not SQL quoting.
    pub fn to_plain_string(&self) -> String {
        match self {
            ScalarValue::Int(v) => v.to_string(),
            ScalarValue::Float(v) => v.to_string(),
            ScalarValue::String(v) => v.clone(),
            ScalarValue::Boolean(v) => v.to_string(),
            ScalarValue::DateTime(v) => v.format("%Y-%m-%d %H:%M:%S").to_string(),
            ScalarValue::Null => String::new(),
        }
    }

    pub fn to_bson(&self) -> Bson {
        match self {
            ScalarValue::Int(v) => Bson::Int64(*v),
            ScalarValue::Float(v) => Bson::Double(*v),
            ScalarValue::String(v) => Bson::String(v.clone()),
            ScalarValue::Boolean(v) => Bson::Boolean(*v),
            ScalarValue::DateTime(v) => Bson::DateTime(bson::DateTime::from_chrono(*v)),
            ScalarValue::Null => Bson::Null,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Null => write!(f, "null"),
            other => write!(f, "{}", other.to_plain_string()),
        }
    }
}

/// A raw condition value: one scalar or an ordered sequence of scalars.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FilterValue {
    Scalar(ScalarValue),
    List(Vec<ScalarValue>),
}

impl FilterValue {
    /// Convert loose JSON into a filter value. Objects have no value
    /// representation (they are condition maps, not values).
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Array(items) => items
                .iter()
                .map(ScalarValue::from_json)
                .collect::<Option<Vec<_>>>()
                .map(FilterValue::List),
            other => ScalarValue::from_json(other).map(FilterValue::Scalar),
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            FilterValue::Scalar(v) => Some(v),
            FilterValue::List(_) => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, FilterValue::List(_))
    }
}

impl From<ScalarValue> for FilterValue {
    fn from(value: ScalarValue) -> Self {
        FilterValue::Scalar(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::String(value.to_string())
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Int(value)
    }
}
