use crate::errors::TranslationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// EAV attribute backend data types. Only the temporal types influence
/// translation: their values are normalized to a canonical point in time
/// before being embedded in a predicate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackendType {
    Static,
    Varchar,
    Int,
    Text,
    Decimal,
    Date,
    Datetime,
}

impl BackendType {
    pub fn is_temporal(&self) -> bool {
        matches!(self, BackendType::Date | BackendType::Datetime)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BackendType::Static => "static",
            BackendType::Varchar => "varchar",
            BackendType::Int => "int",
            BackendType::Text => "text",
            BackendType::Decimal => "decimal",
            BackendType::Date => "date",
            BackendType::Datetime => "datetime",
        }
    }

    /// A type-hint key embedded in a condition map ("date" / "datetime")
    /// forces temporal normalization without a metadata lookup.
    pub fn from_hint(key: &str) -> Option<Self> {
        match key {
            "date" => Some(BackendType::Date),
            "datetime" => Some(BackendType::Datetime),
            _ => None,
        }
    }
}

impl TryFrom<&str> for BackendType {
    type Error = TranslationError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "static" => Ok(BackendType::Static),
            "varchar" => Ok(BackendType::Varchar),
            "int" => Ok(BackendType::Int),
            "text" => Ok(BackendType::Text),
            "decimal" => Ok(BackendType::Decimal),
            "date" => Ok(BackendType::Date),
            "datetime" => Ok(BackendType::Datetime),
            other => Err(TranslationError::UnresolvedAttributeType(other.to_string())),
        }
    }
}

impl fmt::Display for BackendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend_type() {
        assert_eq!(BackendType::try_from("varchar").unwrap(), BackendType::Varchar);
        assert_eq!(BackendType::try_from("DATETIME").unwrap(), BackendType::Datetime);
        assert!(BackendType::try_from("geometry").is_err());
    }

    #[test]
    fn test_is_temporal() {
        assert!(BackendType::Date.is_temporal());
        assert!(BackendType::Datetime.is_temporal());
        assert!(!BackendType::Varchar.is_temporal());
        assert!(!BackendType::Decimal.is_temporal());
    }

    #[test]
    fn test_from_hint() {
        assert_eq!(BackendType::from_hint("date"), Some(BackendType::Date));
        assert_eq!(BackendType::from_hint("eq"), None);
    }
}
