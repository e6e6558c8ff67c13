//! Value normalization applied before a predicate is embedded in the query
//! tree. Currently pass-through for everything except date/datetime typed
//! attributes, whose values are converted to a canonical point in time.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use model::{
    core::{
        data_type::BackendType,
        value::{FilterValue, ScalarValue},
    },
    errors::TranslationError,
};

/// Parses a date-like string into a canonical point-in-time value. The
/// engine depends only on this contract, not on a concrete parser.
pub trait DateParser {
    fn parse(&self, raw: &str) -> Result<DateTime<Utc>, TranslationError>;
}

/// Default parser for the catalog's date/time string formats. Bare dates
/// resolve to midnight UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogDateParser;

impl DateParser for CatalogDateParser {
    fn parse(&self, raw: &str) -> Result<DateTime<Utc>, TranslationError> {
        parse_datetime(raw).ok_or_else(|| TranslationError::DateParse {
            value: raw.to_string(),
        })
    }
}

/// Normalize a raw condition value for an attribute of the given backend
/// type. Applied uniformly regardless of condition shape; list values are
/// normalized element by element.
pub fn normalize_value(
    value: FilterValue,
    backend_type: BackendType,
    dates: &dyn DateParser,
) -> Result<FilterValue, TranslationError> {
    if !backend_type.is_temporal() {
        return Ok(value);
    }

    match value {
        FilterValue::Scalar(scalar) => Ok(FilterValue::Scalar(normalize_scalar(scalar, dates)?)),
        FilterValue::List(scalars) => Ok(FilterValue::List(
            scalars
                .into_iter()
                .map(|scalar| normalize_scalar(scalar, dates))
                .collect::<Result<Vec<_>, _>>()?,
        )),
    }
}

fn normalize_scalar(
    scalar: ScalarValue,
    dates: &dyn DateParser,
) -> Result<ScalarValue, TranslationError> {
    match scalar {
        ScalarValue::DateTime(_) => Ok(scalar),
        ScalarValue::String(raw) => dates.parse(&raw).map(ScalarValue::DateTime),
        other => Err(TranslationError::DateParse {
            value: other.to_plain_string(),
        }),
    }
}

fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    parse_naive_datetime(raw)
        .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}

fn parse_naive_datetime(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Render a normalized point-in-time value back into the catalog's
/// date/time string format.
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M:%S").to_string()
}
