//! Parsing of loosely-structured filter requests (config files, stored
//! filter definitions) into the typed [`FilterRequest`] variants.

use crate::core::{data_type::BackendType, operator::FilterOperator, value::FilterValue};
use crate::errors::TranslationError;
use crate::request::{
    classify::{classify, ConditionShape},
    ConditionInput, FilterRequest, OrItem,
};
use serde_json::{Map, Value};

impl FilterRequest {
    /// Build a typed request from loose JSON, applying the same three-way
    /// classification rule a typed caller applies at construction time.
    pub fn from_loose(
        attribute_spec: &Value,
        condition_spec: Option<&Value>,
    ) -> Result<Self, TranslationError> {
        match classify(attribute_spec, condition_spec) {
            ConditionShape::Or => parse_or(attribute_spec, condition_spec),
            ConditionShape::And => parse_and(attribute_spec, condition_spec),
            ConditionShape::Default => parse_default(attribute_spec, condition_spec),
        }
    }
}

fn attribute_code(attribute_spec: &Value) -> Result<String, TranslationError> {
    attribute_spec
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| {
            TranslationError::InvalidRequest(format!(
                "expected an attribute code, got {attribute_spec}"
            ))
        })
}

fn condition_value(key: &str, raw: &Value) -> Result<FilterValue, TranslationError> {
    FilterValue::from_json(raw).ok_or_else(|| {
        TranslationError::InvalidRequest(format!(
            "condition value for '{key}' is not a scalar or sequence"
        ))
    })
}

fn parse_default(
    attribute_spec: &Value,
    condition_spec: Option<&Value>,
) -> Result<FilterRequest, TranslationError> {
    let attribute = attribute_code(attribute_spec)?;

    let condition = match condition_spec {
        None | Some(Value::Null) => ConditionInput::Value(FilterValue::Scalar(
            crate::core::value::ScalarValue::Null,
        )),
        Some(Value::Object(map)) => {
            let (key, raw) = map.iter().next().ok_or_else(|| {
                TranslationError::InvalidRequest(format!(
                    "empty condition map for attribute '{attribute}'"
                ))
            })?;
            let operator = FilterOperator::parse(key)?;
            ConditionInput::Operator(operator, condition_value(key, raw)?)
        }
        // a bare scalar or sequence means literal equality
        Some(other) => ConditionInput::Value(condition_value("eq", other)?),
    };

    Ok(FilterRequest::Default {
        attribute,
        condition,
    })
}

fn parse_and(
    attribute_spec: &Value,
    condition_spec: Option<&Value>,
) -> Result<FilterRequest, TranslationError> {
    let attribute = attribute_code(attribute_spec)?;
    let map = condition_spec.and_then(Value::as_object).ok_or_else(|| {
        TranslationError::InvalidRequest(format!(
            "AND condition for attribute '{attribute}' is not an operator map"
        ))
    })?;

    // the type-hint entry is stripped before the operator entries are
    // iterated; it must never be treated as an operator itself
    let mut type_hint = None;
    let mut conditions = Vec::new();
    for (key, raw) in map {
        if type_hint.is_none() {
            if let Some(hint) = BackendType::from_hint(key) {
                type_hint = Some(hint);
                continue;
            }
        }
        let operator = FilterOperator::parse(key)?;
        conditions.push((operator, condition_value(key, raw)?));
    }

    if conditions.is_empty() {
        return Err(TranslationError::InvalidRequest(format!(
            "AND condition for attribute '{attribute}' has no operator entries"
        )));
    }

    Ok(FilterRequest::And {
        attribute,
        type_hint,
        conditions,
    })
}

fn parse_or(
    attribute_spec: &Value,
    condition_spec: Option<&Value>,
) -> Result<FilterRequest, TranslationError> {
    let items = match attribute_spec {
        // each item carries its own attribute code
        Value::Array(raw_items) => raw_items
            .iter()
            .map(|raw| parse_or_item(raw, None))
            .collect::<Result<Vec<_>, _>>()?,
        // a common attribute fanned out over an `or` list of conditions
        Value::String(common) => {
            let children = condition_spec
                .and_then(Value::as_object)
                .and_then(|map| map.get("or"))
                .and_then(Value::as_array)
                .ok_or_else(|| {
                    TranslationError::InvalidRequest(format!(
                        "OR condition for attribute '{common}' has no 'or' list"
                    ))
                })?;
            children
                .iter()
                .map(|raw| parse_or_item(raw, Some(common.as_str())))
                .collect::<Result<Vec<_>, _>>()?
        }
        other => {
            return Err(TranslationError::InvalidRequest(format!(
                "expected an attribute code or item sequence, got {other}"
            )))
        }
    };

    if items.is_empty() {
        return Err(TranslationError::InvalidRequest(
            "OR condition has no items".to_string(),
        ));
    }

    Ok(FilterRequest::Or { items })
}

fn parse_or_item(
    raw: &Value,
    common_attribute: Option<&str>,
) -> Result<OrItem, TranslationError> {
    let map: &Map<String, Value> = raw.as_object().ok_or_else(|| {
        TranslationError::InvalidRequest(format!("OR item is not a condition map: {raw}"))
    })?;

    let attribute = match common_attribute {
        Some(code) => code.to_string(),
        None => map
            .get("attribute")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                TranslationError::InvalidRequest(
                    "OR item is missing its 'attribute' entry".to_string(),
                )
            })?,
    };

    let mut type_hint = None;
    let mut condition = None;
    for (key, value) in map {
        if key.as_str() == "attribute" {
            continue;
        }
        if let Some(hint) = BackendType::from_hint(key) {
            type_hint = Some(hint);
            continue;
        }
        let operator = FilterOperator::parse(key)?;
        condition = Some((operator, condition_value(key, value)?));
    }

    let (operator, value) = condition.ok_or_else(|| {
        TranslationError::InvalidRequest(format!(
            "OR item for attribute '{attribute}' has no operator entry"
        ))
    })?;

    Ok(OrItem {
        attribute,
        type_hint,
        operator,
        value,
    })
}
