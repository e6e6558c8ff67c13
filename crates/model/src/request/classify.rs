use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The three structural shapes a filter request can take.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConditionShape {
    Default,
    And,
    Or,
}

impl fmt::Display for ConditionShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionShape::Default => write!(f, "DEFAULT"),
            ConditionShape::And => write!(f, "AND"),
            ConditionShape::Or => write!(f, "OR"),
        }
    }
}

/// Classify a loosely-structured filter request.
///
/// Evaluated in order:
/// 1. the attribute spec is a sequence of per-attribute items, or the
///    condition map carries an `or` disjunction marker → OR;
/// 2. a single attribute code with a condition map of more than one
///    operator entry → AND;
/// 3. everything else → DEFAULT.
pub fn classify(attribute_spec: &Value, condition_spec: Option<&Value>) -> ConditionShape {
    let condition_map = condition_spec.and_then(Value::as_object);

    if attribute_spec.is_array() || condition_map.is_some_and(|map| map.contains_key("or")) {
        return ConditionShape::Or;
    }

    if attribute_spec.is_string() && condition_map.is_some_and(|map| map.len() > 1) {
        return ConditionShape::And;
    }

    ConditionShape::Default
}
