//! Filter requests as the translation engine consumes them.
//!
//! Callers that build filters programmatically construct one of the three
//! [`FilterRequest`] variants directly; the classification that used to be
//! inferred from loose array shapes happens at construction time. Input
//! that still arrives loosely structured (config files, stored filter
//! definitions) goes through [`FilterRequest::from_loose`], which applies
//! the exact same three-way decision rule via [`classify::classify`].

pub mod classify;
pub mod loose;

use crate::core::{
    data_type::BackendType,
    operator::FilterOperator,
    value::FilterValue,
};
use classify::ConditionShape;
use serde::{Deserialize, Serialize};

/// The condition part of a single-operator (DEFAULT) request. A bare value
/// is shorthand for literal equality.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ConditionInput {
    Value(FilterValue),
    Operator(FilterOperator, FilterValue),
}

/// One branch of an OR request: its own attribute, operator and value,
/// plus an optional backend-type hint forcing date normalization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrItem {
    pub attribute: String,
    pub type_hint: Option<BackendType>,
    pub operator: FilterOperator,
    pub value: FilterValue,
}

/// A classified filter request, one variant per condition shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FilterRequest {
    /// Single attribute, single operator/value pair.
    Default {
        attribute: String,
        condition: ConditionInput,
    },
    /// Single attribute, several operator/value constraints merged into one
    /// predicate.
    And {
        attribute: String,
        type_hint: Option<BackendType>,
        conditions: Vec<(FilterOperator, FilterValue)>,
    },
    /// Independent attribute+condition items combined disjunctively.
    Or { items: Vec<OrItem> },
}

impl FilterRequest {
    pub fn shape(&self) -> ConditionShape {
        match self {
            FilterRequest::Default { .. } => ConditionShape::Default,
            FilterRequest::And { .. } => ConditionShape::And,
            FilterRequest::Or { .. } => ConditionShape::Or,
        }
    }
}
