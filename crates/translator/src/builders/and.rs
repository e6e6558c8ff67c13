//! AND shape: several operator/value constraints on one attribute, merged
//! into a single predicate so the existence fallback is emitted once, not
//! once per operator.

use crate::{
    builders::{prepare_value, resolve_backend},
    metadata::AttributeMetadata,
    normalize::DateParser,
    predicate::build_predicate,
    scope::{scope_fields, StoreContext},
    template::scope_fallback,
};
use model::{
    core::{
        data_type::BackendType,
        operator::{DocOperator, FilterOperator},
        value::FilterValue,
    },
    errors::TranslationError,
    query::{Predicate, PredicateValue, QueryNode},
};

pub fn build(
    attribute: &str,
    type_hint: Option<BackendType>,
    conditions: &[(FilterOperator, FilterValue)],
    metadata: &dyn AttributeMetadata,
    dates: &dyn DateParser,
    store: &dyn StoreContext,
) -> Result<QueryNode, TranslationError> {
    let backend = resolve_backend(attribute, type_hint, metadata)?;

    let mut merged: Vec<(DocOperator, PredicateValue)> = Vec::with_capacity(conditions.len());
    let mut literal: Option<Predicate> = None;

    for (operator, value) in conditions {
        let prepared = prepare_value(*operator, value, backend, dates)?;
        match build_predicate(*operator, &prepared)? {
            Predicate::Operators(entries) => {
                for (doc_operator, predicate_value) in entries {
                    if merged.iter().any(|(existing, _)| *existing == doc_operator) {
                        return Err(TranslationError::InvalidRequest(format!(
                            "duplicate '{doc_operator}' constraint for attribute '{attribute}'"
                        )));
                    }
                    merged.push((doc_operator, predicate_value));
                }
            }
            Predicate::Literal(scalar) => {
                if literal.is_some() {
                    return Err(TranslationError::InvalidRequest(format!(
                        "conflicting literal constraints for attribute '{attribute}'"
                    )));
                }
                literal = Some(Predicate::Literal(scalar));
            }
        }
    }

    // a literal-equality predicate cannot be merged into an operator map
    let predicate = match (literal, merged.is_empty()) {
        (Some(literal), true) => literal,
        (Some(_), false) => {
            return Err(TranslationError::InvalidRequest(format!(
                "literal equality cannot be combined with operator constraints \
                 for attribute '{attribute}'"
            )))
        }
        (None, false) => Predicate::Operators(merged),
        (None, true) => {
            return Err(TranslationError::InvalidRequest(format!(
                "AND condition for attribute '{attribute}' has no constraints"
            )))
        }
    };

    let fields = scope_fields(attribute, store);
    Ok(scope_fallback(&fields, predicate))
}
