//! DEFAULT shape: one attribute, one operator/value pair.

use crate::{
    builders::{prepare_value, resolve_backend},
    metadata::AttributeMetadata,
    normalize::DateParser,
    predicate::build_predicate,
    scope::{scope_fields, StoreContext},
    template::scope_fallback,
};
use model::{
    core::operator::FilterOperator,
    errors::TranslationError,
    query::QueryNode,
    request::ConditionInput,
};

pub fn build(
    attribute: &str,
    condition: &ConditionInput,
    metadata: &dyn AttributeMetadata,
    dates: &dyn DateParser,
    store: &dyn StoreContext,
) -> Result<QueryNode, TranslationError> {
    // a bare value is shorthand for literal equality
    let (operator, value) = match condition {
        ConditionInput::Value(value) => (FilterOperator::Eq, value),
        ConditionInput::Operator(operator, value) => (*operator, value),
    };

    let backend = resolve_backend(attribute, None, metadata)?;
    let prepared = prepare_value(operator, value, backend, dates)?;
    let predicate = build_predicate(operator, &prepared)?;

    let fields = scope_fields(attribute, store);
    Ok(scope_fallback(&fields, predicate))
}
