//! One condition builder per shape. Each consumes a classified request and
//! returns a complete query-tree fragment.

pub mod and;
pub mod default;
pub mod or;

use crate::{
    metadata::AttributeMetadata,
    normalize::{normalize_value, DateParser},
};
use model::{
    core::{data_type::BackendType, operator::FilterOperator, value::FilterValue},
    errors::TranslationError,
};

/// Backend type for an attribute: an explicit hint wins, otherwise the
/// metadata collaborator resolves it. Resolution failure is fatal.
fn resolve_backend(
    attribute: &str,
    type_hint: Option<BackendType>,
    metadata: &dyn AttributeMetadata,
) -> Result<BackendType, TranslationError> {
    match type_hint {
        Some(backend) => Ok(backend),
        None => metadata.backend_type(attribute),
    }
}

/// Normalize a condition value for embedding. Operators that discard their
/// value (`null`, `notnull`) or stringify it (`seq`, `sneq`) are exempt
/// from date parsing, so a value those operators never use cannot fail the
/// request.
fn prepare_value(
    operator: FilterOperator,
    value: &FilterValue,
    backend: BackendType,
    dates: &dyn DateParser,
) -> Result<FilterValue, TranslationError> {
    use FilterOperator::*;
    if matches!(operator, Null | NotNull | Seq | Sneq) {
        return Ok(value.clone());
    }
    normalize_value(value.clone(), backend, dates)
}
