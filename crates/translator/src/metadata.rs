use model::{core::data_type::BackendType, errors::TranslationError};
use std::collections::HashMap;

/// Resolves an attribute code to its declared backend data type. The real
/// implementation sits on the catalog schema service; translation only
/// depends on this contract. Resolution failure is fatal to the filter
/// request.
pub trait AttributeMetadata {
    fn backend_type(&self, attribute_code: &str) -> Result<BackendType, TranslationError>;
}

/// Map-backed resolver for tests and config-driven setups.
#[derive(Debug, Clone, Default)]
pub struct StaticAttributeMetadata {
    types: HashMap<String, BackendType>,
}

impl StaticAttributeMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, code: impl Into<String>, backend_type: BackendType) -> Self {
        self.types.insert(code.into(), backend_type);
        self
    }
}

impl AttributeMetadata for StaticAttributeMetadata {
    fn backend_type(&self, attribute_code: &str) -> Result<BackendType, TranslationError> {
        self.types
            .get(attribute_code)
            .copied()
            .ok_or_else(|| TranslationError::UnresolvedAttributeType(attribute_code.to_string()))
    }
}
