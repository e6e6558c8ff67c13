//! The translation entry point: classified requests in, query trees out.

use crate::{
    builders, metadata::AttributeMetadata, normalize::DateParser, scope::StoreContext,
};
use model::{errors::TranslationError, query::QueryNode, request::FilterRequest};
use tracing::debug;

/// Translates filter requests into document-store query trees with scope
/// fallback. Stateless: all collaborators are injected, and every call
/// recomputes its scope fields from the ambient store context.
pub struct ConditionTranslator<'a> {
    metadata: &'a dyn AttributeMetadata,
    dates: &'a dyn DateParser,
    store: &'a dyn StoreContext,
}

impl<'a> ConditionTranslator<'a> {
    pub fn new(
        metadata: &'a dyn AttributeMetadata,
        dates: &'a dyn DateParser,
        store: &'a dyn StoreContext,
    ) -> Self {
        Self {
            metadata,
            dates,
            store,
        }
    }

    /// Translate one classified request. Errors are fatal to this filter
    /// request; there is no partial translation.
    pub fn translate(&self, request: &FilterRequest) -> Result<QueryNode, TranslationError> {
        debug!(shape = %request.shape(), "building document filter");
        match request {
            FilterRequest::Default {
                attribute,
                condition,
            } => builders::default::build(attribute, condition, self.metadata, self.dates, self.store),
            FilterRequest::And {
                attribute,
                type_hint,
                conditions,
            } => builders::and::build(
                attribute,
                *type_hint,
                conditions,
                self.metadata,
                self.dates,
                self.store,
            ),
            FilterRequest::Or { items } => {
                builders::or::build(items, self.metadata, self.dates, self.store)
            }
        }
    }

    /// Translate a loosely-structured request (config files, stored filter
    /// definitions), classifying its shape first.
    pub fn translate_loose(
        &self,
        attribute_spec: &serde_json::Value,
        condition_spec: Option<&serde_json::Value>,
    ) -> Result<QueryNode, TranslationError> {
        let request = FilterRequest::from_loose(attribute_spec, condition_spec)?;
        self.translate(&request)
    }
}
