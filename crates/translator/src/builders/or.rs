//! OR shape: independent attribute+condition items fanned out under one
//! disjunction. Each item keeps its own scope fallback; the two branches
//! are appended directly instead of nesting the shared template, since the
//! fan-out is across attributes rather than around a single predicate.

use crate::{
    builders::{prepare_value, resolve_backend},
    metadata::AttributeMetadata,
    normalize::DateParser,
    predicate::build_predicate,
    scope::{scope_fields, StoreContext},
};
use model::{errors::TranslationError, query::QueryNode, request::OrItem};
use tracing::debug;

pub fn build(
    items: &[OrItem],
    metadata: &dyn AttributeMetadata,
    dates: &dyn DateParser,
    store: &dyn StoreContext,
) -> Result<QueryNode, TranslationError> {
    debug!(items = items.len(), "fanning out OR condition");
    let mut branches = Vec::with_capacity(items.len() * 2);

    for item in items {
        let backend = resolve_backend(&item.attribute, item.type_hint, metadata)?;
        let prepared = prepare_value(item.operator, &item.value, backend, dates)?;
        let predicate = build_predicate(item.operator, &prepared)?;

        let fields = scope_fields(&item.attribute, store);
        branches.push(QueryNode::and(vec![
            QueryNode::exists(&fields.scoped, true),
            QueryNode::field(&fields.scoped, predicate.clone()),
        ]));
        branches.push(QueryNode::and(vec![
            QueryNode::exists(&fields.scoped, false),
            QueryNode::exists(&fields.global, true),
            QueryNode::field(&fields.global, predicate),
        ]));
    }

    Ok(QueryNode::or(branches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::StaticAttributeMetadata, normalize::CatalogDateParser, scope::FixedStoreContext,
    };
    use model::core::{
        data_type::BackendType,
        operator::FilterOperator,
        value::{FilterValue, ScalarValue},
    };

    fn metadata() -> StaticAttributeMetadata {
        StaticAttributeMetadata::new()
            .with_attribute("color", BackendType::Int)
            .with_attribute("size", BackendType::Varchar)
    }

    #[test]
    fn test_two_items_fan_out_to_four_branches() {
        let store = FixedStoreContext::for_store(2);
        let items = vec![
            OrItem {
                attribute: "color".to_string(),
                type_hint: None,
                operator: FilterOperator::In,
                value: FilterValue::List(vec![ScalarValue::Int(1), ScalarValue::Int(2)]),
            },
            OrItem {
                attribute: "size".to_string(),
                type_hint: None,
                operator: FilterOperator::Eq,
                value: FilterValue::Scalar("M".into()),
            },
        ];

        let node = build(&items, &metadata(), &CatalogDateParser, &store).unwrap();
        let branches = match &node {
            QueryNode::Or(branches) => branches,
            other => panic!("expected OR root, got {other:?}"),
        };
        assert_eq!(branches.len(), 4);
        assert!(branches
            .iter()
            .all(|branch| matches!(branch, QueryNode::And(_))));

        // branches come in scoped/global pairs per item
        assert_eq!(
            branches[0].children().unwrap()[0],
            QueryNode::exists("attr_2.color", true)
        );
        assert_eq!(
            branches[1].children().unwrap()[0],
            QueryNode::exists("attr_2.color", false)
        );
        assert_eq!(
            branches[2].children().unwrap()[0],
            QueryNode::exists("attr_2.size", true)
        );
        assert_eq!(
            branches[3].children().unwrap()[1],
            QueryNode::exists("attr_0.size", true)
        );
    }

    #[test]
    fn test_item_failure_aborts_whole_translation() {
        let store = FixedStoreContext::for_store(2);
        let items = vec![OrItem {
            attribute: "weight".to_string(),
            type_hint: None,
            operator: FilterOperator::Eq,
            value: FilterValue::Scalar(ScalarValue::Int(1)),
        }];
        let err = build(&items, &metadata(), &CatalogDateParser, &store).unwrap_err();
        assert!(matches!(err, TranslationError::UnresolvedAttributeType(_)));
    }
}
