//! The scope-fallback skeleton shared by the DEFAULT and AND builders.

use crate::scope::ScopeFields;
use model::query::{Predicate, QueryNode};

/// Wrap one attribute's predicate in the two-branch existence fallback:
/// match on the store-scoped field when it exists, otherwise on the
/// store-independent default field. Each predicate is wrapped exactly once;
/// builders never nest this template inside itself for the same attribute.
pub fn scope_fallback(fields: &ScopeFields, predicate: Predicate) -> QueryNode {
    QueryNode::or(vec![
        QueryNode::and(vec![
            QueryNode::exists(&fields.scoped, true),
            QueryNode::field(&fields.scoped, predicate.clone()),
        ]),
        QueryNode::and(vec![
            QueryNode::exists(&fields.scoped, false),
            QueryNode::exists(&fields.global, true),
            QueryNode::field(&fields.global, predicate),
        ]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::core::value::ScalarValue;

    #[test]
    fn test_template_structure() {
        let fields = ScopeFields {
            scoped: "attr_2.name".to_string(),
            global: "attr_0.name".to_string(),
        };
        let node = scope_fallback(&fields, Predicate::Literal(ScalarValue::from("John")));

        let branches = match &node {
            QueryNode::Or(branches) => branches,
            other => panic!("expected OR root, got {other:?}"),
        };
        assert_eq!(branches.len(), 2);

        match &branches[0] {
            QueryNode::And(children) => {
                assert_eq!(children.len(), 2);
                assert_eq!(children[0], QueryNode::exists("attr_2.name", true));
            }
            other => panic!("expected AND branch, got {other:?}"),
        }
        match &branches[1] {
            QueryNode::And(children) => {
                assert_eq!(children.len(), 3);
                assert_eq!(children[0], QueryNode::exists("attr_2.name", false));
                assert_eq!(children[1], QueryNode::exists("attr_0.name", true));
            }
            other => panic!("expected AND branch, got {other:?}"),
        }
    }
}
