//! Rendering of the query tree into BSON documents understood by the
//! document store's query evaluator.

use crate::query::node::{Predicate, PredicateValue, QueryNode};
use bson::{Bson, Document, Regex};

impl QueryNode {
    /// Render this node (and everything below it) as a BSON document ready
    /// to be merged into a find() filter by the caller.
    pub fn to_document(&self) -> Document {
        let mut doc = Document::new();
        match self {
            QueryNode::And(children) => {
                doc.insert("$and", render_children(children));
            }
            QueryNode::Or(children) => {
                doc.insert("$or", render_children(children));
            }
            QueryNode::Exists { field, exists } => {
                let mut inner = Document::new();
                // 1/0 rather than true/false, matching the stored overlay
                // documents' existing query conventions
                inner.insert("$exists", Bson::Int32(i32::from(*exists)));
                doc.insert(field.clone(), inner);
            }
            QueryNode::Field { field, predicate } => {
                doc.insert(field.clone(), predicate.to_bson());
            }
        }
        doc
    }
}

fn render_children(children: &[QueryNode]) -> Bson {
    Bson::Array(
        children
            .iter()
            .map(|child| Bson::Document(child.to_document()))
            .collect(),
    )
}

impl Predicate {
    pub fn to_bson(&self) -> Bson {
        match self {
            Predicate::Literal(value) => value.to_bson(),
            Predicate::Operators(entries) => {
                let mut doc = Document::new();
                for (op, value) in entries {
                    doc.insert(op.as_str(), value.to_bson());
                }
                Bson::Document(doc)
            }
        }
    }
}

impl PredicateValue {
    pub fn to_bson(&self) -> Bson {
        match self {
            PredicateValue::Scalar(value) => value.to_bson(),
            PredicateValue::List(values) => {
                Bson::Array(values.iter().map(|v| v.to_bson()).collect())
            }
            PredicateValue::Regex(pattern) => Bson::RegularExpression(Regex {
                pattern: pattern.clone(),
                options: "i".to_string(),
            }),
        }
    }
}
