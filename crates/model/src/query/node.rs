use crate::core::{
    operator::DocOperator,
    value::{FilterValue, ScalarValue},
};
use serde::{Deserialize, Serialize};

/// A value embedded in an operator predicate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum PredicateValue {
    Scalar(ScalarValue),
    List(Vec<ScalarValue>),
    /// Case-insensitive regular expression pattern body.
    Regex(String),
}

impl From<FilterValue> for PredicateValue {
    fn from(value: FilterValue) -> Self {
        match value {
            FilterValue::Scalar(v) => PredicateValue::Scalar(v),
            FilterValue::List(v) => PredicateValue::List(v),
        }
    }
}

/// A leaf constraint on one field: either literal equality or an ordered
/// map of document operators. `Literal(Null)` is what the `null` operator
/// and the empty-string `seq` operator produce.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Predicate {
    Literal(ScalarValue),
    Operators(Vec<(DocOperator, PredicateValue)>),
}

impl Predicate {
    pub fn operator(op: DocOperator, value: PredicateValue) -> Self {
        Predicate::Operators(vec![(op, value)])
    }
}

/// The recursive query tree handed back to the caller. Built bottom-up and
/// never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum QueryNode {
    And(Vec<QueryNode>),
    Or(Vec<QueryNode>),
    Exists { field: String, exists: bool },
    Field { field: String, predicate: Predicate },
}

impl QueryNode {
    pub fn and(children: Vec<QueryNode>) -> Self {
        QueryNode::And(children)
    }

    pub fn or(children: Vec<QueryNode>) -> Self {
        QueryNode::Or(children)
    }

    pub fn exists(field: impl Into<String>, exists: bool) -> Self {
        QueryNode::Exists {
            field: field.into(),
            exists,
        }
    }

    pub fn field(field: impl Into<String>, predicate: Predicate) -> Self {
        QueryNode::Field {
            field: field.into(),
            predicate,
        }
    }

    /// Direct children of a combinator node, if this is one.
    pub fn children(&self) -> Option<&[QueryNode]> {
        match self {
            QueryNode::And(children) | QueryNode::Or(children) => Some(children),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_return_new_nodes() {
        let leaf = QueryNode::field("attr_1.name", Predicate::Literal("John".into()));
        let wrapped = QueryNode::or(vec![QueryNode::and(vec![leaf.clone()])]);

        // the original leaf is untouched by composition
        assert_eq!(
            leaf,
            QueryNode::field("attr_1.name", Predicate::Literal("John".into()))
        );
        assert_eq!(wrapped.children().unwrap().len(), 1);
    }

    #[test]
    fn test_children_on_leaf() {
        let leaf = QueryNode::exists("attr_1.color", true);
        assert!(leaf.children().is_none());
    }
}
