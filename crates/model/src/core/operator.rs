use crate::errors::TranslationError;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

/// The closed set of SQL-style filter operator tokens accepted at the
/// boundary. Anything outside this set is a hard `UnsupportedOperator`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperator {
    Eq,
    Neq,
    Gt,
    Gteq,
    Lt,
    Lteq,
    Moreq,
    From,
    To,
    Like,
    Regexp,
    In,
    Nin,
    NotNull,
    Null,
    Finset,
    Seq,
    Sneq,
}

/// Document-store query operators a leaf predicate can carry. Rendered with
/// the `$` prefix.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DocOperator {
    Gte,
    Lte,
    Gt,
    Lt,
    Ne,
    In,
    Nin,
    Regex,
}

lazy_static! {
    static ref TOKEN_MAP: HashMap<&'static str, FilterOperator> = build_token_map();
}

fn build_token_map() -> HashMap<&'static str, FilterOperator> {
    use FilterOperator::*;

    let entries = [
        ("eq", Eq),
        ("neq", Neq),
        ("gt", Gt),
        ("gteq", Gteq),
        ("lt", Lt),
        ("lteq", Lteq),
        ("moreq", Moreq),
        ("from", From),
        ("to", To),
        ("like", Like),
        ("regexp", Regexp),
        ("in", In),
        ("nin", Nin),
        ("notnull", NotNull),
        // legacy spelling accepted by the upstream catalog filters
        ("not null", NotNull),
        ("null", Null),
        ("finset", Finset),
        ("seq", Seq),
        ("sneq", Sneq),
    ];

    let mut map = HashMap::new();
    for (token, operator) in entries {
        map.insert(token, operator);
    }
    map
}

impl FilterOperator {
    pub fn parse(token: &str) -> Result<Self, TranslationError> {
        TOKEN_MAP
            .get(token)
            .copied()
            .ok_or_else(|| TranslationError::UnsupportedOperator(token.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        use FilterOperator::*;
        match self {
            Eq => "eq",
            Neq => "neq",
            Gt => "gt",
            Gteq => "gteq",
            Lt => "lt",
            Lteq => "lteq",
            Moreq => "moreq",
            From => "from",
            To => "to",
            Like => "like",
            Regexp => "regexp",
            In => "in",
            Nin => "nin",
            NotNull => "notnull",
            Null => "null",
            Finset => "finset",
            Seq => "seq",
            Sneq => "sneq",
        }
    }

    /// The direct token → document-operator mapping. Total for the tokens
    /// that translate to a single document operator; `eq`, `null`, `seq`
    /// and `sneq` are shaped structurally by the predicate builder and have
    /// no entry here.
    pub fn document_operator(&self) -> Option<DocOperator> {
        use FilterOperator::*;
        match self {
            Gteq | Moreq | From => Some(DocOperator::Gte),
            Lteq => Some(DocOperator::Lte),
            Gt => Some(DocOperator::Gt),
            // `to` is a half-open upper bound
            Lt | To => Some(DocOperator::Lt),
            Neq | NotNull => Some(DocOperator::Ne),
            Like | Regexp => Some(DocOperator::Regex),
            In | Finset => Some(DocOperator::In),
            Nin => Some(DocOperator::Nin),
            Eq | Null | Seq | Sneq => None,
        }
    }
}

impl DocOperator {
    /// Prefixed operator name as the document store expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocOperator::Gte => "$gte",
            DocOperator::Lte => "$lte",
            DocOperator::Gt => "$gt",
            DocOperator::Lt => "$lt",
            DocOperator::Ne => "$ne",
            DocOperator::In => "$in",
            DocOperator::Nin => "$nin",
            DocOperator::Regex => "$regex",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for DocOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tokens() {
        assert_eq!(FilterOperator::parse("gteq").unwrap(), FilterOperator::Gteq);
        assert_eq!(FilterOperator::parse("finset").unwrap(), FilterOperator::Finset);
        assert_eq!(
            FilterOperator::parse("not null").unwrap(),
            FilterOperator::NotNull
        );
    }

    #[test]
    fn test_parse_unknown_token() {
        let err = FilterOperator::parse("bogus").unwrap_err();
        assert!(matches!(
            err,
            TranslationError::UnsupportedOperator(token) if token == "bogus"
        ));
    }

    #[test]
    fn test_mapping_is_stable() {
        // same token always yields the same document operator
        for _ in 0..3 {
            assert_eq!(
                FilterOperator::Gteq.document_operator(),
                Some(DocOperator::Gte)
            );
            assert_eq!(
                FilterOperator::Moreq.document_operator(),
                Some(DocOperator::Gte)
            );
            assert_eq!(FilterOperator::To.document_operator(), Some(DocOperator::Lt));
            assert_eq!(
                FilterOperator::NotNull.document_operator(),
                Some(DocOperator::Ne)
            );
            assert_eq!(
                FilterOperator::Finset.document_operator(),
                Some(DocOperator::In)
            );
        }
    }

    #[test]
    fn test_structural_tokens_have_no_direct_mapping() {
        assert_eq!(FilterOperator::Eq.document_operator(), None);
        assert_eq!(FilterOperator::Null.document_operator(), None);
        assert_eq!(FilterOperator::Seq.document_operator(), None);
        assert_eq!(FilterOperator::Sneq.document_operator(), None);
    }

    #[test]
    fn test_doc_operator_rendering() {
        assert_eq!(DocOperator::Gte.as_str(), "$gte");
        assert_eq!(DocOperator::Regex.as_str(), "$regex");
    }
}
