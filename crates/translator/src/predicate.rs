//! Leaf predicate construction: one operator token plus one (already
//! normalized) value in, one predicate out.

use model::{
    core::{
        operator::{DocOperator, FilterOperator},
        value::{FilterValue, ScalarValue},
    },
    errors::TranslationError,
    query::{Predicate, PredicateValue},
};

/// Build the leaf predicate for one operator/value pair. The value must
/// already have gone through the normalizer.
pub fn build_predicate(
    operator: FilterOperator,
    value: &FilterValue,
) -> Result<Predicate, TranslationError> {
    use FilterOperator::*;

    match operator {
        Eq => Ok(match value {
            // a sequence of values is rewritten as set membership
            FilterValue::List(items) => {
                Predicate::operator(DocOperator::In, PredicateValue::List(items.clone()))
            }
            FilterValue::Scalar(scalar) => Predicate::Literal(scalar.clone()),
        }),

        Like => {
            let pattern = wildcard_to_regex(&scalar_string(operator, value)?);
            Ok(Predicate::operator(
                DocOperator::Regex,
                PredicateValue::Regex(pattern),
            ))
        }

        // the condition value is the pattern body, used verbatim
        Regexp => Ok(Predicate::operator(
            DocOperator::Regex,
            PredicateValue::Regex(scalar_string(operator, value)?),
        )),

        NotNull => Ok(Predicate::operator(
            DocOperator::Ne,
            PredicateValue::Scalar(ScalarValue::Null),
        )),

        // preserved upstream behavior: the filter constrains the field to a
        // literal null rather than asserting presence of a null value
        Null => Ok(Predicate::Literal(ScalarValue::Null)),

        Seq => {
            let scalar = require_scalar(operator, value)?;
            if is_empty_string(scalar) {
                Ok(Predicate::Literal(ScalarValue::Null))
            } else {
                // literal equality, no case folding
                Ok(Predicate::Literal(scalar.clone()))
            }
        }

        Sneq => {
            let scalar = require_scalar(operator, value)?;
            if is_empty_string(scalar) {
                Ok(Predicate::operator(
                    DocOperator::Ne,
                    PredicateValue::Scalar(ScalarValue::Null),
                ))
            } else {
                Ok(Predicate::operator(
                    DocOperator::Ne,
                    PredicateValue::Scalar(ScalarValue::String(scalar.to_plain_string())),
                ))
            }
        }

        Gt | Gteq | Lt | Lteq | Moreq | Neq | From | To | In | Nin | Finset => {
            // total for these tokens; checked by the match arm above
            let doc_operator = operator
                .document_operator()
                .ok_or_else(|| TranslationError::UnsupportedOperator(operator.to_string()))?;
            Ok(Predicate::operator(
                doc_operator,
                PredicateValue::from(value.clone()),
            ))
        }
    }
}

/// Translate the catalog's quoted-percent wildcard markers (`'%`, `%'`)
/// into a match-anything regex fragment. Deliberately this narrow: callers
/// depend on the exact quoting convention.
fn wildcard_to_regex(raw: &str) -> String {
    raw.replace("'%", ".*").replace("%'", ".*")
}

fn require_scalar<'a>(
    operator: FilterOperator,
    value: &'a FilterValue,
) -> Result<&'a ScalarValue, TranslationError> {
    value.as_scalar().ok_or_else(|| {
        TranslationError::InvalidRequest(format!(
            "operator '{operator}' requires a scalar value, got a sequence"
        ))
    })
}

fn scalar_string(
    operator: FilterOperator,
    value: &FilterValue,
) -> Result<String, TranslationError> {
    Ok(require_scalar(operator, value)?.to_plain_string())
}

fn is_empty_string(scalar: &ScalarValue) -> bool {
    matches!(scalar, ScalarValue::Null)
        || scalar.as_str().is_some_and(|s| s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(value: impl Into<ScalarValue>) -> FilterValue {
        FilterValue::Scalar(value.into())
    }

    #[test]
    fn test_eq_scalar_is_literal() {
        let predicate = build_predicate(FilterOperator::Eq, &scalar("John")).unwrap();
        assert_eq!(predicate, Predicate::Literal("John".into()));
    }

    #[test]
    fn test_eq_sequence_becomes_in() {
        let value = FilterValue::List(vec![ScalarValue::Int(1), ScalarValue::Int(2)]);
        let predicate = build_predicate(FilterOperator::Eq, &value).unwrap();
        assert_eq!(
            predicate,
            Predicate::operator(
                DocOperator::In,
                PredicateValue::List(vec![ScalarValue::Int(1), ScalarValue::Int(2)])
            )
        );
    }

    #[test]
    fn test_like_strips_quoted_percent_markers() {
        let predicate = build_predicate(FilterOperator::Like, &scalar("'%shirt%'")).unwrap();
        assert_eq!(
            predicate,
            Predicate::operator(DocOperator::Regex, PredicateValue::Regex(".*shirt.*".into()))
        );
    }

    #[test]
    fn test_like_leaves_inner_percents_alone() {
        // only the quoted markers are translated, not bare SQL wildcards
        let predicate = build_predicate(FilterOperator::Like, &scalar("100% cotton")).unwrap();
        assert_eq!(
            predicate,
            Predicate::operator(
                DocOperator::Regex,
                PredicateValue::Regex("100% cotton".into())
            )
        );
    }

    #[test]
    fn test_regexp_uses_input_value_verbatim() {
        // the upstream base class read the pattern from an unbound map here;
        // the intended source is the condition value itself
        let predicate = build_predicate(FilterOperator::Regexp, &scalar("^sku-[0-9]+$")).unwrap();
        assert_eq!(
            predicate,
            Predicate::operator(
                DocOperator::Regex,
                PredicateValue::Regex("^sku-[0-9]+$".into())
            )
        );
    }

    #[test]
    fn test_notnull_is_ne_null() {
        let predicate = build_predicate(FilterOperator::NotNull, &scalar(ScalarValue::Null)).unwrap();
        assert_eq!(
            predicate,
            Predicate::operator(DocOperator::Ne, PredicateValue::Scalar(ScalarValue::Null))
        );
    }

    #[test]
    fn test_null_is_literal_null() {
        let predicate = build_predicate(FilterOperator::Null, &scalar(ScalarValue::Null)).unwrap();
        assert_eq!(predicate, Predicate::Literal(ScalarValue::Null));
    }

    #[test]
    fn test_seq_empty_string_is_literal_null() {
        let predicate = build_predicate(FilterOperator::Seq, &scalar("")).unwrap();
        assert_eq!(predicate, Predicate::Literal(ScalarValue::Null));

        let predicate = build_predicate(FilterOperator::Seq, &scalar("M")).unwrap();
        assert_eq!(predicate, Predicate::Literal("M".into()));
    }

    #[test]
    fn test_sneq_stringifies_its_value() {
        let predicate = build_predicate(FilterOperator::Sneq, &scalar(42i64)).unwrap();
        assert_eq!(
            predicate,
            Predicate::operator(
                DocOperator::Ne,
                PredicateValue::Scalar(ScalarValue::String("42".into()))
            )
        );

        let predicate = build_predicate(FilterOperator::Sneq, &scalar("")).unwrap();
        assert_eq!(
            predicate,
            Predicate::operator(DocOperator::Ne, PredicateValue::Scalar(ScalarValue::Null))
        );
    }

    #[test]
    fn test_comparison_operators_map_directly() {
        let predicate = build_predicate(FilterOperator::Moreq, &scalar(10i64)).unwrap();
        assert_eq!(
            predicate,
            Predicate::operator(DocOperator::Gte, PredicateValue::Scalar(ScalarValue::Int(10)))
        );

        let predicate = build_predicate(FilterOperator::To, &scalar(20i64)).unwrap();
        assert_eq!(
            predicate,
            Predicate::operator(DocOperator::Lt, PredicateValue::Scalar(ScalarValue::Int(20)))
        );
    }

    #[test]
    fn test_finset_is_set_membership() {
        let value = FilterValue::List(vec![ScalarValue::Int(5)]);
        let predicate = build_predicate(FilterOperator::Finset, &value).unwrap();
        assert_eq!(
            predicate,
            Predicate::operator(
                DocOperator::In,
                PredicateValue::List(vec![ScalarValue::Int(5)])
            )
        );
    }

    #[test]
    fn test_like_rejects_sequences() {
        let value = FilterValue::List(vec![ScalarValue::Int(1)]);
        assert!(matches!(
            build_predicate(FilterOperator::Like, &value).unwrap_err(),
            TranslationError::InvalidRequest(_)
        ));
    }
}
