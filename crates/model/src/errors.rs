use thiserror::Error;

/// Fatal errors raised while translating a filter request into a document
/// query tree. None of these are retried: the caller decides whether to
/// abort the whole query or drop the offending filter clause.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("unsupported attribute filter operator '{0}'")]
    UnsupportedOperator(String),

    #[error("cannot parse '{value}' as a date/time value")]
    DateParse { value: String },

    #[error("cannot resolve backend type for attribute '{0}'")]
    UnresolvedAttributeType(String),

    #[error("invalid filter request: {0}")]
    InvalidRequest(String),
}
