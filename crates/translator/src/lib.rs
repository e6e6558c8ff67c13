//! Translation of EAV attribute filter conditions into a document-store
//! query tree with per-store scope fallback: prefer the store-scoped
//! overlay value when it exists, else fall back to the store-independent
//! default value.

pub mod builders;
pub mod metadata;
pub mod normalize;
pub mod predicate;
pub mod scope;
pub mod template;
pub mod translate;

#[cfg(test)]
mod tests;

pub use metadata::{AttributeMetadata, StaticAttributeMetadata};
pub use normalize::{CatalogDateParser, DateParser};
pub use scope::{FixedStoreContext, ScopeFields, StoreContext, ADMIN_STORE_ID};
pub use translate::ConditionTranslator;
