use std::fmt;

/// The store-independent (admin) scope identifier.
pub const ADMIN_STORE_ID: u32 = 0;

/// Ambient store identifiers, injected by the caller. The current store id
/// may change between translation calls, which is why scope field names
/// are recomputed per call and never cached.
pub trait StoreContext {
    fn current_store_id(&self) -> u32;
    fn default_store_id(&self) -> u32;
}

/// A plain value implementation for callers that know both ids up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStoreContext {
    current: u32,
    default: u32,
}

impl FixedStoreContext {
    pub fn new(current: u32, default: u32) -> Self {
        Self { current, default }
    }

    /// A context whose default scope is the admin store.
    pub fn for_store(current: u32) -> Self {
        Self::new(current, ADMIN_STORE_ID)
    }
}

impl StoreContext for FixedStoreContext {
    fn current_store_id(&self) -> u32 {
        self.current
    }

    fn default_store_id(&self) -> u32 {
        self.default
    }
}

/// The pair of overlay-document field names one logical attribute maps to:
/// the per-store field and the store-independent default field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeFields {
    pub scoped: String,
    pub global: String,
}

impl fmt::Display for ScopeFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.scoped, self.global)
    }
}

fn field_name(store_id: u32, attribute: &str) -> String {
    format!("attr_{store_id}.{attribute}")
}

/// Compute both field names for an attribute under the given store context.
pub fn scope_fields(attribute: &str, store: &dyn StoreContext) -> ScopeFields {
    ScopeFields {
        scoped: field_name(store.current_store_id(), attribute),
        global: field_name(store.default_store_id(), attribute),
    }
}
