//! Per-tenant configuration document access.

use std::sync::Arc;

use crate::error::Result;

/// The name of the field holding the authenticator identifier inside a
/// tenant's configuration document.
///
/// The document schema itself belongs to the store implementation; this
/// constant only fixes the well-known field name so that store
/// implementations and administrators agree on it.
pub const AUTH_SERVICE_FIELD: &str = "authService";

/// Read/write access to a tenant's persisted authentication configuration.
///
/// Implementations wrap whatever document or object store holds the
/// configuration. The resolver only ever asks two things of it: "what is the
/// configured service name for tenant T" and "set the configured service name
/// for tenant T".
///
/// ## Contract
///
/// - [`load`](ConfigDocumentStore::load) returns `Ok(None)` when the document
///   exists but has no value set (blank counts as unset). It returns
///   `Err(ErrorKind::StoreLoad)` only when the document cannot be fetched or
///   parsed. The two outcomes must never be conflated: absence drives the
///   resolver's fallback, errors abort it.
/// - [`save`](ConfigDocumentStore::save) stores the value verbatim and fails
///   with `ErrorKind::StoreSave` on persistence failure.
/// - Implementations that observe document saves arriving through other
///   routes must call [`AuthServiceResolver::invalidate`] for the affected
///   tenant; the resolver does not watch the store.
///
/// [`AuthServiceResolver::invalidate`]: crate::AuthServiceResolver::invalidate
pub trait ConfigDocumentStore: Send + Sync {
    /// Returns the configured authentication-service identifier for a tenant.
    ///
    /// # Errors
    ///
    /// Returns a `StoreLoad` error if the underlying document cannot be
    /// fetched or parsed.
    fn load(&self, tenant: &str) -> Result<Option<String>>;

    /// Persists the authentication-service identifier for a tenant.
    ///
    /// # Errors
    ///
    /// Returns a `StoreSave` error on persistence failure.
    fn save(&self, tenant: &str, value: &str) -> Result<()>;
}

// Allow using Arc<dyn ConfigDocumentStore> as ConfigDocumentStore
impl<T: ConfigDocumentStore + ?Sized> ConfigDocumentStore for Arc<T> {
    fn load(&self, tenant: &str) -> Result<Option<String>> {
        (**self).load(tenant)
    }

    fn save(&self, tenant: &str, value: &str) -> Result<()> {
        (**self).save(tenant, value)
    }
}

// Allow using Box<dyn ConfigDocumentStore> as ConfigDocumentStore
impl<T: ConfigDocumentStore + ?Sized> ConfigDocumentStore for Box<T> {
    fn load(&self, tenant: &str) -> Result<Option<String>> {
        (**self).load(tenant)
    }

    fn save(&self, tenant: &str, value: &str) -> Result<()> {
        (**self).save(tenant, value)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::testing::InMemoryDocumentStore;

    #[test]
    fn test_arc_store_delegates() {
        let store: Arc<dyn ConfigDocumentStore> =
            Arc::new(InMemoryDocumentStore::new().with_value("wiki1", "basic"));
        assert_eq!(store.load("wiki1").unwrap().as_deref(), Some("basic"));
    }

    #[test]
    fn test_box_store_delegates() {
        let store: Box<dyn ConfigDocumentStore> = Box::new(InMemoryDocumentStore::new());
        store.save("wiki1", "oidc").unwrap();
        assert_eq!(store.load("wiki1").unwrap().as_deref(), Some("oidc"));
    }
}
