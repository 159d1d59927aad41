//! The authentication-service resolver and its per-tenant cache.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::error::Result;
use crate::store::{ConfigDocumentStore, InstancePropertySource, TenantContext};

/// The instance-level property consulted when no tenant has an
/// authentication service configured.
pub const INSTANCE_PROPERTY: &str = "security.authentication.authService";

/// A completed per-tenant lookup.
///
/// Presence of an entry in the cache means "the configuration has been loaded
/// for this tenant since the last invalidation", regardless of whether the
/// document actually had a value set. `service: None` is a cached "nothing
/// configured", which is a different state from the entry being absent.
#[derive(Debug, Clone)]
struct CacheEntry {
    service: Option<String>,
}

/// Resolves the effective authentication-service identifier for a tenant.
///
/// Resolution walks a two-level fallback chain:
/// 1. the main tenant's persisted configuration document, via
///    [`ConfigDocumentStore`];
/// 2. the instance-wide property [`INSTANCE_PROPERTY`], via
///    [`InstancePropertySource`].
///
/// Per-tenant results are cached, including the "nothing configured" outcome,
/// so a tenant with no explicit authenticator does not hit the store on every
/// request. The cache holds exactly one entry per tenant and has no eviction
/// beyond explicit [`invalidate`](AuthServiceResolver::invalidate).
///
/// ## Thread Safety
///
/// `AuthServiceResolver` is `Clone` and thread-safe; clones share the same
/// cache. Two concurrent misses for the same tenant may both query the store
/// and both write an entry; the last writer wins. The load is idempotent and
/// side-effect-free, so this trades a possible duplicate read for not needing
/// per-key locking. No collaborator call is made while the cache lock is
/// held.
///
/// ## Invalidation Contract
///
/// [`set`](AuthServiceResolver::set) writes through the store but never
/// touches the cache. Correctness depends on every write path, through this
/// resolver or not, being followed by an
/// [`invalidate`](AuthServiceResolver::invalidate) for the affected tenant.
/// The store layer that observes document saves is the expected trigger.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
/// use authservice_config::AuthServiceResolver;
/// use authservice_config::store::FixedTenant;
/// use authservice_config::testing::{InMemoryDocumentStore, StaticPropertySource};
///
/// # fn main() -> Result<(), authservice_config::Error> {
/// let store = Arc::new(InMemoryDocumentStore::new().with_value("main", "basic"));
/// let resolver = AuthServiceResolver::new(
///     store,
///     Arc::new(StaticPropertySource::new()),
///     Arc::new(FixedTenant::new("main")),
/// );
///
/// assert_eq!(resolver.resolve()?.as_deref(), Some("basic"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AuthServiceResolver {
    inner: Arc<Inner>,
}

struct Inner {
    store: Arc<dyn ConfigDocumentStore>,
    properties: Arc<dyn InstancePropertySource>,
    tenants: Arc<dyn TenantContext>,
    cache: RwLock<HashMap<String, CacheEntry>>,
}

impl AuthServiceResolver {
    /// Creates a resolver from its collaborators.
    ///
    /// Constructed once at startup and held by whatever composes the service;
    /// clones share the cache.
    pub fn new(
        store: Arc<dyn ConfigDocumentStore>,
        properties: Arc<dyn InstancePropertySource>,
        tenants: Arc<dyn TenantContext>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                store,
                properties,
                tenants,
                cache: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Returns the effective authentication-service identifier.
    ///
    /// Tries the main tenant's configuration document first (through the
    /// cache), then the instance-wide property [`INSTANCE_PROPERTY`]. Returns
    /// `Ok(None)` when neither level has a value configured.
    ///
    /// # Errors
    ///
    /// Propagates a `StoreLoad` error if the configuration document cannot be
    /// loaded. A load failure never falls through to the instance property;
    /// only a successful "nothing configured" does.
    pub fn resolve(&self) -> Result<Option<String>> {
        let main = self.inner.tenants.main_tenant();

        if let Some(service) = self.resolve_for_tenant(&main)? {
            return Ok(Some(service));
        }

        Ok(self.inner.properties.get_property(INSTANCE_PROPERTY))
    }

    /// Returns the authentication-service identifier configured for a tenant.
    ///
    /// Cache-aside: a cached result is returned as-is, including a cached
    /// "nothing configured". On a miss the configuration document is loaded
    /// and the outcome cached, whatever it was. This level never consults the
    /// instance property; that fallback belongs to
    /// [`resolve`](AuthServiceResolver::resolve).
    ///
    /// # Errors
    ///
    /// Propagates a `StoreLoad` error if the configuration document cannot be
    /// loaded. Failed loads are not cached.
    pub fn resolve_for_tenant(&self, tenant: &str) -> Result<Option<String>> {
        if let Some(entry) = self.inner.cache.read().get(tenant) {
            trace!(tenant, "authentication service cache hit");
            return Ok(entry.service.clone());
        }

        let service = self.inner.store.load(tenant)?;
        debug!(tenant, service = service.as_deref(), "loaded authentication service configuration");

        self.inner
            .cache
            .write()
            .insert(tenant.to_string(), CacheEntry { service: service.clone() });

        Ok(service)
    }

    /// Persists the authentication-service identifier for the main tenant.
    ///
    /// The value is stored verbatim; blank input is normalized to the empty
    /// string, which [`ConfigDocumentStore::load`] reports as "nothing
    /// configured".
    ///
    /// This method does **not** update or invalidate the cache. A subsequent
    /// [`resolve`](AuthServiceResolver::resolve) is only guaranteed fresh
    /// once [`invalidate`](AuthServiceResolver::invalidate) has been called
    /// for the main tenant, normally by the store layer's save notification.
    ///
    /// # Errors
    ///
    /// Propagates a `StoreSave` error on persistence failure; the cache is
    /// left untouched.
    pub fn set(&self, id: &str) -> Result<()> {
        let main = self.inner.tenants.main_tenant();
        let value = if id.trim().is_empty() { "" } else { id };

        self.inner.store.save(&main, value)?;
        debug!(tenant = %main, service = value, "saved authentication service configuration");

        Ok(())
    }

    /// Drops the cached result for a tenant, forcing a reload on next access.
    ///
    /// No-op if the tenant has no cached entry. Safe to call concurrently
    /// with lookups and with itself; an in-flight resolution that already
    /// loaded its value may still return and cache that value.
    pub fn invalidate(&self, tenant: &str) {
        if self.inner.cache.write().remove(tenant).is_some() {
            debug!(tenant, "invalidated cached authentication service");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::FixedTenant;
    use crate::testing::{InMemoryDocumentStore, StaticPropertySource};

    fn resolver_with(store: InMemoryDocumentStore, properties: StaticPropertySource) -> AuthServiceResolver {
        AuthServiceResolver::new(
            Arc::new(store),
            Arc::new(properties),
            Arc::new(FixedTenant::new("main")),
        )
    }

    #[test]
    fn test_cache_hit_skips_store() {
        let store = InMemoryDocumentStore::new().with_value("main", "basic");
        let resolver = resolver_with(store.clone(), StaticPropertySource::new());

        assert_eq!(resolver.resolve_for_tenant("main").unwrap().as_deref(), Some("basic"));
        assert_eq!(resolver.resolve_for_tenant("main").unwrap().as_deref(), Some("basic"));
        assert_eq!(store.load_count(), 1);
    }

    #[test]
    fn test_negative_result_is_cached() {
        let store = InMemoryDocumentStore::new();
        let resolver = resolver_with(store.clone(), StaticPropertySource::new());

        assert_eq!(resolver.resolve_for_tenant("main").unwrap(), None);
        assert_eq!(resolver.resolve_for_tenant("main").unwrap(), None);
        assert_eq!(store.load_count(), 1);
    }

    #[test]
    fn test_invalidate_forces_reload() {
        let store = InMemoryDocumentStore::new().with_value("main", "basic");
        let resolver = resolver_with(store.clone(), StaticPropertySource::new());

        resolver.resolve_for_tenant("main").unwrap();
        resolver.invalidate("main");
        resolver.resolve_for_tenant("main").unwrap();
        assert_eq!(store.load_count(), 2);
    }

    #[test]
    fn test_invalidate_unknown_tenant_is_noop() {
        let resolver = resolver_with(InMemoryDocumentStore::new(), StaticPropertySource::new());
        resolver.invalidate("never-resolved");
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let store = InMemoryDocumentStore::new().with_value("main", "basic");
        let resolver = resolver_with(store.clone(), StaticPropertySource::new());

        store.fail_loads(true);
        assert!(resolver.resolve_for_tenant("main").is_err());

        store.fail_loads(false);
        assert_eq!(resolver.resolve_for_tenant("main").unwrap().as_deref(), Some("basic"));
        assert_eq!(store.load_count(), 2);
    }

    #[test]
    fn test_set_normalizes_blank_to_empty() {
        let store = InMemoryDocumentStore::new();
        let resolver = resolver_with(store.clone(), StaticPropertySource::new());

        resolver.set("  ").unwrap();
        assert_eq!(store.stored("main").as_deref(), Some(""));
    }

    #[test]
    fn test_set_stores_value_verbatim() {
        let store = InMemoryDocumentStore::new();
        let resolver = resolver_with(store.clone(), StaticPropertySource::new());

        resolver.set("oidc").unwrap();
        assert_eq!(store.stored("main").as_deref(), Some("oidc"));
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_clones_share_the_cache() {
        let store = InMemoryDocumentStore::new().with_value("main", "basic");
        let resolver = resolver_with(store.clone(), StaticPropertySource::new());
        let clone = resolver.clone();

        resolver.resolve_for_tenant("main").unwrap();
        clone.resolve_for_tenant("main").unwrap();
        assert_eq!(store.load_count(), 1);
    }

    #[test]
    fn test_concurrent_resolution_settles_on_store_value() {
        let store = InMemoryDocumentStore::new().with_value("main", "basic");
        let resolver = resolver_with(store.clone(), StaticPropertySource::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let resolver = resolver.clone();
                std::thread::spawn(move || resolver.resolve_for_tenant("main").unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().as_deref(), Some("basic"));
        }
        // Duplicate loads are allowed on a concurrent miss, but every caller
        // must have seen a complete snapshot and the cache must now be warm.
        assert_eq!(resolver.resolve_for_tenant("main").unwrap().as_deref(), Some("basic"));
        let loads_after_settle = store.load_count();
        resolver.resolve_for_tenant("main").unwrap();
        assert_eq!(store.load_count(), loads_after_settle);
    }
}
