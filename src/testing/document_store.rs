//! In-memory configuration document store with test hooks.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::store::ConfigDocumentStore;

/// An in-memory [`ConfigDocumentStore`] with real document-store semantics.
///
/// Values are stored verbatim, and a blank stored value reads back as
/// "nothing configured", matching how a real store treats an unset field.
/// On top of that the fake counts calls and can be told to fail, which is
/// what cache tests need:
///
/// ```rust
/// use authservice_config::store::ConfigDocumentStore;
/// use authservice_config::testing::InMemoryDocumentStore;
///
/// # fn main() -> Result<(), authservice_config::Error> {
/// let store = InMemoryDocumentStore::new().with_value("main", "basic");
/// assert_eq!(store.load("main")?.as_deref(), Some("basic"));
/// assert_eq!(store.load_count(), 1);
///
/// store.fail_loads(true);
/// assert!(store.load("main").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    inner: Arc<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    values: RwLock<HashMap<String, String>>,
    loads: AtomicUsize,
    saves: AtomicUsize,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
}

impl InMemoryDocumentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a tenant's configured value.
    #[must_use]
    pub fn with_value(self, tenant: impl Into<String>, value: impl Into<String>) -> Self {
        self.inner.values.write().insert(tenant.into(), value.into());
        self
    }

    /// Replaces a tenant's stored value, bypassing the resolver write path.
    ///
    /// Simulates a document change arriving through another route (direct
    /// document edit, import). The caller decides whether to invalidate.
    pub fn set_value(&self, tenant: impl Into<String>, value: impl Into<String>) {
        self.inner.values.write().insert(tenant.into(), value.into());
    }

    /// Returns the raw stored value for a tenant, blank included.
    pub fn stored(&self, tenant: &str) -> Option<String> {
        self.inner.values.read().get(tenant).cloned()
    }

    /// Returns how many times [`load`](ConfigDocumentStore::load) was called.
    pub fn load_count(&self) -> usize {
        self.inner.loads.load(Ordering::SeqCst)
    }

    /// Returns how many times [`save`](ConfigDocumentStore::save) was called.
    pub fn save_count(&self) -> usize {
        self.inner.saves.load(Ordering::SeqCst)
    }

    /// Makes subsequent loads fail with a `StoreLoad` error.
    pub fn fail_loads(&self, fail: bool) {
        self.inner.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Makes subsequent saves fail with a `StoreSave` error.
    pub fn fail_saves(&self, fail: bool) {
        self.inner.fail_saves.store(fail, Ordering::SeqCst);
    }
}

impl ConfigDocumentStore for InMemoryDocumentStore {
    fn load(&self, tenant: &str) -> Result<Option<String>> {
        self.inner.loads.fetch_add(1, Ordering::SeqCst);

        if self.inner.fail_loads.load(Ordering::SeqCst) {
            return Err(Error::store_load("injected load failure"));
        }

        Ok(self
            .inner
            .values
            .read()
            .get(tenant)
            .filter(|value| !value.trim().is_empty())
            .cloned())
    }

    fn save(&self, tenant: &str, value: &str) -> Result<()> {
        self.inner.saves.fetch_add(1, Ordering::SeqCst);

        if self.inner.fail_saves.load(Ordering::SeqCst) {
            return Err(Error::store_save("injected save failure"));
        }

        self.inner.values.write().insert(tenant.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_blank_value_loads_as_unset() {
        let store = InMemoryDocumentStore::new().with_value("main", "   ");
        assert_eq!(store.load("main").unwrap(), None);
        assert_eq!(store.stored("main").as_deref(), Some("   "));
    }

    #[test]
    fn test_missing_tenant_loads_as_unset() {
        let store = InMemoryDocumentStore::new();
        assert_eq!(store.load("other").unwrap(), None);
    }

    #[test]
    fn test_counts_loads_and_saves() {
        let store = InMemoryDocumentStore::new();
        store.load("main").unwrap();
        store.save("main", "basic").unwrap();
        store.load("main").unwrap();
        assert_eq!(store.load_count(), 2);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_injected_failures_carry_the_right_kind() {
        let store = InMemoryDocumentStore::new();
        store.fail_loads(true);
        store.fail_saves(true);
        assert_eq!(store.load("main").unwrap_err().kind(), ErrorKind::StoreLoad);
        assert_eq!(store.save("main", "x").unwrap_err().kind(), ErrorKind::StoreSave);
    }

    #[test]
    fn test_clones_share_state() {
        let store = InMemoryDocumentStore::new();
        let clone = store.clone();
        clone.save("main", "basic").unwrap();
        assert_eq!(store.load("main").unwrap().as_deref(), Some("basic"));
        assert_eq!(store.load_count(), 1);
    }
}
