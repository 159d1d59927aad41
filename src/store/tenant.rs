//! Tenant identification supplied by the execution context.

use std::sync::Arc;

/// Supplies the identifier of the main tenant.
///
/// The main tenant is the designated top-level tenant whose configuration
/// document holds the instance-wide authentication settings. In a hosted
/// deployment this typically comes from the request-handling context; in a
/// single-tenant deployment [`FixedTenant`] is enough.
pub trait TenantContext: Send + Sync {
    /// Returns the identifier of the main tenant.
    fn main_tenant(&self) -> String;
}

// Allow using Arc<dyn TenantContext> as TenantContext
impl<T: TenantContext + ?Sized> TenantContext for Arc<T> {
    fn main_tenant(&self) -> String {
        (**self).main_tenant()
    }
}

// Allow using Box<dyn TenantContext> as TenantContext
impl<T: TenantContext + ?Sized> TenantContext for Box<T> {
    fn main_tenant(&self) -> String {
        (**self).main_tenant()
    }
}

/// A context with a fixed main-tenant identifier.
///
/// Useful for single-tenant deployments and tests.
#[derive(Debug, Clone)]
pub struct FixedTenant {
    name: Arc<str>,
}

impl FixedTenant {
    /// Creates a context that always reports the given main tenant.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: Arc::from(name.into()) }
    }
}

impl TenantContext for FixedTenant {
    fn main_tenant(&self) -> String {
        self.name.to_string()
    }
}
