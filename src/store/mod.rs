//! Collaborator traits consumed by the resolver.
//!
//! The resolver itself owns nothing but its cache; everything persistent is
//! behind one of these traits:
//! - [`ConfigDocumentStore`]: the per-tenant configuration document
//! - [`InstancePropertySource`]: the instance-wide flat property store
//! - [`TenantContext`]: identification of the main tenant
//!
//! All three are object-safe and implemented for `Arc<T>` and `Box<T>`, so a
//! resolver can be composed from shared collaborators at startup.

mod document;
mod property;
mod tenant;

pub use document::{AUTH_SERVICE_FIELD, ConfigDocumentStore};
pub use property::InstancePropertySource;
pub use tenant::{FixedTenant, TenantContext};
