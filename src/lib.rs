//! # authservice-config
//!
//! Tenant-aware resolution of the configured authentication-service
//! implementation.
//!
//! Each tenant can persist the identifier of the authentication service it
//! uses in a per-tenant configuration document. When nothing is configured
//! there, resolution falls back to an instance-wide property
//! (`security.authentication.authService`). Results are cached per tenant so
//! that repeated lookups do not hit the configuration store.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use authservice_config::prelude::*;
//!
//! # fn main() -> std::result::Result<(), authservice_config::Error> {
//! // In-memory collaborators; production code wires in real implementations
//! // of the store traits.
//! let store = Arc::new(InMemoryDocumentStore::new());
//! let properties = Arc::new(StaticPropertySource::new());
//! let tenants = Arc::new(FixedTenant::new("main"));
//!
//! let resolver = AuthServiceResolver::new(store, properties, tenants);
//!
//! // Nothing configured anywhere yet.
//! assert_eq!(resolver.resolve()?, None);
//!
//! // Configure an authenticator for the main tenant, then invalidate so the
//! // next resolution sees it.
//! resolver.set("oidc")?;
//! resolver.invalidate("main");
//! assert_eq!(resolver.resolve()?.as_deref(), Some("oidc"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Key Concepts
//!
//! - **Two-level fallback**: per-tenant document config first, then the
//!   instance-wide property. A load failure is an error, never a fallback.
//! - **Negative caching**: "nothing configured" is cached exactly like a real
//!   value, so tenants with no explicit authenticator do not re-query the
//!   store on every request.
//! - **Explicit invalidation**: [`AuthServiceResolver::set`] writes through
//!   the store but never touches the cache. Whatever observes document saves
//!   must call [`AuthServiceResolver::invalidate`] for the affected tenant.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod error;
pub mod resolver;
pub mod store;

// Testing utilities
pub mod testing;

// Prelude for convenient imports
pub mod prelude;

// Re-export main types at crate root for convenience
pub use error::{Error, ErrorKind, Result};
pub use resolver::{AuthServiceResolver, INSTANCE_PROPERTY};
pub use store::{
    AUTH_SERVICE_FIELD, ConfigDocumentStore, FixedTenant, InstancePropertySource, TenantContext,
};
