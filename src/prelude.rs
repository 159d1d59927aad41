//! Prelude module for convenient imports.
//!
//! ```rust
//! use authservice_config::prelude::*;
//! ```
//!
//! This provides access to:
//! - The resolver
//! - Collaborator traits
//! - Error types
//! - In-memory testing collaborators

pub use crate::{
    error::{Error, ErrorKind, Result},
    resolver::{AuthServiceResolver, INSTANCE_PROPERTY},
    store::{
        AUTH_SERVICE_FIELD, ConfigDocumentStore, FixedTenant, InstancePropertySource,
        TenantContext,
    },
    testing::{InMemoryDocumentStore, StaticPropertySource},
};
