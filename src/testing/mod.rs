//! In-memory collaborators for testing.
//!
//! These fakes implement the [`store`](crate::store) traits with real
//! in-memory semantics plus the hooks tests need: call counting and failure
//! injection.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use authservice_config::AuthServiceResolver;
//! use authservice_config::store::FixedTenant;
//! use authservice_config::testing::{InMemoryDocumentStore, StaticPropertySource};
//!
//! # fn main() -> Result<(), authservice_config::Error> {
//! let store = InMemoryDocumentStore::new().with_value("main", "basic");
//! let resolver = AuthServiceResolver::new(
//!     Arc::new(store.clone()),
//!     Arc::new(StaticPropertySource::new()),
//!     Arc::new(FixedTenant::new("main")),
//! );
//!
//! resolver.resolve()?;
//! resolver.resolve()?;
//! assert_eq!(store.load_count(), 1); // second call was a cache hit
//! # Ok(())
//! # }
//! ```

mod document_store;
mod property_source;

pub use document_store::InMemoryDocumentStore;
pub use property_source::StaticPropertySource;
