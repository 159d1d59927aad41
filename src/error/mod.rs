//! Error types for authentication-service configuration resolution.
//!
//! The crate has a single error type, [`Error`], categorized by
//! [`ErrorKind`].
//!
//! ## Key Invariant
//!
//! "Nothing configured" is `Ok(None)`, not an error. The error channel is
//! reserved for collaborator failures:
//! - [`ErrorKind::StoreLoad`]: the configuration document could not be
//!   fetched or parsed
//! - [`ErrorKind::StoreSave`]: a write to the configuration document failed
//!
//! ```rust
//! use authservice_config::{Error, ErrorKind};
//!
//! let err = Error::store_load("configuration schema object missing");
//! assert_eq!(err.kind(), ErrorKind::StoreLoad);
//! ```

mod core;
mod kind;

pub use self::core::Error;
pub use kind::ErrorKind;

/// A specialized `Result` type for configuration-resolution operations.
pub type Result<T> = std::result::Result<T, Error>;
