//! Error kind enumeration for categorizing resolution errors.

/// Categorization of configuration-resolution errors.
///
/// This enum provides a stable interface for matching on error types. The
/// distinction that matters to callers is load vs. save:
///
/// | ErrorKind       | Raised by                          | Fallback applies |
/// |-----------------|------------------------------------|------------------|
/// | `StoreLoad`     | `resolve()` / `resolve_for_tenant` | No               |
/// | `StoreSave`     | `set()`                            | n/a              |
/// | `Configuration` | collaborator wiring                | No               |
///
/// A load failure never falls through to the instance property: "failed to
/// determine" and "determined: no value" are different outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The per-tenant configuration document could not be loaded.
    ///
    /// Covers storage failures and documents missing the expected
    /// configuration schema object. A document that loads fine but has no
    /// value set is `Ok(None)`, not this error.
    #[error("configuration load failed")]
    StoreLoad,

    /// The per-tenant configuration document could not be saved.
    ///
    /// The cache is never updated speculatively before a confirmed save, so
    /// this error leaves no partial state behind.
    #[error("configuration save failed")]
    StoreSave,

    /// A collaborator is misconfigured (e.g. a broken property source).
    #[error("configuration error")]
    Configuration,
}
