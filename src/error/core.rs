//! Main error type for configuration resolution.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use super::ErrorKind;

/// The error type for configuration-resolution operations.
///
/// `Error` pairs an [`ErrorKind`] for categorization with a human-readable
/// message and an optional underlying cause:
///
/// ```text
/// Error
/// ├── kind: ErrorKind          (category for matching)
/// ├── message: String          (human-readable description)
/// └── source: Option           (underlying cause)
/// ```
///
/// ## Example
///
/// ```rust
/// use authservice_config::{Error, ErrorKind};
///
/// fn handle_error(err: Error) {
///     match err.kind() {
///         ErrorKind::StoreLoad => {
///             // Resolution failed; do not fall back to a default
///             // authenticator, surface the failure.
///             eprintln!("could not load authentication config: {}", err);
///         }
///         ErrorKind::StoreSave => {
///             eprintln!("could not persist authentication config: {}", err);
///         }
///         _ => eprintln!("configuration error: {}", err),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    /// The error category.
    kind: ErrorKind,

    /// Human-readable error message.
    message: Cow<'static, str>,

    /// The underlying error, if any.
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl Error {
    /// Creates a new error with the given kind and message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use authservice_config::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::StoreLoad, "document fetch failed");
    /// assert_eq!(err.kind(), ErrorKind::StoreLoad);
    /// ```
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self { kind, message: message.into(), source: None }
    }

    /// Creates an error from a kind with a default message.
    pub fn from_kind(kind: ErrorKind) -> Self {
        let message = match kind {
            ErrorKind::StoreLoad => "failed to load the configuration document",
            ErrorKind::StoreSave => "failed to save the configuration document",
            ErrorKind::Configuration => "collaborator misconfigured",
        };
        Self::new(kind, message)
    }

    /// Returns the error kind for categorization.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Sets the source error for this error.
    #[must_use]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors for common error types

    /// Creates a load-failure error.
    pub fn store_load(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::StoreLoad, message)
    }

    /// Creates a save-failure error.
    pub fn store_save(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::StoreSave, message)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_new() {
        let err = Error::new(ErrorKind::StoreLoad, "test message");
        assert_eq!(err.kind(), ErrorKind::StoreLoad);
        assert!(err.to_string().contains("test message"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_error_from_kind() {
        let err = Error::from_kind(ErrorKind::StoreSave);
        assert_eq!(err.kind(), ErrorKind::StoreSave);
        assert!(err.to_string().contains("failed to save"));
    }

    #[test]
    fn test_error_with_source() {
        let io_err = std::io::Error::other("underlying error");
        let err = Error::store_load("document fetch failed").with_source(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(Error::store_load("test").kind(), ErrorKind::StoreLoad);
        assert_eq!(Error::store_save("test").kind(), ErrorKind::StoreSave);
        assert_eq!(Error::configuration("test").kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_from_error_kind() {
        let err: Error = ErrorKind::StoreLoad.into();
        assert_eq!(err.kind(), ErrorKind::StoreLoad);
    }

    #[test]
    fn test_display_format() {
        let err = Error::store_save("disk full");
        let display = err.to_string();
        assert!(display.contains("configuration save failed"));
        assert!(display.contains("disk full"));
    }
}
