//! Fixed-content property source for tests.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::store::InstancePropertySource;

/// An [`InstancePropertySource`] backed by a fixed key-value map.
///
/// ```rust
/// use authservice_config::store::InstancePropertySource;
/// use authservice_config::testing::StaticPropertySource;
///
/// let source = StaticPropertySource::new()
///     .with_property("security.authentication.authService", "ldap");
///
/// assert_eq!(
///     source.get_property("security.authentication.authService").as_deref(),
///     Some("ldap"),
/// );
/// ```
#[derive(Clone, Default)]
pub struct StaticPropertySource {
    properties: Arc<RwLock<HashMap<String, String>>>,
}

impl StaticPropertySource {
    /// Creates an empty property source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property.
    #[must_use]
    pub fn with_property(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.write().insert(key.into(), value.into());
        self
    }
}

impl InstancePropertySource for StaticPropertySource {
    fn get_property(&self, key: &str) -> Option<String> {
        self.properties.read().get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source() {
        let source = StaticPropertySource::new();
        assert_eq!(source.get_property("anything"), None);
    }

    #[test]
    fn test_with_property() {
        let source = StaticPropertySource::new().with_property("a", "1").with_property("b", "2");
        assert_eq!(source.get_property("a").as_deref(), Some("1"));
        assert_eq!(source.get_property("b").as_deref(), Some("2"));
        assert_eq!(source.get_property("c"), None);
    }
}
