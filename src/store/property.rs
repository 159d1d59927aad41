//! Instance-wide flat property access.

use std::sync::Arc;

/// Read access to the instance-level property store.
///
/// This is the last level of the resolution fallback chain: a flat key-value
/// source, typically backed by the instance's properties file. Lookups are
/// infallible; a property source that cannot even read its own backing
/// configuration is a deployment fault and should fail at construction time,
/// not per lookup.
pub trait InstancePropertySource: Send + Sync {
    /// Returns the value of a property, or `None` if it is not set.
    fn get_property(&self, key: &str) -> Option<String>;
}

// Allow using Arc<dyn InstancePropertySource> as InstancePropertySource
impl<T: InstancePropertySource + ?Sized> InstancePropertySource for Arc<T> {
    fn get_property(&self, key: &str) -> Option<String> {
        (**self).get_property(key)
    }
}

// Allow using Box<dyn InstancePropertySource> as InstancePropertySource
impl<T: InstancePropertySource + ?Sized> InstancePropertySource for Box<T> {
    fn get_property(&self, key: &str) -> Option<String> {
        (**self).get_property(key)
    }
}
