//! Environment lookup port.

/// Read-only view of environment variables, keyed by exact (case-sensitive) name.
pub trait EnvironmentReader: Send + Sync {
    /// Value of `name`, or `None` when unset.
    fn get(&self, name: &str) -> Option<String>;
}
