//! Scope Configuration Port

/// Read-only access to scoped system configuration.
///
/// Scoping (store, website, environment) is the implementation's concern.
pub trait ScopeConfig: Send + Sync {
    /// Whether the flag stored at `path` is set.
    fn is_set_flag(&self, path: &str) -> bool;
}
