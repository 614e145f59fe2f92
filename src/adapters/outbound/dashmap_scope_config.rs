//! DashMap Scope Config
//!
//! Implements ScopeConfig using DashMap for lock-free concurrent access.

use crate::domain::ports::ScopeConfig;
use dashmap::DashMap;

/// In-memory scope configuration keyed by config path.
///
/// Values are stored as strings. A flag is set when its value is `1` or
/// `true` (any case); a missing path is unset.
pub struct DashMapScopeConfig {
    values: DashMap<String, String>,
}

impl DashMapScopeConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self {
            values: DashMap::new(),
        }
    }

    /// Store a raw value at `path`.
    pub fn set(&self, path: &str, value: impl Into<String>) {
        self.values.insert(path.to_string(), value.into());
    }

    /// Store a boolean flag at `path`.
    pub fn set_flag(&self, path: &str, enabled: bool) {
        self.set(path, if enabled { "1" } else { "0" });
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.values.get(path).map(|v| v.value().clone())
    }
}

impl Default for DashMapScopeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeConfig for DashMapScopeConfig {
    fn is_set_flag(&self, path: &str) -> bool {
        self.values
            .get(path)
            .map(|v| {
                let v = v.value().trim();
                v == "1" || v.eq_ignore_ascii_case("true")
            })
            .unwrap_or(false)
    }
}
