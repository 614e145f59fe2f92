//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Search engines whose connectivity is worth probing.
/// Any other engine is treated as always available.
pub const SUPPORTED_ENGINES: [&str; 2] = ["elasticsearch7", "opensearch"];

/// Configuration path of the feature toggle.
pub const DISABLE_CACHE_ON_FAILURE_PATH: &str = "catalog/search/disable_cache_on_failure";

/// Layout handle that identifies category pages.
pub const CATEGORY_PAGE_HANDLE: &str = "catalog_category_view";

/// Layout handle that tells the full-page cache to skip this response.
pub const PAGE_CACHE_DISABLED_HANDLE: &str = "page_cache_disabled";

/// Code of the search engine currently configured for the storefront.
///
/// # Examples
/// ```
/// use search_fpc_guard::domain::value_objects::SearchEngine;
///
/// assert!(SearchEngine::new("opensearch").is_supported());
/// assert!(!SearchEngine::new("OpenSearch").is_supported());
/// assert!(!SearchEngine::new("mysql").is_supported());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchEngine(String);

impl SearchEngine {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a connection probe is meaningful for this engine.
    /// Exact, case-sensitive match.
    pub fn is_supported(&self) -> bool {
        SUPPORTED_ENGINES.contains(&self.0.as_str())
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SearchEngine {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}
