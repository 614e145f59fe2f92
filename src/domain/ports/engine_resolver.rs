//! Engine Resolver Port
//!
//! Defines the interface for finding out which search engine is configured.

use crate::domain::value_objects::SearchEngine;

/// Resolves the search engine configured for the current request.
///
/// Called on every health check; implementations must not assume the
/// answer is cached between requests.
pub trait EngineResolver: Send + Sync {
    fn current_search_engine(&self) -> SearchEngine;
}
