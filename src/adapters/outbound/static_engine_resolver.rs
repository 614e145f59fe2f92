//! Static Engine Resolver
//!
//! Implements EngineResolver with an engine fixed at startup.

use crate::domain::ports::EngineResolver;
use crate::domain::value_objects::SearchEngine;

/// Resolver that always answers with the configured engine.
pub struct StaticEngineResolver {
    engine: SearchEngine,
}

impl StaticEngineResolver {
    pub fn new(engine: impl Into<SearchEngine>) -> Self {
        Self {
            engine: engine.into(),
        }
    }
}

impl EngineResolver for StaticEngineResolver {
    fn current_search_engine(&self) -> SearchEngine {
        self.engine.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_configured_engine() {
        let resolver = StaticEngineResolver::new("opensearch");
        assert_eq!(resolver.current_search_engine(), SearchEngine::new("opensearch"));
        assert_eq!(resolver.current_search_engine().as_str(), "opensearch");
    }
}
