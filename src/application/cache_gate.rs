//! Cache Gate - Main application use case
//!
//! Keeps category pages out of the full-page cache while the search
//! engine backing them is unreachable.

use crate::domain::ports::{LayoutUpdate, ScopeConfig};
use crate::domain::value_objects::{
    CATEGORY_PAGE_HANDLE, DISABLE_CACHE_ON_FAILURE_PATH, PAGE_CACHE_DISABLED_HANDLE,
};
use crate::infrastructure::SearchEngineHealthCheck;

/// Cache gate - runs once per rendered page.
///
/// Checks, cheapest first:
/// 1. Whether the feature is enabled in configuration
/// 2. Whether the page is a category page
/// 3. Whether the search engine is available
///
/// Only when all three say so is the cache-disabled handle appended.
pub struct CacheGate;

impl CacheGate {
    /// Apply the gate to the page being rendered.
    ///
    /// The health check is only reached for category pages with the
    /// feature enabled. Calling this twice on an unhealthy category page
    /// appends the directive twice.
    pub async fn apply(
        layout: &mut dyn LayoutUpdate,
        config: &dyn ScopeConfig,
        health: &SearchEngineHealthCheck,
    ) {
        if !Self::is_enabled(config) {
            return;
        }

        if !Self::is_category_page(layout) {
            tracing::debug!("not a category page, cache left untouched");
            return;
        }

        if health.is_available().await {
            return;
        }

        layout.add_handle(PAGE_CACHE_DISABLED_HANDLE);
        tracing::warn!(
            handle = PAGE_CACHE_DISABLED_HANDLE,
            "search engine unavailable, disabling page cache for category page"
        );
    }

    fn is_enabled(config: &dyn ScopeConfig) -> bool {
        config.is_set_flag(DISABLE_CACHE_ON_FAILURE_PATH)
    }

    fn is_category_page(layout: &dyn LayoutUpdate) -> bool {
        !layout.handles().is_empty() && layout.has_handle(CATEGORY_PAGE_HANDLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PageLayout;
    use crate::domain::ports::{ConnectionManager, ConnectionProbe, EngineResolver, ProbeError};
    use crate::domain::value_objects::SearchEngine;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    // ===== Mock Implementations =====

    struct MockConfig {
        enabled: bool,
        reads: AtomicUsize,
    }

    impl MockConfig {
        fn new(enabled: bool) -> Self {
            Self {
                enabled,
                reads: AtomicUsize::new(0),
            }
        }
    }

    impl ScopeConfig for MockConfig {
        fn is_set_flag(&self, path: &str) -> bool {
            self.reads.fetch_add(1, Ordering::SeqCst);
            path == DISABLE_CACHE_ON_FAILURE_PATH && self.enabled
        }
    }

    struct MockResolver;

    impl EngineResolver for MockResolver {
        fn current_search_engine(&self) -> SearchEngine {
            SearchEngine::new("elasticsearch7")
        }
    }

    struct MockProbe(Result<bool, ProbeError>);

    #[async_trait]
    impl ConnectionProbe for MockProbe {
        async fn test_connection(&self) -> Result<bool, ProbeError> {
            self.0.clone()
        }
    }

    struct MockConnections {
        result: Result<bool, ProbeError>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ConnectionManager for MockConnections {
        async fn connection(&self) -> Arc<dyn ConnectionProbe> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Arc::new(MockProbe(self.result.clone()))
        }
    }

    fn health(
        result: Result<bool, ProbeError>,
    ) -> (SearchEngineHealthCheck, Arc<MockConnections>) {
        let connections = Arc::new(MockConnections {
            result,
            calls: AtomicUsize::new(0),
        });
        let checker = SearchEngineHealthCheck::new(Arc::new(MockResolver), connections.clone());
        (checker, connections)
    }

    fn category_page() -> PageLayout {
        PageLayout::new(["default", "catalog_category_view"])
    }

    // ===== Tests =====

    #[tokio::test]
    async fn test_disabled_toggle_never_probes() {
        let config = MockConfig::new(false);
        let (health, connections) = health(Err(ProbeError::Timeout));

        for handles in [
            vec!["default", "catalog_category_view"],
            vec!["default", "cms_index_index"],
            vec![],
        ] {
            let mut layout = PageLayout::new(handles.clone());
            CacheGate::apply(&mut layout, &config, &health).await;
            assert_eq!(layout, PageLayout::new(handles));
        }

        assert_eq!(connections.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unhealthy_category_page_disables_cache() {
        let config = MockConfig::new(true);
        let (health, connections) = health(Ok(false));
        let mut layout = category_page();

        CacheGate::apply(&mut layout, &config, &health).await;

        assert_eq!(
            layout.handles(),
            ["default", "catalog_category_view", "page_cache_disabled"]
        );
        assert_eq!(connections.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_probe_error_disables_cache() {
        let config = MockConfig::new(true);
        let (health, _) = health(Err(ProbeError::Connect("refused".into())));
        let mut layout = category_page();

        CacheGate::apply(&mut layout, &config, &health).await;

        assert_eq!(layout.count(PAGE_CACHE_DISABLED_HANDLE), 1);
    }

    #[tokio::test]
    async fn test_healthy_category_page_untouched() {
        let config = MockConfig::new(true);
        let (health, connections) = health(Ok(true));
        let mut layout = category_page();

        CacheGate::apply(&mut layout, &config, &health).await;

        assert_eq!(layout, category_page());
        assert_eq!(connections.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_non_category_page_never_probes() {
        let config = MockConfig::new(true);
        let (health, connections) = health(Ok(false));
        let mut layout = PageLayout::new(["default", "cms_index_index"]);

        CacheGate::apply(&mut layout, &config, &health).await;

        assert_eq!(layout.handles(), ["default", "cms_index_index"]);
        assert_eq!(connections.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_layout_never_probes() {
        let config = MockConfig::new(true);
        let (health, connections) = health(Ok(false));
        let mut layout = PageLayout::default();

        CacheGate::apply(&mut layout, &config, &health).await;

        assert!(layout.handles().is_empty());
        assert_eq!(connections.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_repeated_apply_appends_again() {
        let config = MockConfig::new(true);
        let (health, connections) = health(Ok(false));
        let mut layout = category_page();

        CacheGate::apply(&mut layout, &config, &health).await;
        CacheGate::apply(&mut layout, &config, &health).await;

        assert_eq!(layout.count(PAGE_CACHE_DISABLED_HANDLE), 2);
        assert_eq!(connections.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_toggle_read_every_call() {
        let config = MockConfig::new(false);
        let (health, _) = health(Ok(true));
        let mut layout = category_page();

        CacheGate::apply(&mut layout, &config, &health).await;
        CacheGate::apply(&mut layout, &config, &health).await;

        assert_eq!(config.reads.load(Ordering::SeqCst), 2);
    }
}
