//! search-fpc-guard - one-shot cache gate run
//!
//! This is the composition root that wires together all the components.
//! Layout handles are taken from the command line.

use search_fpc_guard::adapters::outbound::{
    Credentials, DashMapScopeConfig, HttpConnectionManager, StaticEngineResolver,
};
use search_fpc_guard::domain::value_objects::DISABLE_CACHE_ON_FAILURE_PATH;
use search_fpc_guard::{load_config, CacheGate, LayoutUpdate, PageLayout, SearchEngineHealthCheck};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    tracing::info!(
        "starting search-fpc-guard engine={} endpoint={}",
        cfg.engine,
        cfg.endpoint
    );

    // ===== COMPOSITION ROOT =====

    let mut connections =
        HttpConnectionManager::new(&cfg.endpoint, Duration::from_millis(cfg.probe_timeout_ms))?;
    if let Some(username) = &cfg.username {
        connections = connections.with_credentials(Credentials {
            username: username.clone(),
            password: cfg.password.clone(),
        });
    }

    let scope_config = DashMapScopeConfig::new();
    scope_config.set_flag(DISABLE_CACHE_ON_FAILURE_PATH, cfg.disable_cache_on_failure);

    let health = SearchEngineHealthCheck::new(
        Arc::new(StaticEngineResolver::new(cfg.engine.as_str())),
        Arc::new(connections),
    );

    let mut layout = PageLayout::new(std::env::args().skip(1));
    CacheGate::apply(&mut layout, &scope_config, &health).await;

    tracing::info!(handles = ?layout.handles(), "layout after cache gate");

    Ok(())
}
