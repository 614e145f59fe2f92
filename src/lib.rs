//! search-fpc-guard Library
//!
//! Keeps category pages out of the full-page cache while the storefront
//! search engine is unreachable.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use application::CacheGate;
pub use config::load_config;
pub use domain::entities::PageLayout;
pub use domain::ports::{
    ConnectionManager, ConnectionProbe, EngineResolver, LayoutUpdate, ProbeError, ScopeConfig,
};
pub use domain::value_objects::SearchEngine;
pub use infrastructure::{HealthCheckResult, SearchEngineHealthCheck};
