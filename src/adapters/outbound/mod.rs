mod dashmap_scope_config;
mod http_connection_manager;
mod static_engine_resolver;

pub use dashmap_scope_config::DashMapScopeConfig;
pub use http_connection_manager::{Credentials, HttpConnectionManager};
pub use static_engine_resolver::StaticEngineResolver;
