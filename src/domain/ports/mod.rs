mod connection_manager;
mod engine_resolver;
mod layout_update;
mod scope_config;

pub use connection_manager::{ConnectionManager, ConnectionProbe, ProbeError};
pub use engine_resolver::EngineResolver;
pub use layout_update::LayoutUpdate;
pub use scope_config::ScopeConfig;
