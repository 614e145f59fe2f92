//! Connection Manager Port
//!
//! Defines the interface for reaching the search engine.
//! Implementations own the wire protocol, credentials and probe timeout.

use async_trait::async_trait;
use std::sync::Arc;

/// Hands out connections to the configured search engine.
///
/// This is an outbound port. A fresh connection may be returned on every
/// call; callers never keep one across requests.
#[async_trait]
pub trait ConnectionManager: Send + Sync {
    async fn connection(&self) -> Arc<dyn ConnectionProbe>;
}

/// A single connection that can test whether the engine answers.
#[async_trait]
pub trait ConnectionProbe: Send + Sync {
    /// Test connectivity.
    ///
    /// `Ok(false)` means the engine answered but reported itself unusable.
    /// Transport-level problems are returned as [`ProbeError`].
    async fn test_connection(&self) -> Result<bool, ProbeError>;
}

/// Failure while probing the search engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    #[error("connection timeout")]
    Timeout,
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("authentication rejected (status {0})")]
    Unauthorized(u16),
    #[error("protocol error: {0}")]
    Protocol(String),
}
