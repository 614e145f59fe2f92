//! Search Engine Health Checker
//!
//! Answers, per request, whether the configured search engine can be
//! trusted when deciding to cache a page.

use crate::domain::ports::{ConnectionManager, EngineResolver, ProbeError};
use crate::domain::value_objects::SearchEngine;
use std::sync::Arc;

/// Outcome of a single health check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthCheckResult {
    /// Engine is not in the supported list; no probe was made.
    Skipped { engine: SearchEngine },
    /// Probe answered and the engine is reachable.
    Available { engine: SearchEngine },
    /// Probe answered but reported the engine unusable.
    Unavailable { engine: SearchEngine },
    /// Probe failed at the transport level.
    Failed {
        engine: SearchEngine,
        error: ProbeError,
    },
}

impl HealthCheckResult {
    pub fn is_available(&self) -> bool {
        matches!(
            self,
            HealthCheckResult::Skipped { .. } | HealthCheckResult::Available { .. }
        )
    }

    pub fn engine(&self) -> &SearchEngine {
        match self {
            HealthCheckResult::Skipped { engine }
            | HealthCheckResult::Available { engine }
            | HealthCheckResult::Unavailable { engine }
            | HealthCheckResult::Failed { engine, .. } => engine,
        }
    }
}

/// Health checker for the storefront search engine.
///
/// Stateless: every call resolves the engine again and makes at most one
/// probe. Probe latency is bounded by the connection manager.
pub struct SearchEngineHealthCheck {
    resolver: Arc<dyn EngineResolver>,
    connections: Arc<dyn ConnectionManager>,
}

impl SearchEngineHealthCheck {
    /// Create a new health checker.
    pub fn new(
        resolver: Arc<dyn EngineResolver>,
        connections: Arc<dyn ConnectionManager>,
    ) -> Self {
        Self {
            resolver,
            connections,
        }
    }

    /// Check if the current search engine is available.
    ///
    /// Returns `true` when the engine is unsupported or the probe succeeds,
    /// `false` when the probe reports failure or errors. Never fails.
    pub async fn is_available(&self) -> bool {
        self.check().await.is_available()
    }

    /// Perform a single check and report how it was decided.
    pub async fn check(&self) -> HealthCheckResult {
        let engine = self.resolver.current_search_engine();

        if !engine.is_supported() {
            tracing::debug!(engine = %engine, "search engine not probed");
            return HealthCheckResult::Skipped { engine };
        }

        let probe = self.connections.connection().await;

        match probe.test_connection().await {
            Ok(true) => HealthCheckResult::Available { engine },
            Ok(false) => {
                tracing::debug!(engine = %engine, "search engine reported unavailable");
                HealthCheckResult::Unavailable { engine }
            }
            Err(error) => {
                tracing::error!(
                    engine = %engine,
                    "Search engine \"{}\": connection error: {}",
                    engine,
                    error
                );
                HealthCheckResult::Failed { engine, error }
            }
        }
    }
}
