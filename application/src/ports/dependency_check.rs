//! Dependency check port
//!
//! One implementation per monitored backend dependency. Failures are data
//! for the aggregator, never propagated past it.

use async_trait::async_trait;
use thiserror::Error;

/// Why a probe reported unhealthy.
///
/// Contained to its own probe by the aggregator; it never aborts the health
/// check or reaches the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ProbeFailure(String);

impl ProbeFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn not_configured(dependency: &str) -> Self {
        Self(format!("{dependency} endpoint not configured"))
    }
}

/// One independent health check of a single backend dependency.
#[async_trait]
pub trait DependencyCheck: Send + Sync {
    /// Stable probe name used as the key in the health report
    fn name(&self) -> &str;

    /// Run the check once. `Ok(())` records `Healthy`, any error `Unhealthy`.
    async fn check(&self) -> Result<(), ProbeFailure>;
}
