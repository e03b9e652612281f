//! Health aggregation across independently-failing dependencies.
//!
//! Probes run strictly one after another; each executes in its own failure
//! domain, so a failing probe is recorded `Unhealthy` and the next one still
//! runs. `check` itself never fails — it always returns a fully-populated
//! report, even when every probe is unhealthy.

use crate::ports::dependency_check::DependencyCheck;
use docroom_domain::{DependencyProbe, HealthReport, ProbeStatus};
use tracing::{debug, warn};

/// Probes a fixed, statically-known sequence of dependencies and produces
/// one composite report per invocation. No state survives across requests.
pub struct HealthAggregator {
    environment: String,
    probes: Vec<Box<dyn DependencyCheck>>,
}

impl HealthAggregator {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            probes: Vec::new(),
        }
    }

    /// Register a probe. Report order follows registration order.
    pub fn register(mut self, probe: Box<dyn DependencyCheck>) -> Self {
        self.probes.push(probe);
        self
    }

    /// Names of all registered probes, in report order.
    pub fn probe_names(&self) -> Vec<&str> {
        self.probes.iter().map(|p| p.name()).collect()
    }

    /// Run every probe sequentially and assemble the report.
    pub async fn check(&self) -> HealthReport {
        let mut results = Vec::with_capacity(self.probes.len());
        for probe in &self.probes {
            let pending = DependencyProbe::pending(probe.name());
            let resolved = match probe.check().await {
                Ok(()) => {
                    debug!("health probe '{}' ok", probe.name());
                    pending.resolved(ProbeStatus::Healthy)
                }
                Err(e) => {
                    warn!("health probe '{}' failed: {}", probe.name(), e);
                    pending.resolved(ProbeStatus::Unhealthy)
                }
            };
            results.push(resolved);
        }
        HealthReport::new(self.environment.clone(), results)
    }
}
