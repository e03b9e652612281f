//! Health report types
//!
//! A [`HealthReport`] aggregates one [`DependencyProbe`] per monitored backend
//! dependency. Probes are request-scoped: created [`ProbeStatus::Unknown`],
//! resolved exactly once, and discarded with the report. The set of probe
//! names is fixed and known in advance; a report always carries every name
//! regardless of how many probes failed.

use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// Outcome of a single dependency probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeStatus {
    /// Probe has not run yet
    #[default]
    Unknown,
    /// Dependency responded as expected
    Healthy,
    /// Dependency failed or is not configured
    Unhealthy,
}

impl ProbeStatus {
    /// Wire string used in the health report
    pub fn as_str(&self) -> &str {
        match self {
            ProbeStatus::Unknown => "unknown",
            ProbeStatus::Healthy => "healthy",
            ProbeStatus::Unhealthy => "unhealthy",
        }
    }
}

impl std::fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One health check of one backend dependency.
///
/// Independent lifecycle: starts `Unknown`, is resolved exactly once, and
/// never outlives the report it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyProbe {
    pub name: String,
    pub status: ProbeStatus,
}

impl DependencyProbe {
    /// Create a probe that has not run yet.
    pub fn pending(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: ProbeStatus::Unknown,
        }
    }

    /// Resolve the probe outcome. A probe is resolved at most once; a second
    /// resolution leaves the first outcome in place.
    pub fn resolved(mut self, status: ProbeStatus) -> Self {
        if self.status == ProbeStatus::Unknown {
            self.status = status;
        }
        self
    }

    pub fn is_healthy(&self) -> bool {
        self.status == ProbeStatus::Healthy
    }
}

/// Composite health report across all monitored dependencies.
///
/// Serializes to the operator-facing wire shape:
///
/// ```json
/// {
///   "environment": "production",
///   "timestamp": "2024-01-01T00:00:00+00:00",
///   "services": { "storage": "healthy", "transport": "unhealthy", "identity": "healthy" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub environment: String,
    pub timestamp: DateTime<Utc>,
    pub probes: Vec<DependencyProbe>,
}

impl HealthReport {
    pub fn new(environment: impl Into<String>, probes: Vec<DependencyProbe>) -> Self {
        Self {
            environment: environment.into(),
            timestamp: Utc::now(),
            probes,
        }
    }

    /// Status of a probe by name, if it is part of this report.
    pub fn status_of(&self, name: &str) -> Option<ProbeStatus> {
        self.probes.iter().find(|p| p.name == name).map(|p| p.status)
    }

    /// True when every probe resolved healthy.
    pub fn all_healthy(&self) -> bool {
        self.probes.iter().all(DependencyProbe::is_healthy)
    }
}

/// Probe list rendered as a `name -> status` object, in probe order.
struct Services<'a>(&'a [DependencyProbe]);

impl Serialize for Services<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for probe in self.0 {
            map.serialize_entry(&probe.name, probe.status.as_str())?;
        }
        map.end()
    }
}

impl Serialize for HealthReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("HealthReport", 3)?;
        state.serialize_field("environment", &self.environment)?;
        state.serialize_field("timestamp", &self.timestamp.to_rfc3339())?;
        state.serialize_field("services", &Services(&self.probes))?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_starts_unknown_and_resolves_once() {
        let probe = DependencyProbe::pending("storage");
        assert_eq!(probe.status, ProbeStatus::Unknown);

        let probe = probe.resolved(ProbeStatus::Healthy);
        assert!(probe.is_healthy());

        // Second resolution is a no-op
        let probe = probe.resolved(ProbeStatus::Unhealthy);
        assert!(probe.is_healthy());
    }

    #[test]
    fn test_report_serializes_to_wire_shape() {
        let report = HealthReport::new(
            "test",
            vec![
                DependencyProbe::pending("storage").resolved(ProbeStatus::Unhealthy),
                DependencyProbe::pending("transport").resolved(ProbeStatus::Healthy),
                DependencyProbe::pending("identity").resolved(ProbeStatus::Healthy),
            ],
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["environment"], "test");
        assert_eq!(json["services"]["storage"], "unhealthy");
        assert_eq!(json["services"]["transport"], "healthy");
        assert_eq!(json["services"]["identity"], "healthy");
        // Timestamp is RFC 3339 / ISO 8601
        let ts = json["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(ts).is_ok());
    }

    #[test]
    fn test_unresolved_probe_serializes_as_unknown() {
        let report = HealthReport::new("test", vec![DependencyProbe::pending("storage")]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["services"]["storage"], "unknown");
    }

    #[test]
    fn test_status_of_and_all_healthy() {
        let report = HealthReport::new(
            "test",
            vec![
                DependencyProbe::pending("storage").resolved(ProbeStatus::Healthy),
                DependencyProbe::pending("identity").resolved(ProbeStatus::Unhealthy),
            ],
        );
        assert_eq!(report.status_of("storage"), Some(ProbeStatus::Healthy));
        assert_eq!(report.status_of("identity"), Some(ProbeStatus::Unhealthy));
        assert_eq!(report.status_of("missing"), None);
        assert!(!report.all_healthy());
    }
}
