//! Dependency probes behind the health aggregator
//!
//! One probe per backend dependency, each with a fixed name used as the key
//! in the health report. Absent configuration degrades the probe to a
//! failure; it never crashes the process.

use async_trait::async_trait;
use docroom_application::ports::dependency_check::{DependencyCheck, ProbeFailure};
use serde::Serialize;

use crate::config::Config;

/// Probe name for the document storage backend
pub const STORAGE: &str = "storage";
/// Probe name for the real-time collaboration transport
pub const TRANSPORT: &str = "transport";
/// Probe name for the identity provider
pub const IDENTITY: &str = "identity";

/// Room id used for throwaway transport authorizations
const HEALTH_CHECK_ROOM: &str = "health-check";

async fn expect_success(
    request: reqwest::RequestBuilder,
    dependency: &str,
) -> Result<(), ProbeFailure> {
    let response = request
        .send()
        .await
        .map_err(|e| ProbeFailure::new(e.to_string()))?;
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ProbeFailure::new(format!(
            "{dependency} returned HTTP {}",
            status.as_u16()
        )))
    }
}

/// Cheap read query against the document storage backend.
pub struct StorageProbe {
    client: reqwest::Client,
    url: Option<String>,
}

impl StorageProbe {
    pub fn new(client: reqwest::Client, url: Option<String>) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl DependencyCheck for StorageProbe {
    fn name(&self) -> &str {
        STORAGE
    }

    async fn check(&self) -> Result<(), ProbeFailure> {
        let url = self
            .url
            .as_deref()
            .ok_or_else(|| ProbeFailure::not_configured(STORAGE))?;
        expect_success(self.client.get(url), STORAGE).await
    }
}

#[derive(Serialize)]
struct ProbeAuthRequest<'a> {
    room: &'a str,
}

/// Authorizes a throwaway room against the collaboration transport's auth
/// endpoint, proving the transport can still issue sessions.
pub struct TransportProbe {
    client: reqwest::Client,
    auth_url: Option<String>,
}

impl TransportProbe {
    pub fn new(client: reqwest::Client, auth_url: Option<String>) -> Self {
        Self { client, auth_url }
    }
}

#[async_trait]
impl DependencyCheck for TransportProbe {
    fn name(&self) -> &str {
        TRANSPORT
    }

    async fn check(&self) -> Result<(), ProbeFailure> {
        let url = self
            .auth_url
            .as_deref()
            .ok_or_else(|| ProbeFailure::not_configured(TRANSPORT))?;
        let request = self.client.post(url).json(&ProbeAuthRequest {
            room: HEALTH_CHECK_ROOM,
        });
        expect_success(request, TRANSPORT).await
    }
}

/// Reachability check of the identity provider.
pub struct IdentityProviderProbe {
    client: reqwest::Client,
    url: Option<String>,
}

impl IdentityProviderProbe {
    pub fn new(client: reqwest::Client, url: Option<String>) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl DependencyCheck for IdentityProviderProbe {
    fn name(&self) -> &str {
        IDENTITY
    }

    async fn check(&self) -> Result<(), ProbeFailure> {
        let url = self
            .url
            .as_deref()
            .ok_or_else(|| ProbeFailure::not_configured(IDENTITY))?;
        expect_success(self.client.get(url), IDENTITY).await
    }
}

/// The fixed probe set, in report order: storage, transport, identity.
pub fn default_probes(client: &reqwest::Client, config: &Config) -> Vec<Box<dyn DependencyCheck>> {
    vec![
        Box::new(StorageProbe::new(
            client.clone(),
            config.probes.storage_url.clone(),
        )),
        Box::new(TransportProbe::new(
            client.clone(),
            config.probes.transport_auth_url.clone(),
        )),
        Box::new(IdentityProviderProbe::new(
            client.clone(),
            config.probes.identity_url.clone(),
        )),
    ]
}
