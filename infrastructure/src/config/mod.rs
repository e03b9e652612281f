//! Configuration with multi-source merging
//!
//! Endpoint settings are recognized, not required: a missing URL degrades the
//! dependent behavior (the probe reports unhealthy, the CLI explains what is
//! unconfigured) instead of crashing the process.

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Auth endpoint and retry policy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// POST endpoint issuing session tokens (`{"room": ..}` -> `{"token": ..}`)
    pub url: Option<String>,
    /// Attempts before authentication is considered exhausted
    pub max_attempts: u32,
    /// Base backoff delay in milliseconds (attempt k waits `base * k`)
    pub base_delay_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_attempts: 3,
            base_delay_ms: 1000,
        }
    }
}

/// Participant directory endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub url: Option<String>,
}

/// Document store endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentsConfig {
    pub url: Option<String>,
}

/// Endpoints probed by the health aggregator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Document storage backend (cheap read query)
    pub storage_url: Option<String>,
    /// Collaboration transport auth endpoint (throwaway room authorization)
    pub transport_auth_url: Option<String>,
    /// Identity provider reachability endpoint
    pub identity_url: Option<String>,
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Environment label reported by the health endpoint
    pub environment: String,
    pub auth: AuthConfig,
    pub directory: DirectoryConfig,
    pub documents: DocumentsConfig,
    pub probes: ProbeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            auth: AuthConfig::default(),
            directory: DirectoryConfig::default(),
            documents: DocumentsConfig::default(),
            probes: ProbeConfig::default(),
        }
    }
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `DOCROOM_*` environment variables (nested keys split on `__`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./docroom.toml` or `./.docroom.toml`
    /// 4. `~/.config/docroom/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<Config, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        for filename in &["docroom.toml", ".docroom.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("DOCROOM_").split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> Config {
        Config::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("docroom").join("config.toml"))
    }
}
