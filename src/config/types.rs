use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub connectivity: ConnectivityConfig,
}

/// Where the flavor catalog lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Scheme, host and port of the catalog server.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the flavor list, relative to `base_url`.
    #[serde(default = "default_flavors_path")]
    pub flavors_path: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Connectivity probe settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectivityConfig {
    /// When false the network is always assumed to be available.
    #[serde(default = "default_probe_enabled")]
    pub enabled: bool,
    /// TCP connect timeout of the probe in milliseconds (default: 1500).
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_flavors_path() -> String {
    "mobile/tests/pizzas.json".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_probe_enabled() -> bool {
    true
}

fn default_probe_timeout_ms() -> u64 {
    1500
}

impl CatalogConfig {
    /// Full URL of the flavor list.
    pub fn flavors_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.flavors_path.trim_start_matches('/')
        )
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            flavors_path: default_flavors_path(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            enabled: default_probe_enabled(),
            probe_timeout_ms: default_probe_timeout_ms(),
        }
    }
}
