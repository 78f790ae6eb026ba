use std::collections::HashSet;
use std::time::Duration;

use serde::Deserialize;

use crate::models::{Roster, Site, reference_sites};

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub client: ClientConfig,
    /// Monitored sites in display order. Defaults to the reference roster.
    #[serde(default = "reference_sites")]
    pub sites: Vec<Site>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    /// Prebuilt frontend assets served for unmatched routes (production mode).
    #[serde(default)]
    pub static_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_clock_interval_ms")]
    pub clock_interval_ms: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// The terminal view owns the screen, so its logs go to this file.
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".into()
}

fn default_poll_interval_ms() -> u64 {
    5000
}

fn default_clock_interval_ms() -> u64 {
    1000
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_log_file() -> String {
    "nocwatch-view.log".into()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            poll_interval_ms: default_poll_interval_ms(),
            clock_interval_ms: default_clock_interval_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            log_file: default_log_file(),
        }
    }
}

impl ClientConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("reading {}: {}", path, e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Immutable roster handed to the generator at startup.
    pub fn roster(&self) -> Roster {
        Roster::new(self.sites.clone())
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.server.host.is_empty(),
            "server.host must be non-empty"
        );
        if let Some(dir) = &self.server.static_dir {
            anyhow::ensure!(!dir.is_empty(), "server.static_dir must be non-empty when set");
        }
        anyhow::ensure!(
            !self.client.base_url.is_empty(),
            "client.base_url must be non-empty"
        );
        anyhow::ensure!(
            self.client.poll_interval_ms > 0,
            "client.poll_interval_ms must be > 0, got {}",
            self.client.poll_interval_ms
        );
        anyhow::ensure!(
            self.client.clock_interval_ms > 0,
            "client.clock_interval_ms must be > 0, got {}",
            self.client.clock_interval_ms
        );
        anyhow::ensure!(
            self.client.request_timeout_secs > 0,
            "client.request_timeout_secs must be > 0, got {}",
            self.client.request_timeout_secs
        );
        anyhow::ensure!(
            !self.client.log_file.is_empty(),
            "client.log_file must be non-empty"
        );
        anyhow::ensure!(!self.sites.is_empty(), "sites must list at least one site");
        let mut seen = HashSet::new();
        for site in &self.sites {
            anyhow::ensure!(
                seen.insert(site.id),
                "sites: duplicate id {}",
                site.id
            );
        }
        Ok(())
    }
}
