// src/core/config_manager.rs
//! Configuration: optional config.yaml with per-environment sections,
//! then environment variable overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "https://apis.ccbp.in";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    pub environment: String,
    /// File the settings were read from; `None` when defaults were used
    pub source: Option<PathBuf>,
    pub api: ApiConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    /// Used when a request carries no `jwt_token` cookie
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub json: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct EnvironmentSection {
    api: ApiConfig,
    server: ServerConfig,
    logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    local: EnvironmentSection,
    production: EnvironmentSection,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: Some(DEFAULT_TIMEOUT_SECS),
            token: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::from([127, 0, 0, 1]),
            port: 8000,
        }
    }
}

impl ConfigManager {
    /// Load configuration for the current environment. A missing file
    /// means defaults; an unreadable or malformed one is an error.
    ///
    /// Runs before logging is set up, so nothing is logged here.
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// [`Self::load`] with environment variables read through `lookup`
    pub fn load_with<F>(path: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("JOBBY_ENV")
            .or_else(|| lookup("ENVIRONMENT"))
            .unwrap_or_else(|| "local".to_string());

        let (section, source) = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            (
                Self::section_from_yaml(&content, &environment)?,
                Some(path.to_path_buf()),
            )
        } else {
            (EnvironmentSection::default(), None)
        };

        let mut config = Self {
            environment,
            source,
            api: section.api,
            server: section.server,
            logging: section.logging,
        };
        config.apply_env_overrides(lookup)?;
        Ok(config)
    }

    fn section_from_yaml(content: &str, environment: &str) -> Result<EnvironmentSection> {
        let file: ConfigFile =
            serde_yaml::from_str(content).context("Failed to parse config.yaml")?;

        Ok(match environment {
            "production" => file.production,
            _ => file.local,
        })
    }

    fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("JOBS_API_URL") {
            self.api.base_url = url;
        }

        if let Some(secs) = lookup("JOBS_API_TIMEOUT_SECS") {
            let secs = secs
                .parse::<u64>()
                .context("JOBS_API_TIMEOUT_SECS must be a number of seconds")?;
            // 0 turns the timeout off
            self.api.timeout_seconds = (secs > 0).then_some(secs);
        }

        if let Some(token) = lookup(super::token_store::TOKEN_ENV_VAR) {
            self.api.token = Some(token);
        }

        if let Some(port) = lookup("ROCKET_PORT") {
            self.server.port = port
                .parse::<u16>()
                .context("ROCKET_PORT must be a valid port number")?;
        }

        Ok(())
    }
}
