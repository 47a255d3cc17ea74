use serde::{Deserialize, Serialize};
use std::path::Path;

use super::blocking::BlockingConfig;
use super::drbl::DrblConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,

    pub upstream: UpstreamConfig,

    pub blocking: BlockingConfig,

    pub logging: LoggingConfig,

    pub drbl: DrblConfig,

    /// `customdnsrecords`: one zone-file-style line per static record, e.g.
    /// `router.lan A 192.168.1.1`. Parsed by the infrastructure layer at
    /// startup (§4.6); invalid lines are logged and skipped, never fatal.
    pub customdnsrecords: Vec<String>,

    /// `questioncachecap`: 0 disables question logging.
    pub questioncachecap: usize,

    /// `reactivationdelay`: default PAUSED deadline in seconds when
    /// `Deactivate` is called without an explicit duration.
    pub reactivationdelay: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
            blocking: BlockingConfig::default(),
            logging: LoggingConfig::default(),
            drbl: DrblConfig::default(),
            customdnsrecords: Vec::new(),
            questioncachecap: 1000,
            reactivationdelay: 300,
        }
    }
}

/// CLI-flag overrides applied on top of the file config, mirroring the
/// teacher's `CliOverrides` split (SPEC_FULL §10.3/§10.5).
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub bind: Option<String>,
    pub api_bind: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads from `path` if given, else `holedns.toml` in the current
    /// directory, else built-in defaults (never fatal by itself — absence
    /// of a config file is not an error).
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new("holedns.toml").exists() {
            Self::from_file("holedns.toml")?
        } else {
            Self::default()
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind {
            self.server.bind = bind;
        }
        if let Some(api_bind) = overrides.api_bind {
            self.server.api = api_bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Fatal-at-startup validation (§7, `ConfigError`).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "invalid bind address: {}",
                self.server.bind
            )));
        }
        if self.server.api.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "invalid api address: {}",
                self.server.api
            )));
        }
        if self.upstream.servers.is_empty() {
            return Err(ConfigError::Validation(
                "no upstream servers configured".to_string(),
            ));
        }
        for server in &self.upstream.servers {
            if server.parse::<std::net::SocketAddr>().is_err() {
                return Err(ConfigError::Validation(format!(
                    "invalid upstream address: {server}"
                )));
            }
        }
        if self.blocking.fail_if_zero_sources
            && self.blocking.sources.is_empty()
            && self.blocking.customblock.is_empty()
        {
            return Err(ConfigError::Validation(
                "fail_if_zero_sources is set but no blocklist sources are configured".to_string(),
            ));
        }
        Ok(())
    }
}
