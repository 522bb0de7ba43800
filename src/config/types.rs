//! Core configuration types and loading.

use serde::Deserialize;
use std::io;
use std::path::Path;
use thiserror::Error;

use super::limits::LimitsConfig;
use super::oper::OperBlock;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Server configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server identity and listener address.
    #[serde(default)]
    pub server: ServerConfig,
    /// ADMIN replies.
    #[serde(default)]
    pub admin: AdminConfig,
    /// Message of the Day.
    #[serde(default)]
    pub motd: MotdConfig,
    /// Per-connection limits.
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Operator blocks.
    #[serde(default)]
    pub oper: Vec<OperBlock>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            other => other,
        }
    }

    /// Check OPER credentials against the configured blocks, or the
    /// built-in `admin` block when none are configured.
    pub fn oper_matches(&self, name: &str, password: &str) -> bool {
        if self.oper.is_empty() {
            let builtin = OperBlock::builtin();
            return builtin.name == name && builtin.verify_password(password);
        }
        self.oper
            .iter()
            .any(|block| block.name == name && block.verify_password(password))
    }
}

/// Server identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server name used as the prefix of every numeric reply.
    #[serde(default = "default_server_name")]
    pub name: String,
    /// Free-form description (LINKS, INFO).
    #[serde(default = "default_description")]
    pub description: String,
    /// Address the listener binds to.
    #[serde(default = "default_host")]
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            description: default_description(),
            host: default_host(),
        }
    }
}

fn default_server_name() -> String {
    "irc.server.local".to_string()
}

fn default_description() -> String {
    "ircserv single-server IRC daemon".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// ADMIN reply contents.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// RPL_ADMINLOC1 text.
    #[serde(default = "default_admin_location")]
    pub location: String,
    /// RPL_ADMINLOC2 text.
    #[serde(default)]
    pub organization: String,
    /// RPL_ADMINEMAIL text.
    #[serde(default = "default_admin_email")]
    pub email: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            location: default_admin_location(),
            organization: String::new(),
            email: default_admin_email(),
        }
    }
}

fn default_admin_location() -> String {
    "Localhost".to_string()
}

fn default_admin_email() -> String {
    "admin@localhost".to_string()
}

/// Message of the Day configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MotdConfig {
    /// MOTD lines; empty means no MOTD (ERR_NOMOTD).
    #[serde(default)]
    pub lines: Vec<String>,
}
