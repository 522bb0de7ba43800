//! Configuration loading and management.
//!
//! - [`args`]: the `<port> <password>` command line
//! - [`types`]: the optional TOML file (`server.conf`)
//! - [`limits`]: per-connection framing and queue limits
//! - [`oper`]: operator credential blocks

mod args;
mod limits;
mod oper;
mod types;

pub use args::{Args, USAGE, UsageError};
pub use limits::LimitsConfig;
pub use oper::OperBlock;
pub use types::{AdminConfig, Config, ConfigError, MotdConfig, ServerConfig};

use std::path::PathBuf;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "IRCSERV_CONFIG";

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "server.conf";

/// Resolve the config file path: `$IRCSERV_CONFIG`, else `./server.conf`.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}
