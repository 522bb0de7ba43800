//! Logging setup and span constructors.

use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber. `RUST_LOG` selects the filter,
/// defaulting to `info`.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();
}

/// Standardized span constructors for IRC observability.
pub mod spans {
    use std::net::IpAddr;

    use tracing::{Span, debug_span, info_span};

    use crate::state::ConnId;

    /// Create a span for a client connection.
    pub fn connection(conn: ConnId, ip: IpAddr) -> Span {
        info_span!("connection", conn = %conn, ip = %ip)
    }

    /// Create a span for a command execution.
    pub fn command(name: &str, conn: ConnId, nick: &str) -> Span {
        debug_span!("irc.command", command = %name, conn = %conn, nick = %nick)
    }
}
