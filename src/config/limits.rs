//! Per-connection limits.

use serde::Deserialize;

/// Framing and queueing limits applied to every client connection.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Longest accepted line in bytes, CRLF included (default: 512).
    /// Longer lines are truncated.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,
    /// Outbound frames buffered per connection before new frames are
    /// dropped (default: 512).
    #[serde(default = "default_outbound_queue")]
    pub outbound_queue: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
            outbound_queue: default_outbound_queue(),
        }
    }
}

fn default_max_line_length() -> usize {
    512
}

fn default_outbound_queue() -> usize {
    512
}
