//! Channel name utilities.
//!
//! # Reference
//! - RFC 2812 Section 1.3: Channel names

/// Maximum channel name length, prefix included.
pub const CHANNEL_MAX_LEN: usize = 50;

/// Extension trait for checking if a string is a valid IRC channel name.
pub trait ChannelExt {
    /// Check if this string is a valid channel name for this server.
    ///
    /// Valid channel names:
    /// - Start with `#` or `&`
    /// - Have at least one character after the prefix
    /// - Do not contain space, comma, BEL (0x07), NUL or other control characters
    /// - Are at most 50 characters long
    fn is_channel_name(&self) -> bool;

    /// True when the string merely *looks* like a channel target (has a
    /// channel prefix), regardless of the rest of its syntax.
    fn has_channel_prefix(&self) -> bool;
}

impl ChannelExt for &str {
    fn is_channel_name(&self) -> bool {
        let mut chars = self.chars();

        match chars.next() {
            Some('#' | '&') => {}
            _ => return false,
        }

        let len = self.chars().count();
        if len < 2 || len > CHANNEL_MAX_LEN {
            return false;
        }

        chars.all(|c| c != ' ' && c != ',' && !c.is_control())
    }

    fn has_channel_prefix(&self) -> bool {
        self.starts_with('#') || self.starts_with('&')
    }
}

impl ChannelExt for String {
    fn is_channel_name(&self) -> bool {
        self.as_str().is_channel_name()
    }

    fn has_channel_prefix(&self) -> bool {
        self.as_str().has_channel_prefix()
    }
}
