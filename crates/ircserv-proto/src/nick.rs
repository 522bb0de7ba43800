//! Nickname validation utilities.
//!
//! # Reference
//! - RFC 1459 Section 2.3.1: Message format (nickname definition)

/// Extension trait for checking if a string is a valid IRC nickname.
pub trait NickExt {
    /// Check if this string is a valid nickname for this server.
    ///
    /// Valid nicknames:
    /// - Length 1 to 9 characters
    /// - First character: ASCII letter
    /// - Subsequent characters: letter, digit, or one of `` [ ] \ ` _ ^ { | } - ``
    ///
    /// # Examples
    ///
    /// ```
    /// use ircserv_proto::NickExt;
    ///
    /// assert!("Alice".is_valid_nick());
    /// assert!("bob[away]".is_valid_nick());
    ///
    /// assert!(!"9lives".is_valid_nick());     // digit first
    /// assert!(!"".is_valid_nick());           // empty
    /// assert!(!"waytoolong".is_valid_nick()); // ten characters
    /// ```
    fn is_valid_nick(&self) -> bool;

    /// Same rule with a custom maximum length.
    fn is_valid_nick_len(&self, max_len: usize) -> bool;
}

/// Maximum nickname length per RFC 1459.
pub const NICK_MAX_LEN: usize = 9;

/// Characters allowed after the first position besides letters and digits.
#[inline]
fn is_special(c: char) -> bool {
    matches!(
        c,
        '[' | ']' | '\\' | '`' | '_' | '^' | '{' | '|' | '}' | '-'
    )
}

impl NickExt for &str {
    fn is_valid_nick(&self) -> bool {
        self.is_valid_nick_len(NICK_MAX_LEN)
    }

    fn is_valid_nick_len(&self, max_len: usize) -> bool {
        if self.is_empty() || self.len() > max_len {
            return false;
        }

        let mut chars = self.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() => {}
            _ => return false,
        }

        chars.all(|c| c.is_ascii_alphanumeric() || is_special(c))
    }
}

impl NickExt for String {
    fn is_valid_nick(&self) -> bool {
        self.as_str().is_valid_nick()
    }

    fn is_valid_nick_len(&self, max_len: usize) -> bool {
        self.as_str().is_valid_nick_len(max_len)
    }
}
