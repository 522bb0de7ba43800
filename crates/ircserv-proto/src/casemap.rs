//! IRC case-mapping functions.
//!
//! IRC compares nicknames and channel names case-insensitively, with a few
//! punctuation characters treated as the "lowercase" of others. This is the
//! `rfc1459` mapping.

/// Convert a single character to IRC lowercase using RFC 1459 case mapping.
///
/// In addition to ASCII lowercase conversion, this maps:
/// - `[` → `{`
/// - `]` → `}`
/// - `\` → `|`
/// - `~` → `^`
#[inline]
pub const fn irc_lower_char(c: char) -> char {
    match c {
        '[' => '{',
        ']' => '}',
        '\\' => '|',
        '~' => '^',
        'A'..='Z' => (c as u8 + 32) as char,
        _ => c,
    }
}

/// Convert a string to IRC lowercase. Used as the key of every
/// case-insensitive lookup table in the daemon.
pub fn irc_to_lower(s: &str) -> String {
    s.chars().map(irc_lower_char).collect()
}

/// Compare two strings using IRC case-insensitive comparison.
pub fn irc_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.chars()
        .zip(b.chars())
        .all(|(ca, cb)| irc_lower_char(ca) == irc_lower_char(cb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irc_lower_char() {
        assert_eq!(irc_lower_char('A'), 'a');
        assert_eq!(irc_lower_char('Z'), 'z');

        assert_eq!(irc_lower_char('['), '{');
        assert_eq!(irc_lower_char(']'), '}');
        assert_eq!(irc_lower_char('\\'), '|');
        assert_eq!(irc_lower_char('~'), '^');

        assert_eq!(irc_lower_char('a'), 'a');
        assert_eq!(irc_lower_char('0'), '0');
        assert_eq!(irc_lower_char('#'), '#');
    }

    #[test]
    fn test_irc_to_lower() {
        assert_eq!(irc_to_lower("Alice"), "alice");
        assert_eq!(irc_to_lower("#Test[1]"), "#test{1}");
        assert_eq!(irc_to_lower("Bob\\Away"), "bob|away");
    }

    #[test]
    fn test_irc_eq() {
        assert!(irc_eq("Bob", "bob"));
        assert!(irc_eq("BOB", "bOb"));
        assert!(irc_eq("#chan[1]", "#CHAN{1}"));

        assert!(!irc_eq("bob", "rob"));
        assert!(!irc_eq("bob", "bobby"));
    }
}
