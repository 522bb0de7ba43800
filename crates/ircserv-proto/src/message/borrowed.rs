//! Zero-copy borrowed message view.
//!
//! `MessageRef<'a>` borrows every field from the input line, so the
//! dispatcher can inspect a command without allocating.
//!
//! # Example
//!
//! ```
//! use ircserv_proto::MessageRef;
//!
//! let msg = MessageRef::parse(":nick!user@host PRIVMSG #channel :Hello!").unwrap();
//! assert_eq!(msg.command_name(), "PRIVMSG");
//! assert_eq!(msg.source_nickname(), Some("nick"));
//! assert_eq!(msg.args(), &["#channel", "Hello!"]);
//! ```

use std::fmt::{self, Display, Formatter};

use smallvec::SmallVec;

use crate::command::Command;
use crate::error::MessageParseError;
use crate::message::Message;
use crate::prefix::Prefix;

use super::nom_parser::{ParsedMessage, MAX_PARAMS};

/// A borrowed IRC message that references the original input line.
#[derive(Clone, PartialEq, Debug)]
pub struct MessageRef<'a> {
    /// Raw prefix (without the leading `:`), if present.
    pub prefix: Option<&'a str>,
    /// The command token exactly as sent.
    pub command: &'a str,
    /// Parameters, trailing included.
    pub args: SmallVec<[&'a str; MAX_PARAMS]>,
}

impl<'a> MessageRef<'a> {
    /// Parse one line. A trailing CR/LF is tolerated and stripped.
    #[must_use = "parsing result should be handled"]
    pub fn parse(s: &'a str) -> Result<MessageRef<'a>, MessageParseError> {
        let trimmed = s.trim_end_matches(['\r', '\n']);
        let parsed = ParsedMessage::parse(trimmed)?;
        Ok(MessageRef {
            prefix: parsed.prefix,
            command: parsed.command,
            args: parsed.params,
        })
    }

    /// The command token, in the case the client used.
    #[inline]
    pub fn command_name(&self) -> &'a str {
        self.command
    }

    /// All parameters.
    #[inline]
    pub fn args(&self) -> &[&'a str] {
        &self.args
    }

    /// A single parameter by index.
    #[inline]
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).copied()
    }

    /// The prefix, if the client sent one.
    #[inline]
    pub fn prefix(&self) -> Option<&'a str> {
        self.prefix
    }

    /// Nickname part of the prefix.
    pub fn source_nickname(&self) -> Option<&'a str> {
        let prefix = self.prefix?;
        let end = prefix.find(['!', '@']).unwrap_or(prefix.len());
        Some(&prefix[..end])
    }

    /// Convert into an owned [`Message`].
    pub fn to_message(&self) -> Message {
        Message {
            prefix: self.prefix.map(Prefix::new_from_str),
            command: Command::new(self.command, self.args.to_vec()),
        }
    }
}

impl Display for MessageRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_message())
    }
}
