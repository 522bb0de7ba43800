//! Error types for the IRC protocol library.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Errors raised while framing or parsing the byte stream of a connection.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Underlying transport failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The peer kept sending bytes without ever terminating the line.
    #[error("unterminated line of {actual} bytes exceeds the {limit} byte buffer")]
    MessageTooLong {
        /// Bytes buffered so far.
        actual: usize,
        /// Buffer limit that was crossed.
        limit: usize,
    },

    /// A complete line could not be parsed as an IRC message.
    #[error("invalid message {string:?}: {cause}")]
    InvalidMessage {
        /// The offending line.
        string: String,
        /// Why parsing failed.
        #[source]
        cause: MessageParseError,
    },
}

/// Reasons a single line is not a well-formed IRC message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageParseError {
    /// The line contained nothing but whitespace.
    #[error("empty message")]
    EmptyMessage,

    /// No command token (letters or three digits) at the expected position.
    #[error("invalid command at byte {position}")]
    InvalidCommand {
        /// Byte offset where the command was expected.
        position: usize,
    },
}
