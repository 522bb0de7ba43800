//! # ircserv-proto
//!
//! Wire-level building blocks for the `ircserv` daemon: CRLF line framing,
//! message parsing, typed commands, numeric replies and the RFC 1459
//! nickname/channel rules.
//!
//! ## Parsing
//!
//! ```rust
//! use ircserv_proto::MessageRef;
//!
//! let msg = MessageRef::parse("privmsg #rust :Hello, world!").unwrap();
//! assert_eq!(msg.command_name(), "privmsg");
//! assert_eq!(msg.arg(0), Some("#rust"));
//! assert_eq!(msg.arg(1), Some("Hello, world!"));
//! ```
//!
//! ## Building replies
//!
//! ```rust
//! use ircserv_proto::{Prefix, Response};
//!
//! let reply = Response::err_nosuchnick("alice", "bob")
//!     .with_prefix(Prefix::ServerName("irc.server.local".into()));
//! assert_eq!(
//!     reply.to_string(),
//!     ":irc.server.local 401 alice bob :No such nick/channel\r\n"
//! );
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod casemap;
pub mod chan;
pub mod command;
pub mod error;
#[cfg(feature = "tokio")]
pub mod line;
pub mod message;
pub mod nick;
pub mod prefix;
pub mod response;

pub use self::casemap::{irc_eq, irc_lower_char, irc_to_lower};
pub use self::chan::ChannelExt;
pub use self::command::Command;
pub use self::error::{MessageParseError, ProtocolError};
#[cfg(feature = "tokio")]
pub use self::line::LineCodec;
pub use self::message::{Message, MessageRef};
pub use self::nick::NickExt;
pub use self::prefix::Prefix;
pub use self::response::Response;
