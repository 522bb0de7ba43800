//! Line-based codec for tokio.
//!
//! Reads `\n`-terminated lines (a preceding `\r` is stripped) and writes
//! [`Message`]s in wire form.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};
use tracing::debug;

use crate::error;
use crate::message::Message;

/// Default line limit in bytes, CRLF included.
pub const DEFAULT_MAX_LEN: usize = 512;

/// How many limits' worth of unterminated input is buffered before the
/// connection is considered hostile.
const PARTIAL_LINE_FACTOR: usize = 8;

/// Line-based codec that handles newline-terminated messages.
///
/// Complete lines longer than the limit are truncated, not rejected. Lines
/// containing NUL are dropped. Invalid UTF-8 is replaced, never fatal.
pub struct LineCodec {
    /// Index of next byte to check for newline
    next_index: usize,
    max_len: usize,
}

impl LineCodec {
    /// A codec with the standard 512-byte limit.
    pub fn new() -> Self {
        Self::with_max_len(DEFAULT_MAX_LEN)
    }

    /// A codec with a custom line limit. Limits below 3 are raised to 3 so
    /// that at least one content byte survives truncation.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            next_index: 0,
            max_len: max_len.max(3),
        }
    }

    fn content_limit(&self) -> usize {
        self.max_len - 2
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for LineCodec {
    type Item = String;
    type Error = error::ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> error::Result<Option<String>> {
        loop {
            let Some(offset) = src[self.next_index..].iter().position(|b| *b == b'\n') else {
                self.next_index = src.len();

                let limit = self.max_len * PARTIAL_LINE_FACTOR;
                if src.len() > limit {
                    return Err(error::ProtocolError::MessageTooLong {
                        actual: src.len(),
                        limit,
                    });
                }
                return Ok(None);
            };

            let line = src.split_to(self.next_index + offset + 1);
            self.next_index = 0;

            let mut content = &line[..line.len() - 1];
            if let Some(stripped) = content.strip_suffix(b"\r") {
                content = stripped;
            }

            if content.contains(&0) {
                debug!(len = content.len(), "Dropping line containing NUL");
                continue;
            }

            if content.len() > self.content_limit() {
                debug!(
                    len = content.len(),
                    limit = self.content_limit(),
                    "Truncating over-long line"
                );
                content = &content[..self.content_limit()];
            }

            return Ok(Some(String::from_utf8_lossy(content).into_owned()));
        }
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> error::Result<Option<String>> {
        match self.decode(buf)? {
            Some(line) => Ok(Some(line)),
            None => {
                // An unterminated tail at EOF is never dispatched.
                buf.clear();
                self.next_index = 0;
                Ok(None)
            }
        }
    }
}

impl Encoder<Message> for LineCodec {
    type Error = error::ProtocolError;

    fn encode(&mut self, msg: Message, dst: &mut BytesMut) -> error::Result<()> {
        dst.extend_from_slice(msg.to_string().as_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_crlf_and_lf() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::from("PING :test\r\nNICK bob\n");

        assert_eq!(codec.decode(&mut buf).unwrap(), Some("PING :test".to_string()));
        assert_eq!(codec.decode(&mut buf).unwrap(), Some("NICK bob".to_string()));
        assert_eq!(codec.decode(&mut buf).unwrap(), None);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_decode_partial_line() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::from("PING :");
        assert_eq!(codec.decode(&mut buf).unwrap(), None);

        buf.extend_from_slice(b"abc\r\n");
        assert_eq!(codec.decode(&mut buf).unwrap(), Some("PING :abc".to_string()));
    }

    #[test]
    fn test_empty_line_yielded() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::from("\r\n");
        assert_eq!(codec.decode(&mut buf).unwrap(), Some(String::new()));
    }

    #[test]
    fn test_nul_line_dropped() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::from(&b"NICK a\0b\r\nNICK ok\r\n"[..]);
        assert_eq!(codec.decode(&mut buf).unwrap(), Some("NICK ok".to_string()));
    }

    #[test]
    fn test_long_line_truncated() {
        let mut codec = LineCodec::with_max_len(10);
        let mut buf = BytesMut::from("this is way too long\r\n");
        assert_eq!(codec.decode(&mut buf).unwrap(), Some("this is ".to_string()));
    }

    #[test]
    fn test_unterminated_flood_rejected() {
        let mut codec = LineCodec::with_max_len(10);
        let mut buf = BytesMut::from(&[b'a'; 81][..]);
        assert!(matches!(
            codec.decode(&mut buf),
            Err(error::ProtocolError::MessageTooLong { actual: 81, limit: 80 })
        ));
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::from(&b"PRIVMSG a :\xff\r\n"[..]);
        assert_eq!(
            codec.decode(&mut buf).unwrap(),
            Some("PRIVMSG a :\u{FFFD}".to_string())
        );
    }

    #[test]
    fn test_eof_discards_partial() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::from("QUIT");
        assert_eq!(codec.decode_eof(&mut buf).unwrap(), None);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_encode() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::new();
        codec
            .encode(Message::pong_with_token("irc.server.local", "tok"), &mut buf)
            .unwrap();
        assert_eq!(&buf[..], b"PONG irc.server.local :tok\r\n");
    }
}
