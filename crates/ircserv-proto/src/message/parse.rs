//! `FromStr` for owned messages.

use std::str::FromStr;

use crate::command::Command;
use crate::error::ProtocolError;
use crate::prefix::Prefix;

use super::nom_parser::ParsedMessage;
use super::types::Message;

impl FromStr for Message {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Message, Self::Err> {
        let line = s.trim_end_matches(['\r', '\n']);
        let parsed = ParsedMessage::parse(line).map_err(|cause| ProtocolError::InvalidMessage {
            string: s.to_owned(),
            cause,
        })?;

        Ok(Message {
            prefix: parsed.prefix.map(Prefix::new_from_str),
            command: Command::new(parsed.command, parsed.params.to_vec()),
        })
    }
}
