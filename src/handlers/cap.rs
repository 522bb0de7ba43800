//! CAP negotiation.
//!
//! No capabilities are offered: LS/LIST return an empty set, every REQ is
//! refused and END is accepted silently.

use ircserv_proto::{Command, Message, MessageRef};

use crate::error::HandlerResult;
use crate::handlers::{Context, Handler};

/// Handler for CAP command.
pub struct CapHandler;

impl Handler for CapHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let Some(sub) = msg.arg(0) else {
            return Ok(());
        };

        let reply = |args: Vec<String>| Message::from(Command::Raw("CAP".to_string(), args));
        match sub.to_ascii_uppercase().as_str() {
            "LS" | "LIST" => ctx.reply(reply(vec!["*".into(), "LS".into(), String::new()])),
            "REQ" => {
                let requested = msg.arg(1).unwrap_or_default().to_string();
                ctx.reply(reply(vec!["*".into(), "NAK".into(), requested]));
            }
            _ => {}
        }
        Ok(())
    }
}
