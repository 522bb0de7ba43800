//! PING and PONG handlers.

use chrono::Utc;
use ircserv_proto::{Message, MessageRef};

use crate::error::HandlerResult;
use crate::handlers::{Context, Handler};

/// Handler for PING command.
///
/// Replies `PONG <server> :<token>`; the token defaults to the server name.
pub struct PingHandler;

impl Handler for PingHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let server = ctx.server_name().to_string();
        let token = msg.arg(0).unwrap_or(&server).to_string();
        ctx.reply(Message::pong_with_token(server, token));
        Ok(())
    }
}

/// Handler for PONG command.
///
/// Records activity; the timestamp is informational only.
pub struct PongHandler;

impl Handler for PongHandler {
    fn handle(&self, ctx: &mut Context<'_>, _msg: &MessageRef<'_>) -> HandlerResult {
        ctx.session_mut()?.last_activity = Utc::now();
        Ok(())
    }
}
