use ircserv_proto::{Command, Message, MessageRef};

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};

/// Handler for WALLOPS command.
///
/// `WALLOPS :message`
///
/// Relays the message to every IRC operator, the sender included.
pub struct WallopsHandler;

impl Handler for WallopsHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let text = msg
            .arg(0)
            .filter(|t| !t.is_empty())
            .ok_or(HandlerError::NeedMoreParams)?;
        ctx.require_oper()?;

        let wallops =
            Message::from(Command::WALLOPS(text.to_string())).with_prefix(ctx.user_prefix()?);
        for session in ctx.matrix.sessions.values().filter(|s| s.is_oper()) {
            session.send(wallops.clone());
        }
        Ok(())
    }
}
