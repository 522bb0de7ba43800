//! WHOWAS command handler. No nickname history is kept.

use ircserv_proto::{MessageRef, Response};

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};

/// Handler for WHOWAS command.
pub struct WhowasHandler;

impl Handler for WhowasHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let target = msg
            .arg(0)
            .filter(|t| !t.is_empty())
            .ok_or(HandlerError::NoNicknameGiven)?;
        let nick = ctx.nick();
        ctx.reply(Response::err_wasnosuchnick(&nick, target));
        ctx.reply(Response::rpl_endofwhowas(&nick, target));
        Ok(())
    }
}
