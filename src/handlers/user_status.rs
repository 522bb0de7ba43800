//! AWAY command handler.

use ircserv_proto::{MessageRef, Response};

use crate::error::HandlerResult;
use crate::handlers::{Context, Handler};

/// Handler for AWAY command.
///
/// `AWAY :<message>` marks the user away; `AWAY` with no or empty text
/// clears the mark.
pub struct AwayHandler;

impl Handler for AwayHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let message = msg.arg(0).filter(|m| !m.is_empty()).map(str::to_string);
        let nick = ctx.nick();

        match message {
            Some(text) => {
                ctx.session_mut()?.away = Some(text);
                ctx.reply(Response::rpl_nowaway(&nick));
            }
            None => {
                ctx.session_mut()?.away = None;
                ctx.reply(Response::rpl_unaway(&nick));
            }
        }
        Ok(())
    }
}
