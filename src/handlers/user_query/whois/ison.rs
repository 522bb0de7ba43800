//! ISON command handler.

use ircserv_proto::{MessageRef, Response};

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};

/// Handler for ISON command.
///
/// `ISON <nick>{ <nick>}`: the subset currently online.
pub struct IsonHandler;

impl Handler for IsonHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        if msg.args().is_empty() {
            return Err(HandlerError::NeedMoreParams);
        }

        let online: Vec<&str> = msg
            .args()
            .iter()
            .flat_map(|arg| arg.split_whitespace())
            .filter_map(|nick| ctx.matrix.find_nick(nick))
            .filter_map(|id| ctx.matrix.session(id))
            .map(|s| s.nick_or_star())
            .collect();

        ctx.send_reply(Response::RPL_ISON, vec![online.join(" ")]);
        Ok(())
    }
}
