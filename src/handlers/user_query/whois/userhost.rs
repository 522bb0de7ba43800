//! USERHOST command handler.

use ircserv_proto::{MessageRef, Response};

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};
use crate::state::USER_HOST;

const MAX_TARGETS: usize = 5;

/// Handler for USERHOST command.
///
/// `USERHOST <nick>{ <nick>}`; replies `nick[*]=<+|->user@host` for each
/// online nickname, `*` marking IRC operators and `-` away users.
pub struct UserhostHandler;

impl Handler for UserhostHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        if msg.args().is_empty() {
            return Err(HandlerError::NeedMoreParams);
        }

        let entries: Vec<String> = msg
            .args()
            .iter()
            .flat_map(|arg| arg.split_whitespace())
            .take(MAX_TARGETS)
            .filter_map(|nick| ctx.matrix.find_nick(nick))
            .filter_map(|id| ctx.matrix.session(id))
            .map(|s| {
                format!(
                    "{}{}={}{}@{USER_HOST}",
                    s.nick_or_star(),
                    if s.is_oper() { "*" } else { "" },
                    if s.away.is_some() { '-' } else { '+' },
                    s.username(),
                )
            })
            .collect();

        ctx.send_reply(Response::RPL_USERHOST, vec![entries.join(" ")]);
        Ok(())
    }
}
