use ircserv_proto::MessageRef;
use tracing::info;

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};
use crate::state::Departure;

/// Handler for KILL command.
///
/// `KILL nickname :reason`
///
/// Disconnects a user. Requires operator privileges.
pub struct KillHandler;

impl Handler for KillHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        ctx.require_oper()?;

        let target = msg
            .arg(0)
            .filter(|t| !t.is_empty())
            .ok_or(HandlerError::NeedMoreParams)?;
        let reason = msg
            .arg(1)
            .filter(|r| !r.is_empty())
            .unwrap_or("No reason given");

        if target.contains('.') {
            return Err(HandlerError::CantKillServer);
        }
        let victim = ctx
            .matrix
            .find_nick(target)
            .ok_or_else(|| HandlerError::NoSuchNick(target.to_string()))?;

        let killer_prefix = ctx.user_prefix()?;
        info!(killer = %ctx.nick(), target = %target, reason = %reason, "KILL command executed");

        ctx.matrix.disconnect(
            victim,
            Departure::Killed {
                killer: ctx.conn,
                killer_prefix,
                reason: reason.to_string(),
            },
        );
        Ok(())
    }
}
