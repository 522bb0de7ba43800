//! Handlers for disabled commands (SUMMON, USERS).

use ircserv_proto::{MessageRef, Response};

use crate::error::HandlerResult;
use crate::handlers::{Context, Handler};

/// Handler for SUMMON command (disabled).
pub struct SummonHandler;

impl Handler for SummonHandler {
    fn handle(&self, ctx: &mut Context<'_>, _msg: &MessageRef<'_>) -> HandlerResult {
        ctx.reply(Response::err_summondisabled(&ctx.nick()));
        Ok(())
    }
}

/// Handler for USERS command (disabled).
pub struct UsersHandler;

impl Handler for UsersHandler {
    fn handle(&self, ctx: &mut Context<'_>, _msg: &MessageRef<'_>) -> HandlerResult {
        ctx.reply(Response::err_usersdisabled(&ctx.nick()));
        Ok(())
    }
}
