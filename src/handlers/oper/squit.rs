//! SQUIT command handler.
//!
//! Usage: `SQUIT <server> :<comment>`
//! Requires: IRC operator privileges
//!
//! No links exist, so the only server that can be named is this one, and it
//! cannot be split from itself.

use ircserv_proto::{MessageRef, irc_eq};

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};

/// Handler for the SQUIT command.
pub struct SquitHandler;

impl Handler for SquitHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        ctx.require_oper()?;

        let target = msg
            .arg(0)
            .filter(|t| !t.is_empty())
            .ok_or(HandlerError::NeedMoreParams)?;
        if !irc_eq(target, ctx.server_name()) {
            return Err(HandlerError::NoSuchServer(target.to_string()));
        }

        ctx.notice("Cannot SQUIT this server (single-server mode)");
        Ok(())
    }
}
