//! CONNECT command handler.
//!
//! Usage: `CONNECT <target server> <port> [<remote server>]`
//! Requires: IRC operator privileges
//!
//! Server linking is not supported; the command is validated and refused.

use ircserv_proto::MessageRef;
use tracing::info;

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};

/// Handler for the CONNECT command.
pub struct ConnectHandler;

impl Handler for ConnectHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        ctx.require_oper()?;

        let (Some(target), Some(port)) = (msg.arg(0), msg.arg(1)) else {
            return Err(HandlerError::NeedMoreParams);
        };

        info!(oper = %ctx.nick(), target = %target, port = %port, "CONNECT refused");
        ctx.notice("CONNECT not available in single-server mode");
        Ok(())
    }
}
