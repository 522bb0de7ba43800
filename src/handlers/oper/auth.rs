use ircserv_proto::{Command, Message, MessageRef, Prefix, Response};
use tracing::{info, warn};

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};

/// Handler for OPER command.
///
/// `OPER name password`
///
/// Authenticates a user as an IRC operator.
pub struct OperHandler;

impl Handler for OperHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let (Some(name), Some(password)) = (msg.arg(0), msg.arg(1)) else {
            return Err(HandlerError::NeedMoreParams);
        };

        let nick = ctx.nick();
        if !ctx.matrix.config.oper_matches(name, password) {
            warn!(nick = %nick, oper = %name, "Failed OPER attempt");
            return Err(HandlerError::PasswdMismatch);
        }

        ctx.session_mut()?.modes.oper = true;
        info!(nick = %nick, oper = %name, "OPER granted");

        ctx.reply(Response::rpl_youreoper(&nick));
        let mode = Message::from(Command::MODE(nick.clone(), vec!["+o".to_string()]))
            .with_prefix(Prefix::Nickname(nick, String::new(), String::new()));
        ctx.send(mode);
        Ok(())
    }
}
