//! USER command handler.

use ircserv_proto::MessageRef;

use super::welcome::try_complete_registration;
use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};

/// Handler for USER command.
///
/// `USER <username> <mode> <unused> :<realname>`. Username and realname
/// are set once.
pub struct UserHandler;

impl Handler for UserHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let session = ctx.session()?;
        if session.is_registered() || session.user.is_some() {
            return Err(HandlerError::AlreadyRegistered);
        }

        let (Some(username), Some(realname)) = (msg.arg(0), msg.arg(3)) else {
            return Err(HandlerError::NeedMoreParams);
        };
        if username.is_empty() {
            return Err(HandlerError::NeedMoreParams);
        }

        let session = ctx.session_mut()?;
        session.user = Some(username.to_string());
        session.realname = Some(realname.to_string());
        session.touch_registration();

        try_complete_registration(ctx)
    }
}
