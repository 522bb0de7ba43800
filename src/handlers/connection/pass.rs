//! PASS command handler.

use ircserv_proto::MessageRef;
use tracing::debug;

use super::welcome::try_complete_registration;
use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};

/// Handler for PASS command.
///
/// `PASS <password>`; only valid before registration completes.
pub struct PassHandler;

impl Handler for PassHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        if ctx.session()?.is_registered() {
            return Err(HandlerError::AlreadyRegistered);
        }
        let supplied = msg.arg(0).ok_or(HandlerError::NeedMoreParams)?;

        let matches = ctx
            .matrix
            .password
            .as_deref()
            .is_none_or(|expected| expected == supplied);

        let session = ctx.session_mut()?;
        session.touch_registration();
        if !matches {
            debug!(conn = %session.id, "Password mismatch");
            return Err(HandlerError::PasswdMismatch);
        }
        session.password_ok = true;

        try_complete_registration(ctx)
    }
}
