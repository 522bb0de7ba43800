//! MODE command handler.
//!
//! Channel targets go to [`channel`], nickname targets to [`user`].

mod channel;
mod user;

use ircserv_proto::{ChannelExt, MessageRef};

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};

/// Handler for MODE command.
pub struct ModeHandler;

impl Handler for ModeHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let target = msg
            .arg(0)
            .filter(|t| !t.is_empty())
            .ok_or(HandlerError::NeedMoreParams)?;

        if target.has_channel_prefix() {
            let mode_args = msg.args().get(2..).unwrap_or_default();
            channel::handle_channel_mode(ctx, target, msg.arg(1), mode_args)
        } else {
            user::handle_user_mode(ctx, target, msg.arg(1))
        }
    }
}
