//! NICK command handler.

use ircserv_proto::{Message, MessageRef, NickExt};
use tracing::debug;

use super::welcome::try_complete_registration;
use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};

/// Handler for NICK command.
///
/// Before registration this records the nickname; afterwards it renames
/// the session and tells the user and every peer sharing a channel.
pub struct NickHandler;

impl Handler for NickHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let new_nick = msg
            .arg(0)
            .filter(|n| !n.is_empty())
            .ok_or(HandlerError::NoNicknameGiven)?;

        if !new_nick.is_valid_nick() {
            return Err(HandlerError::ErroneousNickname(new_nick.to_string()));
        }
        if !ctx.matrix.nick_available(new_nick, ctx.conn) {
            return Err(HandlerError::NicknameInUse(new_nick.to_string()));
        }

        let session = ctx.session()?;
        if session.nick.as_deref() == Some(new_nick) {
            return Ok(());
        }

        if !session.is_registered() {
            let session = ctx.session_mut()?;
            session.nick = Some(new_nick.to_string());
            session.touch_registration();
            debug!(conn = %session.id, nick = %new_nick, "Nick set");
            return try_complete_registration(ctx);
        }

        let old_prefix = session.prefix();
        let old_nick = session.nick_or_star().to_string();
        ctx.session_mut()?.nick = Some(new_nick.to_string());

        let notice = Message::nick(new_nick).with_prefix(old_prefix);
        ctx.send(notice.clone());
        for peer in ctx.matrix.peers_of(ctx.conn) {
            ctx.matrix.send_to(peer, notice.clone());
        }

        debug!(old = %old_nick, new = %new_nick, "Nick changed");
        Ok(())
    }
}
