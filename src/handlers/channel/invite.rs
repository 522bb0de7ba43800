//! INVITE command handler.

use ircserv_proto::{Command, Message, MessageRef, Response};
use tracing::info;

use crate::error::{ChannelError, HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};

/// Handler for INVITE command.
///
/// `INVITE <nick> <channel>`. The invite lets the target past +i once.
pub struct InviteHandler;

impl Handler for InviteHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let (Some(target), Some(name)) = (msg.arg(0), msg.arg(1)) else {
            return Err(HandlerError::NeedMoreParams);
        };

        let target_id = ctx
            .matrix
            .find_nick(target)
            .ok_or_else(|| HandlerError::NoSuchNick(target.to_string()))?;
        let channel = ctx
            .matrix
            .channel(name)
            .ok_or_else(|| HandlerError::NoSuchChannel(name.to_string()))?;
        let chan_name = channel.name.clone();

        if !channel.is_member(ctx.conn) {
            return Err(HandlerError::Channel(chan_name, ChannelError::NotOnChannel));
        }
        if channel.modes.invite_only && !channel.is_op(ctx.conn) {
            return Err(HandlerError::Channel(
                chan_name,
                ChannelError::ChanOpPrivsNeeded,
            ));
        }
        if channel.is_member(target_id) {
            return Err(HandlerError::Channel(
                chan_name,
                ChannelError::UserOnChannel(target.to_string()),
            ));
        }

        if let Some(channel) = ctx.matrix.channel_mut(name) {
            channel.invite(target_id);
        }

        let Some(target_session) = ctx.matrix.session(target_id) else {
            return Err(HandlerError::NoSuchNick(target.to_string()));
        };
        let target_nick = target_session.nick_or_star().to_string();
        let away = target_session.away.clone();

        let nick = ctx.nick();
        ctx.reply(Response::rpl_inviting(&nick, &target_nick, &chan_name));
        if let Some(away) = away {
            ctx.reply(Response::rpl_away(&nick, &target_nick, &away));
        }

        let invite = Message::from(Command::INVITE(target_nick.clone(), chan_name.clone()))
            .with_prefix(ctx.user_prefix()?);
        ctx.matrix.send_to(target_id, invite);

        info!(nick = %nick, target = %target_nick, channel = %chan_name, "User invited");
        Ok(())
    }
}
