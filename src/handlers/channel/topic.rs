//! TOPIC command handler.

use chrono::Utc;
use ircserv_proto::{Command, Message, MessageRef};
use tracing::info;

use crate::error::{ChannelError, HandlerError, HandlerResult};
use crate::handlers::helpers::send_topic;
use crate::handlers::{Context, Handler};
use crate::state::Topic;

/// Handler for TOPIC command.
///
/// `TOPIC <channel>` queries; `TOPIC <channel> :<text>` sets (an empty text
/// clears). Setting requires membership, and operator status under +t.
pub struct TopicHandler;

impl Handler for TopicHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let name = msg.arg(0).ok_or(HandlerError::NeedMoreParams)?;
        let channel = ctx
            .matrix
            .channel(name)
            .ok_or_else(|| HandlerError::NoSuchChannel(name.to_string()))?;

        let Some(text) = msg.arg(1) else {
            send_topic(ctx, channel);
            return Ok(());
        };

        let chan_name = channel.name.clone();
        if !channel.is_member(ctx.conn) {
            return Err(HandlerError::Channel(chan_name, ChannelError::NotOnChannel));
        }
        if channel.modes.topic_locked && !channel.is_op(ctx.conn) {
            return Err(HandlerError::Channel(
                chan_name,
                ChannelError::ChanOpPrivsNeeded,
            ));
        }

        let nick = ctx.nick();
        let prefix = ctx.user_prefix()?;
        if let Some(channel) = ctx.matrix.channel_mut(name) {
            channel.topic = (!text.is_empty()).then(|| Topic {
                text: text.to_string(),
                set_by: nick.clone(),
                set_at: Utc::now().timestamp(),
            });
        }

        let notice = Message::from(Command::TOPIC(chan_name.clone(), Some(text.to_string())))
            .with_prefix(prefix);
        ctx.matrix.broadcast_to_channel(name, &notice, None);

        info!(nick = %nick, channel = %chan_name, "Topic changed");
        Ok(())
    }
}
