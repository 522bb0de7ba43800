//! JOIN command handler.

use ircserv_proto::{ChannelExt, Message, MessageRef};
use tracing::info;

use super::part::part_channel;
use crate::error::{HandlerError, HandlerResult};
use crate::handlers::helpers::{send_names, send_topic};
use crate::handlers::{Context, Handler};

const JOIN_ZERO_REASON: &str = "Leaving";

/// Handler for JOIN command.
///
/// `JOIN <chan>{,<chan>} [<key>{,<key>}]`, or `JOIN 0` to leave every
/// channel. Each channel is processed independently.
pub struct JoinHandler;

impl Handler for JoinHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let channels = msg
            .arg(0)
            .filter(|c| !c.is_empty())
            .ok_or(HandlerError::NeedMoreParams)?;

        if channels == "0" {
            return leave_all_channels(ctx);
        }

        let keys: Vec<&str> = msg.arg(1).map(|k| k.split(',').collect()).unwrap_or_default();

        for (i, name) in channels.split(',').enumerate() {
            if name.is_empty() {
                continue;
            }
            let key = keys.get(i).copied().filter(|k| !k.is_empty());
            if let Err(e) = join_channel(ctx, name, key) {
                ctx.send_error(&e, "JOIN");
            }
        }
        Ok(())
    }
}

fn join_channel(ctx: &mut Context<'_>, name: &str, key: Option<&str>) -> HandlerResult {
    if !name.is_channel_name() {
        return Err(HandlerError::BadChanMask(name.to_string()));
    }

    if let Some(channel) = ctx.matrix.channel(name) {
        if channel.is_member(ctx.conn) {
            return Ok(());
        }
        channel
            .can_join(ctx.conn, key)
            .map_err(|e| HandlerError::Channel(channel.name.clone(), e))?;
    }

    let prefix = ctx.user_prefix()?;
    let created = ctx.matrix.join_channel(ctx.conn, name);

    let Some(channel) = ctx.matrix.channel(name) else {
        return Err(HandlerError::Internal(format!("channel {name} vanished on join")));
    };
    let join = Message::join(channel.name.clone()).with_prefix(prefix);
    ctx.matrix.broadcast_to_channel(name, &join, None);

    send_topic(ctx, channel);
    send_names(ctx, name);

    info!(nick = %ctx.nick(), channel = %channel.name, created, "User joined channel");
    Ok(())
}

fn leave_all_channels(ctx: &mut Context<'_>) -> HandlerResult {
    let joined: Vec<String> = ctx
        .session()?
        .channels
        .iter()
        .filter_map(|key| ctx.matrix.channels.get(key))
        .map(|channel| channel.name.clone())
        .collect();
    for name in joined {
        part_channel(ctx, &name, JOIN_ZERO_REASON)?;
    }
    Ok(())
}
