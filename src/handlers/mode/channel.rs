//! Channel mode query and application.
//!
//! Letters apply left to right under a running sign. Each letter succeeds
//! or fails on its own; the applied subset is broadcast as one MODE line.

use ircserv_proto::{Command, Message, Response};
use tracing::info;

use crate::error::{ChannelError, HandlerError, HandlerResult};
use crate::handlers::Context;
use crate::state::ModeChangeBuilder;

pub(super) fn handle_channel_mode(
    ctx: &mut Context<'_>,
    target: &str,
    modestring: Option<&str>,
    mode_args: &[&str],
) -> HandlerResult {
    let channel = ctx
        .matrix
        .channel(target)
        .ok_or_else(|| HandlerError::NoSuchChannel(target.to_string()))?;
    let chan_name = channel.name.clone();

    let Some(modestring) = modestring else {
        let (modes, params) = channel.mode_string(channel.is_member(ctx.conn));
        let mut reply = vec![chan_name, modes];
        reply.extend(params);
        ctx.send_reply(Response::RPL_CHANNELMODEIS, reply);
        return Ok(());
    };

    if !channel.is_member(ctx.conn) {
        return Err(HandlerError::Channel(chan_name, ChannelError::NotOnChannel));
    }
    if !channel.is_op(ctx.conn) {
        return Err(HandlerError::Channel(
            chan_name,
            ChannelError::ChanOpPrivsNeeded,
        ));
    }

    let mut args = mode_args.iter().copied();
    let mut adding = true;
    let mut applied = ModeChangeBuilder::new();

    for letter in modestring.chars() {
        let result = match letter {
            '+' => {
                adding = true;
                Ok(())
            }
            '-' => {
                adding = false;
                Ok(())
            }
            'i' | 't' => {
                toggle_flag(ctx, target, letter, adding, &mut applied);
                Ok(())
            }
            'k' => apply_key(ctx, target, adding, &mut args, &mut applied),
            'l' => apply_limit(ctx, target, adding, &mut args, &mut applied),
            'o' => apply_op(ctx, target, &chan_name, adding, &mut args, &mut applied),
            // Always in effect: only members may speak.
            'n' => Ok(()),
            other => {
                let nick = ctx.nick();
                ctx.reply(Response::err_unknownmode(&nick, &other.to_string()));
                Ok(())
            }
        };
        if let Err(e) = result {
            ctx.send_error(&e, "MODE");
        }
    }

    if let Some(params) = applied.build() {
        info!(nick = %ctx.nick(), channel = %chan_name, modes = %params.join(" "), "Channel modes changed");
        let notice =
            Message::from(Command::MODE(chan_name, params)).with_prefix(ctx.user_prefix()?);
        ctx.matrix.broadcast_to_channel(target, &notice, None);
    }
    Ok(())
}

fn toggle_flag(
    ctx: &mut Context<'_>,
    target: &str,
    letter: char,
    adding: bool,
    applied: &mut ModeChangeBuilder,
) {
    let Some(channel) = ctx.matrix.channel_mut(target) else {
        return;
    };
    let flag = if letter == 'i' {
        &mut channel.modes.invite_only
    } else {
        &mut channel.modes.topic_locked
    };
    if *flag != adding {
        *flag = adding;
        applied.push(adding, letter, None);
    }
}

fn apply_key<'m>(
    ctx: &mut Context<'_>,
    target: &str,
    adding: bool,
    args: &mut impl Iterator<Item = &'m str>,
    applied: &mut ModeChangeBuilder,
) -> HandlerResult {
    let key = if adding {
        let key = args
            .next()
            .filter(|k| !k.is_empty() && !k.contains(','))
            .ok_or(HandlerError::NeedMoreParams)?;
        Some(key.to_string())
    } else {
        None
    };
    let Some(channel) = ctx.matrix.channel_mut(target) else {
        return Ok(());
    };
    if channel.modes.key == key {
        return Ok(());
    }
    channel.modes.key.clone_from(&key);
    applied.push(adding, 'k', key);
    Ok(())
}

fn apply_limit<'m>(
    ctx: &mut Context<'_>,
    target: &str,
    adding: bool,
    args: &mut impl Iterator<Item = &'m str>,
    applied: &mut ModeChangeBuilder,
) -> HandlerResult {
    let limit = if adding {
        let limit = args
            .next()
            .and_then(|l| l.parse::<usize>().ok())
            .filter(|l| *l > 0)
            .ok_or(HandlerError::NeedMoreParams)?;
        Some(limit)
    } else {
        None
    };
    let Some(channel) = ctx.matrix.channel_mut(target) else {
        return Ok(());
    };
    if channel.modes.limit == limit {
        return Ok(());
    }
    channel.modes.limit = limit;
    applied.push(adding, 'l', limit.map(|l| l.to_string()));
    Ok(())
}

fn apply_op<'m>(
    ctx: &mut Context<'_>,
    target: &str,
    chan_name: &str,
    adding: bool,
    args: &mut impl Iterator<Item = &'m str>,
    applied: &mut ModeChangeBuilder,
) -> HandlerResult {
    let nick = args.next().ok_or(HandlerError::NeedMoreParams)?;
    let member = ctx
        .matrix
        .find_nick(nick)
        .ok_or_else(|| HandlerError::NoSuchNick(nick.to_string()))?;
    let member_nick = ctx
        .matrix
        .session(member)
        .map_or_else(|| nick.to_string(), |s| s.nick_or_star().to_string());

    let Some(channel) = ctx.matrix.channel_mut(target) else {
        return Ok(());
    };
    let changed = channel.set_op(member, adding).map_err(|_| {
        HandlerError::Channel(
            chan_name.to_string(),
            ChannelError::UserNotInChannel(nick.to_string()),
        )
    })?;
    if changed {
        applied.push(adding, 'o', Some(member_nick));
    }
    Ok(())
}
