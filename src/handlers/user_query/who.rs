//! WHO command handler.
//!
//! `WHO <channel>` lists every member; `WHO <nick>` describes one user.
//! Wildcard masks are not expanded.

use ircserv_proto::{ChannelExt, MessageRef, Response};

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};
use crate::state::{Channel, Session, USER_HOST};

/// Handler for WHO command.
pub struct WhoHandler;

impl Handler for WhoHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let mask = msg
            .arg(0)
            .filter(|m| !m.is_empty())
            .ok_or(HandlerError::NeedMoreParams)?;

        let mut rows = Vec::new();
        if mask.has_channel_prefix() {
            if let Some(channel) = ctx.matrix.channel(mask) {
                for id in channel.member_ids() {
                    if let Some(session) = ctx.matrix.session(id) {
                        rows.push(who_row(ctx, &channel.name, session, Some(channel)));
                    }
                }
            }
        } else if let Some(session) = ctx.matrix.find_nick(mask).and_then(|id| ctx.matrix.session(id)) {
            rows.push(who_row(ctx, "*", session, None));
        }

        for row in rows {
            ctx.send_reply(Response::RPL_WHOREPLY, row);
        }
        ctx.reply(Response::rpl_endofwho(&ctx.nick(), mask));
        Ok(())
    }
}

/// `<channel> <user> <host> <server> <nick> <H|G>[*][@] :0 <realname>`
fn who_row(ctx: &Context<'_>, channel_name: &str, session: &Session, channel: Option<&Channel>) -> Vec<String> {
    let mut flags = String::from(if session.away.is_some() { "G" } else { "H" });
    if session.is_oper() {
        flags.push('*');
    }
    if channel.is_some_and(|c| c.is_op(session.id)) {
        flags.push('@');
    }

    vec![
        channel_name.to_string(),
        session.username().to_string(),
        USER_HOST.to_string(),
        ctx.server_name().to_string(),
        session.nick_or_star().to_string(),
        flags,
        format!("0 {}", session.realname.as_deref().unwrap_or_default()),
    ]
}
