//! WHOIS command handler.

use ircserv_proto::{MessageRef, Response};

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};
use crate::state::USER_HOST;

/// Handler for WHOIS command.
///
/// `WHOIS [<server>] <nick>`
pub struct WhoisHandler;

impl Handler for WhoisHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let target = msg
            .arg(1)
            .or(msg.arg(0))
            .filter(|t| !t.is_empty())
            .ok_or(HandlerError::NoNicknameGiven)?;

        let session = ctx
            .matrix
            .find_nick(target)
            .and_then(|id| ctx.matrix.session(id))
            .ok_or_else(|| HandlerError::NoSuchNick(target.to_string()))?;

        let nick = session.nick_or_star().to_string();
        ctx.send_reply(
            Response::RPL_WHOISUSER,
            vec![
                nick.clone(),
                session.username().to_string(),
                USER_HOST.to_string(),
                "*".to_string(),
                session.realname.clone().unwrap_or_default(),
            ],
        );

        let mut channels: Vec<String> = session
            .channels
            .iter()
            .filter_map(|key| ctx.matrix.channels.get(key))
            .map(|channel| {
                if channel.is_op(session.id) {
                    format!("@{}", channel.name)
                } else {
                    channel.name.clone()
                }
            })
            .collect();
        if !channels.is_empty() {
            channels.sort();
            ctx.send_reply(
                Response::RPL_WHOISCHANNELS,
                vec![nick.clone(), channels.join(" ")],
            );
        }

        let info = &ctx.matrix.server_info;
        ctx.send_reply(
            Response::RPL_WHOISSERVER,
            vec![nick.clone(), info.name.clone(), info.description.clone()],
        );
        if let Some(away) = &session.away {
            ctx.reply(Response::rpl_away(&ctx.nick(), &nick, away));
        }
        if session.is_oper() {
            ctx.reply(Response::rpl_whoisoperator(&ctx.nick(), &nick));
        }
        ctx.reply(Response::rpl_endofwhois(&ctx.nick(), &nick));
        Ok(())
    }
}
