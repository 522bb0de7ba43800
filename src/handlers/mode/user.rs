//! User mode query and application (`MODE <nick> [<modes>]`).

use ircserv_proto::{Command, Message, Prefix, Response, irc_eq};
use tracing::info;

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::Context;
use crate::state::ModeChangeBuilder;

pub(super) fn handle_user_mode(
    ctx: &mut Context<'_>,
    target: &str,
    modestring: Option<&str>,
) -> HandlerResult {
    let nick = ctx.nick();
    if !irc_eq(target, &nick) {
        if ctx.matrix.find_nick(target).is_none() {
            return Err(HandlerError::NoSuchNick(target.to_string()));
        }
        ctx.reply(Response::err_usersdontmatch(&nick));
        return Ok(());
    }

    let Some(modestring) = modestring else {
        let modes = ctx.session()?.modes.as_mode_string();
        ctx.send_reply(Response::RPL_UMODEIS, vec![modes]);
        return Ok(());
    };

    let mut adding = true;
    let mut applied = ModeChangeBuilder::new();
    let mut unknown = false;
    let session = ctx.session_mut()?;
    for letter in modestring.chars() {
        match letter {
            '+' => adding = true,
            '-' => adding = false,
            'i' => {
                if session.modes.invisible != adding {
                    session.modes.invisible = adding;
                    applied.push(adding, 'i', None);
                }
            }
            // Operator status is granted by OPER only.
            'o' => {
                if !adding && session.modes.oper {
                    session.modes.oper = false;
                    applied.push(false, 'o', None);
                }
            }
            _ => unknown = true,
        }
    }

    if unknown {
        ctx.reply(Response::err_umodeunknownflag(&nick));
    }
    if let Some(params) = applied.build() {
        info!(nick = %nick, modes = %params.join(" "), "User modes changed");
        let echo = Message::from(Command::MODE(nick.clone(), params))
            .with_prefix(Prefix::new(nick, "", ""));
        ctx.send(echo);
    }
    Ok(())
}
