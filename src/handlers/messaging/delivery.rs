//! Target resolution and delivery shared by PRIVMSG and NOTICE.

use ircserv_proto::{ChannelExt, Command, Message, Response};

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::Context;

/// Which of the two message commands is being delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Privmsg,
    Notice,
}

impl MessageKind {
    fn command(self, target: String, text: String) -> Command {
        match self {
            Self::Privmsg => Command::PRIVMSG(target, text),
            Self::Notice => Command::NOTICE(target, text),
        }
    }
}

/// Deliver `text` to one channel or nickname.
///
/// Channel messages reach every other member; the sender must be one.
/// Nicknames must match exactly. PRIVMSG to an away user also earns the
/// sender a 301.
pub fn deliver(ctx: &Context<'_>, kind: MessageKind, target: &str, text: &str) -> HandlerResult {
    let prefix = ctx.user_prefix()?;

    if target.has_channel_prefix() {
        let channel = ctx
            .matrix
            .channel(target)
            .ok_or_else(|| HandlerError::NoSuchNick(target.to_string()))?;
        if !channel.is_member(ctx.conn) {
            return Err(HandlerError::CannotSendToChan(channel.name.clone()));
        }
        let msg = Message::from(kind.command(channel.name.clone(), text.to_string()))
            .with_prefix(prefix);
        ctx.matrix
            .broadcast_to_channel(target, &msg, Some(ctx.conn));
        return Ok(());
    }

    let recipient = ctx
        .matrix
        .find_nick_exact(target)
        .and_then(|id| ctx.matrix.session(id))
        .ok_or_else(|| HandlerError::NoSuchNick(target.to_string()))?;
    let recipient_nick = recipient.nick_or_star().to_string();

    let msg = Message::from(kind.command(recipient_nick.clone(), text.to_string()))
        .with_prefix(prefix);
    recipient.send(msg);

    if kind == MessageKind::Privmsg {
        if let Some(away) = &recipient.away {
            ctx.reply(Response::rpl_away(&ctx.nick(), &recipient_nick, away));
        }
    }
    Ok(())
}
