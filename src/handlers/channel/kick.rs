//! KICK command handler.

use ircserv_proto::{Message, MessageRef};
use tracing::info;

use crate::error::{ChannelError, HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};

/// Handler for KICK command.
///
/// `KICK <channel> <nick> [:<reason>]`; the reason defaults to the
/// kicker's nickname.
pub struct KickHandler;

impl Handler for KickHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let (Some(name), Some(target)) = (msg.arg(0), msg.arg(1)) else {
            return Err(HandlerError::NeedMoreParams);
        };
        let kicker = ctx.nick();
        let reason = msg
            .arg(2)
            .filter(|r| !r.is_empty())
            .unwrap_or(&kicker)
            .to_string();

        let channel = ctx
            .matrix
            .channel(name)
            .ok_or_else(|| HandlerError::NoSuchChannel(name.to_string()))?;
        let chan_err = |e| HandlerError::Channel(channel.name.clone(), e);

        if !channel.is_member(ctx.conn) {
            return Err(chan_err(ChannelError::NotOnChannel));
        }
        if !channel.is_op(ctx.conn) {
            return Err(chan_err(ChannelError::ChanOpPrivsNeeded));
        }
        let victim = ctx
            .matrix
            .find_nick(target)
            .ok_or_else(|| HandlerError::NoSuchNick(target.to_string()))?;
        if !channel.is_member(victim) {
            return Err(chan_err(ChannelError::UserNotInChannel(target.to_string())));
        }

        let victim_nick = ctx
            .matrix
            .session(victim)
            .map_or_else(|| target.to_string(), |s| s.nick_or_star().to_string());
        let kick = Message::kick_with_reason(channel.name.clone(), victim_nick.clone(), reason)
            .with_prefix(ctx.user_prefix()?);
        ctx.matrix.broadcast_to_channel(name, &kick, None);
        ctx.matrix.part_channel(victim, name);

        info!(kicker = %kicker, victim = %victim_nick, channel = %name, "User kicked");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::*;
    use crate::state::ConnId;
    use ircserv_proto::Message;
    use tokio::sync::mpsc::Receiver;

    fn channel_of_two(m: &mut crate::state::Matrix) -> [(ConnId, Receiver<Message>); 2] {
        let (a, ra) = register(m, 1, "Alice");
        let (b, rb) = register(m, 2, "Bob");
        m.join_channel(a, "#test");
        m.join_channel(b, "#test");
        [(a, ra), (b, rb)]
    }

    #[test]
    fn operator_kicks_member() {
        let mut m = matrix();
        let [(a, mut ra), (b, mut rb)] = channel_of_two(&mut m);

        line(&mut m, a, "KICK #test Bob :bye");
        let expected = vec![":Alice!alice@localhost KICK #test Bob :bye".to_string()];
        assert_eq!(drain(&mut ra), expected);
        assert_eq!(drain(&mut rb), expected);
        assert!(!m.channel("#test").unwrap().is_member(b));
        assert!(!m.session(b).unwrap().channels.contains("#test"));

        line(&mut m, a, "NAMES #test");
        assert_eq!(
            drain(&mut ra),
            vec![
                ":irc.server.local 353 Alice = #test :@Alice",
                ":irc.server.local 366 Alice #test :End of /NAMES list",
            ]
        );
    }

    #[test]
    fn default_reason_is_kicker_nick() {
        let mut m = matrix();
        let [(a, _ra), (_b, mut rb)] = channel_of_two(&mut m);
        line(&mut m, a, "KICK #test bob");
        assert_eq!(
            drain(&mut rb),
            vec![":Alice!alice@localhost KICK #test Bob :Alice"]
        );
    }

    #[test]
    fn non_operator_cannot_kick() {
        let mut m = matrix();
        let [(a, mut ra), (b, mut rb)] = channel_of_two(&mut m);
        line(&mut m, b, "KICK #test Alice");
        assert_eq!(
            drain(&mut rb),
            vec![":irc.server.local 482 Bob #test :You're not channel operator"]
        );
        assert!(drain(&mut ra).is_empty());
        assert!(m.channel("#test").unwrap().is_member(a));
    }

    #[test]
    fn victim_must_be_member() {
        let mut m = matrix();
        let [(a, mut ra), _] = channel_of_two(&mut m);
        let (_c, _rc) = register(&mut m, 3, "Carol");
        line(&mut m, a, "KICK #test Carol");
        line(&mut m, a, "KICK #test Dave");
        line(&mut m, a, "KICK #nope Bob");
        assert_eq!(
            drain(&mut ra),
            vec![
                ":irc.server.local 441 Alice Carol #test :They aren't on that channel",
                ":irc.server.local 401 Alice Dave :No such nick/channel",
                ":irc.server.local 403 Alice #nope :No such channel",
            ]
        );
    }
}
