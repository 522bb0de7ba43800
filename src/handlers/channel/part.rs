//! PART command handler.

use ircserv_proto::{Message, MessageRef};
use tracing::info;

use crate::error::{ChannelError, HandlerError, HandlerResult};
use crate::handlers::helpers::split_list;
use crate::handlers::{Context, Handler};

const DEFAULT_REASON: &str = "Leaving";

/// Handler for PART command.
///
/// `PART <chan>{,<chan>} [:<reason>]`
pub struct PartHandler;

impl Handler for PartHandler {
    fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let channels = msg
            .arg(0)
            .filter(|c| !c.is_empty())
            .ok_or(HandlerError::NeedMoreParams)?;
        let reason = msg.arg(1).filter(|r| !r.is_empty()).unwrap_or(DEFAULT_REASON);

        for name in split_list(channels) {
            if let Err(e) = part_channel(ctx, name, reason) {
                ctx.send_error(&e, "PART");
            }
        }
        Ok(())
    }
}

/// Broadcast PART to every member, the leaver included, then drop the
/// membership.
pub(super) fn part_channel(ctx: &mut Context<'_>, name: &str, reason: &str) -> HandlerResult {
    let channel = ctx
        .matrix
        .channel(name)
        .ok_or_else(|| HandlerError::NoSuchChannel(name.to_string()))?;
    if !channel.is_member(ctx.conn) {
        return Err(HandlerError::Channel(
            channel.name.clone(),
            ChannelError::NotOnChannel,
        ));
    }

    let part = Message::part_with_message(channel.name.clone(), reason)
        .with_prefix(ctx.user_prefix()?);
    ctx.matrix.broadcast_to_channel(name, &part, None);
    ctx.matrix.part_channel(ctx.conn, name);

    info!(nick = %ctx.nick(), channel = %name, "User left channel");
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::*;

    #[test]
    fn last_member_destroys_channel() {
        let mut m = matrix();
        let (a, mut ra) = register(&mut m, 1, "alice");
        line(&mut m, a, "JOIN #a");
        drain(&mut ra);

        line(&mut m, a, "PART #a");
        assert_eq!(drain(&mut ra), vec![":alice!alice@localhost PART #a :Leaving"]);
        assert!(m.channel("#a").is_none());
    }

    #[test]
    fn part_reaches_all_members() {
        let mut m = matrix();
        let (a, mut ra) = register(&mut m, 1, "alice");
        let (b, mut rb) = register(&mut m, 2, "bob");
        m.join_channel(a, "#a");
        m.join_channel(b, "#a");

        line(&mut m, b, "PART #a :see you");
        let expected = vec![":bob!bob@localhost PART #a :see you".to_string()];
        assert_eq!(drain(&mut ra), expected);
        assert_eq!(drain(&mut rb), expected);
        assert!(!m.channel("#a").unwrap().is_member(b));
    }

    #[test]
    fn op_status_not_kept_after_part() {
        let mut m = matrix();
        let (a, _ra) = register(&mut m, 1, "alice");
        let (b, _rb) = register(&mut m, 2, "bob");
        m.join_channel(a, "#a");
        m.join_channel(b, "#a");
        line(&mut m, a, "PART #a");
        line(&mut m, a, "JOIN #a");
        assert!(!m.channel("#a").unwrap().is_op(a));
    }

    #[test]
    fn errors_per_channel() {
        let mut m = matrix();
        let (a, mut ra) = register(&mut m, 1, "alice");
        let (b, _rb) = register(&mut m, 2, "bob");
        m.join_channel(b, "#b");

        line(&mut m, a, "PART #nope,#b");
        assert_eq!(
            drain(&mut ra),
            vec![
                ":irc.server.local 403 alice #nope :No such channel",
                ":irc.server.local 442 alice #b :You're not on that channel",
            ]
        );
    }
}
